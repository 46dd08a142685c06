use super::*;

#[test]
fn results_follow_load_state() {
    assert_eq!(Results::of(&LoadState::Loading), Results::Loading);
    assert_eq!(
        Results::of(&LoadState::Failed("Failed to load contacts: offline".to_owned())),
        Results::Failed("Failed to load contacts: offline".to_owned())
    );
    assert_eq!(Results::of(&LoadState::Ready(Loaded::default())), Results::Ready);
}
