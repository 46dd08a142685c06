use super::*;

fn at(page: usize, rows_per_page: usize) -> Pagination {
    Pagination { page, rows_per_page }
}

#[test]
fn default_is_first_page_of_five() {
    let p = Pagination::default();
    assert_eq!(p.page, 0);
    assert_eq!(p.rows_per_page, 5);
    assert_eq!(p.to_api_page(), 1);
}

#[test]
fn changing_rows_per_page_returns_to_first_page() {
    let mut p = at(3, 5);
    p.set_rows_per_page(25);
    assert_eq!(p, at(0, 25));
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(at(0, 5).page_count(12), 3);
    assert_eq!(at(0, 5).page_count(10), 2);
    assert_eq!(at(0, 5).page_count(0), 0);
    assert_eq!(at(0, 0).page_count(10), 0);
}

#[test]
fn prev_next_flags_follow_bounds() {
    assert!(!at(0, 5).has_prev());
    assert!(at(0, 5).has_next(12));
    assert!(at(1, 5).has_next(12));
    assert!(!at(2, 5).has_next(12));
    assert!(!at(0, 5).has_next(5));
    assert!(at(2, 5).has_prev());
}

#[test]
fn page_controls_stay_within_bounds() {
    assert_eq!(at(0, 5).prev_page(), None);
    assert_eq!(at(2, 5).prev_page(), Some(1));
    assert_eq!(at(0, 5).next_page(12), Some(1));
    assert_eq!(at(2, 5).next_page(12), None);

    let empty = at(0, 5);
    assert_eq!(empty.prev_page(), None);
    assert_eq!(empty.next_page(0), None);
}

#[test]
fn clamp_pulls_back_to_last_page() {
    let mut p = at(9, 5);
    assert!(p.clamp_to(12));
    assert_eq!(p.page, 2);
    assert!(!p.clamp_to(12));

    let mut empty = at(4, 5);
    assert!(empty.clamp_to(0));
    assert_eq!(empty.page, 0);
}

#[test]
fn range_label_matches_visible_rows() {
    assert_eq!(at(0, 5).range_label(12), "1–5 of 12");
    assert_eq!(at(2, 5).range_label(12), "11–12 of 12");
    assert_eq!(at(0, 5).range_label(0), "0–0 of 0");
    assert_eq!(at(7, 5).range_label(12), "0–0 of 12");
}

#[test]
fn slice_returns_current_page_rows() {
    let items: Vec<u32> = (1..=12).collect();
    assert_eq!(at(0, 5).slice(&items), &[1, 2, 3, 4, 5]);
    assert_eq!(at(2, 5).slice(&items), &[11, 12]);
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let items: Vec<u32> = (1..=6).collect();
    assert!(at(10, 10).slice(&items).is_empty());
    assert!(at(0, 0).slice(&items).is_empty());
}

#[test]
fn paging_mode_parses_known_values() {
    assert_eq!(PagingMode::parse("server"), Some(PagingMode::Server));
    assert_eq!(PagingMode::parse(" Client "), Some(PagingMode::Client));
    assert_eq!(PagingMode::parse("infinite"), None);
    assert_eq!(PagingMode::default(), PagingMode::Server);
}

#[test]
fn rows_per_page_select_accepts_only_offered_options() {
    assert_eq!(parse_rows_per_page("10"), Some(10));
    assert_eq!(parse_rows_per_page("25"), Some(25));
    assert_eq!(parse_rows_per_page("7"), None);
    assert_eq!(parse_rows_per_page("all"), None);
}
