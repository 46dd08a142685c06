//! Modal with the full record of one contact.

#[cfg(test)]
#[path = "person_detail_dialog_test.rs"]
mod person_detail_dialog_test;

use leptos::prelude::*;

use people::person::{Person, format_birthday};

/// Label/value pairs shown in the dialog body.
pub(crate) fn detail_rows(person: &Person) -> [(&'static str, String); 3] {
    [
        ("Birthday", format_birthday(person.birthday)),
        ("Address", person.address_or_na().to_owned()),
        ("Phone", person.phone_or_na().to_owned()),
    ]
}

/// Whether a keydown inside the dialog dismisses it.
pub(crate) fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Detail dialog; renders nothing while `person` is `None`.
///
/// Closes on the Close button, a backdrop click, or Escape. The panel takes
/// focus when it opens so Escape reaches it even though the row that opened
/// it sits outside the dialog.
#[component]
pub fn PersonDetailDialog(#[prop(into)] person: Signal<Option<Person>>, on_close: Callback<()>) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let open = person.with(Option::is_some);
        let panel = panel_ref.get();
        #[cfg(feature = "csr")]
        {
            if let (true, Some(panel)) = (open, panel) {
                let _ = panel.focus();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (open, panel);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || person.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    node_ref=panel_ref
                    class="dialog dialog--person"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>{move || person.get().as_ref().map(Person::full_name).unwrap_or_default()}</h2>
                    <div class="dialog__body">
                        {move || {
                            person
                                .get()
                                .map(|p| {
                                    detail_rows(&p)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="dialog__detail-row">
                                                    <span class="dialog__detail-label">{label}</span>
                                                    <span class="dialog__detail-value">{value}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                                .unwrap_or_default()
                        }}
                    </div>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
