//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;

/// State abbreviation dropdown.
/// Reads the sorted state list from AppState and updates `selected_state` on change.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = (state.selected_state)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("[SIE Debug] selector: State changed to {}", value);
        state.selected_state.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select a State"
            }
            select {
                id: "state-select",
                onchange: on_change,
                for abbr in states.iter() {
                    option {
                        value: "{abbr}",
                        selected: *abbr == selected,
                        "{abbr}"
                    }
                }
            }
        }
    }
}
