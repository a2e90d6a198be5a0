//! Industry callout for the selected state.

use dioxus::prelude::*;
use sie_data::summary::IndustryCallout;

#[derive(Props, Clone, PartialEq)]
pub struct IncomeCalloutProps {
    pub state: String,
}

/// "{state} Income Source: {industry}" with the industry quote underneath.
#[component]
pub fn IncomeCallout(props: IncomeCalloutProps) -> Element {
    let callout = IndustryCallout::for_state(&props.state);
    let headline = callout.headline();
    let tagline = callout.tagline();

    rsx! {
        div {
            style: "margin: 16px 0; padding: 12px 16px; background: #E3F2FD; border-left: 4px solid #2196F3; border-radius: 4px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{headline}"
            }
            p {
                style: "margin: 0; font-style: italic;",
                "{tagline}"
            }
        }
    }
}
