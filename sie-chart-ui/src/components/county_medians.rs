//! Median lines shown under the county table.

use dioxus::prelude::*;
use sie_data::summary::CountyTable;

#[derive(Props, Clone, PartialEq)]
pub struct CountyMediansProps {
    pub table: CountyTable,
}

#[component]
pub fn CountyMedians(props: CountyMediansProps) -> Element {
    let line_1989 = props.table.median_1989_line();
    let line_2015 = props.table.median_2015_line();
    let notice_style = if props.table.show_adjusted_1989 {
        "margin: 2px 0; font-weight: bold;"
    } else {
        "margin: 2px 0; color: #8D6E00;"
    };

    rsx! {
        div {
            style: "margin: 8px 0; font-size: 14px;",
            p { style: "{notice_style}", "{line_1989}" }
            p { style: "margin: 2px 0; font-weight: bold;", "{line_2015}" }
        }
    }
}
