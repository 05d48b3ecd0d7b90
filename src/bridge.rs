/// JS bridge to the chrome.tabs / chrome.tabGroups APIs
///
/// The grouping engine itself never touches the browser; these externs are
/// the only place host calls cross into Rust, backed by the js/tabs.js shim.
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::tab_data::GroupColor;

#[wasm_bindgen(module = "/js/tabs.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    pub async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn createTabGroup(
        tab_ids: Array,
        title: &str,
        color: &str,
        collapsed: bool,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn ungroupTabs(tab_ids: Array) -> Result<(), JsValue>;
}

/// Tab id list in the form chrome.tabs.group / chrome.tabs.ungroup expect
pub fn id_array(ids: &[i32]) -> Array {
    ids.iter().copied().map(JsValue::from).collect()
}

/// Hex values the popup's color picker displays for each group color.
/// The engine only ever deals in tags; this table exists for the UI edge.
const COLOR_HEX_TABLE: [(GroupColor, &str); 8] = [
    (GroupColor::Grey, "#666666"),
    (GroupColor::Blue, "#1E88E5"),
    (GroupColor::Green, "#43A047"),
    (GroupColor::Red, "#E53935"),
    (GroupColor::Orange, "#FB8C00"),
    (GroupColor::Purple, "#8E24AA"),
    (GroupColor::Yellow, "#FFD700"),
    (GroupColor::Pink, "#FF69B4"),
];

pub fn hex_for_color(color: GroupColor) -> &'static str {
    COLOR_HEX_TABLE
        .iter()
        .find(|(tag, _)| *tag == color)
        .map(|(_, hex)| *hex)
        .unwrap_or("#666666")
}

/// Map a picker hex value back to a group color; unknown values fall back
/// to grey, matching the extension's previous behavior
pub fn color_for_hex(hex: &str) -> GroupColor {
    COLOR_HEX_TABLE
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(hex))
        .map(|(tag, _)| *tag)
        .unwrap_or(GroupColor::Grey)
}
