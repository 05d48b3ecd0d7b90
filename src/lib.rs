/// Smart Tab Groups - Chrome extension that clusters open tabs by domain
/// and by shared title keywords
/// Built with Rust + WASM

mod bridge;
mod domain;
mod grouping;
mod tab_data;
mod tokenize;

pub use domain::registrable_domain;
pub use grouping::{group_by_domain, group_by_title, group_tabs};
pub use tab_data::{GroupColor, GroupOrigin, TabGroup, TabInfo};
pub use tokenize::tokenize;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// Re-export the domain extractor for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::registrable_domain(url).unwrap_or_default()
}

/// The "group" action: fetch the current window's tabs, run the grouping
/// pipeline, materialize one native (collapsed) tab group per descriptor,
/// and hand the descriptors back for the popup to render.
#[wasm_bindgen]
pub async fn group_current_tabs() -> Result<JsValue, JsValue> {
    let raw_tabs = bridge::getCurrentWindowTabs().await?;
    let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(raw_tabs).map_err(|err| {
        log::error!("cannot decode tab list: {err}");
        js_error(err)
    })?;

    let groups = grouping::group_tabs(&tabs);
    log::info!("grouping {} tabs into {} groups", tabs.len(), groups.len());

    for group in &groups {
        let tab_ids = bridge::id_array(&group.tab_ids());
        bridge::createTabGroup(tab_ids, &group.title, group.color.as_str(), true).await?;
    }

    serde_wasm_bindgen::to_value(&groups).map_err(js_error)
}

/// The "ungroup" action: release every tab in the current window
#[wasm_bindgen]
pub async fn ungroup_current_tabs() -> Result<(), JsValue> {
    let raw_tabs = bridge::getCurrentWindowTabs().await?;
    let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(raw_tabs).map_err(|err| {
        log::error!("cannot decode tab list: {err}");
        js_error(err)
    })?;

    let tab_ids: Vec<i32> = tabs.iter().map(|tab| tab.id).collect();
    bridge::ungroupTabs(bridge::id_array(&tab_ids)).await
}

/// Color picker helpers for the popup: map between the chrome.tabGroups
/// color names and the hex values the picker displays
#[wasm_bindgen]
pub fn color_for_hex(hex: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&bridge::color_for_hex(hex)).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn hex_for_color(color: JsValue) -> Option<String> {
    let color: GroupColor = serde_wasm_bindgen::from_value(color).ok()?;
    Some(bridge::hex_for_color(color).to_string())
}
