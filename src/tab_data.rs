/// Data structures for Smart Tab Groups
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as reported by `chrome.tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i32,
    pub url: String,
    pub title: String,
    #[serde(rename = "favIconUrl", default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabInfo {
    pub fn new(id: i32, url: String, title: String) -> TabInfo {
        TabInfo {
            id,
            url,
            title,
            fav_icon_url: None,
        }
    }
}

/// Colors accepted by the `chrome.tabGroups` API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Yellow,
    Pink,
}

impl GroupColor {
    /// The string form `chrome.tabGroups.update` expects
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupColor::Grey => "grey",
            GroupColor::Blue => "blue",
            GroupColor::Green => "green",
            GroupColor::Red => "red",
            GroupColor::Orange => "orange",
            GroupColor::Purple => "purple",
            GroupColor::Yellow => "yellow",
            GroupColor::Pink => "pink",
        }
    }
}

/// Which heuristic produced a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrigin {
    Domain,
    Title,
}

/// One proposed tab group: a name, its member tabs, and a display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroup {
    pub title: String,
    pub tabs: Vec<TabInfo>,
    pub color: GroupColor,
    pub origin: GroupOrigin,
}

impl TabGroup {
    pub fn tab_ids(&self) -> Vec<i32> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }
}
