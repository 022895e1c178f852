use serde::Deserialize;

use crate::util::cwarn;

/// Id of the page element the menu mounts into. Nothing is mounted when the
/// page does not have it.
pub const MENU_ROOT_ID: &str = "games-menu";

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/NOTAHACKER9999/Hypper-Drive/main/Games/zones.json";

/// Runtime settings, read from the root element's `data-config` attribute.
/// Every field may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    pub catalog_url: String,
    /// Quiet period before the search re-filters.
    pub debounce_ms: u32,
    /// Upper bound on an enter/exit animation; the phase completes when this
    /// elapses even if no `animationend` arrives.
    pub transition_fallback_ms: u32,
    /// Link on the page that opens the menu.
    pub launcher_id: String,
    /// Page-level dimming overlay toggled with the menu.
    pub overlay_id: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            debounce_ms: 200,
            transition_fallback_ms: 700,
            launcher_id: "games".to_string(),
            overlay_id: "overlay".to_string(),
        }
    }
}

impl MenuConfig {
    /// Parses the `data-config` attribute, falling back to defaults when it is
    /// absent or unreadable.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                cwarn!("ignoring invalid data-config on #{MENU_ROOT_ID}: {err}");
                Self::default()
            }
        }
    }
}
