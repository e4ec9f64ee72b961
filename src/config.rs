use serde::Deserialize;
use web_sys::window;

pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// How long a signup message stays visible.
pub const MESSAGE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base: String,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: "info".into(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Reads the config block from the page, falling back to defaults.
    pub fn from_document() -> Self {
        match config_json_from_dom() {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                // Logger is not up yet; go straight to the console.
                gloo::console::warn!(format!("Ignoring invalid #{CONFIG_ELEMENT_ID}: {e}"));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}
