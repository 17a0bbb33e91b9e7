use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// Accent colors substituted when a theme omits them
pub const DEFAULT_ACCENT_AH: &str = "#FF7043";
pub const DEFAULT_ACCENT_EI: &str = "#FFA726";

// Derived gradient sub-record stored under the gradientHeader field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientHeader {
    pub start: String,
    pub end: String,
    pub overlay: String,
    pub text_color: String,
}

/// A whole theme file held as a JSON object so that fields this tool does
/// not know about survive a read-modify-write cycle unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeRecord {
    fields: Map<String, Value>,
}

impl ThemeRecord {
    /// Whether the theme is a dark theme. Absent or non-boolean values
    /// fall back to light.
    pub fn is_dark(&self) -> bool {
        self.fields
            .get("isDark")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn accent_ah(&self) -> &str {
        self.fields
            .get("accentAH")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ACCENT_AH)
    }

    pub fn accent_ei(&self) -> &str {
        self.fields
            .get("accentEI")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ACCENT_EI)
    }

    /// Create or overwrite the gradientHeader field. No other field is touched.
    pub fn set_gradient_header(&mut self, header: GradientHeader) {
        self.fields.insert("gradientHeader".to_string(), json!(header));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
