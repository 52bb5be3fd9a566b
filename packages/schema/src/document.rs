use crate::node::Node;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current Unix time in milliseconds; the timestamp unit used throughout
/// the document model.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Error, Debug)]
pub enum SchemaError {
    /// The imported value is missing one of the required top-level fields.
    #[error("invalid document schema: missing `{0}`")]
    MissingField(&'static str),

    #[error("invalid document schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page-level typography and color settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    pub primary_font: String,
    pub secondary_font: String,
    pub base_text_color: String,
    pub base_bg: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            primary_font: "Inter, Segoe UI, sans-serif".to_string(),
            secondary_font: "Georgia, serif".to_string(),
            base_text_color: "#1b1f3b".to_string(),
            base_bg: "#f4f6fb".to_string(),
        }
    }
}

/// All-optional mirror of [`PageSettings`] used for shallow merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_font: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_font: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_bg: Option<String>,
}

impl PageSettings {
    /// Shallow-merge: fields present in the patch replace current values.
    pub fn apply(&mut self, patch: PageSettingsPatch) {
        if let Some(primary_font) = patch.primary_font {
            self.primary_font = primary_font;
        }
        if let Some(secondary_font) = patch.secondary_font {
            self.secondary_font = secondary_font;
        }
        if let Some(base_text_color) = patch.base_text_color {
            self.base_text_color = base_text_color;
        }
        if let Some(base_bg) = patch.base_bg {
            self.base_bg = base_bg;
        }
    }
}

/// One editable page: a named node tree plus settings and timestamps.
///
/// `updated_at` is monotonically non-decreasing; every structural or style
/// mutation stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub id: String,
    pub name: String,
    pub root: Node,
    pub settings: PageSettings,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PageDocument {
    /// Validate and deserialize an imported JSON document.
    ///
    /// Import requires `id`, `name`, `root` and `settings` to be present;
    /// anything else is rejected before any mutation happens.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SchemaError> {
        for field in ["id", "name", "root", "settings"] {
            let present = value
                .as_object()
                .map_or(false, |object| object.contains_key(field));
            if !present {
                return Err(SchemaError::MissingField(field));
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// A project: an ordered collection of pages. Thin persistence aggregate;
/// the edit session operates on one page at a time sourced from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub id: String,
    pub name: String,
    pub pages: Vec<PageDocument>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_page_document;

    #[test]
    fn test_document_round_trips_camel_case() {
        let page = create_page_document("Landing");
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json["settings"].get("primaryFont").is_some());
        assert!(json["settings"].get("baseTextColor").is_some());

        let back = PageDocument::from_json(json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_import_rejects_missing_fields() {
        let mut json = serde_json::to_value(create_page_document("Landing")).unwrap();
        json.as_object_mut().unwrap().remove("root");
        let err = PageDocument::from_json(json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("root")));
    }

    #[test]
    fn test_import_rejects_non_object() {
        let err = PageDocument::from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField(_)));
    }

    #[test]
    fn test_settings_patch_is_shallow_merge() {
        let mut settings = PageSettings::default();
        settings.apply(PageSettingsPatch {
            primary_font: Some("Poppins, sans-serif".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.primary_font, "Poppins, sans-serif");
        assert_eq!(settings.secondary_font, "Georgia, serif");
    }
}
