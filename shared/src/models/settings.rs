//! User-editable settings persisted in the local cache

use serde::{Deserialize, Serialize};

/// Connection settings for one spreadsheet proxy endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetConnection {
    pub url: String,
    pub token: String,
}

impl SheetConnection {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.token.trim().is_empty()
    }
}

/// Spreadsheet proxy settings: one endpoint + token per entity type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetSettings {
    pub members: SheetConnection,
    pub churches: SheetConnection,
}

/// Printable document templates, editable by the secretariat.
/// Empty fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSettings {
    pub carta_batismo: String,
    pub carteirinha: String,
    pub contrato: String,
}
