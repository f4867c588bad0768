//! Form page configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Hard ceiling for `max_repeat_count`.
pub const REPEAT_LIMIT_CEILING: u32 = 100_000;

/// Settings for the form page and its components
#[derive(Debug, Clone, Deserialize)]
pub struct FormsConfig {
    /// Largest repeat count the style cycler accepts per request
    #[serde(default = "default_max_repeat_count")]
    pub max_repeat_count: u32,

    /// Title shown in the browser tab and page header
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Bootstrap stylesheet linked from the rendered page
    #[serde(default = "default_stylesheet_url")]
    pub stylesheet_url: String,
}

impl FormsConfig {
    /// Validate form configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_repeat_count == 0 || self.max_repeat_count > REPEAT_LIMIT_CEILING {
            return Err(ValidationError::InvalidRepeatLimit {
                max: REPEAT_LIMIT_CEILING,
            });
        }
        if self.page_title.trim().is_empty() {
            return Err(ValidationError::EmptyPageTitle);
        }
        if !(self.stylesheet_url.starts_with("https://")
            || self.stylesheet_url.starts_with("http://"))
        {
            return Err(ValidationError::InvalidStylesheetUrl);
        }
        Ok(())
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            max_repeat_count: default_max_repeat_count(),
            page_title: default_page_title(),
            stylesheet_url: default_stylesheet_url(),
        }
    }
}

fn default_max_repeat_count() -> u32 {
    1000
}

fn default_page_title() -> String {
    "Semana 7 Unidad 3 Programación Concurrente".to_string()
}

fn default_stylesheet_url() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css".to_string()
}
