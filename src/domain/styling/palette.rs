//! The fixed palette of display styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of styles in the palette.
pub const PALETTE_SIZE: usize = 9;

/// A named display style. Variant order is palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    Primary,
    Secondary,
    Warning,
    Danger,
    Light,
    Success,
    Info,
    Dark,
    Muted,
}

/// Palette in rotation order.
pub const PALETTE: [StyleName; PALETTE_SIZE] = [
    StyleName::Primary,
    StyleName::Secondary,
    StyleName::Warning,
    StyleName::Danger,
    StyleName::Light,
    StyleName::Success,
    StyleName::Info,
    StyleName::Dark,
    StyleName::Muted,
];

impl StyleName {
    /// Style used for the line at `position` (0-based).
    pub fn for_position(position: usize) -> Self {
        PALETTE[position % PALETTE_SIZE]
    }

    /// Position of this style within the palette.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Lowercase style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::Primary => "primary",
            StyleName::Secondary => "secondary",
            StyleName::Warning => "warning",
            StyleName::Danger => "danger",
            StyleName::Light => "light",
            StyleName::Success => "success",
            StyleName::Info => "info",
            StyleName::Dark => "dark",
            StyleName::Muted => "muted",
        }
    }

    /// Bootstrap text utility class for this style.
    pub fn css_class(&self) -> &'static str {
        match self {
            StyleName::Primary => "text-primary",
            StyleName::Secondary => "text-secondary",
            StyleName::Warning => "text-warning",
            StyleName::Danger => "text-danger",
            StyleName::Light => "text-light",
            StyleName::Success => "text-success",
            StyleName::Info => "text-info",
            StyleName::Dark => "text-dark",
            StyleName::Muted => "text-muted",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_index_matches_position() {
        for (i, style) in PALETTE.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }

    #[test]
    fn palette_has_nine_distinct_styles() {
        let mut names: Vec<_> = PALETTE.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PALETTE_SIZE);
    }

    #[test]
    fn for_position_wraps_around() {
        assert_eq!(StyleName::for_position(0), StyleName::Primary);
        assert_eq!(StyleName::for_position(8), StyleName::Muted);
        assert_eq!(StyleName::for_position(9), StyleName::Primary);
        assert_eq!(StyleName::for_position(10), StyleName::Secondary);
    }

    #[test]
    fn css_class_is_prefixed_name() {
        for style in PALETTE {
            assert_eq!(style.css_class(), format!("text-{}", style.as_str()));
        }
    }

    #[test]
    fn style_name_serializes_lowercase() {
        let json = serde_json::to_string(&StyleName::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
