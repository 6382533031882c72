//! The settings record, its enumerations, and the patch type used for
//! shallow merges into the pending slot.
//!
//! The persisted form is camelCase field names with kebab-case enum values,
//! e.g. `{ "fontFamily": "system", "spacing": "ultra-compact" }`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    System,
    Sans,
    Serif,
    Mono,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Active font weight preset (the UI calls this the "font face").
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontFace {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Spacing {
    UltraCompact,
    #[default]
    Compact,
    Comfortable,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BorderRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// A `#RRGGBB` color string, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Accepts exactly `#` followed by six hex digits; anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        is_hex_color(raw).then(|| Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[must_use]
pub fn is_hex_color(raw: &str) -> bool {
    let Some(digits) = raw.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// The single flat record of user-visible presentation preferences.
///
/// Two live copies exist at runtime: `applied` (in effect for the rendered
/// app) and `pending` (the draft a settings editor mutates). They are only
/// equal right after load, reset, or apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_face: FontFace,
    pub primary_color: HexColor,
    pub accent_color: HexColor,
    pub sidebar_position: SidebarPosition,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    pub theme: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size: FontSize::default(),
            font_face: FontFace::default(),
            primary_color: HexColor("#3b82f6".to_owned()),
            accent_color: HexColor("#8b5cf6".to_owned()),
            sidebar_position: SidebarPosition::default(),
            spacing: Spacing::default(),
            border_radius: BorderRadius::default(),
            theme: ThemeMode::default(),
        }
    }
}

impl AppSettings {
    /// Shallow merge: fields present in the patch replace the current value,
    /// absent fields are untouched.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.font_family {
            self.font_family = v;
        }
        if let Some(v) = patch.font_size {
            self.font_size = v;
        }
        if let Some(v) = patch.font_face {
            self.font_face = v;
        }
        if let Some(v) = &patch.primary_color {
            self.primary_color = v.clone();
        }
        if let Some(v) = &patch.accent_color {
            self.accent_color = v.clone();
        }
        if let Some(v) = patch.sidebar_position {
            self.sidebar_position = v;
        }
        if let Some(v) = patch.spacing {
            self.spacing = v;
        }
        if let Some(v) = patch.border_radius {
            self.border_radius = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
    }

    #[must_use]
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// All-optional mirror of [`AppSettings`] for partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub font_family: Option<FontFamily>,
    pub font_size: Option<FontSize>,
    pub font_face: Option<FontFace>,
    pub primary_color: Option<HexColor>,
    pub accent_color: Option<HexColor>,
    pub sidebar_position: Option<SidebarPosition>,
    pub spacing: Option<Spacing>,
    pub border_radius: Option<BorderRadius>,
    pub theme: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enum_values_use_kebab_case() {
        assert_eq!(Spacing::UltraCompact.as_ref(), "ultra-compact");
        assert_eq!(Spacing::from_str("ultra-compact").unwrap(), Spacing::UltraCompact);
        assert!(Spacing::from_str("UltraCompact").is_err());
    }

    #[test]
    fn hex_color_parsing() {
        assert!(HexColor::parse("#112233").is_some());
        assert!(HexColor::parse("#AaBbCc").is_some());

        assert!(HexColor::parse("112233").is_none());
        assert!(HexColor::parse("#12345").is_none());
        assert!(HexColor::parse("#1234567").is_none());
        assert!(HexColor::parse("#11223g").is_none());
    }

    #[test]
    fn merge_replaces_only_present_fields() {
        let mut settings = AppSettings::default();
        settings.merge(&SettingsPatch {
            spacing: Some(Spacing::Comfortable),
            primary_color: HexColor::parse("#abcdef"),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.spacing, Spacing::Comfortable);
        assert_eq!(settings.primary_color.as_str(), "#abcdef");
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.theme, ThemeMode::System);
    }

    #[test]
    fn persisted_form_is_camel_case() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(json["fontFamily"], "system");
        assert_eq!(json["borderRadius"], "medium");
        assert_eq!(json["primaryColor"], "#3b82f6");
        assert_eq!(json["sidebarPosition"], "left");
    }
}
