//! Sanitization of arbitrary persisted data into a well-typed settings
//! record. Total by construction: the worst possible input yields the
//! default record, and every field is resolved independently.

use crate::settings::{AppSettings, HexColor};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Resolves `raw` into a fully populated [`AppSettings`].
///
/// Non-object input (null, strings, numbers, arrays) yields the default
/// record. For object input, each field is accepted only when it is a
/// member of that field's enumeration (colors must match `#RRGGBB`);
/// otherwise that field alone falls back to its documented default.
/// Never fails and never partially defaults.
#[must_use]
pub fn validate_settings(raw: &Value) -> AppSettings {
    let defaults = AppSettings::default();
    let Value::Object(fields) = raw else {
        return defaults;
    };

    AppSettings {
        font_family: enum_field(fields, "fontFamily", defaults.font_family),
        font_size: enum_field(fields, "fontSize", defaults.font_size),
        font_face: enum_field(fields, "fontFace", defaults.font_face),
        primary_color: color_field(fields, "primaryColor", defaults.primary_color),
        accent_color: color_field(fields, "accentColor", defaults.accent_color),
        sidebar_position: enum_field(fields, "sidebarPosition", defaults.sidebar_position),
        spacing: enum_field(fields, "spacing", defaults.spacing),
        border_radius: enum_field(fields, "borderRadius", defaults.border_radius),
        theme: enum_field(fields, "theme", defaults.theme),
    }
}

fn enum_field<T: FromStr>(fields: &Map<String, Value>, key: &str, default: T) -> T {
    fields
        .get(key)
        .and_then(Value::as_str)
        .and_then(|raw| T::from_str(raw).ok())
        .unwrap_or(default)
}

fn color_field(fields: &Map<String, Value>, key: &str, default: HexColor) -> HexColor {
    fields.get(key).and_then(Value::as_str).and_then(HexColor::parse).unwrap_or(default)
}
