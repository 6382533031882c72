use crewdeck_domain::settings::{AppSettings, FontSize, SidebarPosition, Spacing, ThemeMode};
use crewdeck_domain::validate::validate_settings;
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn non_object_input_yields_full_default_record() {
    let defaults = AppSettings::default();

    assert_eq!(validate_settings(&Value::Null), defaults);
    assert_eq!(validate_settings(&json!("garbage")), defaults);
    assert_eq!(validate_settings(&json!(42)), defaults);
    assert_eq!(validate_settings(&json!(["fontSize", "large"])), defaults);
}

#[test]
fn fields_are_resolved_independently() {
    // "huge" is not a FontSize member; the color is well-formed.
    let out = validate_settings(&json!({ "fontSize": "huge", "primaryColor": "#112233" }));

    assert_eq!(out.font_size, FontSize::default());
    assert_eq!(out.primary_color.as_str(), "#112233");
}

#[test]
fn valid_fields_are_adopted_verbatim() {
    let out = validate_settings(&json!({
        "spacing": "comfortable",
        "sidebarPosition": "right",
        "theme": "dark",
        "accentColor": "#00ff00",
    }));

    assert_eq!(out.spacing, Spacing::Comfortable);
    assert_eq!(out.sidebar_position, SidebarPosition::Right);
    assert_eq!(out.theme, ThemeMode::Dark);
    assert_eq!(out.accent_color.as_str(), "#00ff00");
    // Untouched fields resolve to defaults, not to absence.
    assert_eq!(out.font_size, FontSize::default());
}

#[test]
fn malformed_colors_fall_back_per_field() {
    let out = validate_settings(&json!({
        "primaryColor": "blue",
        "accentColor": "#abc",
    }));
    let defaults = AppSettings::default();

    assert_eq!(out.primary_color, defaults.primary_color);
    assert_eq!(out.accent_color, defaults.accent_color);
}

#[test]
fn wrong_value_types_fall_back_per_field() {
    let out = validate_settings(&json!({
        "fontSize": 16,
        "spacing": { "value": "compact" },
        "theme": null,
    }));

    assert_eq!(out, AppSettings::default());
}

#[test]
fn own_persisted_form_validates_to_itself() {
    let mut settings = AppSettings::default();
    settings.spacing = Spacing::UltraCompact;
    settings.theme = ThemeMode::Light;

    let persisted = serde_json::to_value(&settings).unwrap();
    assert_eq!(validate_settings(&persisted), settings);
}

proptest! {
    /// The validator is total: arbitrary JSON never panics and always yields
    /// a record whose persisted form validates back to itself.
    #[test]
    fn validator_is_total(raw in proptest::arbitrary::any::<String>()) {
        let value = serde_json::from_str::<Value>(&raw)
            .unwrap_or(Value::String(raw));
        let out = validate_settings(&value);

        let reencoded = serde_json::to_value(&out).unwrap();
        prop_assert_eq!(validate_settings(&reencoded), out);
    }

    /// Any string fed to an enum field either matches a member or falls back
    /// to the default; no input can produce an out-of-enumeration record.
    #[test]
    fn enum_fields_never_escape_their_enumeration(raw in "[a-zA-Z-]{0,16}") {
        let out = validate_settings(&json!({ "spacing": raw.clone() }));
        let valid = ["ultra-compact", "compact", "comfortable"];

        if valid.contains(&raw.as_str()) {
            prop_assert_eq!(serde_json::to_value(out.spacing).unwrap(), raw);
        } else {
            prop_assert_eq!(out.spacing, Spacing::default());
        }
    }
}
