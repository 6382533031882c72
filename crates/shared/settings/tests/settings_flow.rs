use crewdeck_domain::constants::SETTINGS_KEY;
use crewdeck_domain::settings::{AppSettings, FontSize, SettingsPatch, Spacing};
use crewdeck_settings::{SettingsStore, project};
use crewdeck_store::Store;
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn load_sanitizes_persisted_garbage_per_field() {
    let store = Store::in_memory();
    store.set(
        SETTINGS_KEY,
        &serde_json::json!({
            "fontSize": "huge",
            "spacing": "comfortable",
            "primaryColor": "not-a-color",
        }),
    );

    let settings = SettingsStore::load(&store);
    let applied = settings.applied();

    assert_eq!(applied.font_size, FontSize::default());
    assert_eq!(applied.spacing, Spacing::Comfortable);
    assert_eq!(applied.primary_color, AppSettings::default().primary_color);
    assert!(!settings.has_changes());
}

#[test]
fn load_of_non_object_document_yields_defaults() {
    let store = Store::in_memory();
    store.set(SETTINGS_KEY, &"oops");

    let settings = SettingsStore::load(&store);
    assert_eq!(settings.applied(), AppSettings::default());
}

#[test]
fn applied_settings_survive_a_reload() {
    let store = Store::in_memory();
    let settings = SettingsStore::load(&store);

    settings.update_pending(&SettingsPatch {
        spacing: Some(Spacing::UltraCompact),
        font_size: Some(FontSize::Large),
        ..SettingsPatch::default()
    });
    settings.apply();

    let reloaded = SettingsStore::load(&store);
    assert_eq!(reloaded.applied().spacing, Spacing::UltraCompact);
    assert_eq!(reloaded.applied().font_size, FontSize::Large);
}

#[test]
fn pending_edits_are_lost_without_apply() {
    let store = Store::in_memory();
    let settings = SettingsStore::load(&store);

    settings.update_pending(&SettingsPatch {
        spacing: Some(Spacing::Comfortable),
        ..SettingsPatch::default()
    });

    let reloaded = SettingsStore::load(&store);
    assert_eq!(reloaded.applied().spacing, Spacing::default());
    assert_eq!(reloaded.pending().spacing, Spacing::default());
}

#[test]
fn end_to_end_spacing_change_reaches_the_projection() {
    let store = Store::in_memory();
    let settings = SettingsStore::load(&store);

    // The host wires the projection through an applied-record observer.
    let observed = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = observed.clone();
    settings.on_applied(move |applied| {
        let projection = project(applied);
        sink.lock().push(projection.get("--spacing").unwrap().to_owned());
    });

    // Immediate fire delivers the current (default) projection.
    assert_eq!(observed.lock().as_slice(), ["0.22rem"]);

    settings.update_pending(&SettingsPatch {
        spacing: Some(Spacing::UltraCompact),
        ..SettingsPatch::default()
    });
    // Drafting alone projects nothing.
    assert_eq!(observed.lock().len(), 1);

    settings.apply();
    assert_eq!(observed.lock().as_slice(), ["0.22rem", "0.2rem"]);

    settings.reset();
    assert_eq!(observed.lock().last().map(String::as_str), Some("0.22rem"));
    assert!(!store.contains(SETTINGS_KEY));
}

#[test]
fn disk_backed_settings_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::builder().create(true).root(dir.path().join("data")).open().unwrap();

    let settings = SettingsStore::load(&store);
    settings.update_pending(&SettingsPatch {
        font_size: Some(FontSize::Small),
        ..SettingsPatch::default()
    });
    settings.apply();

    let reopened =
        Store::builder().create(false).root(dir.path().join("data")).open().unwrap();
    let reloaded = SettingsStore::load(&reopened);
    assert_eq!(reloaded.applied().font_size, FontSize::Small);
}
