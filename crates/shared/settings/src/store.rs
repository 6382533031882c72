//! The two-phase settings store.

use crewdeck_domain::constants::SETTINGS_KEY;
use crewdeck_domain::settings::{AppSettings, SettingsPatch};
use crewdeck_domain::validate::validate_settings;
use crewdeck_store::Store;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

type AppliedObserver = Box<dyn Fn(&AppSettings) + Send + Sync>;

struct State {
    applied: AppSettings,
    pending: AppSettings,
}

struct SettingsInner {
    state: RwLock<State>,
    observers: Mutex<Vec<AppliedObserver>>,
    store: Store,
}

/// A thread-safe handle to the applied/pending settings pair.
///
/// Edits go to the pending draft via [`Self::update_pending`] and take
/// effect only on [`Self::apply`]. Observers registered through
/// [`Self::on_applied`] run synchronously whenever the applied record
/// changes, and once immediately on registration.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<SettingsInner>,
}

impl SettingsStore {
    /// Loads settings out of `store`, sanitizing whatever is persisted.
    ///
    /// An absent key, a non-object document, and malformed fields all
    /// resolve through the field-independent validator, so the returned
    /// handle always holds a fully populated record. Applied and pending
    /// start equal; nothing is written back until the first apply.
    #[must_use]
    pub fn load(store: &Store) -> Self {
        let applied = store
            .get_opt::<Value>(SETTINGS_KEY)
            .map_or_else(AppSettings::default, |raw| validate_settings(&raw));
        debug!("Settings loaded");

        Self {
            inner: Arc::new(SettingsInner {
                state: RwLock::new(State { applied: applied.clone(), pending: applied }),
                observers: Mutex::new(Vec::new()),
                store: store.clone(),
            }),
        }
    }

    /// The record currently in effect.
    #[must_use]
    pub fn applied(&self) -> AppSettings {
        self.inner.state.read().applied.clone()
    }

    /// The draft record a settings editor mutates.
    #[must_use]
    pub fn pending(&self) -> AppSettings {
        self.inner.state.read().pending.clone()
    }

    /// True when the draft differs from the applied record.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let state = self.inner.state.read();
        state.pending != state.applied
    }

    /// Shallow-merges `patch` into the pending draft. The applied record,
    /// the persisted document, and the observers are untouched.
    pub fn update_pending(&self, patch: &SettingsPatch) {
        self.inner.state.write().pending.merge(patch);
    }

    /// Commits the pending draft: it becomes the applied record, is
    /// persisted, and the observers run with it. A no-change apply still
    /// persists and notifies.
    pub fn apply(&self) {
        let applied = {
            let mut state = self.inner.state.write();
            state.applied = state.pending.clone();
            state.applied.clone()
        };
        self.inner.store.set(SETTINGS_KEY, &applied);
        info!("Settings applied");
        self.notify(&applied);
    }

    /// Discards both records back to the documented defaults and removes
    /// the persisted document, so the next load starts clean.
    pub fn reset(&self) {
        let applied = {
            let mut state = self.inner.state.write();
            state.applied = AppSettings::default();
            state.pending = AppSettings::default();
            state.applied.clone()
        };
        self.inner.store.remove(SETTINGS_KEY);
        info!("Settings reset to defaults");
        self.notify(&applied);
    }

    /// Registers `observer` and fires it immediately with the current
    /// applied record, then again after every apply or reset.
    ///
    /// Observers run synchronously on the mutating thread; keep them cheap.
    pub fn on_applied(&self, observer: impl Fn(&AppSettings) + Send + Sync + 'static) {
        let applied = self.applied();
        observer(&applied);
        self.inner.observers.lock().push(Box::new(observer));
    }

    fn notify(&self, applied: &AppSettings) {
        for observer in self.inner.observers.lock().iter() {
            observer(applied);
        }
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("SettingsStore")
            .field("applied", &state.applied)
            .field("pending", &state.pending)
            .field("observers", &self.inner.observers.lock().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdeck_domain::settings::Spacing;

    #[test]
    fn update_pending_leaves_applied_untouched() {
        let store = Store::in_memory();
        let settings = SettingsStore::load(&store);

        settings.update_pending(&SettingsPatch {
            spacing: Some(Spacing::Comfortable),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.applied().spacing, Spacing::Compact);
        assert_eq!(settings.pending().spacing, Spacing::Comfortable);
        assert!(settings.has_changes());
        assert!(!store.contains(SETTINGS_KEY));
    }

    #[test]
    fn apply_commits_persists_and_clears_changes() {
        let store = Store::in_memory();
        let settings = SettingsStore::load(&store);

        settings.update_pending(&SettingsPatch {
            spacing: Some(Spacing::UltraCompact),
            ..SettingsPatch::default()
        });
        settings.apply();

        assert_eq!(settings.applied().spacing, Spacing::UltraCompact);
        assert!(!settings.has_changes());

        let persisted: Value = store.get_opt(SETTINGS_KEY).unwrap();
        assert_eq!(persisted["spacing"], "ultra-compact");
    }

    #[test]
    fn reset_restores_defaults_and_clears_persistence() {
        let store = Store::in_memory();
        let settings = SettingsStore::load(&store);

        settings.update_pending(&SettingsPatch {
            spacing: Some(Spacing::Comfortable),
            ..SettingsPatch::default()
        });
        settings.apply();
        settings.reset();

        assert_eq!(settings.applied(), AppSettings::default());
        assert_eq!(settings.pending(), AppSettings::default());
        assert!(!store.contains(SETTINGS_KEY));
    }

    #[test]
    fn observer_fires_on_registration_and_on_apply() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let store = Store::in_memory();
        let settings = SettingsStore::load(&store);

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        settings.on_applied(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        settings.update_pending(&SettingsPatch::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        settings.apply();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        settings.reset();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
