//! App preferences over an injected key-value store.
//!
//! [`Prefs`] gives typed access to the compass settings. The backing
//! [`SettingsStore`] is passed in by the host; there is no global instance.
//! [`MemoryStore`] is a fixed-capacity store for hosts without persistence
//! and for tests.
//!
//! # Defaults
//!
//! | Setting | Key | Default |
//! |---------|-----|---------|
//! | First run | `is_first_run` | `true` while the key is absent |
//! | Theme color | `theme_color` | `0` |
//! | Keep screen on | `keep_screen_on` | `false` |
//! | Energy saving | `is_energy_saving_mode` | `false` |
//!
//! A value stored with the wrong type reads as the default.

use heapless::index_map::FnvIndexMap;

pub const KEY_IS_FIRST_RUN: &str = "is_first_run";
pub const KEY_THEME_COLOR: &str = "theme_color";
pub const KEY_KEEP_SCREEN_ON: &str = "keep_screen_on";
pub const KEY_ENERGY_SAVING_MODE: &str = "is_energy_saving_mode";

/// Capacity of [`MemoryStore`]. Must be a power of two.
pub const MEMORY_STORE_CAPACITY: usize = 8;

// =============================================================================
// Errors
// =============================================================================

/// Preferences write failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrefsError {
    /// The store has no room for a new key.
    #[error("settings store is full, cannot add `{0}`")]
    StoreFull(&'static str),
    /// The backend rejected the write.
    #[error("settings backend rejected `{0}`")]
    Backend(&'static str),
}

// =============================================================================
// Store
// =============================================================================

/// A stored setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
}

/// Key-value persistence supplied by the host.
pub trait SettingsStore {
    fn get(
        &self,
        key: &str,
    ) -> Option<SettingValue>;

    fn put(
        &mut self,
        key: &'static str,
        value: SettingValue,
    ) -> Result<(), PrefsError>;

    fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store with room for [`MEMORY_STORE_CAPACITY`] keys.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvIndexMap<&'static str, SettingValue, MEMORY_STORE_CAPACITY>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { entries: FnvIndexMap::new() } }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl SettingsStore for MemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> Option<SettingValue> {
        self.entries.get(key).copied()
    }

    fn put(
        &mut self,
        key: &'static str,
        value: SettingValue,
    ) -> Result<(), PrefsError> {
        self.entries
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| PrefsError::StoreFull(key))
    }
}

// =============================================================================
// Typed Preferences
// =============================================================================

/// Typed compass preferences.
pub struct Prefs<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> Prefs<S> {
    pub const fn new(store: S) -> Self { Self { store } }

    pub const fn store(&self) -> &S { &self.store }

    pub fn into_inner(self) -> S { self.store }

    fn get_bool(
        &self,
        key: &str,
        default: bool,
    ) -> bool {
        match self.store.get(key) {
            Some(SettingValue::Bool(v)) => v,
            _ => default,
        }
    }

    fn get_int(
        &self,
        key: &str,
        default: i32,
    ) -> i32 {
        match self.store.get(key) {
            Some(SettingValue::Int(v)) => v,
            _ => default,
        }
    }

    /// True until [`first_run_executed`](Self::first_run_executed) is recorded.
    pub fn is_first_run(&self) -> bool {
        !self.store.contains(KEY_IS_FIRST_RUN) || self.get_bool(KEY_IS_FIRST_RUN, false)
    }

    pub fn first_run_executed(&mut self) -> Result<(), PrefsError> {
        self.store.put(KEY_IS_FIRST_RUN, SettingValue::Bool(false))
    }

    /// Theme palette index.
    pub fn theme_color(&self) -> i32 { self.get_int(KEY_THEME_COLOR, 0) }

    pub fn set_theme_color(
        &mut self,
        index: i32,
    ) -> Result<(), PrefsError> {
        self.store.put(KEY_THEME_COLOR, SettingValue::Int(index))
    }

    pub fn is_keep_screen_on(&self) -> bool { self.get_bool(KEY_KEEP_SCREEN_ON, false) }

    pub fn set_keep_screen_on(
        &mut self,
        on: bool,
    ) -> Result<(), PrefsError> {
        self.store.put(KEY_KEEP_SCREEN_ON, SettingValue::Bool(on))
    }

    pub fn is_energy_saving_mode(&self) -> bool { self.get_bool(KEY_ENERGY_SAVING_MODE, false) }

    pub fn set_energy_saving_mode(
        &mut self,
        on: bool,
    ) -> Result<(), PrefsError> {
        self.store.put(KEY_ENERGY_SAVING_MODE, SettingValue::Bool(on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that rejects every write.
    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn get(
            &self,
            _key: &str,
        ) -> Option<SettingValue> {
            None
        }

        fn put(
            &mut self,
            key: &'static str,
            _value: SettingValue,
        ) -> Result<(), PrefsError> {
            Err(PrefsError::Backend(key))
        }
    }

    #[test]
    fn test_defaults() {
        let prefs = Prefs::new(MemoryStore::new());
        assert!(prefs.is_first_run());
        assert_eq!(prefs.theme_color(), 0);
        assert!(!prefs.is_keep_screen_on());
        assert!(!prefs.is_energy_saving_mode());
    }

    #[test]
    fn test_first_run_executed() {
        let mut prefs = Prefs::new(MemoryStore::new());
        prefs.first_run_executed().unwrap();
        assert!(!prefs.is_first_run());
    }

    #[test]
    fn test_first_run_true_when_stored_true() {
        let mut store = MemoryStore::new();
        store.put(KEY_IS_FIRST_RUN, SettingValue::Bool(true)).unwrap();
        assert!(Prefs::new(store).is_first_run());
    }

    #[test]
    fn test_setters_round_trip() {
        let mut prefs = Prefs::new(MemoryStore::new());
        prefs.set_theme_color(3).unwrap();
        prefs.set_keep_screen_on(true).unwrap();
        prefs.set_energy_saving_mode(true).unwrap();
        assert_eq!(prefs.theme_color(), 3);
        assert!(prefs.is_keep_screen_on());
        assert!(prefs.is_energy_saving_mode());

        prefs.set_energy_saving_mode(false).unwrap();
        assert!(!prefs.is_energy_saving_mode());
        assert_eq!(prefs.store().len(), 3, "overwrites reuse the key");
    }

    #[test]
    fn test_wrong_type_reads_default() {
        let mut store = MemoryStore::new();
        store.put(KEY_THEME_COLOR, SettingValue::Bool(true)).unwrap();
        store.put(KEY_KEEP_SCREEN_ON, SettingValue::Int(1)).unwrap();
        let prefs = Prefs::new(store);
        assert_eq!(prefs.theme_color(), 0);
        assert!(!prefs.is_keep_screen_on());
    }

    #[test]
    fn test_memory_store_full() {
        const KEYS: [&str; MEMORY_STORE_CAPACITY] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];
        let mut store = MemoryStore::new();
        for key in KEYS {
            store.put(key, SettingValue::Int(1)).unwrap();
        }
        assert_eq!(store.put("extra", SettingValue::Int(2)), Err(PrefsError::StoreFull("extra")));
        // Existing keys can still be overwritten
        assert_eq!(store.put("k0", SettingValue::Int(9)), Ok(()));
        assert_eq!(store.get("k0"), Some(SettingValue::Int(9)));
    }

    #[test]
    fn test_backend_error_propagates() {
        let mut prefs = Prefs::new(ReadOnlyStore);
        assert_eq!(prefs.set_theme_color(1), Err(PrefsError::Backend(KEY_THEME_COLOR)));
        assert!(prefs.is_first_run());
    }

    #[test]
    fn test_error_display() {
        let msg = PrefsError::StoreFull("theme_color").to_string();
        assert_eq!(msg, "settings store is full, cannot add `theme_color`");
    }
}
