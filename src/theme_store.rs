use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::error::ThemeError;
use crate::theme::{self, GlobalTheme, ThemeKey};

/// Selected site theme. In the browser the selection lives in local storage,
/// so it survives reloads; an unreadable stored value decodes to the default.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore {
    key: Signal<ThemeKey>,
    set_key: WriteSignal<ThemeKey>,
}

impl ThemeStore {
    #[allow(unused_variables)]
    pub fn new(storage_key: &'static str) -> Self {
        #[cfg(feature = "hydrate")]
        let (key, set_key, _) = use_local_storage::<ThemeKey, JsonSerdeWasmCodec>(storage_key);

        #[cfg(not(feature = "hydrate"))]
        let (key, set_key) = {
            let (key, set_key) = signal(ThemeKey::default());
            (Signal::from(key), set_key)
        };

        Self { key, set_key }
    }

    pub fn key(&self) -> ThemeKey {
        self.key.get()
    }

    pub fn theme(&self) -> &'static GlobalTheme {
        self.key.get().theme()
    }

    pub fn set(&self, key: ThemeKey) {
        self.set_key.set(key);
    }

    pub fn set_by_name(&self, name: &str) -> Result<(), ThemeError> {
        let theme =
            theme::find(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        self.set(theme.key);
        Ok(())
    }

    pub fn cycle(&self) {
        self.set_key.update(|k| *k = k.next());
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn test_store_selection() {
        let owner = Owner::new();
        owner.set();
        let store = ThemeStore::new("test-theme");
        assert_eq!(store.key(), ThemeKey::Dark);
        assert_eq!(store.theme().name, "Midnight");

        store.cycle();
        assert_eq!(store.key(), ThemeKey::Light);

        assert!(store.set_by_name("sepia").is_err());
        assert_eq!(store.key(), ThemeKey::Light);

        store.set_by_name("warm").expect("warm is a known theme");
        assert_eq!(store.theme().name, "Ember");
        store.cycle();
        assert_eq!(store.key(), ThemeKey::Dark);
    }
}
