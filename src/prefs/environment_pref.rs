//! Saved environment selection.

use crate::config::{DEFAULT_ENVIRONMENT_INDEX, PERSISTENCE};
use crate::prefs::KeyValueStore;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Reads the saved index. Absent, non-numeric and out-of-range values all read
/// as `None`; callers fall back to the default.
pub fn load_saved_environment_index<S: KeyValueStore + ?Sized>(
    store: &S,
    registry_len: usize,
) -> Option<usize> {
    let raw = store.get(PERSISTENCE.environment_key)?;
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    let index = match raw.parse::<usize>() {
        Ok(index) if digits_only => index,
        _ => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_state_serde {
                log::info!("Ignoring malformed saved environment index: {:?}", raw);
            }
            return None;
        }
    };
    (index < registry_len).then_some(index)
}

/// Best-effort write. Failure is logged and swallowed.
pub fn save_environment_index<S: KeyValueStore + ?Sized>(store: &mut S, index: usize) {
    match store.set(PERSISTENCE.environment_key, index.to_string()) {
        Ok(()) => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_state_serde {
                log::info!("Saved environment index {}", index);
            }
        }
        Err(e) => log::warn!("Failed to save environment preference: {:#}", e),
    }
}

/// Owns the injected slot the app reads at startup and writes on toggle.
pub struct EnvironmentPreferenceStore {
    store: Box<dyn KeyValueStore>,
}

impl EnvironmentPreferenceStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self, registry_len: usize) -> Option<usize> {
        load_saved_environment_index(&*self.store, registry_len)
    }

    pub fn save(&mut self, index: usize) {
        save_environment_index(&mut *self.store, index);
    }
}

/// Where the app starts, and which index it may write back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupEnvironment {
    pub selected: usize,
    /// A saved or reset choice. A session-only override leaves this `None`.
    pub persisted: Option<usize>,
}

/// Startup precedence: session override, then the injected store, then
/// eframe's slot, then the default. `reset` rewrites the injected store with
/// the default first, and the eframe slot is not consulted after a reset.
pub fn initial_environment(
    environment_override: Option<usize>,
    preferences: &mut EnvironmentPreferenceStore,
    eframe_storage: Option<&dyn eframe::Storage>,
    reset: bool,
    registry_len: usize,
) -> StartupEnvironment {
    let persisted = if reset {
        preferences.save(DEFAULT_ENVIRONMENT_INDEX);
        Some(DEFAULT_ENVIRONMENT_INDEX)
    } else {
        preferences.load(registry_len).or_else(|| {
            eframe_storage.and_then(|storage| load_saved_environment_index(storage, registry_len))
        })
    };

    let selected = environment_override
        .filter(|&index| index < registry_len)
        .or(persisted)
        .unwrap_or(DEFAULT_ENVIRONMENT_INDEX);

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_state_serde {
        log::info!(
            "Startup environment: override={:?} persisted={:?} selected={}",
            environment_override,
            persisted,
            selected
        );
    }

    StartupEnvironment {
        selected,
        persisted,
    }
}
