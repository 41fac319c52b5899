// Client-local preference persistence
pub mod environment_pref;
pub mod store;

pub use environment_pref::{
    EnvironmentPreferenceStore, StartupEnvironment, initial_environment,
    load_saved_environment_index, save_environment_index,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
