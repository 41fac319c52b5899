//! File persistence and preference-slot configuration

pub struct PersistenceConfig {
    /// Key of the single slot holding the selected environment index
    pub environment_key: &'static str,
    /// Default JSON file backing the native preference store
    pub preference_file: &'static str,
    /// Path handed to eframe for its own window/app state
    pub app_state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    environment_key: "perps_deeplinks.environment_index",
    preference_file: ".perps_deeplinks_prefs.json",
    app_state_path: ".states.json",
};
