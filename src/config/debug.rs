//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so release
//! builds remain quiet. Every read site is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (environment toggles, copy, open link).
    pub print_ui_interactions: bool,
    /// Emit QR batch scheduling, commit and discard events.
    pub print_qr_batches: bool,
    /// Emit details of preference load/save.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_qr_batches: false,
    print_state_serde: false,
    print_shutdown: false,
};
