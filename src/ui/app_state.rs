use crate::config::DEFAULT_ENVIRONMENT_INDEX;
use crate::domain::{
    Environment, ResolvedLink, catalog, environments, next_environment_index, resolve_all,
};
use crate::prefs::StartupEnvironment;
use crate::ui::clipboard::Clipboard;
use crate::ui::copy_feedback::CopyFeedback;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Everything the page derives from the user's choices.
///
/// Resolved links are recomputed on every environment change and are never
/// persisted.
pub struct TesterState {
    selected_environment: usize,
    /// Last index the user chose or had saved; a session override is not one
    persisted_environment: Option<usize>,
    resolved: Vec<ResolvedLink>,
    pub copy_feedback: CopyFeedback,
}

impl TesterState {
    /// Out-of-range indices fall back to the default environment.
    pub fn new(selected_environment: usize) -> Self {
        let selected_environment = if selected_environment < environments().len() {
            selected_environment
        } else {
            DEFAULT_ENVIRONMENT_INDEX
        };
        Self {
            selected_environment,
            persisted_environment: None,
            resolved: resolve_all(catalog(), &environments()[selected_environment]),
            copy_feedback: CopyFeedback::default(),
        }
    }

    pub fn from_startup(startup: StartupEnvironment) -> Self {
        let mut state = Self::new(startup.selected);
        state.persisted_environment = startup.persisted;
        state
    }

    /// The index storage may hold. `None` until something was saved or chosen.
    pub fn persisted_environment(&self) -> Option<usize> {
        self.persisted_environment
    }

    pub fn selected_environment(&self) -> usize {
        self.selected_environment
    }

    pub fn environment(&self) -> &'static Environment {
        &environments()[self.selected_environment]
    }

    pub fn resolved_links(&self) -> &[ResolvedLink] {
        &self.resolved
    }

    pub fn resolved_urls(&self) -> Vec<String> {
        self.resolved.iter().map(|r| r.url.clone()).collect()
    }

    /// Returns `true` when the selection actually changed.
    pub fn select_environment(&mut self, index: usize) -> bool {
        if index == self.selected_environment || index >= environments().len() {
            return false;
        }
        self.selected_environment = index;
        self.persisted_environment = Some(index);
        self.resolved = resolve_all(catalog(), self.environment());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[env] switched to {}", self.environment());
        }
        true
    }

    pub fn toggle_environment(&mut self) -> usize {
        let next = next_environment_index(self.selected_environment, environments().len());
        self.select_environment(next);
        self.selected_environment
    }

    /// Copies `url` and flashes card `index` on success. Failures are logged
    /// and leave the current flash untouched.
    pub fn copy_link(
        &mut self,
        clipboard: &mut dyn Clipboard,
        url: &str,
        index: usize,
        at: AppInstant,
    ) -> bool {
        match clipboard.write_text(url) {
            Ok(()) => {
                self.copy_feedback.flash(index, at);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[copy] {}", url);
                }
                true
            }
            Err(e) => {
                log::error!("Failed to copy: {:#}", e);
                false
            }
        }
    }

    pub fn tick(&mut self, at: AppInstant) {
        self.copy_feedback.expire(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;
    use anyhow::anyhow;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Err(anyhow!("permission denied"))
        }
    }

    #[test]
    fn out_of_range_start_uses_default() {
        let state = TesterState::new(42);
        assert_eq!(state.selected_environment(), 0);
        assert_eq!(state.resolved_links().len(), catalog().len());
    }

    #[test]
    fn double_toggle_restores_urls() {
        let mut state = TesterState::new(0);
        let original = state.resolved_urls();

        assert_eq!(state.toggle_environment(), 1);
        let toggled = state.resolved_urls();
        assert_ne!(original, toggled);
        assert!(toggled.iter().all(|u| u.starts_with("https://link-test.metamask.io/")));

        assert_eq!(state.toggle_environment(), 0);
        assert_eq!(state.resolved_urls(), original);
    }

    #[test]
    fn selecting_current_environment_is_a_no_op() {
        let mut state = TesterState::new(1);
        assert!(!state.select_environment(1));
        assert!(!state.select_environment(7));
        assert_eq!(state.selected_environment(), 1);
    }

    #[test]
    fn session_start_persists_nothing_until_a_toggle() {
        let mut state = TesterState::from_startup(StartupEnvironment {
            selected: 1,
            persisted: None,
        });
        assert_eq!(state.selected_environment(), 1);
        assert_eq!(state.persisted_environment(), None);

        assert_eq!(state.toggle_environment(), 0);
        assert_eq!(state.persisted_environment(), Some(0));
    }

    #[test]
    fn saved_choice_survives_a_session_override() {
        let state = TesterState::from_startup(StartupEnvironment {
            selected: 1,
            persisted: Some(0),
        });
        assert_eq!(state.selected_environment(), 1);
        assert_eq!(state.persisted_environment(), Some(0));
    }

    #[test]
    fn successful_copy_flashes_card() {
        let t0 = now();
        let mut state = TesterState::new(0);
        let mut clipboard = RecordingClipboard::default();
        let url = state.resolved_links()[7].url.clone();

        assert!(state.copy_link(&mut clipboard, &url, 7, t0));
        assert_eq!(clipboard.written, vec![url]);
        assert!(state.copy_feedback.is_flashed(7));

        state.tick(t0 + Duration::from_millis(2000));
        assert_eq!(state.copy_feedback.flashed_index(), None);
    }

    #[test]
    fn failed_copy_keeps_previous_flash() {
        let t0 = now();
        let mut state = TesterState::new(0);
        let url = state.resolved_links()[0].url.clone();

        assert!(state.copy_link(&mut RecordingClipboard::default(), &url, 0, t0));
        assert!(!state.copy_link(&mut BrokenClipboard, &url, 5, t0));
        assert_eq!(state.copy_feedback.flashed_index(), Some(0));
    }
}
