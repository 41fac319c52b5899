use std::time::Duration;

use crate::config::FEEDBACK;
use crate::utils::app_time::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    index: usize,
    generation: u64,
    deadline: AppInstant,
}

/// The single "copied" tick shown on a card.
///
/// Each flash gets a fresh generation and its own deadline. A clear only
/// applies to the generation it was scheduled for, so a superseded flash can
/// never clear a newer one.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    active: Option<Flash>,
    next_generation: u64,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(FEEDBACK.copied_flash)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: None,
            next_generation: 0,
            duration,
        }
    }

    /// Shows the tick on `index`, replacing any previous flash. Returns the
    /// generation a delayed clear should target.
    pub fn flash(&mut self, index: usize, at: AppInstant) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.active = Some(Flash {
            index,
            generation,
            deadline: at + self.duration,
        });
        generation
    }

    /// Clears the flash only if it is still `generation`.
    pub fn clear(&mut self, generation: u64) -> bool {
        match self.active {
            Some(flash) if flash.generation == generation => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Clears the active flash once its own deadline has passed.
    pub fn expire(&mut self, at: AppInstant) -> bool {
        match self.active {
            Some(flash) if at >= flash.deadline => self.clear(flash.generation),
            _ => false,
        }
    }

    pub fn flashed_index(&self) -> Option<usize> {
        self.active.map(|flash| flash.index)
    }

    pub fn is_flashed(&self, index: usize) -> bool {
        self.flashed_index() == Some(index)
    }

    /// Time until the active flash clears, for scheduling a repaint.
    pub fn remaining(&self, at: AppInstant) -> Option<Duration> {
        self.active
            .map(|flash| flash.deadline.saturating_duration_since(at))
    }
}
