//! Visibility state machine for the add-task overlay
//!
//! ```text
//! Closed --open()--> Opening --fade done--> Open
//! Open --close()--> Closing --fade done--> Closed
//! ```
//!
//! The fade is a linear opacity ramp advanced by [`ModalController::tick`].
//! Reversing direction mid-fade continues from the current opacity.

use crate::constants::DEFAULT_FADE_DURATION_MS;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Lifecycle notifications emitted by transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHook {
    /// A fade-in has started
    Enter,
    /// A fade-out has come to rest and the overlay is gone
    Exited,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalController {
    state: ModalState,
    opacity: f32,
    fade_duration: Duration,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FADE_DURATION_MS))
    }
}

impl ModalController {
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            opacity: 0.0,
            fade_duration,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Current opacity in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    pub fn is_visible(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, ModalState::Opening | ModalState::Closing)
    }

    /// Whether the form should take keystrokes
    pub fn accepts_input(&self) -> bool {
        matches!(self.state, ModalState::Opening | ModalState::Open)
    }

    /// Start fading in. Ignored while already opening or open.
    pub fn open(&mut self) -> Option<ModalHook> {
        match self.state {
            ModalState::Closed | ModalState::Closing => {
                self.state = ModalState::Opening;
                Some(ModalHook::Enter)
            }
            ModalState::Opening | ModalState::Open => None,
        }
    }

    /// Start fading out. Returns false when there was nothing to close.
    pub fn close(&mut self) -> bool {
        match self.state {
            ModalState::Open | ModalState::Opening => {
                self.state = ModalState::Closing;
                true
            }
            ModalState::Closed | ModalState::Closing => false,
        }
    }

    /// Advance the fade by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> Option<ModalHook> {
        if !self.is_animating() {
            return None;
        }

        if self.fade_duration.is_zero() {
            return self.finish();
        }

        let step = elapsed.as_secs_f32() / self.fade_duration.as_secs_f32();
        match self.state {
            ModalState::Opening => {
                self.opacity = (self.opacity + step).min(1.0);
                if self.opacity >= 1.0 {
                    return self.finish();
                }
                None
            }
            ModalState::Closing => {
                self.opacity = (self.opacity - step).max(0.0);
                if self.opacity <= 0.0 {
                    return self.finish();
                }
                None
            }
            ModalState::Closed | ModalState::Open => None,
        }
    }

    /// Jump to the end of the running fade.
    pub fn finish(&mut self) -> Option<ModalHook> {
        match self.state {
            ModalState::Opening => {
                self.state = ModalState::Open;
                self.opacity = 1.0;
                None
            }
            ModalState::Closing => {
                self.state = ModalState::Closed;
                self.opacity = 0.0;
                Some(ModalHook::Exited)
            }
            ModalState::Closed | ModalState::Open => None,
        }
    }
}
