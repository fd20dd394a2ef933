//! Screen state machine.
//!
//! The screen moves `Idle -> ImageSelected -> Submitting -> Resolved` and
//! back to `ImageSelected` whenever a new image is picked. Every submission
//! carries a [`Ticket`]; a result is only applied if its ticket matches the
//! submission currently on screen, so late results for a discarded request
//! are dropped.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::prediction::PredictionResult;

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no image selected")]
    NoImageSelected,

    #[error("a prediction is already in progress ({0})")]
    RequestOutstanding(Ticket),
}

/// Current phase of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Nothing picked yet
    #[default]
    Idle,
    /// Image picked, nothing sent
    ImageSelected { image: PathBuf },
    /// Upload in flight
    Submitting { image: PathBuf, ticket: Ticket },
    /// Result on screen; the image stays selected
    Resolved {
        image: PathBuf,
        result: PredictionResult,
    },
}

impl ScreenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenState::Idle => "idle",
            ScreenState::ImageSelected { .. } => "image_selected",
            ScreenState::Submitting { .. } => "submitting",
            ScreenState::Resolved { .. } => "resolved",
        }
    }

    pub fn selected_image(&self) -> Option<&Path> {
        match self {
            ScreenState::Idle => None,
            ScreenState::ImageSelected { image }
            | ScreenState::Submitting { image, .. }
            | ScreenState::Resolved { image, .. } => Some(image),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Submitting { .. })
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            ScreenState::Resolved { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Owns the screen state and hands out submission tickets.
#[derive(Debug, Default)]
pub struct Screen {
    state: ScreenState,
    last_ticket: u64,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Pick an image. Allowed from any state; an outstanding submission is
    /// forgotten and its result will be ignored.
    pub fn select_image(&mut self, image: impl Into<PathBuf>) {
        self.state = ScreenState::ImageSelected {
            image: image.into(),
        };
    }

    /// Check that a submission may start, returning the image to send.
    pub fn ready_to_submit(&self) -> Result<&Path, TransitionError> {
        match &self.state {
            ScreenState::Idle => Err(TransitionError::NoImageSelected),
            ScreenState::Submitting { ticket, .. } => {
                Err(TransitionError::RequestOutstanding(*ticket))
            }
            ScreenState::ImageSelected { image } | ScreenState::Resolved { image, .. } => {
                Ok(image)
            }
        }
    }

    /// Enter `Submitting`. Call only after the image bytes were read.
    pub fn begin_submit(&mut self) -> Result<Ticket, TransitionError> {
        let image = self.ready_to_submit()?.to_path_buf();
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.state = ScreenState::Submitting { image, ticket };
        Ok(ticket)
    }

    /// Apply a delivered result. Returns false when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: PredictionResult) -> bool {
        match &self.state {
            ScreenState::Submitting {
                image,
                ticket: current,
            } if *current == ticket => {
                let image = image.clone();
                self.state = ScreenState::Resolved { image, result };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let screen = Screen::new();
        assert_eq!(screen.state(), &ScreenState::Idle);
        assert_eq!(screen.state().selected_image(), None);
        assert!(!screen.state().is_loading());
    }

    #[test]
    fn test_send_without_image_is_rejected() {
        let mut screen = Screen::new();
        assert_eq!(screen.begin_submit(), Err(TransitionError::NoImageSelected));
        assert_eq!(screen.state(), &ScreenState::Idle);
    }

    #[test]
    fn test_full_cycle() {
        let mut screen = Screen::new();
        screen.select_image("cat.jpg");
        assert_eq!(screen.state().as_str(), "image_selected");

        let ticket = screen.begin_submit().unwrap();
        assert!(screen.state().is_loading());

        assert!(screen.resolve(ticket, PredictionResult::label("cat")));
        assert_eq!(
            screen.state().result(),
            Some(&PredictionResult::label("cat"))
        );
        assert_eq!(screen.state().selected_image(), Some(Path::new("cat.jpg")));
    }

    #[test]
    fn test_second_send_while_submitting_is_rejected() {
        let mut screen = Screen::new();
        screen.select_image("cat.jpg");
        let ticket = screen.begin_submit().unwrap();
        assert_eq!(
            screen.begin_submit(),
            Err(TransitionError::RequestOutstanding(ticket))
        );
    }

    #[test]
    fn test_stale_result_is_ignored_after_new_selection() {
        let mut screen = Screen::new();
        screen.select_image("cat.jpg");
        let stale = screen.begin_submit().unwrap();

        screen.select_image("dog.jpg");
        assert!(!screen.resolve(stale, PredictionResult::label("cat")));
        assert_eq!(
            screen.state(),
            &ScreenState::ImageSelected {
                image: PathBuf::from("dog.jpg")
            }
        );

        let fresh = screen.begin_submit().unwrap();
        assert_ne!(stale, fresh);
        assert!(!screen.resolve(stale, PredictionResult::label("cat")));
        assert!(screen.resolve(fresh, PredictionResult::label("dog")));
        assert_eq!(screen.state().result(), Some(&PredictionResult::label("dog")));
    }

    #[test]
    fn test_resend_from_resolved() {
        let mut screen = Screen::new();
        screen.select_image("cat.jpg");
        let first = screen.begin_submit().unwrap();
        screen.resolve(first, PredictionResult::error("failed to get prediction"));

        let second = screen.begin_submit().unwrap();
        assert_eq!(second.value(), first.value() + 1);
        assert!(screen.state().is_loading());
        assert!(!screen.resolve(first, PredictionResult::label("cat")));
    }
}
