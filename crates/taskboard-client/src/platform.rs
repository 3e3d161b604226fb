//! Platform Seams
//!
//! Page navigation and interactive confirmation, supplied by the host (the
//! browser in production, recording doubles in tests).

use std::sync::{Mutex, PoisonError};

/// Moves the user to another route
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Navigator that remembers where it was sent
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}

/// Confirm that always gives the same answer and counts the questions
#[derive(Debug)]
pub struct FixedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FixedConfirm {
    pub const fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.asked.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
        self.answer
    }
}
