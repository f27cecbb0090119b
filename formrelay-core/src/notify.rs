//! Notification sinks for submission outcomes.
//!
//! The notifier is the alert surface: the handler delivers exactly one
//! message per submission attempt, success or failure, and nothing else.

use std::sync::Mutex;

/// Trait for notification sinks.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Presents a message to the user.
    fn notify(&self, message: &str);
}

/// Notifier that writes messages to stdout.
///
/// The command-line equivalent of a modal alert.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Creates a new console notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Notifier that records messages in order.
///
/// Used by tests and headless embeddings to observe submission outcomes
/// without a console.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    /// Creates an empty memory notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all messages delivered so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(message.to_string());
    }
}
