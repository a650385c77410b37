// logging.rs - Injected diagnostic logging capability

use std::cell::RefCell;

/// Default component identifier used to tag diagnostic lines
pub const DEFAULT_COMPONENT: &str = "mashcall";

/// Sink for one-line diagnostic messages.
///
/// Every classification step receives a `&dyn Logger` instead of writing to a
/// global stream, so the library can run silently (tests) or be wired to
/// whatever diagnostic backend the caller uses.
pub trait Logger {
    fn log(&self, message: &str);
}

impl<F> Logger for F
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to the `log` facade, using the component as target
#[derive(Debug, Clone)]
pub struct FacadeLogger {
    component: String,
}

impl FacadeLogger {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Default for FacadeLogger {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT)
    }
}

impl Logger for FacadeLogger {
    fn log(&self, message: &str) {
        log::info!(target: self.component.as_str(), "[{}] {}", self.component, message);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _message: &str) {}
}

/// Keeps messages in memory for later inspection
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
