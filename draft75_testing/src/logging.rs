//! Shared access to the global [`logtest::Logger`].

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::Level;
use logtest::Logger;
use rstest::fixture;

/// Handle to the global logger with exclusive access.
///
/// Tests holding a handle never observe each other's records. Call
/// [`clear`](Self::clear) first, since earlier tests may have left records
/// behind.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance.
    #[must_use]
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        // A panicking test must not take the logger down with it.
        let guard = logger.lock().unwrap_or_else(PoisonError::into_inner);

        Self { guard }
    }

    /// Drop every captured record.
    pub fn clear(&mut self) { while self.guard.pop().is_some() {} }

    /// Drain captured records and return the messages logged at `WARN`.
    pub fn take_warnings(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        while let Some(record) = self.guard.pop() {
            if record.level() == Level::Warn {
                warnings.push(record.args().to_owned());
            }
        }
        warnings
    }
}

impl Default for LoggerHandle {
    fn default() -> Self { Self::new() }
}

impl std::ops::Deref for LoggerHandle {
    type Target = Logger;

    fn deref(&self) -> &Self::Target { &self.guard }
}

impl std::ops::DerefMut for LoggerHandle {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.guard }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
