//! Call-coalescing timer used to debounce rapid search input

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::sleep;

/// Quiet window applied to debounced searches
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Collapses bursts of calls into the last one
///
/// Each call arms a ticket and then waits out the quiet window. A ticket
/// only settles if no newer ticket was armed in the meantime, so exactly
/// one caller per burst proceeds, carrying the arguments of the last call.
pub struct Debouncer {
    delay: Duration,
    serial: AtomicU64,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            serial: AtomicU64::new(0),
        }
    }

    /// Quiet window applied between arming and settling
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a new call, superseding any pending one
    pub fn arm(&self) -> u64 {
        self.serial.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the ticket is still the most recent arrival
    pub fn is_current(&self, ticket: u64) -> bool {
        self.serial.load(Ordering::SeqCst) == ticket
    }

    /// Wait out the quiet window for a ticket
    ///
    /// Returns true if the ticket survived the window and its caller
    /// should proceed, false if a newer call superseded it.
    pub async fn settle(&self, ticket: u64) -> bool {
        sleep(self.delay).await;
        self.is_current(ticket)
    }
}
