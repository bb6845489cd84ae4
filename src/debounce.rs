//! Debounced search driven by text input.
//!
//! Every keystroke calls [`SearchDebouncer::input`]. The previous scheduled
//! search is aborted and a new one is scheduled after the quiet window. Each
//! input takes a [`Ticket`]; a completed search is published only if its
//! ticket is still the latest, so a slow earlier request can never replace
//! the results of a later one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::FoodRecord;
use crate::sequence::{RequestSequencer, Ticket};
use crate::FoodLogSdk;

/// Results published by a [`SearchDebouncer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchUpdate {
    /// Ticket of the input that produced these results; `None` before the
    /// first input.
    pub ticket: Option<Ticket>,
    pub term: String,
    pub foods: Vec<FoodRecord>,
}

/// Cancellable, sequence-guarded search scheduler.
///
/// Must be used from within a Tokio runtime.
pub struct SearchDebouncer {
    sdk: Arc<FoodLogSdk>,
    window: Duration,
    sequencer: Arc<RequestSequencer>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: Arc<watch::Sender<SearchUpdate>>,
}

impl SearchDebouncer {
    /// Create a debouncer using the SDK's configured window.
    pub fn new(sdk: Arc<FoodLogSdk>) -> Self {
        let window = sdk.config().debounce;
        Self::with_window(sdk, window)
    }

    pub fn with_window(sdk: Arc<FoodLogSdk>, window: Duration) -> Self {
        let (tx, _rx) = watch::channel(SearchUpdate::default());
        Self {
            sdk,
            window,
            sequencer: Arc::new(RequestSequencer::new()),
            pending: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    /// Receive every published update.
    pub fn subscribe(&self) -> watch::Receiver<SearchUpdate> {
        self.tx.subscribe()
    }

    /// The last published update.
    pub fn latest(&self) -> SearchUpdate {
        self.tx.borrow().clone()
    }

    /// Feed the current text of the search box.
    ///
    /// A blank term publishes an empty result at once and sends nothing.
    pub fn input(&self, term: &str) -> Ticket {
        let ticket = self.sequencer.issue();
        self.abort_pending();

        let term = term.trim().to_string();
        if term.is_empty() {
            self.tx.send_replace(SearchUpdate {
                ticket: Some(ticket),
                term,
                foods: Vec::new(),
            });
            return ticket;
        }

        let sdk = self.sdk.clone();
        let sequencer = self.sequencer.clone();
        let tx = self.tx.clone();
        let window = self.window;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if !sequencer.is_latest(ticket) {
                return;
            }

            debug!(term = %term, ticket = ticket.value(), "debounced search firing");
            let query = term.clone();
            let foods = match tokio::task::spawn_blocking(move || sdk.search().search(&query)).await {
                Ok(foods) => foods,
                Err(e) => {
                    warn!(error = %e, "search task failed");
                    Vec::new()
                }
            };

            if sequencer.is_latest(ticket) {
                tx.send_replace(SearchUpdate {
                    ticket: Some(ticket),
                    term,
                    foods,
                });
            } else {
                debug!(ticket = ticket.value(), "discarding stale search results");
            }
        });

        *self.lock_pending() = Some(handle);
        ticket
    }

    /// Cancel the scheduled search and ignore any request still in flight.
    pub fn cancel(&self) {
        self.sequencer.issue();
        self.abort_pending();
    }

    fn abort_pending(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
