//! Cancellable search session for interactive use.
//!
//! A UI issues one search per keystroke; a slow stale search must never
//! overwrite a newer result. [`SearchSession`] stamps each submitted
//! query with a monotonically increasing request id, runs the scan on a
//! worker thread, and applies a completed result to the shared snapshot
//! only if its id is newer than the last applied one — last-write-wins
//! by start order, not completion order. Workers watch the latest id and
//! abandon their scan early once superseded.
//!
//! The session owns the only mutable state in the pipeline (the applied
//! snapshot slot); the engine itself is pure over the immutable lexicon,
//! so any number of workers can scan concurrently.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};
use std::thread::{self, JoinHandle};

use akz_query::Query;
use tracing::debug;

use crate::{ResultSet, SearchEngine};

/// The applied-result slot shared between workers and the caller.
#[derive(Debug, Default)]
struct AppliedSlot {
    /// Request id of the applied result; 0 means nothing applied yet.
    request_id: u64,
    /// The applied result set.
    results: Option<ResultSet>,
}

/// A handle to one in-flight search.
#[derive(Debug)]
pub struct SearchRequest {
    /// The id assigned at submission.
    id: u64,
    /// The worker thread.
    handle: JoinHandle<()>,
}

impl SearchRequest {
    /// The request id assigned at submission time.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Blocks until the worker finishes (its result may or may not have
    /// been applied, depending on whether it was superseded).
    pub fn wait(self) {
        // A worker that panicked already lost its slot update; nothing
        // for the caller to recover here.
        let _ = self.handle.join();
    }
}

/// Runs searches off the calling thread with staleness protection.
#[derive(Debug)]
pub struct SearchSession {
    /// Shared engine over the immutable lexicon.
    engine: Arc<SearchEngine>,
    /// Id of the most recently started request.
    latest: Arc<AtomicU64>,
    /// Slot holding the newest applied result.
    slot: Arc<Mutex<AppliedSlot>>,
}

impl SearchSession {
    /// Creates a session over an engine.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            latest: Arc::new(AtomicU64::new(0)),
            slot: Arc::new(Mutex::new(AppliedSlot::default())),
        }
    }

    /// Submits a query, returning a handle to the in-flight request.
    ///
    /// Submitting a new query supersedes all earlier in-flight requests:
    /// their workers stop scanning at the next cancellation check and
    /// their results are never applied.
    pub fn submit(&self, query: Query) -> SearchRequest {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let engine = Arc::clone(&self.engine);
        let latest = Arc::clone(&self.latest);
        let slot = Arc::clone(&self.slot);

        let handle = thread::spawn(move || {
            let superseded = || latest.load(Ordering::SeqCst) != id;
            match engine.search_cancellable(&query, &superseded) {
                Some(results) => apply(&slot, id, results),
                None => debug!(id, "search superseded mid-scan"),
            }
        });

        SearchRequest { id, handle }
    }

    /// The newest applied result, with its request id.
    ///
    /// `None` until the first search completes.
    pub fn current(&self) -> Option<(u64, ResultSet)> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.results.clone().map(|r| (slot.request_id, r))
    }
}

/// Applies a completed result if it is newer than the applied one.
fn apply(slot: &Mutex<AppliedSlot>, id: u64, results: ResultSet) {
    let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if id > slot.request_id {
        slot.request_id = id;
        slot.results = Some(results);
    } else {
        debug!(
            id,
            applied = slot.request_id,
            "discarding stale search result"
        );
    }
}
