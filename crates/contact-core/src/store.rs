//! Submission storage
//!
//! [`SubmissionStore`] is the seam the HTTP handler writes through. The only
//! implementation is [`InMemorySubmissionStore`]: a process-lifetime map with
//! no durable backing, constructed explicitly and injected into the router.

use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::error::{StoreError, StoreResult};
use crate::submission::{ContactSubmission, NewContactSubmission, SubmissionId};

/// Keyed persistence of accepted submissions
///
/// Methods are async so implementations backed by I/O can slot in; the
/// in-memory store completes without suspending.
#[async_trait::async_trait]
pub trait SubmissionStore: Send + Sync + fmt::Debug {
    /// Assign the next id and the current timestamp, then insert
    ///
    /// Returns the full stored record.
    async fn create(&self, submission: NewContactSubmission) -> StoreResult<ContactSubmission>;

    /// Look up a stored submission
    async fn get(&self, id: SubmissionId) -> StoreResult<Option<ContactSubmission>>;

    /// All stored submissions in id order
    async fn list(&self) -> StoreResult<Vec<ContactSubmission>>;

    /// Number of stored submissions
    async fn count(&self) -> StoreResult<usize> {
        Ok(self.list().await?.len())
    }
}

#[derive(Debug)]
struct StoreState {
    next_id: SubmissionId,
    records: BTreeMap<SubmissionId, ContactSubmission>,
}

/// Volatile, memory-resident submission store
///
/// The id counter and the record map sit behind one mutex, so assigning an id
/// and inserting the record is a single critical section. Ids start at 1 and
/// are never reused within the store's lifetime.
#[derive(Debug)]
pub struct InMemorySubmissionStore {
    state: Mutex<StoreState>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::unavailable("submission store lock poisoned"))
    }
}

impl Default for InMemorySubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn create(&self, submission: NewContactSubmission) -> StoreResult<ContactSubmission> {
        let mut state = self.lock()?;

        let id = state.next_id;
        state.next_id += 1;

        let record = submission.into_stored(id, Utc::now());
        state.records.insert(id, record.clone());

        tracing::debug!(submission_id = id, "Stored contact submission");
        Ok(record)
    }

    async fn get(&self, id: SubmissionId) -> StoreResult<Option<ContactSubmission>> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<ContactSubmission>> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.records.len())
    }
}
