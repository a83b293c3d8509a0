//! Offline-first synchronization engine
//!
//! The [`Synchronizer`] orchestrates expense operations across the remote
//! store and the local cache through the core ports.
//!
//! ## Read Flow
//!
//! 1. **Offline**: serve the cached collection, never touch the remote store
//! 2. **Online**: push pending records first, then pull the full remote
//!    list and overwrite the cache with it
//! 3. **Pull failed**: fall back to the cached collection
//!
//! ## Write Flow
//!
//! Writes are optimistic and dual-path: the remote store is tried first,
//! and on failure the operation lands in the cache so no user input is ever
//! lost. Offline creates are stamped with a numeric placeholder id; the
//! push phase later re-inserts them remotely and drops exactly the records
//! whose insert succeeded.
//!
//! At most one push runs at a time per synchronizer; a push requested while
//! another is in flight is skipped and reported as such.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ledgerline_core::domain::{DomainError, Expense, ExpenseDraft, ExpenseId, Receipt};
use ledgerline_core::ports::{
    IConnectivityMonitor, IExpenseCache, IRemoteStore, NewExpense, RemoteHealth,
};

// ============================================================================
// Outcome types
// ============================================================================

/// Summary of one push phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushReport {
    /// Number of pending records found
    pub attempted: usize,
    /// Number of records inserted remotely and removed from the cache
    pub pushed: usize,
    /// Number of records whose insert failed (they stay cached)
    pub failed: usize,
    /// True when another push was already in flight and this one did nothing
    pub skipped: bool,
}

impl PushReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// Which path a create or update took
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// The remote store accepted the write; the value is the stored row
    Remote(Expense),
    /// The remote store was unreachable; the value is the cached record
    LocalFallback(Expense),
}

impl WriteOutcome {
    /// The expense as visible to the user after the write
    pub fn expense(&self) -> &Expense {
        match self {
            WriteOutcome::Remote(e) | WriteOutcome::LocalFallback(e) => e,
        }
    }
}

/// Result of a delete operation
///
/// The local removal always happens, so there is no failure case; the flag
/// only records whether the remote side confirmed as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The remote store confirmed the delete
    pub remote_deleted: bool,
}

// ============================================================================
// Synchronizer
// ============================================================================

/// Offline-first expense synchronizer
///
/// ## Dependencies
///
/// - `remote`: the remote expense table and receipt storage
/// - `cache`: the local collection that keeps the app usable offline
/// - `connectivity`: reachability status used to pick the read path
pub struct Synchronizer {
    remote: Arc<dyn IRemoteStore>,
    cache: Arc<dyn IExpenseCache>,
    connectivity: Arc<dyn IConnectivityMonitor>,
    /// Single-slot guard: at most one push phase in flight
    push_guard: Mutex<()>,
}

impl Synchronizer {
    /// Creates a new synchronizer over the given adapters
    pub fn new(
        remote: Arc<dyn IRemoteStore>,
        cache: Arc<dyn IExpenseCache>,
        connectivity: Arc<dyn IConnectivityMonitor>,
    ) -> Self {
        Self {
            remote,
            cache,
            connectivity,
            push_guard: Mutex::new(()),
        }
    }

    // ========================================================================
    // Read path
    // ========================================================================

    /// Loads the expense collection.
    ///
    /// Online, this pushes pending records first and then pulls the full
    /// remote list, overwriting the cache so it reflects the authoritative
    /// state. Offline or when the pull fails, the cached collection is
    /// served instead.
    #[tracing::instrument(skip(self))]
    pub async fn load_expenses(&self) -> Vec<Expense> {
        if !self.connectivity.current_status().await {
            debug!("Offline, serving cached expenses");
            return self.cache.load_all().await;
        }

        // 1. Opportunistic push of anything created/edited offline
        self.push_pending().await;

        // 2. Pull the authoritative list and refresh the cache
        match self.remote.list().await {
            Some(expenses) => {
                self.cache.save_all(&expenses).await;
                debug!(count = expenses.len(), "Refreshed cache from remote");
                expenses
            }
            None => {
                warn!("Remote pull failed, serving cached expenses");
                self.cache.load_all().await
            }
        }
    }

    /// Loads a single expense, remote first with cache fallback.
    pub async fn get(&self, id: &ExpenseId) -> Option<Expense> {
        if self.connectivity.current_status().await {
            if let Some(expense) = self.remote.get_by_id(id).await {
                return Some(expense);
            }
        }
        self.cache
            .load_all()
            .await
            .into_iter()
            .find(|e| &e.id == id)
    }

    // ========================================================================
    // Push phase
    // ========================================================================

    /// Pushes pending records to the remote store.
    ///
    /// Each record is inserted independently; partial success is expected
    /// under flaky connectivity. Only the ids whose insert succeeded are
    /// removed from the cache, so a failed record is retried on the next
    /// push. If another push is already running, this call skips.
    #[tracing::instrument(skip(self))]
    pub async fn push_pending(&self) -> PushReport {
        let Ok(_guard) = self.push_guard.try_lock() else {
            debug!("Push already in flight, skipping");
            return PushReport::skipped();
        };

        let pending = self.cache.pending_only().await;
        if pending.is_empty() {
            return PushReport::default();
        }

        let mut report = PushReport {
            attempted: pending.len(),
            ..PushReport::default()
        };
        let mut synced_ids = Vec::new();

        for expense in &pending {
            let payload = NewExpense::from(expense);
            match self.remote.insert(&payload).await {
                Some(stored) => {
                    debug!(local_id = %expense.id, remote_id = %stored.id, "Pushed pending expense");
                    synced_ids.push(expense.id.clone());
                    report.pushed += 1;
                }
                None => {
                    warn!(local_id = %expense.id, "Pending expense push failed, keeping cached");
                    report.failed += 1;
                }
            }
        }

        self.cache.remove_by_ids(&synced_ids).await;

        info!(
            attempted = report.attempted,
            pushed = report.pushed,
            failed = report.failed,
            "Push phase completed"
        );
        report
    }

    // ========================================================================
    // Write path
    // ========================================================================

    /// Creates an expense, remote first with a cached fallback.
    ///
    /// An attached photo is uploaded to receipt storage before the insert;
    /// if the upload fails the image is inlined as a base64 data URL so the
    /// record stays complete until it can be pushed properly.
    ///
    /// # Errors
    /// Returns a [`DomainError`] when the draft fails validation. Neither
    /// store is touched in that case.
    #[tracing::instrument(skip(self, draft, photo), fields(title = %draft.title))]
    pub async fn create(
        &self,
        mut draft: ExpenseDraft,
        photo: Option<&[u8]>,
    ) -> Result<WriteOutcome, DomainError> {
        draft.validate()?;

        let now = Utc::now();
        if !self.connectivity.current_status().await {
            // No upload attempt offline; the image rides along inline so
            // the cached record stays complete.
            if let Some(bytes) = photo {
                draft.receipt_url = Some(Self::inline_receipt(bytes));
            }
            return Ok(self.create_locally(draft, now).await);
        }

        if let Some(bytes) = photo {
            let file_name = format!("receipt_{}.jpg", now.timestamp_millis());
            draft.receipt_url = Some(match self.remote.upload_receipt(bytes, &file_name).await {
                Some(url) => Receipt::Url(url),
                None => {
                    warn!(file_name, "Receipt upload failed, inlining image");
                    Self::inline_receipt(bytes)
                }
            });
        }

        let payload = NewExpense {
            title: draft.title.clone(),
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            receipt_url: draft.receipt_url.clone(),
        };

        match self.remote.insert(&payload).await {
            Some(stored) => {
                info!(id = %stored.id, "Expense created remotely");
                // Refresh the cache so it reflects the authoritative list,
                // falling back to a plain append when the pull fails too.
                match self.remote.list().await {
                    Some(expenses) => self.cache.save_all(&expenses).await,
                    None => {
                        let mut expenses = self.cache.load_all().await;
                        expenses.insert(0, stored.clone());
                        self.cache.save_all(&expenses).await;
                    }
                }
                Ok(WriteOutcome::Remote(stored))
            }
            None => Ok(self.create_locally(draft, now).await),
        }
    }

    /// Local half of the create path: mint a placeholder id, stamp
    /// timestamps and append to the cache.
    async fn create_locally(
        &self,
        draft: ExpenseDraft,
        now: chrono::DateTime<Utc>,
    ) -> WriteOutcome {
        let mut expenses = self.cache.load_all().await;
        let id = Self::mint_placeholder_id(&expenses, now.timestamp_millis());
        let expense = draft.into_local_expense(id, now);
        info!(id = %expense.id, "Remote unreachable, expense cached as pending");
        expenses.push(expense.clone());
        self.cache.save_all(&expenses).await;
        WriteOutcome::LocalFallback(expense)
    }

    /// Updates an expense, remote first with an in-place cached fallback.
    ///
    /// On the fallback path the cached record is overwritten where it
    /// stands (no duplicate is appended) and its `updated_at` is stamped
    /// locally.
    ///
    /// # Errors
    /// Returns a [`DomainError`] when the updated fields fail validation.
    #[tracing::instrument(skip(self, expense), fields(id = %expense.id))]
    pub async fn update(&self, expense: Expense) -> Result<WriteOutcome, DomainError> {
        let draft = ExpenseDraft {
            title: expense.title.clone(),
            amount: expense.amount,
            category: expense.category,
            date: expense.date,
            receipt_url: expense.receipt_url.clone(),
        };
        draft.validate()?;

        if !self.connectivity.current_status().await {
            return Ok(self.update_locally(expense).await);
        }

        match self.remote.update(&expense).await {
            Some(stored) => {
                info!(id = %stored.id, "Expense updated remotely");
                if let Some(expenses) = self.remote.list().await {
                    self.cache.save_all(&expenses).await;
                }
                Ok(WriteOutcome::Remote(stored))
            }
            None => Ok(self.update_locally(expense).await),
        }
    }

    /// Local half of the update path: overwrite the cached record in place
    /// with a fresh `updated_at`, never appending a duplicate.
    async fn update_locally(&self, expense: Expense) -> WriteOutcome {
        let mut updated = expense;
        updated.updated_at = Some(Utc::now());
        info!(id = %updated.id, "Remote unreachable, expense updated in cache");

        let mut expenses = self.cache.load_all().await;
        match expenses.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => expenses.push(updated.clone()),
        }
        self.cache.save_all(&expenses).await;
        WriteOutcome::LocalFallback(updated)
    }

    /// Deletes an expense everywhere it may live.
    ///
    /// The remote delete is best-effort; the local removal is unconditional
    /// so the record disappears from the user's view either way. Deleting
    /// an id that no longer exists is a no-op.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &ExpenseId) -> DeleteOutcome {
        let remote_deleted = if self.connectivity.current_status().await {
            self.remote.delete_by_id(id).await
        } else {
            false
        };
        if !remote_deleted {
            warn!(id = %id, "Remote delete skipped or failed, removing locally only");
        }
        self.cache.remove_by_ids(std::slice::from_ref(id)).await;
        DeleteOutcome { remote_deleted }
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Current reachability as seen by the connectivity monitor
    pub async fn is_online(&self) -> bool {
        self.connectivity.current_status().await
    }

    /// Probes the remote backend
    pub async fn remote_health(&self) -> RemoteHealth {
        self.remote.check_health().await
    }

    /// Number of records still awaiting a push
    pub async fn pending_count(&self) -> usize {
        self.cache.pending_only().await.len()
    }

    // ========================================================================
    // Reconnect listener
    // ========================================================================

    /// Spawns a task that pushes pending records whenever connectivity
    /// returns, then refreshes the cache from the remote list.
    ///
    /// The task ends when the connectivity monitor is dropped.
    pub fn spawn_reconnect_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let sync = Arc::clone(self);
        let mut rx = sync.connectivity.subscribe();
        tokio::spawn(async move {
            let mut last_online = *rx.borrow();
            while rx.changed().await.is_ok() {
                let online = *rx.borrow_and_update();
                if online && !last_online {
                    info!("Connectivity restored, running push phase");
                    sync.push_pending().await;
                    if let Some(expenses) = sync.remote.list().await {
                        sync.cache.save_all(&expenses).await;
                    }
                }
                last_online = online;
            }
        })
    }

    /// Encodes a receipt image as a self-contained data URL.
    fn inline_receipt(bytes: &[u8]) -> Receipt {
        Receipt::Inline(format!("data:image/jpeg;base64,{}", BASE64.encode(bytes)))
    }

    /// Picks a placeholder id that does not collide with anything cached.
    ///
    /// Two offline creates in the same millisecond would otherwise mint the
    /// same id; bumping keeps the id numeric so it still classifies as
    /// pending.
    fn mint_placeholder_id(existing: &[Expense], millis: i64) -> ExpenseId {
        let mut candidate = millis;
        while existing.iter().any(|e| e.id.as_str() == candidate.to_string()) {
            candidate += 1;
        }
        ExpenseId::local_from_millis(candidate)
    }
}
