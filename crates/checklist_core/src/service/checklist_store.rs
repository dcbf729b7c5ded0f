//! Checklist store: the in-memory list and its persistence side effects.
//!
//! # Responsibility
//! - Restore the checklist once at startup (fail-open on any error).
//! - Apply add/toggle/delete synchronously and expose the current snapshot.
//! - Hand every changed snapshot to a background writer for saving.
//!
//! # Invariants
//! - Mutations are visible in `snapshot()` before their save starts.
//! - Saves are attempted in mutation order; a queued snapshot may be
//!   superseded by a newer one before it is written.
//! - Load/save failures are logged and never returned to callers.
//! - No-op requests (blank title, unknown id) never trigger a save.

use crate::model::checklist::Checklist;
use crate::model::item::{generate_item_id, is_blank_title, Item, ItemId};
use crate::repo::checklist_repo::ChecklistRepository;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Result of one mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A new item was appended.
    Added(ItemId),
    /// The item's `done` flag now equals `done`.
    Toggled { id: ItemId, done: bool },
    /// The item was removed.
    Deleted(ItemId),
    /// Request was ignored (blank title).
    Unchanged,
    /// No item has the requested id.
    NotFound,
}

impl MutationOutcome {
    /// Whether the checklist changed (and a save was requested).
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            Self::Added(_) | Self::Toggled { .. } | Self::Deleted(_)
        )
    }
}

/// How the initial checklist was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored checklist with this many items was restored.
    Restored(usize),
    /// Nothing was stored yet.
    Empty,
    /// Reading or decoding failed; started empty.
    Recovered,
}

/// Save attempt counters reported by the background writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Snapshots written successfully.
    pub saved: u64,
    /// Snapshots whose write failed.
    pub failed: u64,
    /// Snapshots skipped because a newer one was already queued.
    pub superseded: u64,
}

enum WriterCommand {
    Save(Checklist),
    Flush(oneshot::Sender<WriterStats>),
}

/// Owned checklist state plus its persistence pipeline.
///
/// Construct once with [`ChecklistStore::load`] and pass it to the
/// presentation layer. Must be created inside a Tokio runtime.
///
/// Saves run on a task owned by that runtime. Call [`ChecklistStore::shutdown`]
/// before the runtime stops: dropping the store only closes the queue, and
/// saves still queued when the runtime shuts down are lost.
pub struct ChecklistStore {
    items: Checklist,
    load_outcome: LoadOutcome,
    writer: mpsc::UnboundedSender<WriterCommand>,
    writer_task: JoinHandle<WriterStats>,
}

impl ChecklistStore {
    /// Restores the checklist from `repo` and starts the background writer.
    ///
    /// Never fails: a missing value starts empty, a read or decode failure is
    /// logged and also starts empty.
    pub async fn load<R>(repo: R) -> Self
    where
        R: ChecklistRepository + 'static,
    {
        let repo: Arc<dyn ChecklistRepository> = Arc::new(repo);
        let started_at = Instant::now();

        let (items, load_outcome) = match repo.load().await {
            Ok(Some(items)) => {
                let count = items.len();
                (items, LoadOutcome::Restored(count))
            }
            Ok(None) => (Checklist::new(), LoadOutcome::Empty),
            Err(err) => {
                error!(
                    "event=checklist_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                (Checklist::new(), LoadOutcome::Recovered)
            }
        };

        if load_outcome != LoadOutcome::Recovered {
            info!(
                "event=checklist_load module=store status=ok duration_ms={} items={}",
                started_at.elapsed().as_millis(),
                items.len()
            );
        }

        let (writer, rx) = mpsc::unbounded_channel();
        let writer_task = tokio::spawn(writer_loop(repo, rx));

        Self {
            items,
            load_outcome,
            writer,
            writer_task,
        }
    }

    /// How the initial state was obtained.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Current items in display order.
    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet done.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Appends a new not-done item.
    ///
    /// Blank titles are ignored and return [`MutationOutcome::Unchanged`].
    pub fn add(&mut self, title: &str, notes: &str) -> MutationOutcome {
        if is_blank_title(title) {
            debug!("event=checklist_add module=store status=ignored reason=blank_title");
            return MutationOutcome::Unchanged;
        }

        let item = match Item::with_id(self.fresh_id(), title, notes) {
            Ok(item) => item,
            Err(err) => {
                warn!("event=checklist_add module=store status=ignored reason={err}");
                return MutationOutcome::Unchanged;
            }
        };
        let id = item.id.clone();
        self.items.push(item);
        debug!(
            "event=checklist_add module=store status=ok id={} items={}",
            id,
            self.items.len()
        );

        self.request_save();
        MutationOutcome::Added(id)
    }

    /// Flips `done` on the item with `id`.
    pub fn toggle_done(&mut self, id: &str) -> MutationOutcome {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=checklist_toggle module=store status=not_found id={id}");
            return MutationOutcome::NotFound;
        };
        let done = item.toggle_done();
        debug!("event=checklist_toggle module=store status=ok id={id} done={done}");

        self.request_save();
        MutationOutcome::Toggled {
            id: id.to_string(),
            done,
        }
    }

    /// Removes the item with `id`.
    pub fn delete(&mut self, id: &str) -> MutationOutcome {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!("event=checklist_delete module=store status=not_found id={id}");
            return MutationOutcome::NotFound;
        };
        let removed = self.items.remove(index);
        debug!(
            "event=checklist_delete module=store status=ok id={} items={}",
            removed.id,
            self.items.len()
        );

        self.request_save();
        MutationOutcome::Deleted(removed.id)
    }

    /// Waits until every save requested so far has been attempted.
    ///
    /// Returns the writer's counters at that point, or `None` when the writer
    /// is no longer running.
    pub async fn flush(&self) -> Option<WriterStats> {
        let (reply, rx) = oneshot::channel();
        self.writer.send(WriterCommand::Flush(reply)).ok()?;
        rx.await.ok()
    }

    /// Drains pending saves and stops the writer.
    ///
    /// The only way to guarantee every requested save was attempted before
    /// the runtime ends.
    pub async fn shutdown(self) -> Option<WriterStats> {
        let Self {
            writer,
            writer_task,
            ..
        } = self;
        drop(writer);
        match writer_task.await {
            Ok(stats) => {
                info!(
                    "event=checklist_shutdown module=store status=ok saved={} failed={} superseded={}",
                    stats.saved, stats.failed, stats.superseded
                );
                Some(stats)
            }
            Err(err) => {
                error!("event=checklist_shutdown module=store status=error error={err}");
                None
            }
        }
    }

    fn fresh_id(&self) -> ItemId {
        // Why: restored lists may carry ids from other schemes, so uniqueness
        // is checked against the live list rather than assumed from UUIDs.
        loop {
            let id = generate_item_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn request_save(&self) {
        if self
            .writer
            .send(WriterCommand::Save(self.items.clone()))
            .is_err()
        {
            error!(
                "event=checklist_save module=store status=error error_code=writer_stopped items={}",
                self.items.len()
            );
        }
    }
}

async fn writer_loop(
    repo: Arc<dyn ChecklistRepository>,
    mut rx: mpsc::UnboundedReceiver<WriterCommand>,
) -> WriterStats {
    let mut stats = WriterStats::default();

    while let Some(command) = rx.recv().await {
        match command {
            WriterCommand::Save(mut items) => {
                // Why: each snapshot is the whole list, so only the newest queued
                // one needs writing. Stop at a flush so its reply still follows
                // the save it waits for.
                let mut flush_after = None;
                while let Ok(next) = rx.try_recv() {
                    match next {
                        WriterCommand::Save(newer) => {
                            stats.superseded += 1;
                            items = newer;
                        }
                        WriterCommand::Flush(reply) => {
                            flush_after = Some(reply);
                            break;
                        }
                    }
                }

                persist(repo.as_ref(), &items, &mut stats).await;

                if let Some(reply) = flush_after {
                    let _ = reply.send(stats);
                }
            }
            WriterCommand::Flush(reply) => {
                let _ = reply.send(stats);
            }
        }
    }

    stats
}

async fn persist(repo: &dyn ChecklistRepository, items: &[Item], stats: &mut WriterStats) {
    let started_at = Instant::now();
    match repo.save(items).await {
        Ok(()) => {
            stats.saved += 1;
            debug!(
                "event=checklist_save module=store status=ok duration_ms={} items={}",
                started_at.elapsed().as_millis(),
                items.len()
            );
        }
        Err(err) => {
            stats.failed += 1;
            error!(
                "event=checklist_save module=store status=error duration_ms={} items={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                items.len(),
                err.code(),
                err
            );
        }
    }
}
