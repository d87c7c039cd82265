//! Call correlation
//!
//! Every outbound call carries an `echo` id. The [`CorrelationTable`] maps
//! that id to a single-assignment slot which the receive loop fills when
//! the matching response arrives.
//!
//! ```text
//! register() ──▶ id ──▶ send {action, params, echo: id}
//!                           │
//! get(id, timeout) ◀── set(id, response) ◀── inbound frame with echo
//! ```
//!
//! A slot is removed by `get` whether it resolves or times out, so late or
//! duplicate responses find nothing and are dropped.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shirasu_domain::error::{Error, Result};
use tokio::sync::oneshot;
use tracing::debug;

struct Slot<T> {
    sender: Option<oneshot::Sender<T>>,
    receiver: Option<oneshot::Receiver<T>>,
}

/// Removes a slot when the waiting `get` finishes or is dropped
struct SlotGuard<'a, T> {
    table: &'a CorrelationTable<T>,
    id: u64,
}

impl<T> Drop for SlotGuard<'_, T> {
    fn drop(&mut self) {
        self.table.slots.remove(&self.id);
    }
}

/// Pending calls keyed by correlation id
pub struct CorrelationTable<T> {
    next_id: AtomicU64,
    slots: DashMap<u64, Slot<T>>,
}

impl<T: Send> CorrelationTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            slots: DashMap::new(),
        }
    }

    /// Allocate an unused id with an empty slot
    pub fn register(&self) -> u64 {
        loop {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            if let Entry::Vacant(entry) = self.slots.entry(id) {
                let (sender, receiver) = oneshot::channel();
                entry.insert(Slot {
                    sender: Some(sender),
                    receiver: Some(receiver),
                });
                return id;
            }
        }
    }

    /// Resolve the slot for `id`
    ///
    /// Returns whether a pending slot took the value. Unknown or already
    /// resolved ids are ignored.
    pub fn set(&self, id: u64, value: T) -> bool {
        let sender = self
            .slots
            .get_mut(&id)
            .and_then(|mut slot| slot.sender.take());

        match sender {
            Some(sender) => sender.send(value).is_ok(),
            None => {
                debug!(echo = id, "Dropping response without pending call");
                false
            }
        }
    }

    /// Wait for the slot of `id` to be resolved
    ///
    /// Fails with `Timeout` when `timeout` elapses first and with
    /// `ConnectionClosed` when the table is cleared while waiting. The slot
    /// is discarded in every case, including when the returned future is
    /// dropped before it completes.
    pub async fn get(&self, id: u64, timeout: Duration) -> Result<T> {
        let receiver = self
            .slots
            .get_mut(&id)
            .and_then(|mut slot| slot.receiver.take())
            .ok_or_else(|| Error::internal(format!("no pending call with echo {id}")))?;

        let _slot = SlotGuard { table: self, id };
        match tokio::time::timeout(timeout, receiver).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(Error::ConnectionClosed),
            Err(_) => Err(Error::timeout(format!("call with echo {id}"), timeout)),
        }
    }

    /// Remove the slot of a call that was never sent
    pub fn discard(&self, id: u64) -> bool {
        self.slots.remove(&id).is_some()
    }

    /// Whether `id` has a pending slot
    pub fn contains(&self, id: u64) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of pending slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no call is pending
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every pending slot, failing their waiters
    ///
    /// Returns how many slots were dropped.
    pub fn clear(&self) -> usize {
        let count = self.slots.len();
        self.slots.clear();
        count
    }
}

impl<T: Send> Default for CorrelationTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CorrelationTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorrelationTable")
            .field("next_id", &self.next_id)
            .field("pending", &self.slots.len())
            .finish()
    }
}
