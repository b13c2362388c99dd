//! Thread-safe FIFO event transport.
//!
//! Each room owns exactly one [`EventQueue`]. Any number of producers
//! (transport tasks, the room's own timer) push into it concurrently;
//! a single consumer task pops. This is the only shared, mutex-guarded
//! structure in the system — once an event is handed to the consumer,
//! room state is single-writer and needs no further locking.
//!
//! # Integration
//!
//! The queue sits at the top of a room actor's loop:
//!
//! ```ignore
//! loop {
//!     let event = queue.pop().await;
//!     room.handle(event).await;
//! }
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use parlor_protocol::Event;
use tokio::sync::Notify;

/// An unbounded multi-producer FIFO with a single suspending consumer.
///
/// `push` never blocks and never rejects; `pop` suspends while the queue
/// is empty. Neither operation can fail. FIFO order is preserved: events
/// come out in true arrival order, with no priority lane for
/// self-scheduled traffic.
///
/// Run exactly one logical consumer per queue. Multiple producers are
/// safe; a second consumer would break the single-writer discipline the
/// room relies on.
#[derive(Debug)]
pub struct EventQueue {
    items: Mutex<VecDeque<Event>>,
    ready: Notify,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            ready: Notify::new(),
        }
    }

    /// Appends an event at the tail and wakes the consumer if it is
    /// waiting. Never blocks the producer.
    pub fn push(&self, event: Event) {
        self.items
            .lock()
            .expect("event queue mutex poisoned")
            .push_back(event);
        self.ready.notify_one();
    }

    /// Removes and returns the head event, suspending while the queue is
    /// empty.
    ///
    /// The `Notified` future is created before the empty-check so a push
    /// that lands between the check and the await still wakes us.
    pub async fn pop(&self) -> Event {
        loop {
            let notified = self.ready.notified();
            if let Some(event) = self
                .items
                .lock()
                .expect("event queue mutex poisoned")
                .pop_front()
            {
                return event;
            }
            notified.await;
        }
    }

    /// Number of events currently queued. Diagnostic only — the value is
    /// stale the moment it is returned.
    pub fn len(&self) -> usize {
        self.items.lock().expect("event queue mutex poisoned").len()
    }

    /// Whether the queue is currently empty. Diagnostic only.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
