//! Single-slot serialized one-shot timer.
//!
//! A [`TimerSlot`] is the only way a room advances without external
//! input: the room asks the slot to push a future event (round end, next
//! round start) onto its own queue after a delay. The produced event then
//! travels the normal dispatch path, so self-generated and external
//! transitions are handled identically and in true arrival order.
//!
//! The slot holds at most ONE in-flight task. Scheduling while a previous
//! task has not finished awaits that task first — a deliberate
//! serialization discipline, not a queue of pending timers. It guarantees
//! strict ordering between consecutively scheduled tasks and bounds the
//! number of live timers per room at one, at the cost of briefly stalling
//! the caller if the previous timer is still sleeping.
//!
//! There is no cancellation: once scheduled, a task will fire. The only
//! control available is letting it complete before scheduling the next.

use std::sync::Arc;
use std::time::Duration;

use parlor_protocol::Event;
use parlor_queue::EventQueue;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{trace, warn};

/// A one-shot delayed event producer bound to a target queue.
///
/// One `TimerSlot` per room. Not `Clone` — the single-slot guarantee
/// depends on exclusive ownership.
pub struct TimerSlot {
    queue: Arc<EventQueue>,
    inflight: Option<JoinHandle<()>>,
}

impl TimerSlot {
    /// Creates an empty slot delivering into `queue`.
    pub fn new(queue: Arc<EventQueue>) -> Self {
        Self {
            queue,
            inflight: None,
        }
    }

    /// Arranges for `produce()` to run after `delay` and its event to be
    /// pushed onto the target queue.
    ///
    /// If a previously scheduled task has not completed yet, this awaits
    /// it before starting the new one; from that point the new task runs
    /// asynchronously and the call returns. The produced event is
    /// delivered only through the queue — never by direct mutation of
    /// room state.
    pub async fn schedule<F>(&mut self, delay: Duration, produce: F)
    where
        F: FnOnce() -> Event + Send + 'static,
    {
        if let Some(prev) = self.inflight.take() {
            // Serialization point: wait for the previous task to finish
            // sleeping and pushing before arming the slot again.
            if let Err(err) = prev.await {
                warn!(%err, "previous timer task failed, slot recovered");
            }
        }

        let queue = Arc::clone(&self.queue);
        self.inflight = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let event = produce();
            trace!(?event, "timer fired");
            queue.push(event);
        }));
    }

    /// Whether a scheduled task is still in flight.
    pub fn is_armed(&self) -> bool {
        self.inflight.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl std::fmt::Debug for TimerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSlot")
            .field("armed", &self.is_armed())
            .finish()
    }
}
