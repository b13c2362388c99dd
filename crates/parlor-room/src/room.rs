//! The room state machine and its actor task.
//!
//! A [`Room`] mutates only inside [`Room::handle`], and `handle` is only
//! ever called by the room's own actor task, one event at a time, in the
//! order events arrived on the queue. That single-consumer discipline is
//! what lets the state live without locks: producers (transport tasks,
//! the room's timer) touch nothing but the queue.
//!
//! The room never polls a clock. Round end and next-round start are
//! self-scheduled through the [`TimerSlot`], arrive as ordinary events,
//! and take the same dispatch path as client traffic — so internally and
//! externally originated transitions interleave in true arrival order.

use std::sync::Arc;
use std::time::Duration;

use parlor_protocol::{ClientId, Event, Item, RoomId};
use parlor_queue::EventQueue;
use parlor_timer::TimerSlot;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::{ItemGenerator, PlayerInfo, RoomConfig, RoomError, RoomPhase};

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One independent instance of the game's round lifecycle and membership.
pub struct Room {
    id: RoomId,
    name: String,
    config: RoomConfig,
    phase: RoomPhase,
    round_id: u32,
    created_at: Instant,
    round_start: Option<Instant>,
    next_round_start: Option<Instant>,
    pool: Vec<Item>,
    retired: Vec<Item>,
    players: Vec<PlayerInfo>,
    generator: Box<dyn ItemGenerator>,
    timer: TimerSlot,
}

impl Room {
    /// Creates a room in the `Idle` phase: empty pool, no players, no
    /// round ever started.
    ///
    /// `events` must be the same queue the room's consumer pops from —
    /// the timer delivers self-scheduled events into it.
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        config: RoomConfig,
        events: Arc<EventQueue>,
        generator: Box<dyn ItemGenerator>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            config: config.validated(),
            phase: RoomPhase::Idle,
            round_id: 0,
            created_at: Instant::now(),
            round_start: None,
            next_round_start: None,
            pool: Vec::new(),
            retired: Vec::new(),
            players: Vec::new(),
            generator,
            timer: TimerSlot::new(events),
        }
    }

    /// The room's unique id.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The room's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current round-cycle phase.
    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    /// Number of the current round (0 while `Idle`).
    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    /// Current membership, active and inactive.
    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    /// The open item pool.
    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    /// Items solved this round, in the order they were solved.
    pub fn retired(&self) -> &[Item] {
        &self.retired
    }

    /// Processes one event. The single mutation path for all room state.
    pub async fn handle(&mut self, event: Event) {
        match event {
            Event::StartNewRound { room_id } => {
                if room_id != self.id {
                    return;
                }
                self.start_round().await;
            }
            Event::EndRound { room_id } => {
                if room_id != self.id {
                    return;
                }
                if self.phase != RoomPhase::RoundActive {
                    // A stray end-round must not push the cycle along (or
                    // double-arm the timer).
                    tracing::debug!(
                        room_id = %self.id,
                        phase = %self.phase,
                        "end-round outside an active round, ignoring"
                    );
                    return;
                }
                self.end_round().await;
            }
            Event::PlayerJoinRoom { room_id, client_id } => {
                self.player_joined(room_id, client_id);
            }
            Event::PlayerInput {
                room_id,
                client_id,
                text,
            } => {
                if room_id != self.id {
                    return;
                }
                self.player_input(client_id, &text);
            }
            Event::ClientChangeName { .. } | Event::ClientChangeColor { .. } => {
                // Client registry traffic; nothing for a room to do.
                tracing::trace!(room_id = %self.id, "client registry event, ignoring");
            }
        }
    }

    /// A serializable view of the room for observability and tests.
    pub fn snapshot(&self) -> RoomSnapshot {
        let now = Instant::now();
        RoomSnapshot {
            room_id: self.id,
            name: self.name.clone(),
            phase: self.phase,
            round_id: self.round_id,
            round_remaining: match self.phase {
                RoomPhase::RoundActive => self
                    .round_start
                    .map(|start| (start + self.config.round_length).duration_since(now)),
                _ => None,
            },
            next_round_in: match self.phase {
                RoomPhase::Cooldown => self.next_round_start.map(|at| at.duration_since(now)),
                _ => None,
            },
            players: self.players.clone(),
            pool: self.pool.clone(),
            retired: self.retired.clone(),
        }
    }

    async fn start_round(&mut self) {
        self.round_id += 1;
        tracing::info!(room_id = %self.id, round = self.round_id, "starting new round");

        self.pool.clear();
        self.retired.clear();
        while self.pool.len() < self.config.pool_size {
            let item = self.next_item();
            self.pool.push(item);
        }

        self.players.retain(|player| {
            if !player.active {
                tracing::info!(
                    room_id = %self.id,
                    client_id = %player.client_id,
                    "dropping inactive player"
                );
            }
            player.active
        });
        for player in &mut self.players {
            player.score = 0.0;
        }

        self.phase = RoomPhase::RoundActive;
        self.round_start = Some(Instant::now());
        self.next_round_start = None;

        let room_id = self.id;
        self.timer
            .schedule(self.config.round_length, move || Event::EndRound { room_id })
            .await;
    }

    async fn end_round(&mut self) {
        tracing::info!(room_id = %self.id, round = self.round_id, "ending round");

        self.phase = RoomPhase::Cooldown;
        self.next_round_start = Some(Instant::now() + self.config.time_between_rounds);

        let room_id = self.id;
        self.timer
            .schedule(self.config.time_between_rounds, move || Event::StartNewRound {
                room_id,
            })
            .await;
    }

    fn player_joined(&mut self, room_id: RoomId, client_id: ClientId) {
        if room_id == self.id {
            if let Some(player) = self
                .players
                .iter_mut()
                .find(|player| player.client_id == client_id)
            {
                // Re-join is idempotent: one entry per client, made active.
                player.active = true;
                return;
            }
            self.players.push(PlayerInfo::new(client_id));
            tracing::info!(
                room_id = %self.id,
                %client_id,
                players = self.players.len(),
                "player joined"
            );
        } else {
            // The client joined a different room; they are no longer
            // playing here. Never creates an entry.
            for player in self
                .players
                .iter_mut()
                .filter(|player| player.client_id == client_id && player.active)
            {
                player.active = false;
                tracing::info!(room_id = %self.id, %client_id, "player left for another room");
            }
        }
    }

    fn player_input(&mut self, client_id: ClientId, text: &str) {
        if self.phase != RoomPhase::RoundActive {
            tracing::debug!(room_id = %self.id, %client_id, "input outside a round, ignoring");
            return;
        }
        let Some(round_start) = self.round_start else {
            return;
        };
        // Only the deadline is enforced; there is no lower-bound check
        // against the recorded round start.
        if Instant::now() > round_start + self.config.round_length {
            tracing::debug!(room_id = %self.id, %client_id, "input after round deadline, ignoring");
            return;
        }

        let Some(player_idx) = self
            .players
            .iter()
            .position(|player| player.client_id == client_id)
        else {
            tracing::debug!(room_id = %self.id, %client_id, "input from unknown client, ignoring");
            return;
        };

        tracing::debug!(room_id = %self.id, %client_id, text, "guess received");

        // First matching item only, scanned in pool order, even when
        // several items share an answer.
        match self.pool.iter().position(|item| item.answer == text) {
            Some(slot) => {
                let replacement = self.next_item();
                let mut solved = std::mem::replace(&mut self.pool[slot], replacement);
                solved.solved_by = Some(client_id);
                solved.solved_at = Some(self.created_at.elapsed());

                let player = &mut self.players[player_idx];
                player.award(solved.answer.len());
                tracing::debug!(
                    room_id = %self.id,
                    %client_id,
                    answer = %solved.answer,
                    score = player.score,
                    "correct guess"
                );
                self.retired.push(solved);
            }
            None => {
                let player = &mut self.players[player_idx];
                player.penalize();
                tracing::debug!(
                    room_id = %self.id,
                    %client_id,
                    score = player.score,
                    "wrong guess"
                );
            }
        }
    }

    fn next_item(&mut self) -> Item {
        let item = self.generator.generate();
        // An unguessable item is a generator contract violation, not a
        // runtime condition to recover from.
        assert!(!item.answer.is_empty(), "item generator returned an empty answer");
        item
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time view of a room, returned by the actor on request.
///
/// Observability surface only — gameplay never reads it back.
#[derive(Debug, Clone, Serialize)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub name: String,
    pub phase: RoomPhase,
    pub round_id: u32,
    /// Time left in the current round (`RoundActive` only).
    pub round_remaining: Option<Duration>,
    /// Time until the next round starts (`Cooldown` only).
    pub next_round_in: Option<Duration>,
    pub players: Vec<PlayerInfo>,
    pub pool: Vec<Item>,
    pub retired: Vec<Item>,
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// Lifecycle/observability commands, kept off the gameplay stream.
enum RoomControl {
    Snapshot { reply: oneshot::Sender<RoomSnapshot> },
    Shutdown,
}

/// Control channel size. Tiny on purpose — only snapshots and shutdown
/// ride it.
const CONTROL_CHANNEL_SIZE: usize = 16;

/// Handle to a running room actor. Cheap to clone.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomId,
    events: Arc<EventQueue>,
    control: mpsc::Sender<RoomControl>,
}

impl RoomHandle {
    /// The room's unique id.
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Delivers an event to the room. The only gameplay mutation entry
    /// point; never blocks, never fails.
    pub fn submit(&self, event: Event) {
        self.events.push(event);
    }

    /// Requests a point-in-time snapshot from the actor.
    pub async fn snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.control
            .send(RoomControl::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id))
    }

    /// Tells the room actor to stop. Events already queued but not yet
    /// popped are discarded with the actor.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.control
            .send(RoomControl::Shutdown)
            .await
            .map_err(|_| RoomError::Unavailable(self.room_id))
    }
}

/// Spawns a room actor task and returns a handle to it.
///
/// The actor owns the room, its queue, and its timer; it is the single
/// consumer the ordering guarantees depend on.
pub fn spawn_room(
    room_id: RoomId,
    name: impl Into<String>,
    config: RoomConfig,
    generator: Box<dyn ItemGenerator>,
) -> RoomHandle {
    let events = Arc::new(EventQueue::new());
    let (control_tx, control_rx) = mpsc::channel(CONTROL_CHANNEL_SIZE);

    let room = Room::new(room_id, name, config, Arc::clone(&events), generator);
    tokio::spawn(run(room, Arc::clone(&events), control_rx));

    RoomHandle {
        room_id,
        events,
        control: control_tx,
    }
}

/// The actor loop: pop gameplay events, answer control requests, until
/// shutdown.
async fn run(mut room: Room, events: Arc<EventQueue>, mut control: mpsc::Receiver<RoomControl>) {
    tracing::info!(room_id = %room.id(), name = room.name(), "room started");

    loop {
        tokio::select! {
            event = events.pop() => {
                room.handle(event).await;
            }
            cmd = control.recv() => match cmd {
                Some(RoomControl::Snapshot { reply }) => {
                    let _ = reply.send(room.snapshot());
                }
                Some(RoomControl::Shutdown) | None => break,
            }
        }
    }

    tracing::info!(room_id = %room.id(), "room stopped");
}
