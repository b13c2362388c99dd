//! A self-playing room: two bots guess scrambled words for a round, then
//! the scoreboard is printed once the cooldown begins.
//!
//! Run with `RUST_LOG=debug` to watch every transition trace.

use std::time::Duration;

use parlor::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), RoomError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut router = RoomRouter::new();
    let room_id = router.create_room(
        "word scramble",
        RoomConfig {
            pool_size: 4,
            round_length: Duration::from_secs(3),
            time_between_rounds: Duration::from_secs(1),
        },
        Box::new(ScrambleGenerator::with_default_bank()),
    );

    tracing::info!(%room_id, "demo room ready");
    router.submit(Event::StartNewRound { room_id })?;
    for client in 1..=2u64 {
        router.submit(Event::PlayerJoinRoom {
            room_id,
            client_id: ClientId(client),
        })?;
    }

    // Bot 1 peeks at the pool and answers correctly; bot 2 guesses
    // blindly and usually pays for it.
    for turn in 0..6u64 {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let snapshot = router.snapshot(room_id).await?;
        if snapshot.phase != RoomPhase::RoundActive || snapshot.pool.is_empty() {
            continue;
        }
        let (client, text) = if turn % 2 == 0 {
            (ClientId(1), snapshot.pool[0].answer.clone())
        } else {
            (ClientId(2), "wild guess".to_string())
        };
        router.submit(Event::PlayerInput {
            room_id,
            client_id: client,
            text,
        })?;
    }

    // Let the round close on its own timer.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let snapshot = router.snapshot(room_id).await?;
    println!(
        "room '{}' after round {} ({}):",
        snapshot.name, snapshot.round_id, snapshot.phase
    );
    for player in &snapshot.players {
        println!("  {}  {:>5.1} pts", player.client_id, player.score);
    }
    println!("  words solved: {}", snapshot.retired.len());

    router.destroy_room(room_id).await?;
    Ok(())
}
