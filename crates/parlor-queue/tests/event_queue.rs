//! Integration tests for the event queue.

use std::sync::Arc;
use std::time::Duration;

use parlor_protocol::{ClientId, Event, RoomId};
use parlor_queue::EventQueue;

fn input(client: u64, text: &str) -> Event {
    Event::PlayerInput {
        room_id: RoomId(1),
        client_id: ClientId(client),
        text: text.into(),
    }
}

#[tokio::test]
async fn test_pop_returns_events_in_fifo_order() {
    let queue = EventQueue::new();

    queue.push(input(1, "first"));
    queue.push(input(2, "second"));
    queue.push(input(3, "third"));

    assert_eq!(queue.pop().await, input(1, "first"));
    assert_eq!(queue.pop().await, input(2, "second"));
    assert_eq!(queue.pop().await, input(3, "third"));
    assert!(queue.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_pop_suspends_while_empty() {
    let queue = EventQueue::new();

    let result = tokio::time::timeout(Duration::from_secs(5), queue.pop()).await;
    assert!(result.is_err(), "pop on an empty queue should suspend");
}

#[tokio::test]
async fn test_push_wakes_a_waiting_consumer() {
    let queue = Arc::new(EventQueue::new());

    let consumer = {
        let queue = Arc::clone(&queue);
        tokio::spawn(async move { queue.pop().await })
    };

    // Give the consumer a chance to park on the empty queue first.
    tokio::task::yield_now().await;
    queue.push(input(7, "wake"));

    let event = consumer.await.unwrap();
    assert_eq!(event, input(7, "wake"));
}

#[tokio::test]
async fn test_concurrent_producers_lose_nothing() {
    let queue = Arc::new(EventQueue::new());

    let mut producers = Vec::new();
    for p in 0..4u64 {
        let queue = Arc::clone(&queue);
        producers.push(tokio::spawn(async move {
            for i in 0..25u64 {
                queue.push(input(p, &format!("msg-{i}")));
            }
        }));
    }
    for producer in producers {
        producer.await.unwrap();
    }

    for _ in 0..100 {
        queue.pop().await;
    }
    assert!(queue.is_empty());
}

#[tokio::test]
async fn test_push_between_check_and_wait_is_not_lost() {
    // Hammer the park/wake race: a push racing the consumer's empty-check
    // must still be delivered.
    for _ in 0..50 {
        let queue = Arc::new(EventQueue::new());
        let consumer = {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move { queue.pop().await })
        };
        queue.push(input(1, "race"));
        let event = tokio::time::timeout(Duration::from_secs(1), consumer)
            .await
            .expect("consumer should wake")
            .unwrap();
        assert_eq!(event, input(1, "race"));
    }
}
