//! WebSocket integration tests for the table session client.
//!
//! Spin up an in-process authority that accepts table connections, record
//! what it sees, and drive the client against it.

use futures::SinkExt;
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tableside::*;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

#[derive(Debug)]
enum Seen {
    Connected,
    Frame(serde_json::Value),
    Closed,
}

/// One full snapshot as the authority would broadcast it.
fn state_json(pot: f64, current_player: Option<u64>) -> serde_json::Value {
    json!({
        "table_id": 5,
        "street": "preflop",
        "community_cards": [],
        "pot": pot,
        "pots": [],
        "current_bet": 20.0,
        "current_player": current_player,
        "players": [
            {"user_id": 7, "seat": 0, "stack": 500.0, "status": "active", "current_bet": 0.0, "cards": []},
        ],
        "hand_in_progress": true,
    })
}

/// Accepts connections forever; every connection replies to `get_state` with
/// a snapshot and reports lifecycle events back to the test.
async fn spawn_authority() -> (Endpoint, mpsc::UnboundedReceiver<Seen>, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (events, seen) = mpsc::unbounded_channel();
    let live = Arc::new(AtomicUsize::new(0));
    let counter = live.clone();
    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(_) => break,
            };
            let events = events.clone();
            let counter = counter.clone();
            tokio::spawn(async move {
                let mut socket = match accept_async(stream).await {
                    Ok(socket) => socket,
                    Err(_) => return,
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = events.send(Seen::Connected);
                while let Some(Ok(frame)) = socket.next().await {
                    match frame {
                        Message::Text(text) => {
                            let value: serde_json::Value =
                                serde_json::from_str(&text).unwrap_or_default();
                            if value["type"] == "get_state" {
                                let reply = state_json(120.0, Some(7)).to_string();
                                let _ = socket.send(Message::Text(reply)).await;
                            }
                            let _ = events.send(Seen::Frame(value));
                        }
                        Message::Close(_) => break,
                        _ => continue,
                    }
                }
                counter.fetch_sub(1, Ordering::SeqCst);
                let _ = events.send(Seen::Closed);
            });
        }
    });
    (
        Endpoint::insecure(addr.to_string()),
        seen,
        live,
    )
}

async fn next_event(seen: &mut mpsc::UnboundedReceiver<Seen>) -> Seen {
    tokio::time::timeout(Duration::from_secs(5), seen.recv())
        .await
        .expect("authority event within deadline")
        .expect("authority still running")
}

/// Waits for the first snapshot to land. Polled rather than awaited through
/// the change signal, since the reply may already be ingested by the time a
/// test starts looking.
async fn wait_for_snapshot(reader: &StoreReader) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while reader.get().is_none() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("snapshot within deadline");
}

#[tokio::test]
async fn open_requests_state_and_ingests_reply() {
    let (endpoint, mut seen, _) = spawn_authority().await;
    let mut session = TableSession::new(endpoint);
    let reader = session.reader();
    assert!(reader.get().is_none());
    session.open(5, 7).await.unwrap();
    assert!(session.is_open());
    assert_eq!(session.key(), Some((5, 7)));
    assert!(matches!(next_event(&mut seen).await, Seen::Connected));
    match next_event(&mut seen).await {
        Seen::Frame(value) => assert_eq!(value, json!({"type": "get_state"})),
        other => panic!("expected get_state, saw {:?}", other),
    }
    wait_for_snapshot(&reader).await;
    let snapshot = reader.get().expect("snapshot stored");
    assert_eq!(snapshot.table_id, 5);
    assert_eq!(snapshot.pot, 120.0);
    assert!(snapshot.is_turn(7));
}

#[tokio::test]
async fn reopen_closes_the_previous_connection() {
    let (endpoint, mut seen, live) = spawn_authority().await;
    let mut session = TableSession::new(endpoint);
    session.open(5, 7).await.unwrap();
    assert!(matches!(next_event(&mut seen).await, Seen::Connected));
    session.open(5, 7).await.unwrap();
    // the first connection winds down, the second comes up
    let mut connected = 1;
    let mut closed = 0;
    while closed < 1 || connected < 2 {
        match next_event(&mut seen).await {
            Seen::Connected => connected += 1,
            Seen::Closed => closed += 1,
            Seen::Frame(_) => continue,
        }
    }
    assert_eq!(live.load(Ordering::SeqCst), 1);
    assert_eq!(session.key(), Some((5, 7)));
}

#[tokio::test]
async fn actions_reach_the_authority() {
    let (endpoint, mut seen, _) = spawn_authority().await;
    let mut session = TableSession::new(endpoint);
    session.open(5, 7).await.unwrap();
    session.send(ClientMessage::action(Action::Raise(60.0)));
    loop {
        match next_event(&mut seen).await {
            Seen::Frame(value) if value["type"] == "action" => {
                assert_eq!(value["action"], "raise");
                assert_eq!(value["amount"], 60.0);
                break;
            }
            _ => continue,
        }
    }
}

#[tokio::test]
async fn close_releases_connection_and_store() {
    let (endpoint, mut seen, live) = spawn_authority().await;
    let mut session = TableSession::new(endpoint);
    let reader = session.reader();
    session.open(5, 7).await.unwrap();
    wait_for_snapshot(&reader).await;
    session.close();
    assert_eq!(session.phase(), Phase::Closed);
    assert!(reader.get().is_none());
    // dropped without error, no reconnection attempt
    session.send(ClientMessage::GetState);
    loop {
        match next_event(&mut seen).await {
            Seen::Closed => break,
            _ => continue,
        }
    }
    assert_eq!(live.load(Ordering::SeqCst), 0);
}
