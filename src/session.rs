use super::*;
use anyhow::Context as _;
use futures::SinkExt;
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Network location of the authority.
#[derive(Debug, Clone)]
pub struct Endpoint {
    host: String,
    secure: bool,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, secure: bool) -> Self {
        Self {
            host: host.into(),
            secure,
        }
    }
    /// Plain-ws endpoint, as used against a local authority.
    pub fn insecure(host: impl Into<String>) -> Self {
        Self::new(host, false)
    }
    /// The table's WebSocket address for one (table, user) pair.
    pub fn url(&self, table: TableId, user: UserId) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!(
            "{}://{}/ws/table/{}?user_id={}",
            scheme, self.host, table, user
        )
    }
}

/// Connection lifecycle of a [`TableSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Connecting,
    Open,
}

/// Owns the live connection to one table for one user.
///
/// At most one connection is live per session instance: `open` always closes
/// the previous one first. Inbound frames that parse into a [`TableSnapshot`]
/// replace the store; everything else is dropped as noise. Outbound sends are
/// best-effort with no queueing or retry, and no reconnection is attempted
/// here, so a dead transport surfaces only as the store going stale.
pub struct TableSession {
    endpoint: Endpoint,
    store: SessionStore,
    phase: Phase,
    link: Option<Link>,
}

/// The tasks and channel backing one live connection.
struct Link {
    key: (TableId, UserId),
    outbound: UnboundedSender<ClientMessage>,
    reader: JoinHandle<()>,
}

impl TableSession {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            store: SessionStore::new(),
            phase: Phase::Closed,
            link: None,
        }
    }
    /// Read access to the session's snapshot store.
    pub fn reader(&self) -> StoreReader {
        self.store.reader()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }
    /// The (table, user) pair currently connected, if any.
    pub fn key(&self) -> Option<(TableId, UserId)> {
        self.link.as_ref().map(|l| l.key)
    }

    /// Connects to the table and immediately requests a full snapshot.
    ///
    /// Any previous connection is closed first, whether or not the key
    /// changed. Until the `get_state` reply lands, the store stays empty and
    /// the local view must not be treated as consistent.
    pub async fn open(&mut self, table: TableId, user: UserId) -> anyhow::Result<()> {
        self.close();
        self.phase = Phase::Connecting;
        let url = self.endpoint.url(table, user);
        log::debug!("[session] connecting {}", url);
        let (socket, _) = match connect_async(url.as_str()).await {
            Ok(pair) => pair,
            Err(e) => {
                self.phase = Phase::Closed;
                log::debug!("[session] connect failed: {}", e);
                return Err(anyhow::Error::new(e)).context("establish table connection");
            }
        };
        let (mut sink, mut stream) = socket.split();
        let (outbound, mut pending) = unbounded_channel::<ClientMessage>();
        tokio::spawn(async move {
            while let Some(message) = pending.recv().await {
                if sink.send(Message::Text(message.to_json())).await.is_err() {
                    break;
                }
            }
            let _ = sink.close().await;
        });
        let store = self.store.writer();
        let reader = tokio::spawn(async move {
            while let Some(frame) = stream.next().await {
                match frame {
                    Ok(Message::Text(text)) => Self::ingest(&store, &text),
                    Ok(Message::Close(_)) | Err(_) => break,
                    Ok(_) => continue,
                }
            }
            log::debug!("[session] inbound stream ended");
        });
        self.link = Some(Link {
            key: (table, user),
            outbound,
            reader,
        });
        self.phase = Phase::Open;
        log::debug!("[session] open table={} user={}", table, user);
        self.send(ClientMessage::GetState);
        Ok(())
    }

    /// Best-effort send. Dropped without error when no connection is live;
    /// the caller's UI is expected to withhold actions while disconnected.
    pub fn send(&self, message: ClientMessage) {
        match &self.link {
            Some(link) => {
                if link.outbound.send(message).is_err() {
                    log::debug!("[session] message dropped: connection gone");
                }
            }
            None => log::debug!("[session] message dropped: not open"),
        }
    }

    /// Releases the connection and empties the store. Re-opening takes a new
    /// call to `open`.
    pub fn close(&mut self) {
        if let Some(link) = self.link.take() {
            log::debug!("[session] close table={} user={}", link.key.0, link.key.1);
            // dropping the channel lets the writer task drain and close the socket
            drop(link.outbound);
            link.reader.abort();
        }
        self.store.clear();
        self.phase = Phase::Closed;
    }

    /// Applies one inbound frame. Anything that fails to parse, or lacks a
    /// `table_id`, is expected noise and silently dropped.
    fn ingest(store: &SessionStore, text: &str) {
        match serde_json::from_str::<TableSnapshot>(text) {
            Ok(snapshot) => {
                log::debug!(
                    "[session] snapshot table={} street={} pot={}",
                    snapshot.table_id,
                    snapshot.street,
                    snapshot.pot
                );
                store.replace(snapshot);
            }
            Err(e) => log::debug!("[session] ignoring frame: {}", e),
        }
    }
}

impl Drop for TableSession {
    fn drop(&mut self) {
        self.close();
    }
}
