use super::*;
use serde::Serialize;

/// Messages sent from client to authority over the WebSocket.
///
/// The `amount` on an action is the total target bet for raises, zero for
/// fold/check/call where the authority computes the owed chips itself.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Request a full table snapshot.
    GetState,
    /// Ask the authority to begin a new hand when none is in progress.
    StartHand,
    /// Submit a betting decision.
    Action { action: String, amount: Chips },
}

impl ClientMessage {
    pub fn action(action: Action) -> Self {
        Self::Action {
            action: action.wire().to_string(),
            amount: match action {
                Action::Raise(target) | Action::Shove(target) => target,
                _ => 0.0,
            },
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize client message")
    }
}
