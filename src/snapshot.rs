use super::*;
use serde::Deserialize;
use serde::Serialize;

/// A player's standing within the current hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Active,
    Folded,
    AllIn,
    SittingOut,
}

impl PlayerStatus {
    /// True when the player can still be asked for a decision.
    pub const fn can_act(&self) -> bool {
        matches!(self, Self::Active)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Folded => "folded",
            Self::AllIn => "all in",
            Self::SittingOut => "sitting out",
        }
    }
}

/// One seat's state as visible to this client.
///
/// `cards` carries 0 or 2 slots. Identities decode only when the authority
/// chose to reveal them (our own hand, or showdown); everything else stays
/// [`CardSlot::FaceDown`] regardless of payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub user_id: UserId,
    pub seat: Position,
    #[serde(default)]
    pub stack: Chips,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub current_bet: Chips,
    #[serde(default)]
    pub cards: Vec<CardSlot>,
}

impl PlayerView {
    /// Number of hole cards held, shown or not.
    pub fn n_cards(&self) -> usize {
        self.cards.len()
    }
}

/// The authoritative view of one table at one instant.
///
/// Snapshots are self-contained: every inbound message that carries a
/// `table_id` yields one of these and fully replaces whatever came before.
/// No field-level merging ever happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub table_id: TableId,
    #[serde(default)]
    pub street: Street,
    #[serde(default)]
    pub community_cards: Vec<Card>,
    #[serde(default)]
    pub pot: Chips,
    #[serde(default)]
    pub pots: Vec<Chips>,
    #[serde(default)]
    pub current_bet: Chips,
    #[serde(default)]
    pub current_player: Option<UserId>,
    #[serde(default)]
    pub players: Vec<PlayerView>,
    #[serde(default)]
    pub hand_in_progress: bool,
    /// The authority's own decision window, in seconds. Display only; the
    /// local countdown runs on its fixed constant.
    #[serde(default)]
    pub turn_timeout: Option<u64>,
    /// Server-side deadline for the current decision, as a unix timestamp.
    #[serde(default)]
    pub turn_deadline: Option<f64>,
}

impl TableSnapshot {
    /// The seat belonging to the given user, if present.
    pub fn player(&self, user: UserId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.user_id == user)
    }
    /// True when it is this user's turn to act.
    pub fn is_turn(&self, user: UserId) -> bool {
        self.hand_in_progress && self.current_player == Some(user)
    }
    /// The betting numbers for this user's next decision.
    ///
    /// The authority does not echo the big blind in snapshots, so the caller
    /// supplies it from table configuration.
    pub fn spot(&self, user: UserId, big_blind: Chips) -> Option<Spot> {
        self.player(user).map(|p| Spot {
            current_bet: self.current_bet,
            player_bet: p.current_bet,
            stack: p.stack,
            big_blind,
        })
    }
}
