use super::*;
use serde::Deserialize;

/// User profile returned by the authority's login handshake.
///
/// Seeds presentation (name, balance) only; nothing in the sync core reads
/// it. The wallet reference is opaque here, deposits and withdrawals happen
/// elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: String,
    pub ton_wallet: Option<String>,
    pub balance: Chips,
}

impl Profile {
    /// Preferred display name.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

/// One entry in the authority's table listing.
///
/// The big blind here is what callers feed into [`Spot`], since snapshots do
/// not echo it.
#[derive(Debug, Clone, Deserialize)]
pub struct TableInfo {
    pub id: TableId,
    pub name: String,
    pub max_players: usize,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub min_buy_in: Chips,
    pub max_buy_in: Chips,
    pub status: String,
    pub current_players: usize,
}
