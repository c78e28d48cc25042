//! Client-side synchronization layer for live poker tables.
//!
//! This crate mirrors the authoritative state of one remote table over a
//! WebSocket session, exposes it through a single-writer snapshot store, and
//! computes the betting actions the local player may legally take.
//!
//! ## Architecture
//!
//! - [`TableSession`] — connection lifecycle and snapshot ingestion
//! - [`SessionStore`] / [`StoreReader`] — latest-snapshot holder, one writer
//! - [`TurnTimer`] — advisory decision countdown for the local player
//! - [`Spot`] — pure legal-action and raise-bound computation
//! - [`ClientMessage`] — outbound wire format
//!
//! The authority owns true game state. This crate only mirrors it: every
//! inbound message carrying a `table_id` fully replaces the local view, and
//! every failure mode is absorbed as "state stays stale" rather than raised.
mod action;
mod card;
mod dto;
mod engine;
mod message;
mod session;
mod snapshot;
mod store;
mod street;
mod timer;

pub use action::*;
pub use card::*;
pub use dto::*;
pub use engine::*;
pub use message::*;
pub use session::*;
pub use snapshot::*;
pub use store::*;
pub use street::*;
pub use timer::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, pots, and bet amounts. The authority settles in fractional
/// token units, so chips are floating point on the wire.
pub type Chips = f64;
/// Unique identifier of a table on the authority.
pub type TableId = u64;
/// Unique identifier of a player account.
pub type UserId = u64;
/// Seat index around the table.
pub type Position = usize;

// ============================================================================
// CONSTANTS
// ============================================================================
/// Seconds on the local decision clock when the turn becomes ours.
pub const DECISION_SECS: u64 = 30;
/// One-click raise sizing multipliers offered alongside the slider.
pub const PRESET_MULTIPLIERS: [f64; 4] = [0.5, 0.75, 1.0, 1.5];
