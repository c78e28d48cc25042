use super::*;

/// The numbers that determine what the local player may legally do.
///
/// Pure and deterministic: every method is total over its inputs and touches
/// no shared state. Out-of-range values (negative stacks and the like) are a
/// precondition violation of the upstream snapshot, not validated here. The
/// authority remains the final arbiter of legality for whatever gets sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Highest bet outstanding this round, table-wide.
    pub current_bet: Chips,
    /// What this player has already committed this round.
    pub player_bet: Chips,
    /// Remaining uncommitted chips.
    pub stack: Chips,
    /// The round's minimum increment.
    pub big_blind: Chips,
}

impl Spot {
    /// Chips still owed to match the outstanding bet.
    pub fn to_call(&self) -> Chips {
        self.current_bet - self.player_bet
    }
    /// Checking is legal only when nothing is owed.
    pub fn can_check(&self) -> bool {
        self.to_call() <= 0.0
    }
    /// Raising requires chips beyond what a mere call costs.
    pub fn can_raise(&self) -> bool {
        self.stack > self.to_call()
    }
    /// Smallest legal raise target (a total bet, not a delta).
    pub fn min_raise(&self) -> Chips {
        self.current_bet + self.big_blind
    }
    /// Largest legal raise target: everything in.
    pub fn max_raise(&self) -> Chips {
        self.player_bet + self.stack
    }
    /// Clamps a requested raise target into the legal window.
    pub fn clamp(&self, target: Chips) -> Chips {
        target.max(self.min_raise()).min(self.max_raise())
    }
    /// One-click sizing suggestion for a pot multiplier.
    ///
    /// The authority's UI labels these as pot fractions, but the formula has
    /// always been based on the outstanding bet rather than the pot. Kept
    /// verbatim for wire compatibility with the existing tables.
    pub fn preset(&self, multiplier: f64) -> Chips {
        self.clamp((self.current_bet * multiplier).round() + self.big_blind)
    }
    /// All four preset targets, clamped.
    pub fn presets(&self) -> [Chips; 4] {
        PRESET_MULTIPLIERS.map(|m| self.preset(m))
    }
    /// Every action the local player may legally take right now.
    ///
    /// Raise is offered at its minimum target; callers pick any clamped
    /// amount up to the shove. The shove accompanies every legal raise.
    pub fn legal(&self) -> Vec<Action> {
        let mut actions = vec![Action::Fold];
        if self.can_check() {
            actions.push(Action::Check);
        } else {
            actions.push(Action::Call(self.to_call()));
        }
        if self.can_raise() {
            actions.push(Action::Raise(self.min_raise()));
            actions.push(Action::Shove(self.max_raise()));
        }
        actions
    }
}
