use super::*;

/// A betting decision offered to, or taken by, the local player.
///
/// Amounts on `Call` are the chips still owed to match the outstanding bet.
/// Amounts on `Raise` and `Shove` are the *total* target bet the player is
/// taking their stake to this round, never the delta on top of what they
/// already committed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
}

impl Action {
    /// True if this is a raise or shove (aggressive action).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_) | Action::Shove(_))
    }
    /// True if this is an all-in bet.
    pub fn is_shove(&self) -> bool {
        matches!(self, Action::Shove(_))
    }
    /// Extracts the chip amount from betting actions.
    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Action::Call(amount) | Action::Raise(amount) | Action::Shove(amount) => Some(amount),
            _ => None,
        }
    }
    /// Action name as the authority spells it on the wire.
    pub fn wire(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call(_) => "call",
            Action::Raise(_) => "raise",
            Action::Shove(_) => "all_in",
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call(_) => "Call",
            Action::Raise(_) => "Raise",
            Action::Shove(_) => "All in",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call(amount) => write!(f, "CALL  {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
            Action::Shove(amount) => write!(f, "SHOVE {}", amount),
        }
    }
}
