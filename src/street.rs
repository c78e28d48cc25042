use serde::Deserialize;
use serde::Serialize;

/// The betting round phase as reported by the authority.
///
/// `Waiting` is the pre-hand lobby state; the four betting streets and
/// showdown follow a hand in order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[default]
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// All phases in order.
    pub const fn all() -> [Self; 6] {
        [
            Self::Waiting,
            Self::Preflop,
            Self::Flop,
            Self::Turn,
            Self::River,
            Self::Showdown,
        ]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Preflop => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
            Self::Showdown => "Showdown",
        }
    }
    /// True while betting decisions can happen.
    pub const fn is_betting(&self) -> bool {
        matches!(self, Self::Preflop | Self::Flop | Self::Turn | Self::River)
    }
    /// Community cards revealed by the time this street is reached.
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Waiting | Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River | Self::Showdown => 5,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
            Self::Showdown => write!(f, "showdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decodes_wire_names() {
        for street in Street::all() {
            let json = format!("\"{}\"", street);
            assert_eq!(serde_json::from_str::<Street>(&json).unwrap(), street);
        }
    }
    #[test]
    fn defaults_to_waiting() {
        assert_eq!(Street::default(), Street::Waiting);
        assert!(!Street::Waiting.is_betting());
        assert!(Street::Preflop.is_betting());
    }
}
