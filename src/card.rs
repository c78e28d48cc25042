use serde::Deserialize;
use serde::Serialize;

/// Card rank, two through ace.
///
/// Discriminants match the authority's wire encoding (2–14, 14 = Ace).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// Single-character abbreviation.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace),
            x => Err(format!("invalid rank {}", x)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// Discriminants match the authority's wire encoding
/// (0 = club, 1 = diamond, 2 = heart, 3 = spade).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// All four suits in wire order.
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// Unicode glyph.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Club => "♣",
            Self::Diamond => "♦",
            Self::Heart => "♥",
            Self::Spade => "♠",
        }
    }
    /// True for the suits conventionally rendered in red.
    pub const fn is_red(&self) -> bool {
        matches!(self, Self::Diamond | Self::Heart)
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Club),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Heart),
            3 => Ok(Self::Spade),
            x => Err(format!("invalid suit {}", x)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card as the authority transmits it: `{"rank": 14, "suit": 3}`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// One hole-card slot in another player's view.
///
/// The authority only reveals card identities for the local player (and for
/// everyone at showdown). We must not assume any other payload decodes, so a
/// slot that fails to parse is kept as a face-down count signal rather than
/// failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    FaceDown,
    Up(Card),
}

impl CardSlot {
    /// The decoded card, when the authority revealed one.
    pub fn card(&self) -> Option<Card> {
        match self {
            Self::Up(card) => Some(*card),
            Self::FaceDown => None,
        }
    }
    pub fn is_face_down(&self) -> bool {
        matches!(self, Self::FaceDown)
    }
}

impl From<Card> for CardSlot {
    fn from(card: Card) -> Self {
        Self::Up(card)
    }
}

impl<'de> Deserialize<'de> for CardSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value::<Card>(value)
            .map(Self::Up)
            .unwrap_or(Self::FaceDown))
    }
}

impl Serialize for CardSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Up(card) => card.serialize(serializer),
            Self::FaceDown => serializer.serialize_unit(),
        }
    }
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Up(card) => write!(f, "{}", card),
            Self::FaceDown => write!(f, "🂠"),
        }
    }
}
