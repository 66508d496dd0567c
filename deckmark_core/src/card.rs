use std::fmt;

use crate::error::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Diamond,
    Club,
    /// Stands in for hearts in the card art
    Love,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Love, Suit::Spade];

    /// Token used in card ids and asset file names
    pub fn label(&self) -> &'static str {
        match self {
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Love => "Love",
            Suit::Spade => "Spade",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Diamond => '\u{2666}', // ♦
            Suit::Club => '\u{2663}',    // ♣
            Suit::Love => '\u{2665}',    // ♥
            Suit::Spade => '\u{2660}',   // ♠
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamond | Suit::Love)
    }

    pub fn from_label(label: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Token used in card ids and asset file names
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Compact form drawn in tile corners
    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            other => other.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Identifier of a card within a deck, always of the form `<rank>-<suit>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(String);

impl CardId {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self(format!("{}-{}", rank.label(), suit.label()))
    }

    /// Split an id string back into its rank and suit.
    pub fn parse(id: &str) -> Result<(Rank, Suit), DeckError> {
        let invalid = || DeckError::InvalidCardId(id.to_string());
        // Rank labels never contain '-', so the first one is the separator.
        let (rank, suit) = id.split_once('-').ok_or_else(invalid)?;
        let rank = Rank::from_label(rank).ok_or_else(invalid)?;
        let suit = Suit::from_label(suit).ok_or_else(invalid)?;
        Ok((rank, suit))
    }

    pub fn rank_suit(&self) -> Option<(Rank, Suit)> {
        Self::parse(&self.0).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A card record as shown on the board. Only `is_used` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub description: Option<String>,
    pub is_used: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let id = CardId::new(rank, suit);
        Self {
            name: id.to_string(),
            id,
            description: None,
            is_used: false,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        self.id.rank_suit().map(|(rank, _)| rank)
    }

    pub fn suit(&self) -> Option<Suit> {
        self.id.rank_suit().map(|(_, suit)| suit)
    }
}

/// All 52 card ids, rank-major then suit-minor.
pub fn standard_card_ids() -> Vec<CardId> {
    let mut ids = Vec::with_capacity(Rank::ALL.len() * Suit::ALL.len());
    for &rank in &Rank::ALL {
        for &suit in &Suit::ALL {
            ids.push(CardId::new(rank, suit));
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_enumeration_has_52_unique_ids() {
        let ids = standard_card_ids();
        assert_eq!(ids.len(), 52);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_enumeration_is_rank_major() {
        let ids = standard_card_ids();
        assert_eq!(ids[0], "2-Diamond");
        assert_eq!(ids[1], "2-Club");
        assert_eq!(ids[2], "2-Love");
        assert_eq!(ids[3], "2-Spade");
        assert_eq!(ids[4], "3-Diamond");
        assert_eq!(ids[51], "Ace-Spade");
    }

    #[test]
    fn test_parse_card_id() {
        assert_eq!(CardId::parse("10-Love").unwrap(), (Rank::Ten, Suit::Love));
        assert_eq!(
            CardId::parse("Queen-Club").unwrap(),
            (Rank::Queen, Suit::Club)
        );
        assert!(matches!(
            CardId::parse("1-Diamond"),
            Err(DeckError::InvalidCardId(_))
        ));
        assert!(CardId::parse("King-Heart").is_err());
        assert!(CardId::parse("King").is_err());
        assert!(CardId::parse("king-Spade").is_err());
    }

    #[test]
    fn test_new_card_is_unused_and_named_by_id() {
        let card = Card::new(Rank::Jack, Suit::Spade);
        assert_eq!(card.id, "Jack-Spade");
        assert_eq!(card.name, "Jack-Spade");
        assert!(!card.is_used);
        assert_eq!(card.description, None);
        assert_eq!(card.rank(), Some(Rank::Jack));
        assert_eq!(card.suit(), Some(Suit::Spade));
    }

    #[test]
    fn test_love_is_red() {
        assert!(Suit::Love.is_red());
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Club.is_red());
        assert!(!Suit::Spade.is_red());
    }
}
