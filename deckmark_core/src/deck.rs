use im::Vector;

use crate::card::{Card, Rank, Suit};

/// A named, ordered collection of cards. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    cards: Vector<Card>,
}

impl Deck {
    /// A full 52-card deck, rank-major then suit-minor, all unused
    pub fn standard(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let mut cards = Vector::new();
        for &rank in &Rank::ALL {
            for &suit in &Suit::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self {
            id: id.into(),
            name: name.into(),
            description,
            cards,
        }
    }

    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn used_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_used).count()
    }

    pub fn unused_count(&self) -> usize {
        self.len() - self.used_count()
    }

    /// Copy of this deck with one card's flag replaced.
    /// `None` when the card is absent or already carries `used`.
    pub(crate) fn with_card_flag(&self, card_id: &str, used: bool) -> Option<Deck> {
        let index = self.cards.iter().position(|c| c.id == card_id)?;
        if self.cards[index].is_used == used {
            return None;
        }
        let mut next = self.clone();
        let mut card = next.cards[index].clone();
        card.is_used = used;
        next.cards.set(index, card);
        Some(next)
    }

    /// Copy of this deck with every card unused. `None` when nothing is used.
    pub(crate) fn cleared(&self) -> Option<Deck> {
        if self.used_count() == 0 {
            return None;
        }
        let mut next = self.clone();
        next.cards = self
            .cards
            .iter()
            .map(|c| Card {
                is_used: false,
                ..c.clone()
            })
            .collect();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;

    #[test]
    fn test_standard_deck_has_52_cards() {
        let deck = Deck::standard("main", "Full Deck", None);
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.used_count(), 0);
        assert_eq!(deck.unused_count(), 52);
    }

    #[test]
    fn test_with_card_flag_only_touches_one_card() {
        let deck = Deck::standard("main", "Full Deck", None);
        let next = deck.with_card_flag("King-Love", true).unwrap();
        assert_eq!(next.used_count(), 1);
        assert!(next.card("King-Love").unwrap().is_used);
        // Source deck is untouched
        assert_eq!(deck.used_count(), 0);
        for (before, after) in deck.cards().iter().zip(next.cards().iter()) {
            assert_eq!(before.id, after.id);
        }
    }

    #[test]
    fn test_with_card_flag_unchanged_cases() {
        let deck = Deck::standard("main", "Full Deck", None);
        assert!(deck.with_card_flag("Joker-Spade", true).is_none());
        assert!(deck.with_card_flag("2-Club", false).is_none());
    }

    #[test]
    fn test_cleared_resets_all_flags() {
        let deck = Deck::standard("main", "Full Deck", None)
            .with_card_flag("2-Club", true)
            .unwrap()
            .with_card_flag("Ace-Diamond", true)
            .unwrap();
        assert_eq!(deck.used_count(), 2);
        let cleared = deck.cleared().unwrap();
        assert_eq!(cleared.used_count(), 0);
        assert!(cleared.cleared().is_none());
        assert_eq!(
            cleared.cards().iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
            crate::card::standard_card_ids()
        );
        assert_eq!(cleared.card("2-Club").unwrap().id, CardId::new(Rank::Two, Suit::Club));
    }
}
