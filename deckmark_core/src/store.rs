use im::Vector;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;

pub const MAIN_DECK_ID: &str = "main";

/// Immutable view of every deck at one point in time.
///
/// Operations return a new snapshot and never touch `self`. Decks that an
/// operation does not modify are shared with the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    decks: Vector<Deck>,
}

impl Snapshot {
    pub fn new(decks: impl IntoIterator<Item = Deck>) -> Self {
        Self {
            decks: decks.into_iter().collect(),
        }
    }

    /// Like [`Snapshot::new`] but rejects decks sharing an id.
    pub fn try_new(decks: impl IntoIterator<Item = Deck>) -> Result<Self, DeckError> {
        let snapshot = Self::new(decks);
        for (i, deck) in snapshot.decks.iter().enumerate() {
            if snapshot.decks.iter().take(i).any(|d| d.id == deck.id) {
                return Err(DeckError::DuplicateDeck(deck.id.clone()));
            }
        }
        Ok(snapshot)
    }

    /// The startup state: one full deck, nothing used
    pub fn initial() -> Self {
        Self::new([Deck::standard(
            MAIN_DECK_ID,
            "Full Deck",
            Some("All playing cards".to_string()),
        )])
    }

    pub fn decks(&self) -> &Vector<Deck> {
        &self.decks
    }

    pub fn deck(&self, deck_id: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == deck_id)
    }

    pub fn card(&self, deck_id: &str, card_id: &str) -> Option<&Card> {
        self.deck(deck_id)?.card(card_id)
    }

    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(Deck::len).sum()
    }

    pub fn used_count(&self) -> usize {
        self.decks.iter().map(Deck::used_count).sum()
    }

    pub fn unused_count(&self) -> usize {
        self.total_cards() - self.used_count()
    }

    /// Set one card's used flag.
    ///
    /// Unknown deck or card ids are ignored and the result equals `self`.
    pub fn mark_card(&self, deck_id: &str, card_id: &str, used: bool) -> Snapshot {
        self.marked(deck_id, card_id, used)
            .unwrap_or_else(|| self.clone())
    }

    /// Like [`Snapshot::mark_card`] but reports unknown ids.
    pub fn try_mark_card(
        &self,
        deck_id: &str,
        card_id: &str,
        used: bool,
    ) -> Result<Snapshot, DeckError> {
        let deck = self
            .deck(deck_id)
            .ok_or_else(|| DeckError::UnknownDeck(deck_id.to_string()))?;
        if deck.card(card_id).is_none() {
            return Err(DeckError::UnknownCard {
                deck_id: deck_id.to_string(),
                card_id: card_id.to_string(),
            });
        }
        Ok(self.mark_card(deck_id, card_id, used))
    }

    /// Mark every card in every deck unused.
    pub fn reset_all(&self) -> Snapshot {
        self.reset().unwrap_or_else(|| self.clone())
    }

    fn marked(&self, deck_id: &str, card_id: &str, used: bool) -> Option<Snapshot> {
        let Some(index) = self.decks.iter().position(|d| d.id == deck_id) else {
            log::trace!("mark ignored: no deck {deck_id}");
            return None;
        };
        let Some(deck) = self.decks[index].with_card_flag(card_id, used) else {
            log::trace!("mark ignored: {deck_id}/{card_id} unknown or unchanged");
            return None;
        };
        let mut next = self.clone();
        next.decks.set(index, deck);
        Some(next)
    }

    fn reset(&self) -> Option<Snapshot> {
        let mut next = self.clone();
        let mut changed = false;
        for (index, deck) in self.decks.iter().enumerate() {
            if let Some(cleared) = deck.cleared() {
                next.decks.set(index, cleared);
                changed = true;
            }
        }
        changed.then_some(next)
    }
}

/// A request coming from the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MarkUsed { deck_id: String, card_id: String },
    ResetAll,
}

/// Owner of the current snapshot. Intents are the only way to change it.
#[derive(Debug, Clone)]
pub struct DeckStore {
    snapshot: Snapshot,
    revision: u64,
}

impl DeckStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Bumped once for every intent that changed the snapshot
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent. Returns true if the snapshot changed.
    pub fn apply(&mut self, intent: &Intent) -> bool {
        let next = match intent {
            Intent::MarkUsed { deck_id, card_id } => self.snapshot.marked(deck_id, card_id, true),
            Intent::ResetAll => self.snapshot.reset(),
        };
        match next {
            Some(snapshot) => {
                self.snapshot = snapshot;
                self.revision += 1;
                true
            }
            None => false,
        }
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new(Snapshot::initial())
    }
}
