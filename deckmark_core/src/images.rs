use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::card::{CardId, Rank, Suit};

static CARD_IMAGES: LazyLock<CardImages> = LazyLock::new(CardImages::build);

/// Asset path for a rank and suit, e.g. `/images/10 Love.png`.
pub fn image_path(rank: Rank, suit: Suit) -> String {
    format!("/images/{} {}.png", rank.label(), suit.label())
}

/// Lookup table from card id to its image asset path.
///
/// Built once from the full rank × suit enumeration, so every id produced by
/// [`CardId::new`] has exactly one entry.
#[derive(Debug, Clone)]
pub struct CardImages {
    paths: BTreeMap<CardId, String>,
}

impl CardImages {
    fn build() -> Self {
        let mut paths = BTreeMap::new();
        for &rank in &Rank::ALL {
            for &suit in &Suit::ALL {
                paths.insert(CardId::new(rank, suit), image_path(rank, suit));
            }
        }
        Self { paths }
    }

    pub fn global() -> &'static CardImages {
        &CARD_IMAGES
    }

    pub fn get(&self, id: &CardId) -> Option<&str> {
        self.paths.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &str)> {
        self.paths.iter().map(|(id, path)| (id, path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::standard_card_ids;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_every_card() {
        let images = CardImages::global();
        assert_eq!(images.len(), 52);
        for id in standard_card_ids() {
            assert!(images.get(&id).is_some(), "missing image for {id}");
        }
    }

    #[test]
    fn test_no_orphan_images() {
        let ids: HashSet<_> = standard_card_ids().into_iter().collect();
        let paths: HashSet<_> = CardImages::global().iter().map(|(_, p)| p).collect();
        assert_eq!(paths.len(), 52);
        for (id, _) in CardImages::global().iter() {
            assert!(ids.contains(id));
        }
    }

    #[test]
    fn test_path_format() {
        let images = CardImages::global();
        let id = CardId::new(Rank::Ten, Suit::Love);
        assert_eq!(images.get(&id), Some("/images/10 Love.png"));
        let id = CardId::new(Rank::Queen, Suit::Diamond);
        assert_eq!(images.get(&id), Some("/images/Queen Diamond.png"));
    }

    #[test]
    fn test_paths_are_well_formed() {
        for (id, path) in CardImages::global().iter() {
            let (rank, suit) = id.rank_suit().unwrap();
            let name = path
                .strip_prefix("/images/")
                .and_then(|p| p.strip_suffix(".png"))
                .unwrap();
            assert_eq!(name, format!("{} {}", rank.label(), suit.label()));
        }
    }
}
