use std::path::PathBuf;

use clap::Parser;

use deckmark_core::{Deck, DeckError, Snapshot, MAIN_DECK_ID};

/// Mark playing cards as used on a terminal board
#[derive(Debug, Parser)]
#[command(name = "deckmark", version)]
pub struct Args {
    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Check that every card image exists under this directory
    #[arg(long, value_name = "DIR")]
    pub asset_root: Option<PathBuf>,

    /// Deck to show, as ID:NAME. Repeat for more decks
    #[arg(long = "deck", value_name = "ID:NAME", value_parser = parse_deck_spec)]
    pub decks: Vec<DeckSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSpec {
    pub id: String,
    pub name: String,
}

fn parse_deck_spec(value: &str) -> Result<DeckSpec, String> {
    let (id, name) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ID:NAME, got `{value}`"))?;
    let (id, name) = (id.trim(), name.trim());
    if id.is_empty() || name.is_empty() {
        return Err(format!("deck id and name must not be empty in `{value}`"));
    }
    Ok(DeckSpec {
        id: id.to_string(),
        name: name.to_string(),
    })
}

impl Args {
    /// Startup snapshot: the configured decks, or the single default deck
    pub fn initial_snapshot(&self) -> Result<Snapshot, DeckError> {
        if self.decks.is_empty() {
            return Ok(Snapshot::initial());
        }
        Snapshot::try_new(self.decks.iter().map(|spec| {
            let description = (spec.id == MAIN_DECK_ID).then(|| "All playing cards".to_string());
            Deck::standard(spec.id.clone(), spec.name.clone(), description)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["deckmark"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert_eq!(args.log_dir, PathBuf::from("logs"));
        assert!(args.asset_root.is_none());
        assert_eq!(args.initial_snapshot().unwrap(), Snapshot::initial());
    }

    #[test]
    fn test_extra_decks() {
        let args = Args::try_parse_from([
            "deckmark",
            "--deck",
            "main:Full Deck",
            "--deck",
            "red:Red Backs",
        ])
        .unwrap();
        let snapshot = args.initial_snapshot().unwrap();
        assert_eq!(snapshot.decks().len(), 2);
        assert_eq!(snapshot.deck("red").unwrap().name, "Red Backs");
        assert_eq!(snapshot.deck("red").unwrap().len(), 52);
        assert_eq!(snapshot.total_cards(), 104);
    }

    #[test]
    fn test_malformed_deck_is_rejected() {
        assert!(Args::try_parse_from(["deckmark", "--deck", "nocolon"]).is_err());
        assert!(Args::try_parse_from(["deckmark", "--deck", ":Name"]).is_err());
    }

    #[test]
    fn test_duplicate_deck_ids() {
        let args =
            Args::try_parse_from(["deckmark", "--deck", "a:One", "--deck", "a:Two"]).unwrap();
        assert_eq!(
            args.initial_snapshot(),
            Err(DeckError::DuplicateDeck("a".to_string()))
        );
    }
}
