use std::path::{Path, PathBuf};

use deckmark_core::CardImages;

/// Image files from the card table that are missing under `root`
pub fn missing_assets(root: &Path) -> Vec<PathBuf> {
    CardImages::global()
        .iter()
        .map(|(_, path)| root.join(path.trim_start_matches('/')))
        .filter(|file| !file.is_file())
        .collect()
}

/// Log each missing image. A missing image only breaks that tile's art.
pub fn check_assets(root: &Path) -> usize {
    let missing = missing_assets(root);
    for file in &missing {
        log::warn!("missing card image {}", file.display());
    }
    log::info!(
        "asset check under {}: {} of {} images present",
        root.display(),
        CardImages::global().len() - missing.len(),
        CardImages::global().len()
    );
    missing.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reports_missing_images() {
        let root = std::env::temp_dir().join(format!("deckmark-assets-{}", std::process::id()));
        let images = root.join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("2 Diamond.png"), b"").unwrap();
        fs::write(images.join("Ace Love.png"), b"").unwrap();

        let missing = missing_assets(&root);
        assert_eq!(missing.len(), 50);
        assert!(!missing.contains(&images.join("2 Diamond.png")));
        assert!(missing.contains(&images.join("10 Spade.png")));
        assert_eq!(check_assets(&root), 50);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_empty_root_misses_everything() {
        let root = std::env::temp_dir().join("deckmark-assets-does-not-exist");
        assert_eq!(missing_assets(&root).len(), 52);
    }
}
