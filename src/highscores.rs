//! High score records
//!
//! One best score per character skin, persisted to a `key:value` text file.
//! The file is read in full at startup and rewritten in full on every
//! improvement. Storage problems are logged and never interrupt play.

use std::path::{Path, PathBuf};

use crate::persistence::{self, Records};
use crate::sim::CharacterVariant;

/// Default score file name
pub const DEFAULT_SCORE_FILE: &str = "scores.dat";

/// Receives final scores when a run ends
pub trait ScoreSink {
    /// Offer a finished run's score. Returns true if it was a new best.
    fn submit(&mut self, variant: CharacterVariant, score: u64) -> bool;
}

/// Per-skin high scores
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    /// Keyed by `CharacterVariant::index()`; unknown keys are kept untouched
    records: Records,
    /// Backing file, `None` for an in-memory table
    path: Option<PathBuf>,
}

impl HighScores {
    /// Create an empty in-memory table
    pub fn new() -> Self {
        Self {
            records: Records::new(),
            path: None,
        }
    }

    /// Load from `path`. A missing file starts fresh; a file that can't be
    /// read is left alone and scores stay in memory for this session.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match persistence::read_records(path) {
            Ok(records) => {
                if records.is_empty() {
                    log::info!("No high scores found, starting fresh");
                } else {
                    log::info!("Loaded {} high scores from {}", records.len(), path.display());
                }
                Self {
                    records,
                    path: Some(path.to_path_buf()),
                }
            }
            Err(e) => {
                log::warn!("{e}; high scores will not be saved this session");
                Self::new()
            }
        }
    }

    /// Record `score` if it beats the stored best for `variant`.
    /// Returns true if it was a new high score.
    pub fn save_score(&mut self, variant: CharacterVariant, score: u64) -> bool {
        if !self.qualifies(variant, score) {
            return false;
        }

        self.records.insert(variant.index(), score);
        self.save();
        true
    }

    /// Would `score` become the new best for `variant`?
    pub fn qualifies(&self, variant: CharacterVariant, score: u64) -> bool {
        self.records
            .get(&variant.index())
            .is_none_or(|&best| score > best)
    }

    /// Best score for `variant` (0 if none)
    pub fn high_score(&self, variant: CharacterVariant) -> u64 {
        self.records.get(&variant.index()).copied().unwrap_or(0)
    }

    /// Known skins ordered by best score, highest first
    pub fn leaderboard(&self) -> Vec<(CharacterVariant, u64)> {
        let mut board: Vec<_> = self
            .records
            .iter()
            .filter_map(|(&key, &score)| CharacterVariant::from_index(key).map(|v| (v, score)))
            .collect();
        board.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        board
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrite the backing file, if any
    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match persistence::write_records(path, &self.records) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.records.len()),
            Err(e) => log::warn!("{e}; high score kept in memory only"),
        }
    }
}

impl ScoreSink for HighScores {
    fn submit(&mut self, variant: CharacterVariant, score: u64) -> bool {
        let best = self.save_score(variant, score);
        if best {
            log::info!("New high score for {}: {}", variant.as_str(), score);
        }
        best
    }
}
