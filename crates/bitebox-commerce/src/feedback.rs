//! Customer feedback after an order.
//!
//! Records live in a single JSON file. [`FeedbackLog`] appends to it and
//! reads it back in submission order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CommerceError;

/// Lowest star rating accepted.
pub const MIN_RATING: u8 = 1;
/// Highest star rating accepted.
pub const MAX_RATING: u8 = 5;

/// How the delivery felt to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySpeed {
    #[default]
    Fast,
    Average,
    Slow,
}

impl DeliverySpeed {
    pub const ALL: [DeliverySpeed; 3] =
        [DeliverySpeed::Fast, DeliverySpeed::Average, DeliverySpeed::Slow];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverySpeed::Fast => "fast",
            DeliverySpeed::Average => "average",
            DeliverySpeed::Slow => "slow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliverySpeed::Fast => "Fast",
            DeliverySpeed::Average => "Average",
            DeliverySpeed::Slow => "Slow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Some(DeliverySpeed::Fast),
            "average" => Some(DeliverySpeed::Average),
            "slow" => Some(DeliverySpeed::Slow),
            _ => None,
        }
    }
}

/// One submitted rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Sequence number assigned by the log; 0 until appended.
    #[serde(default)]
    pub id: u64,
    /// Stars, `1..=5`.
    pub rating: u8,
    /// Free-text comment, possibly empty.
    #[serde(default)]
    pub comment: String,
    /// "Would you recommend us?"
    #[serde(default)]
    pub recommend: bool,
    #[serde(default)]
    pub delivery_speed: DeliverySpeed,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Create a validated feedback record.
    pub fn new(
        rating: u8,
        comment: impl Into<String>,
        recommend: bool,
        delivery_speed: DeliverySpeed,
    ) -> Result<Self, CommerceError> {
        let feedback = Self {
            id: 0,
            rating,
            comment: comment.into(),
            recommend,
            delivery_speed,
            submitted_at: Utc::now(),
        };
        feedback.validate()?;
        Ok(feedback)
    }

    /// Reject ratings outside `1..=5`.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRating(self.rating));
        }
        Ok(())
    }

    /// Filled and empty stars, e.g. "⭐⭐⭐☆☆".
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "⭐".repeat(filled), "☆".repeat(empty))
    }
}

/// Feedback records stored as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Use `path` as the backing file. Nothing is created until the first
    /// append.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in submission order. A missing file is an empty log.
    pub fn list(&self) -> Result<Vec<Feedback>, CommerceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Feedback> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "Feedback loaded");
        Ok(records)
    }

    /// Validate, number, and store a record. Returns it with its id set.
    pub fn append(&self, mut feedback: Feedback) -> Result<Feedback, CommerceError> {
        feedback.validate()?;

        let mut records = self.list()?;
        feedback.id = records.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        records.push(feedback.clone());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;

        info!(id = feedback.id, rating = feedback.rating, "Feedback saved");
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &tempfile::TempDir) -> FeedbackLog {
        FeedbackLog::open(dir.path().join("feedback.json"))
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Feedback::new(1, "", false, DeliverySpeed::Fast).is_ok());
        assert!(Feedback::new(5, "", false, DeliverySpeed::Fast).is_ok());
        assert!(matches!(
            Feedback::new(0, "", false, DeliverySpeed::Fast),
            Err(CommerceError::InvalidRating(0))
        ));
        assert!(matches!(
            Feedback::new(6, "", false, DeliverySpeed::Fast),
            Err(CommerceError::InvalidRating(6))
        ));
    }

    #[test]
    fn test_delivery_speed_from_str() {
        assert_eq!(DeliverySpeed::from_str("Average"), Some(DeliverySpeed::Average));
        assert_eq!(DeliverySpeed::from_str(" slow "), Some(DeliverySpeed::Slow));
        assert_eq!(DeliverySpeed::from_str("instant"), None);
        for speed in DeliverySpeed::ALL {
            assert_eq!(DeliverySpeed::from_str(speed.as_str()), Some(speed));
        }
    }

    #[test]
    fn test_stars() {
        let feedback = Feedback::new(3, "ok", true, DeliverySpeed::Average).unwrap();
        assert_eq!(feedback.stars(), "⭐⭐⭐☆☆");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(log_in(&dir).list().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        let first = log
            .append(Feedback::new(5, "Hot and fast", true, DeliverySpeed::Fast).unwrap())
            .unwrap();
        let second = log
            .append(Feedback::new(2, "Cold fries", false, DeliverySpeed::Slow).unwrap())
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let records = log.list().unwrap();
        assert_eq!(records, vec![first, second]);
        assert_eq!(records[1].delivery_speed, DeliverySpeed::Slow);
        assert!(!records[1].recommend);
    }

    #[test]
    fn test_append_rejects_tampered_rating() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        let mut feedback = Feedback::new(4, "", true, DeliverySpeed::Fast).unwrap();
        feedback.rating = 9;
        assert!(matches!(log.append(feedback), Err(CommerceError::InvalidRating(9))));
        assert!(!log.path().exists());
    }

    #[test]
    fn test_append_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::open(dir.path().join("data").join("feedback.json"));

        log.append(Feedback::new(4, "", true, DeliverySpeed::Average).unwrap())
            .unwrap();
        assert_eq!(log.list().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);
        std::fs::write(log.path(), "not json").unwrap();

        assert!(matches!(log.list(), Err(CommerceError::SerializationError(_))));
    }
}
