//! Portfolio content: the title and the ordered milestones shown on the
//! timeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A portfolio timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Title shown in the status bar.
    pub title: String,

    /// Milestones in document order.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// A single milestone section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Short period label (e.g., "2019").
    #[serde(default)]
    pub year: String,

    /// Section heading.
    pub title: String,

    /// Free-form body text.
    #[serde(default)]
    pub body: String,
}

impl Milestone {
    pub fn new(year: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Portfolio {
    /// Load a portfolio from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let content = std::fs::read_to_string(path).map_err(PortfolioError::Io)?;
        serde_json::from_str(&content).map_err(PortfolioError::Parse)
    }

    /// Save the portfolio to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), PortfolioError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PortfolioError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(PortfolioError::Serialize)?;
        std::fs::write(path, content).map_err(PortfolioError::Io)
    }

    /// Number of milestones.
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    /// Whether the portfolio has no milestones.
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Built-in sample used by `folio init` and when no file is given.
    pub fn sample() -> Self {
        Self {
            title: "From DNA to Stars".into(),
            milestones: vec![
                Milestone::new(
                    "2012",
                    "Molecular biology lab",
                    "Sequenced my first plasmid and learned that every pipeline starts with a clean sample.",
                ),
                Milestone::new(
                    "2015",
                    "Bioinformatics",
                    "Wrote alignment tooling for short reads. Performance mattered, so I picked up systems programming.",
                ),
                Milestone::new(
                    "2018",
                    "Data platform",
                    "Built ingestion services that moved terabytes a day between sequencers and the analysis cluster.",
                ),
                Milestone::new(
                    "2021",
                    "Observatory software",
                    "Switched domains to telescope scheduling and image calibration for a survey instrument.",
                ),
                Milestone::new(
                    "2024",
                    "Today",
                    "Working where the two meet: large-scale signal processing for both genomes and galaxies.",
                ),
            ],
        }
    }
}

/// Errors that can occur when loading or saving a portfolio.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// I/O error reading or writing the portfolio.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing portfolio JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing portfolio to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
