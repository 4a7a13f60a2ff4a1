use thiserror::Error;

/// Problems found while validating the spawn table at startup.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The table has no entries to choose from.
    #[error("spawn table is empty")]
    Empty,

    /// A cumulative threshold lies outside (0, 1].
    #[error("threshold {threshold} for {name} is outside (0, 1]")]
    ThresholdOutOfRange { name: String, threshold: f64 },

    /// Cumulative thresholds must strictly increase in catalog order.
    #[error("threshold {threshold} for {name} does not exceed the previous band ({previous})")]
    NotIncreasing {
        name: String,
        threshold: f64,
        previous: f64,
    },

    /// The last band must close at exactly 1.0 so every draw selects something.
    #[error("spawn bands sum to {total}, expected 1.0")]
    BadTotal { total: f64 },

    /// An archetype range has its bounds reversed.
    #[error("{name} has an invalid {stat} range {min}-{max}")]
    BadRange {
        name: String,
        stat: &'static str,
        min: i32,
        max: i32,
    },
}

/// Errors that interrupt a run. Game outcomes (walls, death, bad commands) are not errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around console read/write failures.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while the game was waiting for a command.
    #[error("input closed")]
    InputClosed,

    /// The enemy catalog failed validation.
    #[error("invalid enemy catalog: {0}")]
    Catalog(#[from] CatalogError),
}
