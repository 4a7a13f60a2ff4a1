//! Enemy catalog and spawner.
//!
//! The catalog is a fixed, ordered list of archetypes. Each archetype owns a cumulative
//! probability threshold; a uniform draw selects the first entry whose threshold is
//! strictly greater than the draw. Editing the catalog means editing one
//! `(archetype, threshold)` row in [`STANDARD_CATALOG`], and [`SpawnTable::new`] rejects
//! tables whose bands do not close at 1.0.

use super::errors::CatalogError;
use super::rng::RandomSource;
use serde::Serialize;
use std::fmt;

const TOTAL_EPSILON: f64 = 1e-9;

/// Inclusive integer range used for HP and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn roll(&self, rng: &mut impl RandomSource) -> i32 {
        rng.roll(self.min, self.max)
    }

    pub fn contains(&self, v: i32) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

impl fmt::Display for StatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Immutable enemy template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnemyArchetype {
    pub name: &'static str,
    pub hp: StatRange,
    pub damage: StatRange,
}

impl EnemyArchetype {
    pub const fn new(name: &'static str, hp: StatRange, damage: StatRange) -> Self {
        Self { name, hp, damage }
    }
}

/// A live enemy for one encounter. Dropped when the fight ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyInstance {
    pub name: String,
    pub hp: i32,
    pub damage: StatRange,
}

/// Archetypes in catalog order with their cumulative spawn thresholds.
pub const STANDARD_CATALOG: [(EnemyArchetype, f64); 6] = [
    (
        EnemyArchetype::new("Rat", StatRange::new(4, 7), StatRange::new(1, 3)),
        0.50,
    ),
    (
        EnemyArchetype::new("Ghoul", StatRange::new(6, 10), StatRange::new(2, 4)),
        0.75,
    ),
    (
        EnemyArchetype::new("Vampire Thrall", StatRange::new(8, 12), StatRange::new(2, 5)),
        0.90,
    ),
    (
        EnemyArchetype::new("Skeleton", StatRange::new(2, 3), StatRange::new(1, 2)),
        0.97,
    ),
    (
        EnemyArchetype::new("Big Troll", StatRange::new(12, 18), StatRange::new(3, 7)),
        0.995,
    ),
    (
        EnemyArchetype::new("Dragon", StatRange::new(15, 20), StatRange::new(4, 8)),
        1.0,
    ),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEntry {
    pub archetype: EnemyArchetype,
    /// Upper (exclusive) edge of this archetype's band.
    pub threshold: f64,
}

/// One archetype's slice of `[0, 1)`, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpawnBand {
    #[serde(flatten)]
    pub archetype: EnemyArchetype,
    pub lower: f64,
    pub upper: f64,
}

impl SpawnBand {
    pub fn probability(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Validated weighted-choice table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTable {
    entries: Vec<SpawnEntry>,
}

impl SpawnTable {
    /// Build and validate a table from `(archetype, cumulative threshold)` rows.
    pub fn new(rows: &[(EnemyArchetype, f64)]) -> Result<Self, CatalogError> {
        let first = rows.first().ok_or(CatalogError::Empty)?;
        let mut previous = 0.0_f64;
        for (archetype, threshold) in rows {
            let name = archetype.name.to_string();
            if !(*threshold > 0.0 && *threshold <= 1.0 + TOTAL_EPSILON) {
                return Err(CatalogError::ThresholdOutOfRange {
                    name,
                    threshold: *threshold,
                });
            }
            if *threshold <= previous {
                return Err(CatalogError::NotIncreasing {
                    name,
                    threshold: *threshold,
                    previous,
                });
            }
            for (stat, range) in [("hp", archetype.hp), ("damage", archetype.damage)] {
                if range.min > range.max {
                    return Err(CatalogError::BadRange {
                        name: archetype.name.to_string(),
                        stat,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
            previous = *threshold;
        }
        if (previous - 1.0).abs() > TOTAL_EPSILON {
            return Err(CatalogError::BadTotal { total: previous });
        }
        log::trace!(
            "spawn table ok: {} archetypes, first {}",
            rows.len(),
            first.0.name
        );
        Ok(Self {
            entries: rows
                .iter()
                .map(|(archetype, threshold)| SpawnEntry {
                    archetype: *archetype,
                    threshold: *threshold,
                })
                .collect(),
        })
    }

    /// The built-in six-archetype table.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(&STANDARD_CATALOG)
    }

    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a draw in `[0, 1)` to its archetype. Draws at or past 1.0 land in the last band.
    pub fn select(&self, draw: f64) -> (usize, &EnemyArchetype) {
        let last = self.entries.len().saturating_sub(1);
        let idx = self
            .entries
            .iter()
            .position(|e| draw < e.threshold)
            .unwrap_or(last);
        (idx, &self.entries[idx].archetype)
    }

    /// Draw an archetype, then roll its HP once.
    pub fn spawn_enemy(&self, rng: &mut impl RandomSource) -> EnemyInstance {
        let draw = rng.uniform();
        let (idx, archetype) = self.select(draw);
        let hp = archetype.hp.roll(rng);
        log::debug!(
            "spawn draw {:.4} -> #{} {} (hp {})",
            draw,
            idx,
            archetype.name,
            hp
        );
        EnemyInstance {
            name: archetype.name.to_string(),
            hp,
            damage: archetype.damage,
        }
    }

    pub fn bands(&self) -> Vec<SpawnBand> {
        let mut lower = 0.0;
        self.entries
            .iter()
            .map(|e| {
                let band = SpawnBand {
                    archetype: e.archetype,
                    lower,
                    upper: e.threshold,
                };
                lower = e.threshold;
                band
            })
            .collect()
    }
}
