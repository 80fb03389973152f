use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub mechanic: Mechanic,
    pub equipment: BTreeSet<Equipment>,
    pub difficulty: Level,
    pub muscles: Vec<Muscle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Exercise {
    /// The first listed muscle, which decides whether two lifts hit the same area.
    #[must_use]
    pub fn primary_muscle(&self) -> Option<Muscle> {
        self.muscles.first().copied()
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.mechanic == Mechanic::Compound
    }

    #[must_use]
    pub fn is_usable_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        !self.equipment.is_disjoint(equipment)
    }

    #[must_use]
    pub fn key(&self) -> String {
        name::normalize(&self.name)
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mechanic {
    Compound,
    Isolation,
}

/// Exercise difficulty, also used as the fitness level of a user.
///
/// Levels are ordered, and a user of a given level may perform every exercise up to and
/// including that level.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn allows(self, difficulty: Level) -> bool {
        difficulty <= self
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Kettlebell,
    Machine,
    Cable,
    ResistanceBand,
    PullUpBar,
    Bench,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "title_case")]
pub enum Muscle {
    // Chest
    Pecs,
    // Back
    Traps,
    Lats,
    UpperBack,
    LowerBack,
    // Shoulders
    FrontDelts,
    SideDelts,
    RearDelts,
    // Arms
    Biceps,
    Triceps,
    Forearms,
    // Core
    Abs,
    Obliques,
    // Legs
    Glutes,
    Quads,
    Hamstrings,
    Adductors,
    Calves,
}

/// Key under which the catalog groups its exercises.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Glutes,
    Abs,
    Calisthenics,
}
