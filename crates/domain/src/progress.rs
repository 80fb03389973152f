use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ExerciseName, ProgressError, StorageError};

pub trait ProgressRepository {
    fn read_progress(&self) -> Result<ProgressLog, StorageError>;
    fn write_progress(&self, progress: &ProgressLog) -> Result<(), StorageError>;
}

/// Logged sets of all exercises, keyed by normalized exercise name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLog {
    exercises: BTreeMap<String, ExerciseProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    pub name: String,
    pub entries: Vec<ProgressEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub sets: Vec<LoggedSet>,
}

impl ProgressEntry {
    #[must_use]
    pub fn max_weight(&self) -> Weight {
        self.sets
            .iter()
            .map(|s| s.weight)
            .fold(Weight::default(), |max, w| if w > max { w } else { max })
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.sets.iter().map(LoggedSet::volume).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    pub reps: Reps,
    pub weight: Weight,
}

impl LoggedSet {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume(&self) -> f32 {
        u32::from(self.reps) as f32 * f32::from(self.weight)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgressStats {
    pub workouts: usize,
    pub total_sets: usize,
    pub total_volume: f32,
    /// Heaviest weight and its exercise, `None` unless a set above 0 kg was logged.
    pub heaviest: Option<(String, Weight)>,
}

impl ProgressLog {
    /// Records the sets of one exercise on one date.
    ///
    /// An existing entry for the same date is replaced.
    pub fn log(
        &mut self,
        exercise: &ExerciseName,
        date: NaiveDate,
        sets: Vec<LoggedSet>,
    ) -> Result<(), ProgressError> {
        if sets.is_empty() {
            return Err(ProgressError::NoSets);
        }

        let progress = self
            .exercises
            .entry(exercise.key())
            .or_insert_with(|| ExerciseProgress {
                name: exercise.to_string(),
                entries: vec![],
            });

        match progress.entries.binary_search_by_key(&date, |e| e.date) {
            Ok(index) => progress.entries[index].sets = sets,
            Err(index) => progress.entries.insert(index, ProgressEntry { date, sets }),
        }

        Ok(())
    }

    #[must_use]
    pub fn entries(&self, exercise: &ExerciseName) -> &[ProgressEntry] {
        self.exercises
            .get(&exercise.key())
            .map_or(&[], |p| p.entries.as_slice())
    }

    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseProgress> {
        self.exercises.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Heaviest weight per logged date, oldest first.
    #[must_use]
    pub fn max_weight_series(&self, exercise: &ExerciseName) -> Vec<(NaiveDate, Weight)> {
        self.entries(exercise)
            .iter()
            .map(|e| (e.date, e.max_weight()))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        let mut dates = BTreeSet::new();
        let mut stats = ProgressStats::default();

        for progress in self.exercises.values() {
            for entry in &progress.entries {
                dates.insert(entry.date);
                stats.total_sets += entry.sets.len();
                stats.total_volume += entry.volume();

                let weight = entry.max_weight();
                let max = stats.heaviest.as_ref().map_or(Weight::default(), |(_, w)| *w);
                if weight > max {
                    stats.heaviest = Some((progress.name.clone(), weight));
                }
            }
        }

        stats.workouts = dates.len();
        stats
    }
}

#[derive(
    Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<u32> for Reps {
    type Error = RepsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Reps::new(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(
    Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "f32", into = "f32")]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f32> for Weight {
    type Error = WeightError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}
