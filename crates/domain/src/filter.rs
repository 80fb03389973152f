use std::collections::{BTreeSet, HashSet};

use crate::{Catalog, Equipment, Exercise, Level, MuscleGroup, NameSet};

/// Selects the exercises a user can perform for a set of muscle groups.
///
/// An exercise passes if it is listed under one of `groups`, is not avoided, needs at least one
/// piece of the available `equipment` and does not exceed `level`. Exercises listed under several
/// of the requested groups are returned once, at their first position in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseFilter<'a> {
    pub groups: &'a [MuscleGroup],
    pub equipment: &'a BTreeSet<Equipment>,
    pub level: Level,
    pub avoid: &'a NameSet,
}

impl ExerciseFilter<'_> {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        !self.avoid.contains(&exercise.name)
            && exercise.is_usable_with(self.equipment)
            && self.level.allows(exercise.difficulty)
    }

    #[must_use]
    pub fn pool<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Exercise> {
        let mut seen = HashSet::new();
        catalog
            .groups()
            .filter(|(group, _)| self.groups.contains(group))
            .flat_map(|(_, exercises)| exercises)
            .filter(|e| self.matches(e))
            .filter(|e| seen.insert(e.key()))
            .collect()
    }
}
