use std::collections::HashSet;

use log::debug;

use crate::{Exercise, ExerciseName, NameSet};

/// Splits a pool into compound and isolation exercises, keeping the pool order in both.
#[must_use]
pub fn partition<'c>(pool: &[&'c Exercise]) -> (Vec<&'c Exercise>, Vec<&'c Exercise>) {
    pool.iter().copied().partition(|e| e.is_compound())
}

/// Removes the must-have exercises from `pool` and returns them in must-have order.
///
/// Names without a match in the pool and repeated names are skipped.
fn reserve<'c>(pool: &mut Vec<&'c Exercise>, must_have: &[ExerciseName]) -> Vec<&'c Exercise> {
    let mut reserved = vec![];
    for name in must_have {
        match pool.iter().position(|e| name.matches(&e.name)) {
            Some(index) => reserved.push(pool.remove(index)),
            None => debug!("must-have {name} not available"),
        }
    }
    reserved
}

/// Selects up to `target` main lifts from a shuffled pool.
///
/// Must-have exercises come first and are always kept, even beyond `target`. The remaining
/// slots are split between compounds (`compound_ratio`, rounded up) and isolations. A short
/// category is not compensated by the other one.
#[must_use]
pub fn allocate<'c>(
    pool: &[&'c Exercise],
    must_have: &[ExerciseName],
    avoid: &NameSet,
    target: usize,
    compound_ratio: f32,
) -> Vec<&'c Exercise> {
    let mut pool = pool
        .iter()
        .copied()
        .filter(|e| !avoid.contains(&e.name))
        .collect::<Vec<_>>();
    let mut selected = reserve(&mut pool, must_have);
    let needed = target.saturating_sub(selected.len());
    let (compounds, isolations) = partition(&pool);

    let num_compounds = compounds.len().min(ratio_of(needed, compound_ratio));
    let num_isolations = isolations.len().min(needed - num_compounds);

    debug!(
        "allocating {num_compounds} of {} compounds and {num_isolations} of {} isolations",
        compounds.len(),
        isolations.len()
    );

    selected.extend(&compounds[..num_compounds]);
    selected.extend(&isolations[..num_isolations]);
    selected
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn ratio_of(count: usize, ratio: f32) -> usize {
    ((count as f32 * ratio.clamp(0.0, 1.0)).ceil() as usize).min(count)
}

/// Main lifts of a full body day, split by body half.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FullBodySelection<'c> {
    pub lower: Vec<&'c Exercise>,
    pub upper: Vec<&'c Exercise>,
}

impl FullBodySelection<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

/// Fills a full body day from shuffled lower and upper body pools.
///
/// The lower half gets `target / 2` slots and the upper half the rest. Must-have exercises
/// count towards the half whose pool contains them, with the lower pool checked first. A short
/// pool leaves its half under-filled.
#[must_use]
pub fn allocate_full_body<'c>(
    lower_pool: &[&'c Exercise],
    upper_pool: &[&'c Exercise],
    must_have: &[ExerciseName],
    target: usize,
) -> FullBodySelection<'c> {
    let lower_target = target / 2;
    let upper_target = target - lower_target;
    let mut lower_pool = lower_pool.to_vec();
    let mut upper_pool = upper_pool.to_vec();
    let mut selection = FullBodySelection::default();
    let mut chosen = HashSet::new();

    for name in must_have {
        if let Some(index) = lower_pool.iter().position(|e| name.matches(&e.name)) {
            let exercise = lower_pool.remove(index);
            if chosen.insert(exercise.key()) {
                selection.lower.push(exercise);
            }
        } else if let Some(index) = upper_pool.iter().position(|e| name.matches(&e.name)) {
            let exercise = upper_pool.remove(index);
            if chosen.insert(exercise.key()) {
                selection.upper.push(exercise);
            }
        } else {
            debug!("must-have {name} not available");
        }
    }

    fill(&mut selection.lower, &lower_pool, lower_target, &mut chosen);
    fill(&mut selection.upper, &upper_pool, upper_target, &mut chosen);

    debug!(
        "allocated {} of {lower_target} lower and {} of {upper_target} upper body exercises",
        selection.lower.len(),
        selection.upper.len()
    );

    selection
}

fn fill<'c>(
    selected: &mut Vec<&'c Exercise>,
    pool: &[&'c Exercise],
    target: usize,
    chosen: &mut HashSet<String>,
) {
    for exercise in pool {
        if selected.len() >= target {
            break;
        }
        if chosen.insert(exercise.key()) {
            selected.push(*exercise);
        }
    }
}

/// Picks the abs finisher from a shuffled abs pool.
///
/// Must-have exercises are kept first. The remaining slots up to `count` take at most
/// `compounds` compound exercises and are topped up with isolations. Nothing is padded when the
/// pool is smaller than `count`.
#[must_use]
pub fn allocate_abs<'c>(
    pool: &[&'c Exercise],
    must_have: &[ExerciseName],
    count: usize,
    compounds: usize,
) -> Vec<&'c Exercise> {
    let mut pool = pool.to_vec();
    let mut selected = reserve(&mut pool, must_have);
    let remaining = count.saturating_sub(selected.len());
    let (compound_pool, isolation_pool) = partition(&pool);

    let num_compounds = compound_pool.len().min(compounds).min(remaining);
    let num_isolations = isolation_pool.len().min(remaining - num_compounds);

    selected.extend(&compound_pool[..num_compounds]);
    selected.extend(&isolation_pool[..num_isolations]);
    selected
}
