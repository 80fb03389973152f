use crate::{Exercise, FullBodySelection, partition};

/// Orders a full body day: lower and upper body compounds take turns, starting with the lower
/// body, and all isolations follow in selection order.
#[must_use]
pub fn interleave_full_body<'c>(selection: &FullBodySelection<'c>) -> Vec<&'c Exercise> {
    let (lower_compounds, lower_isolations) = partition(&selection.lower);
    let (upper_compounds, upper_isolations) = partition(&selection.upper);
    let mut lower = lower_compounds.into_iter();
    let mut upper = upper_compounds.into_iter();
    let mut ordered = Vec::with_capacity(selection.len());

    loop {
        match (lower.next(), upper.next()) {
            (None, None) => break,
            (l, u) => {
                ordered.extend(l);
                ordered.extend(u);
            }
        }
    }

    ordered.extend(lower_isolations);
    ordered.extend(upper_isolations);
    ordered
}

/// Moves isolations behind all compounds without changing the order within either kind.
#[must_use]
pub fn isolations_last<'c>(exercises: &[&'c Exercise]) -> Vec<&'c Exercise> {
    let (mut ordered, isolations) = partition(exercises);
    ordered.extend(isolations);
    ordered
}

/// Separates consecutive compounds sharing a primary muscle.
///
/// Whenever two adjacent compounds have the same primary muscle, the nearest later compound with
/// a different primary muscle is swapped in behind the first one. This is a single left-to-right
/// pass: an adjacency without a later replacement stays in place.
pub fn alternate_primary_muscles(exercises: &mut [&Exercise]) {
    for i in 0..exercises.len().saturating_sub(1) {
        let current = exercises[i];
        let next = exercises[i + 1];

        if !current.is_compound()
            || !next.is_compound()
            || current.primary_muscle() != next.primary_muscle()
        {
            continue;
        }

        if let Some(offset) = exercises[i + 2..]
            .iter()
            .position(|e| e.is_compound() && e.primary_muscle() != current.primary_muscle())
        {
            exercises.swap(i + 1, i + 2 + offset);
        }
    }
}

/// Orders the main lifts of a day with a fixed set of muscle groups.
#[must_use]
pub fn sequence<'c>(selected: &[&'c Exercise], alternate: bool) -> Vec<&'c Exercise> {
    if !alternate {
        return selected.to_vec();
    }
    let mut ordered = isolations_last(selected);
    alternate_primary_muscles(&mut ordered);
    ordered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Muscle;
    use crate::tests::data::{compound, isolation, names};

    #[test]
    fn test_interleave_full_body() {
        let squat = compound("Squat", Muscle::Quads);
        let lunge = compound("Lunge", Muscle::Quads);
        let deadlift = compound("Deadlift", Muscle::Hamstrings);
        let calf_raise = isolation("Calf Raise", Muscle::Calves);
        let push_up = compound("Push-Up", Muscle::Pecs);
        let curl = isolation("Curl", Muscle::Biceps);
        let selection = FullBodySelection {
            lower: vec![&squat, &calf_raise, &lunge, &deadlift],
            upper: vec![&curl, &push_up],
        };

        assert_eq!(
            names(&interleave_full_body(&selection)),
            vec!["Squat", "Push-Up", "Lunge", "Deadlift", "Calf Raise", "Curl"]
        );
    }

    #[test]
    fn test_interleave_full_body_upper_only() {
        let push_up = compound("Push-Up", Muscle::Pecs);
        let row = compound("Row", Muscle::Lats);
        let selection = FullBodySelection {
            lower: vec![],
            upper: vec![&push_up, &row],
        };

        assert_eq!(
            names(&interleave_full_body(&selection)),
            vec!["Push-Up", "Row"]
        );
        assert!(interleave_full_body(&FullBodySelection::default()).is_empty());
    }

    #[test]
    fn test_isolations_last() {
        let fly = isolation("Fly", Muscle::Pecs);
        let press = compound("Press", Muscle::Pecs);
        let raise = isolation("Raise", Muscle::SideDelts);
        let dip = compound("Dip", Muscle::Triceps);

        assert_eq!(
            names(&isolations_last(&[&fly, &press, &raise, &dip])),
            vec!["Press", "Dip", "Fly", "Raise"]
        );
    }

    #[rstest]
    #[case(
        &[("A", Muscle::Pecs), ("B", Muscle::Pecs), ("C", Muscle::Lats)],
        vec!["A", "C", "B"]
    )]
    #[case(
        &[("A", Muscle::Pecs), ("B", Muscle::Lats), ("C", Muscle::Pecs)],
        vec!["A", "B", "C"]
    )]
    #[case(
        &[("A", Muscle::Pecs), ("B", Muscle::Pecs), ("C", Muscle::Pecs), ("D", Muscle::Lats)],
        vec!["A", "D", "C", "B"]
    )]
    #[case(
        &[("A", Muscle::Quads), ("B", Muscle::Quads), ("C", Muscle::Quads)],
        vec!["A", "B", "C"]
    )]
    #[case(
        &[("A", Muscle::Quads), ("B", Muscle::Quads), ("C", Muscle::Lats), ("D", Muscle::Lats)],
        vec!["A", "C", "B", "D"]
    )]
    #[case(&[("A", Muscle::Quads)], vec!["A"])]
    #[case(&[], vec![])]
    fn test_alternate_primary_muscles(
        #[case] compounds: &[(&str, Muscle)],
        #[case] expected: Vec<&str>,
    ) {
        let exercises = compounds
            .iter()
            .map(|(name, muscle)| compound(name, *muscle))
            .collect::<Vec<_>>();
        let mut ordered = exercises.iter().collect::<Vec<_>>();

        alternate_primary_muscles(&mut ordered);

        assert_eq!(names(&ordered), expected);
    }

    #[test]
    fn test_alternate_primary_muscles_ignores_isolations() {
        let press = compound("Press", Muscle::Pecs);
        let fly = isolation("Fly", Muscle::Pecs);
        let crossover = isolation("Crossover", Muscle::Pecs);
        let row = isolation("Row", Muscle::Lats);
        let mut ordered = vec![&press, &fly, &crossover, &row];

        alternate_primary_muscles(&mut ordered);

        assert_eq!(names(&ordered), vec!["Press", "Fly", "Crossover", "Row"]);
    }

    #[test]
    fn test_sequence() {
        let fly = isolation("Fly", Muscle::Pecs);
        let press = compound("Press", Muscle::Pecs);
        let push_up = compound("Push-Up", Muscle::Pecs);
        let row = compound("Row", Muscle::Lats);
        let selected = [&fly, &press, &push_up, &row];

        assert_eq!(
            names(&sequence(&selected, true)),
            vec!["Press", "Row", "Push-Up", "Fly"]
        );
        assert_eq!(
            names(&sequence(&selected, false)),
            vec!["Fly", "Press", "Push-Up", "Row"]
        );
    }
}
