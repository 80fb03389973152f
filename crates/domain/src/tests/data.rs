use crate::{Equipment, Exercise, Level, Mechanic, Muscle};

pub fn exercise(
    name: &str,
    mechanic: Mechanic,
    equipment: &[Equipment],
    difficulty: Level,
) -> Exercise {
    exercise_for(name, mechanic, &[Muscle::Pecs], equipment, difficulty)
}

pub fn exercise_for(
    name: &str,
    mechanic: Mechanic,
    muscles: &[Muscle],
    equipment: &[Equipment],
    difficulty: Level,
) -> Exercise {
    Exercise {
        name: name.to_string(),
        mechanic,
        equipment: equipment.iter().copied().collect(),
        difficulty,
        muscles: muscles.to_vec(),
        details: None,
    }
}

pub fn compound(name: &str, muscle: Muscle) -> Exercise {
    exercise_for(
        name,
        Mechanic::Compound,
        &[muscle],
        &[Equipment::Bodyweight],
        Level::Beginner,
    )
}

pub fn isolation(name: &str, muscle: Muscle) -> Exercise {
    exercise_for(
        name,
        Mechanic::Isolation,
        &[muscle],
        &[Equipment::Bodyweight],
        Level::Beginner,
    )
}

pub fn names(exercises: &[&Exercise]) -> Vec<String> {
    exercises.iter().map(|e| e.name.clone()).collect()
}
