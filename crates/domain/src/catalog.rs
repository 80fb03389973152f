use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Equipment, Exercise, Level, Mechanic, Muscle, MuscleGroup, name};

/// Read-only mapping from muscle group to the exercises training it.
///
/// An exercise serving several groups is listed under each of them. Consumers identify
/// exercises by name, never by position or reference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: BTreeMap<MuscleGroup, Vec<Exercise>>,
}

impl Catalog {
    #[must_use]
    pub fn new(groups: BTreeMap<MuscleGroup, Vec<Exercise>>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn groups(&self) -> impl Iterator<Item = (MuscleGroup, &[Exercise])> {
        self.groups.iter().map(|(g, e)| (*g, e.as_slice()))
    }

    #[must_use]
    pub fn exercises(&self, group: MuscleGroup) -> &[Exercise] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Exercise> {
        let key = name::normalize(name);
        self.groups
            .values()
            .flatten()
            .find(|exercise| exercise.key() == key)
    }

    /// All distinct exercise names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.groups
            .values()
            .flatten()
            .map(|exercise| exercise.name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            name: value.name.to_string(),
            mechanic: value.mechanic,
            equipment: value.equipment.iter().copied().collect(),
            difficulty: value.difficulty,
            muscles: value.muscles.to_vec(),
            details: None,
        }
    }
}

#[derive(Clone)]
struct BaseExercise {
    pub name: &'static str,
    pub mechanic: Mechanic,
    pub equipment: &'static [Equipment],
    pub difficulty: Level,
    pub muscles: &'static [Muscle],
    pub variants: &'static [ExerciseVariant],
}

#[derive(Clone)]
struct ExerciseVariant {
    pub name: &'static str,
    pub mechanic: Option<Mechanic>,
    pub equipment: Option<&'static [Equipment]>,
    pub difficulty: Option<Level>,
    pub muscles: Option<&'static [Muscle]>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            mechanic: None,
            equipment: None,
            difficulty: None,
            muscles: None,
        }
    }
}

fn expand(base: &[BaseExercise]) -> Vec<Exercise> {
    let mut exercises = base
        .iter()
        .map(Exercise::from)
        .chain(base.iter().flat_map(|e| {
            e.variants.iter().map(|v| Exercise {
                name: v.name.to_string(),
                mechanic: v.mechanic.unwrap_or(e.mechanic),
                equipment: v.equipment.unwrap_or(e.equipment).iter().copied().collect(),
                difficulty: v.difficulty.unwrap_or(e.difficulty),
                muscles: v.muscles.unwrap_or(e.muscles).to_vec(),
                details: None,
            })
        }))
        .collect::<Vec<Exercise>>();
    exercises.sort_by(|a, b| a.name.cmp(&b.name));
    exercises
}

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    Catalog::new(
        GROUPS
            .iter()
            .map(|(group, base)| (*group, expand(base)))
            .collect(),
    )
});

const GROUPS: [(MuscleGroup, &[BaseExercise]); 8] = [
    (MuscleGroup::Chest, &CHEST),
    (MuscleGroup::Back, &BACK),
    (MuscleGroup::Shoulders, &SHOULDERS),
    (MuscleGroup::Arms, &ARMS),
    (MuscleGroup::Legs, &LEGS),
    (MuscleGroup::Glutes, &GLUTES),
    (MuscleGroup::Abs, &ABS),
    (MuscleGroup::Calisthenics, &CALISTHENICS),
];

const PUSH_UP: BaseExercise = BaseExercise {
    name: "Push-Up",
    mechanic: Mechanic::Compound,
    equipment: &[Equipment::Bodyweight],
    difficulty: Level::Beginner,
    muscles: &[Muscle::Pecs, Muscle::Triceps, Muscle::FrontDelts],
    variants: &[
        ExerciseVariant {
            name: "Incline Push-Up",
            ..ExerciseVariant::default()
        },
        ExerciseVariant {
            name: "Knee Push-Up",
            ..ExerciseVariant::default()
        },
        ExerciseVariant {
            name: "Decline Push-Up",
            difficulty: Some(Level::Intermediate),
            ..ExerciseVariant::default()
        },
        ExerciseVariant {
            name: "Archer Push-Up",
            difficulty: Some(Level::Advanced),
            ..ExerciseVariant::default()
        },
    ],
};

const PULL_UP: BaseExercise = BaseExercise {
    name: "Pull-Up",
    mechanic: Mechanic::Compound,
    equipment: &[Equipment::PullUpBar],
    difficulty: Level::Intermediate,
    muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::UpperBack],
    variants: &[
        ExerciseVariant {
            name: "Lat Pulldown",
            equipment: Some(&[Equipment::Cable, Equipment::Machine]),
            difficulty: Some(Level::Beginner),
            ..ExerciseVariant::default()
        },
        ExerciseVariant {
            name: "Weighted Pull-Up",
            difficulty: Some(Level::Advanced),
            ..ExerciseVariant::default()
        },
    ],
};

const DIP: BaseExercise = BaseExercise {
    name: "Dip",
    mechanic: Mechanic::Compound,
    equipment: &[Equipment::Bodyweight],
    difficulty: Level::Intermediate,
    muscles: &[Muscle::Pecs, Muscle::Triceps, Muscle::FrontDelts],
    variants: &[],
};

const MOUNTAIN_CLIMBER: BaseExercise = BaseExercise {
    name: "Mountain Climber",
    mechanic: Mechanic::Compound,
    equipment: &[Equipment::Bodyweight],
    difficulty: Level::Beginner,
    muscles: &[Muscle::Abs, Muscle::Quads, Muscle::FrontDelts],
    variants: &[],
};

const CHEST: [BaseExercise; 4] = [
    PUSH_UP,
    BaseExercise {
        name: "Barbell Bench Press",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Pecs, Muscle::FrontDelts, Muscle::Triceps],
        variants: &[
            ExerciseVariant {
                name: "Barbell Incline Bench Press",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Incline Bench Press",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Fly",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Pecs],
        variants: &[
            ExerciseVariant {
                name: "Cable Crossover",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pec Deck",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Band Chest Fly",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    DIP,
];

const BACK: [BaseExercise; 10] = [
    PULL_UP,
    BaseExercise {
        name: "Inverted Row",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::UpperBack, Muscle::Lats, Muscle::Biceps],
        variants: &[],
    },
    BaseExercise {
        name: "Doorway Row",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Lats, Muscle::Biceps],
        variants: &[],
    },
    BaseExercise {
        name: "Sliding Floor Pulldown",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Lats, Muscle::Biceps],
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Row",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::UpperBack, Muscle::Lats, Muscle::Biceps],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Row",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Row",
                equipment: Some(&[Equipment::Kettlebell]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Seated Cable Row",
                equipment: Some(&[Equipment::Cable, Equipment::Machine]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pendlay Row",
                difficulty: Some(Level::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Deadlift",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Advanced,
        muscles: &[Muscle::LowerBack, Muscle::Hamstrings, Muscle::Glutes],
        variants: &[ExerciseVariant {
            name: "Kettlebell Deadlift",
            equipment: Some(&[Equipment::Kettlebell]),
            difficulty: Some(Level::Beginner),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Superman",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::LowerBack, Muscle::Glutes],
        variants: &[],
    },
    BaseExercise {
        name: "Reverse Snow Angel",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::UpperBack, Muscle::RearDelts],
        variants: &[],
    },
    BaseExercise {
        name: "Straight-Arm Pulldown",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable, Equipment::ResistanceBand],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Lats],
        variants: &[],
    },
    BaseExercise {
        name: "Dumbbell Shrug",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Traps],
        variants: &[ExerciseVariant {
            name: "Barbell Shrug",
            equipment: Some(&[Equipment::Barbell]),
            ..ExerciseVariant::default()
        }],
    },
];

const SHOULDERS: [BaseExercise; 7] = [
    BaseExercise {
        name: "Overhead Press",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::FrontDelts, Muscle::Triceps, Muscle::SideDelts],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shoulder Press",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Arnold Press",
                equipment: Some(&[Equipment::Dumbbells]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Press",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pike Push-Up",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::FrontDelts, Muscle::Triceps],
        variants: &[ExerciseVariant {
            name: "Handstand Push-Up",
            difficulty: Some(Level::Advanced),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Lateral Raise",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::SideDelts],
        variants: &[
            ExerciseVariant {
                name: "Cable Lateral Raise",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Band Lateral Raise",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Face Pull",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable, Equipment::ResistanceBand],
        difficulty: Level::Beginner,
        muscles: &[Muscle::RearDelts, Muscle::Traps],
        variants: &[],
    },
    BaseExercise {
        name: "Rear Delt Fly",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::RearDelts],
        variants: &[ExerciseVariant {
            name: "Reverse Pec Deck",
            equipment: Some(&[Equipment::Machine]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Arm Circles",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::SideDelts, Muscle::FrontDelts],
        variants: &[],
    },
    BaseExercise {
        name: "Prone Y-Raise",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::RearDelts, Muscle::Traps],
        variants: &[],
    },
];

const ARMS: [BaseExercise; 8] = [
    BaseExercise {
        name: "Bench Dip",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight, Equipment::Bench],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Triceps, Muscle::Pecs],
        variants: &[],
    },
    BaseExercise {
        name: "Diamond Push-Up",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Triceps, Muscle::Pecs],
        variants: &[],
    },
    BaseExercise {
        name: "Close-Grip Bench Press",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Triceps, Muscle::Pecs],
        variants: &[],
    },
    BaseExercise {
        name: "Chin-Up",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::PullUpBar],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Biceps, Muscle::Lats],
        variants: &[],
    },
    BaseExercise {
        name: "Dumbbell Curl",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Biceps, Muscle::Forearms],
        variants: &[
            ExerciseVariant {
                name: "Hammer Curl",
                muscles: Some(&[Muscle::Forearms, Muscle::Biceps]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Barbell Curl",
                equipment: Some(&[Equipment::Barbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Band Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Triceps Pushdown",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable, Equipment::ResistanceBand],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Triceps],
        variants: &[],
    },
    BaseExercise {
        name: "Overhead Triceps Extension",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Dumbbells],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Triceps],
        variants: &[ExerciseVariant {
            name: "Skull Crusher",
            equipment: Some(&[Equipment::Barbell]),
            difficulty: Some(Level::Intermediate),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Towel Curl",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Biceps],
        variants: &[],
    },
];

const LEGS: [BaseExercise; 10] = [
    BaseExercise {
        name: "Bodyweight Squat",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Quads, Muscle::Glutes],
        variants: &[
            ExerciseVariant {
                name: "Jump Squat",
                difficulty: Some(Level::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pistol Squat",
                difficulty: Some(Level::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Back Squat",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Hamstrings],
        variants: &[
            ExerciseVariant {
                name: "Goblet Squat",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Kettlebell]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Front Squat",
                difficulty: Some(Level::Advanced),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Leg Press",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Reverse Lunge",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Quads, Muscle::Glutes],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Walking Lunge",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Bulgarian Split Squat",
                equipment: Some(&[Equipment::Bodyweight, Equipment::Dumbbells]),
                difficulty: Some(Level::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Step-Up",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight, Equipment::Bench],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Quads, Muscle::Glutes],
        variants: &[],
    },
    BaseExercise {
        name: "Romanian Deadlift",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Hamstrings, Muscle::Glutes, Muscle::LowerBack],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Romanian Deadlift",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Single-Leg Romanian Deadlift",
                equipment: Some(&[Equipment::Bodyweight, Equipment::Dumbbells]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cossack Squat",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Adductors, Muscle::Quads],
        variants: &[],
    },
    BaseExercise {
        name: "Leg Extension",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Quads],
        variants: &[],
    },
    BaseExercise {
        name: "Lying Leg Curl",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Machine],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Hamstrings],
        variants: &[
            ExerciseVariant {
                name: "Band Leg Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Nordic Hamstring Curl",
                equipment: Some(&[Equipment::Bodyweight]),
                difficulty: Some(Level::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Wall Sit",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Quads],
        variants: &[],
    },
    BaseExercise {
        name: "Standing Calf Raise",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells, Equipment::Machine],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Calves],
        variants: &[],
    },
];

const GLUTES: [BaseExercise; 6] = [
    BaseExercise {
        name: "Glute Bridge",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        variants: &[ExerciseVariant {
            name: "Single-Leg Glute Bridge",
            difficulty: Some(Level::Intermediate),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Hip Thrust",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Hip Thrust",
                equipment: Some(&[Equipment::Dumbbells]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Hip Thrust",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Level::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Kettlebell],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Glutes, Muscle::Hamstrings, Muscle::LowerBack],
        variants: &[],
    },
    BaseExercise {
        name: "Donkey Kick",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight, Equipment::ResistanceBand],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Glutes],
        variants: &[],
    },
    BaseExercise {
        name: "Fire Hydrant",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight, Equipment::ResistanceBand],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Glutes],
        variants: &[],
    },
    BaseExercise {
        name: "Cable Kickback",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Glutes],
        variants: &[],
    },
];

const ABS: [BaseExercise; 8] = [
    MOUNTAIN_CLIMBER,
    BaseExercise {
        name: "Plank",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Abs, Muscle::Obliques],
        variants: &[ExerciseVariant {
            name: "Side Plank",
            muscles: Some(&[Muscle::Obliques, Muscle::Abs]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Crunch",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Abs],
        variants: &[
            ExerciseVariant {
                name: "Bicycle Crunch",
                muscles: Some(&[Muscle::Obliques, Muscle::Abs]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Crunch",
                equipment: Some(&[Equipment::Cable]),
                difficulty: Some(Level::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dead Bug",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Abs],
        variants: &[],
    },
    BaseExercise {
        name: "Russian Twist",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells, Equipment::Kettlebell],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Obliques],
        variants: &[],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::PullUpBar],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Abs, Muscle::Obliques],
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Rollout",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Barbell],
        difficulty: Level::Advanced,
        muscles: &[Muscle::Abs, Muscle::Lats],
        variants: &[],
    },
    BaseExercise {
        name: "Pallof Press",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::Cable, Equipment::ResistanceBand],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Obliques, Muscle::Abs],
        variants: &[],
    },
];

const CALISTHENICS: [BaseExercise; 8] = [
    PUSH_UP,
    PULL_UP,
    DIP,
    MOUNTAIN_CLIMBER,
    BaseExercise {
        name: "Burpee",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Intermediate,
        muscles: &[Muscle::Quads, Muscle::Pecs, Muscle::Abs],
        variants: &[],
    },
    BaseExercise {
        name: "Bear Crawl",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::Bodyweight],
        difficulty: Level::Beginner,
        muscles: &[Muscle::FrontDelts, Muscle::Quads, Muscle::Abs],
        variants: &[],
    },
    BaseExercise {
        name: "Muscle-Up",
        mechanic: Mechanic::Compound,
        equipment: &[Equipment::PullUpBar],
        difficulty: Level::Advanced,
        muscles: &[Muscle::Lats, Muscle::Triceps, Muscle::Pecs],
        variants: &[],
    },
    BaseExercise {
        name: "Scapular Pull-Up",
        mechanic: Mechanic::Isolation,
        equipment: &[Equipment::PullUpBar],
        difficulty: Level::Beginner,
        muscles: &[Muscle::Lats, Muscle::Traps],
        variants: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_builtin_covers_every_group() {
        for group in MuscleGroup::iter() {
            assert!(
                !Catalog::builtin().exercises(group).is_empty(),
                "{group} has no exercises"
            );
        }
    }

    #[test]
    fn test_builtin_names_identify_exercises() {
        let mut seen: HashMap<String, &Exercise> = HashMap::new();

        for (_, exercises) in Catalog::builtin().groups() {
            for exercise in exercises {
                assert!(!exercise.name.trim().is_empty());
                assert!(!exercise.muscles.is_empty(), "{}", exercise.name);
                assert!(!exercise.equipment.is_empty(), "{}", exercise.name);
                if let Some(other) = seen.insert(exercise.key(), exercise) {
                    assert_eq!(other, exercise);
                }
            }
        }
    }

    #[test]
    fn test_builtin_shares_exercises_between_groups() {
        let catalog = Catalog::builtin();
        for group in [MuscleGroup::Chest, MuscleGroup::Calisthenics] {
            assert!(catalog.exercises(group).iter().any(|e| e.name == "Push-Up"));
        }
        for group in [MuscleGroup::Back, MuscleGroup::Calisthenics] {
            assert!(catalog.exercises(group).iter().any(|e| e.name == "Pull-Up"));
        }
    }

    #[test]
    fn test_expand_variants() {
        let exercises = expand(&[PULL_UP]);

        assert_eq!(
            exercises.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Lat Pulldown", "Pull-Up", "Weighted Pull-Up"]
        );
        assert_eq!(
            exercises[0].equipment,
            BTreeSet::from([Equipment::Cable, Equipment::Machine])
        );
        assert_eq!(exercises[0].difficulty, Level::Beginner);
        assert_eq!(exercises[0].muscles, PULL_UP.muscles.to_vec());
        assert_eq!(exercises[2].difficulty, Level::Advanced);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.find("  push-up ").map(|e| e.name.as_str()),
            Some("Push-Up")
        );
        assert_eq!(catalog.find("Moonwalk"), None);
    }

    #[test]
    fn test_names() {
        let names = Catalog::builtin().names();

        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(names.iter().filter(|n| **n == "Push-Up").count(), 1);
    }

    #[test]
    fn test_catalog_deserialize() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "abs": [
                    {
                        "name": "Plank",
                        "type": "isolation",
                        "equipment": ["bodyweight"],
                        "difficulty": "beginner",
                        "muscles": ["abs"]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            catalog.exercises(MuscleGroup::Abs),
            &[Exercise {
                name: "Plank".to_string(),
                mechanic: Mechanic::Isolation,
                equipment: BTreeSet::from([Equipment::Bodyweight]),
                difficulty: Level::Beginner,
                muscles: vec![Muscle::Abs],
                details: None,
            }]
        );
        assert!(catalog.exercises(MuscleGroup::Chest).is_empty());
    }
}
