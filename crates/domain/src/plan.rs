use std::collections::BTreeSet;

use derive_more::{Display, Into};
use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

use crate::{
    Catalog, Equipment, Exercise, ExerciseFilter, ExerciseName, Level, Mechanic, Muscle,
    MuscleGroup, NameSet, PlanError, Settings, allocate, allocate_abs, allocate_full_body,
    interleave_full_body, sequence,
};

pub const MAIN_TITLE: &str = "Main Lift (Sets: 3-4 | Reps: 8-12)";
pub const CARDIO_TITLE: &str = "Cardio Warmup";
pub const ABS_TITLE: &str = "Abs Finisher (2-3 rounds)";
pub const FLEXIBILITY_TITLE: &str = "Stretchy Cool-down Ideas";
pub const NO_EXERCISES_NOTICE: &str = "Couldn't find any exercises for this setup! Try changing your preferences or selecting more equipment.";

pub const UPPER_BODY: [MuscleGroup; 5] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Arms,
    MuscleGroup::Calisthenics,
];
pub const LOWER_BODY: [MuscleGroup; 2] = [MuscleGroup::Legs, MuscleGroup::Glutes];
const FULL_BODY: [MuscleGroup; 7] = [
    UPPER_BODY[0],
    UPPER_BODY[1],
    UPPER_BODY[2],
    UPPER_BODY[3],
    UPPER_BODY[4],
    LOWER_BODY[0],
    LOWER_BODY[1],
];

#[derive(
    Clone, Copy, Debug, Default, StrumDisplay, EnumIter, EnumString, Eq, PartialEq, Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Split {
    #[default]
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl Split {
    #[must_use]
    pub fn day_types(self) -> &'static [DayType] {
        match self {
            Split::FullBody => &[DayType::FullBody],
            Split::UpperLower => &[DayType::Upper, DayType::Lower],
            Split::PushPullLegs => &[DayType::Push, DayType::Pull, DayType::Legs],
        }
    }

    /// Day type of the day with the given zero-based index within a week.
    #[must_use]
    pub fn day_type(self, index: usize) -> DayType {
        let day_types = self.day_types();
        day_types[index % day_types.len()]
    }
}

#[derive(Clone, Copy, Debug, StrumDisplay, EnumIter, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayType {
    #[strum(to_string = "Full Body")]
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

impl DayType {
    /// Muscle groups trained on a day of this type.
    ///
    /// Full body days draw from `UPPER_BODY` and `LOWER_BODY` as two separate pools, so their
    /// groups are exactly the union of both.
    #[must_use]
    pub fn muscle_groups(self) -> &'static [MuscleGroup] {
        match self {
            DayType::Push => &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
            DayType::Pull => &[MuscleGroup::Back, MuscleGroup::Arms],
            DayType::Legs | DayType::Lower => &LOWER_BODY,
            DayType::Upper => &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
            ],
            DayType::FullBody => &FULL_BODY,
        }
    }
}

#[derive(
    Clone, Copy, Debug, StrumDisplay, EnumIter, EnumString, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CardioMachine {
    Treadmill,
    Bike,
    Elliptical,
    Rower,
    StairClimber,
}

impl CardioMachine {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardioMachine::Treadmill => "Treadmill",
            CardioMachine::Bike => "Bike",
            CardioMachine::Elliptical => "Elliptical",
            CardioMachine::Rower => "Rower",
            CardioMachine::StairClimber => "Stair Climber",
        }
    }

    #[must_use]
    pub fn routine(self) -> &'static str {
        match self {
            CardioMachine::Treadmill => {
                "Walk briskly for 3 mins, then alternate 1 min jog with 1 min incline walk."
            }
            CardioMachine::Bike => {
                "Spin easy for 3 mins, then alternate 30 secs fast pedaling with 90 secs recovery."
            }
            CardioMachine::Elliptical => {
                "Glide easy for 3 mins, then raise the resistance every 2 mins, pushing and pulling the handles."
            }
            CardioMachine::Rower => {
                "Row easy for 3 mins focusing on legs-hips-arms, then 10 strong strokes every minute."
            }
            CardioMachine::StairClimber => {
                "Climb slowly for 3 mins, then alternate 1 min at a faster pace with 1 min easy stepping."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cardio {
    pub machine: CardioMachine,
    pub minutes: u32,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub fn new(value: u8) -> Result<Self, DaysError> {
        if !(1..=6).contains(&value) {
            return Err(DaysError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl Default for DaysPerWeek {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<&str> for DaysPerWeek {
    type Error = DaysError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u8>() {
            Ok(parsed_value) => DaysPerWeek::new(parsed_value),
            Err(_) => Err(DaysError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DaysError {
    #[error("Days per week must be in the range 1 to 6 ({0})")]
    OutOfRange(u8),
    #[error("Days per week must be an integer")]
    ParseError,
}

/// Everything the user chose for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConstraints {
    pub equipment: BTreeSet<Equipment>,
    pub days: DaysPerWeek,
    pub session_length: u32,
    pub split: Split,
    pub fitness_level: Level,
    pub cardio: Option<Cardio>,
    pub abs: bool,
    pub flexibility: bool,
    pub must_have: Vec<ExerciseName>,
    pub avoid: NameSet,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            equipment: BTreeSet::from([Equipment::Bodyweight]),
            days: DaysPerWeek::default(),
            session_length: 45,
            split: Split::default(),
            fitness_level: Level::default(),
            cardio: None,
            abs: false,
            flexibility: false,
            must_have: vec![],
            avoid: NameSet::new(),
        }
    }
}

impl PlanConstraints {
    /// Minutes left for the main lifts after the optional blocks.
    #[must_use]
    pub fn available_minutes(&self, settings: &Settings) -> u32 {
        let cardio = self.cardio.map_or(0, |c| c.minutes);
        let abs = if self.abs { settings.abs_minutes } else { 0 };
        let flexibility = if self.flexibility {
            settings.flexibility_minutes
        } else {
            0
        };
        self.session_length
            .saturating_sub(cardio)
            .saturating_sub(abs)
            .saturating_sub(flexibility)
    }

    fn filter<'a>(&'a self, groups: &'a [MuscleGroup]) -> ExerciseFilter<'a> {
        ExerciseFilter {
            groups,
            equipment: &self.equipment,
            level: self.fitness_level,
            avoid: &self.avoid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Compound,
    Isolation,
    Cardio,
}

impl From<Mechanic> for ItemCategory {
    fn from(value: Mechanic) -> Self {
        match value {
            Mechanic::Compound => ItemCategory::Compound,
            Mechanic::Isolation => ItemCategory::Isolation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ItemCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<Muscle>,
}

impl PlanItem {
    #[must_use]
    pub fn text(name: &str, details: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            details: details.map(str::to_string),
            category: None,
            muscles: vec![],
        }
    }
}

impl From<&Exercise> for PlanItem {
    fn from(value: &Exercise) -> Self {
        Self {
            name: value.name.clone(),
            details: value.details.clone(),
            category: Some(value.mechanic.into()),
            muscles: value.muscles.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<PlanItem>,
}

impl Section {
    /// Section listing the given exercises, or the fallback notice if there are none.
    fn exercises(title: &str, exercises: &[&Exercise]) -> Self {
        let items = if exercises.is_empty() {
            vec![PlanItem::text(NO_EXERCISES_NOTICE, None)]
        } else {
            exercises.iter().map(|e| PlanItem::from(*e)).collect()
        };
        Self {
            title: title.to_string(),
            items,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = crate::normalize(name);
        self.items.iter().any(|i| crate::normalize(&i.name) == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub week: u8,
    pub day: u8,
    pub day_type: DayType,
    pub sections: Vec<Section>,
}

impl DayPlan {
    #[must_use]
    pub fn header(&self) -> String {
        format!("Day {} - {}", self.day, self.day_type)
    }

    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub number: u8,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub weeks: Vec<Week>,
}

impl Plan {
    /// All day plans, week by week.
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Generates a multi-week plan.
///
/// Every week repeats the split's day sequence; only the random draws differ between days of
/// the same type. Fails only if no equipment is selected.
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &PlanConstraints,
    settings: &Settings,
    rng: &mut R,
) -> Result<Plan, PlanError> {
    if constraints.equipment.is_empty() {
        warn!("rejected plan generation without equipment");
        return Err(PlanError::NoEquipment);
    }

    let available_minutes = constraints.available_minutes(settings);
    let target = settings.target_count(available_minutes);

    debug!(
        "generating {} weeks of {} {} days with {available_minutes} mins for {target} main lifts",
        settings.weeks, constraints.days, constraints.split
    );

    let mut weeks = Vec::with_capacity(usize::from(settings.weeks));

    for number in 1..=settings.weeks {
        let mut days = vec![];
        for index in 0..u8::from(constraints.days) {
            let day_type = constraints.split.day_type(usize::from(index));
            days.push(DayPlan {
                week: number,
                day: index + 1,
                day_type,
                sections: sections(catalog, constraints, settings, day_type, target, rng),
            });
        }
        weeks.push(Week { number, days });
    }

    Ok(Plan { weeks })
}

fn sections<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &PlanConstraints,
    settings: &Settings,
    day_type: DayType,
    target: usize,
    rng: &mut R,
) -> Vec<Section> {
    let mut sections = vec![];

    if let Some(cardio) = constraints.cardio {
        sections.push(cardio_section(cardio));
    }

    let main = main_section(catalog, constraints, settings, day_type, target, rng);

    let abs = constraints
        .abs
        .then(|| abs_section(catalog, constraints, settings, &main, rng));

    sections.push(main);
    sections.extend(abs);

    if constraints.flexibility {
        sections.push(flexibility_section());
    }

    sections
}

fn cardio_section(cardio: Cardio) -> Section {
    Section {
        title: CARDIO_TITLE.to_string(),
        items: vec![PlanItem {
            name: format!("{}: {} mins", cardio.machine.name(), cardio.minutes),
            details: Some(cardio.machine.routine().to_string()),
            category: Some(ItemCategory::Cardio),
            muscles: vec![],
        }],
    }
}

fn shuffled_pool<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    constraints: &PlanConstraints,
    groups: &[MuscleGroup],
    rng: &mut R,
) -> Vec<&'c Exercise> {
    let mut pool = constraints.filter(groups).pool(catalog);
    pool.shuffle(rng);
    pool
}

fn main_section<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &PlanConstraints,
    settings: &Settings,
    day_type: DayType,
    target: usize,
    rng: &mut R,
) -> Section {
    let exercises = if day_type == DayType::FullBody {
        let lower_pool = shuffled_pool(catalog, constraints, &LOWER_BODY, rng);
        let upper_pool = shuffled_pool(catalog, constraints, &UPPER_BODY, rng);
        let selection =
            allocate_full_body(&lower_pool, &upper_pool, &constraints.must_have, target);
        interleave_full_body(&selection)
    } else {
        let pool = shuffled_pool(catalog, constraints, day_type.muscle_groups(), rng);
        let selected = allocate(
            &pool,
            &constraints.must_have,
            &constraints.avoid,
            target,
            settings.compound_ratio,
        );
        sequence(&selected, settings.alternate_primary_muscles)
    };

    if exercises.is_empty() {
        debug!("no exercises available for {day_type} day");
    }

    Section::exercises(MAIN_TITLE, &exercises)
}

fn abs_section<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &PlanConstraints,
    settings: &Settings,
    main: &Section,
    rng: &mut R,
) -> Section {
    let mut pool = shuffled_pool(catalog, constraints, &[MuscleGroup::Abs], rng);
    pool.retain(|e| !main.contains(&e.name));
    let selected = allocate_abs(
        &pool,
        &constraints.must_have,
        settings.abs_exercises,
        settings.abs_compounds,
    );

    if selected.is_empty() {
        debug!("no abs exercises available");
    }

    Section::exercises(ABS_TITLE, &selected)
}

fn flexibility_section() -> Section {
    Section {
        title: FLEXIBILITY_TITLE.to_string(),
        items: vec![
            PlanItem::text(
                "Choose 3-4 stretches that target the muscles you worked",
                Some("Hold each for 30-60 seconds, breathing deeply. Don't push into pain!"),
            ),
            PlanItem::text(
                "After Push/Upper Body",
                Some("Focus on Chest (Doorway Stretch) and Shoulders (Cross-body Stretch)."),
            ),
            PlanItem::text(
                "After Pull/Upper Body",
                Some("Focus on Lats (Child's Pose) and Biceps."),
            ),
            PlanItem::text(
                "After Legs/Lower Body",
                Some(
                    "Focus on Hamstrings (Seated Forward Bend), Quads (Lying Quad Stretch), and Glutes (Pigeon Pose).",
                ),
            ),
            PlanItem::text(
                "After Full Body",
                Some("Try a full flow like Downward Dog, Cat-Cow, and World's Greatest Stretch."),
            ),
        ],
    }
}
