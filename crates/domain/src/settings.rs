use serde::{Deserialize, Serialize};

/// Tunables of the plan generator.
///
/// Missing fields fall back to their defaults when deserializing, so a settings file only needs
/// to mention the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub weeks: u8,
    /// Lower bound for the number of main lifts per day.
    pub minimum_exercises: u32,
    pub minutes_per_exercise: u32,
    /// Share of freely drawn main lifts that are compound movements.
    pub compound_ratio: f32,
    pub abs_minutes: u32,
    pub flexibility_minutes: u32,
    pub abs_exercises: usize,
    pub abs_compounds: usize,
    /// Reorder main lifts so that consecutive compounds work different primary muscles.
    pub alternate_primary_muscles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weeks: 4,
            minimum_exercises: 5,
            minutes_per_exercise: 7,
            compound_ratio: 0.4,
            abs_minutes: 10,
            flexibility_minutes: 5,
            abs_exercises: 3,
            abs_compounds: 1,
            alternate_primary_muscles: true,
        }
    }
}

impl Settings {
    /// Number of main lifts that fit into the given time.
    #[must_use]
    pub fn target_count(&self, available_minutes: u32) -> usize {
        let fitting = available_minutes
            .checked_div(self.minutes_per_exercise)
            .unwrap_or(0);
        fitting.max(self.minimum_exercises) as usize
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 5)]
    #[case(20, 5)]
    #[case(35, 5)]
    #[case(45, 6)]
    #[case(60, 8)]
    #[case(90, 12)]
    fn test_target_count(#[case] available_minutes: u32, #[case] expected: usize) {
        assert_eq!(Settings::default().target_count(available_minutes), expected);
    }

    #[test]
    fn test_target_count_without_minutes_per_exercise() {
        let settings = Settings {
            minutes_per_exercise: 0,
            minimum_exercises: 6,
            ..Settings::default()
        };
        assert_eq!(settings.target_count(60), 6);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: Settings =
            serde_json::from_str(r#"{"minimum_exercises": 6, "compound_ratio": 0.7}"#).unwrap();

        assert_eq!(
            settings,
            Settings {
                minimum_exercises: 6,
                compound_ratio: 0.7,
                ..Settings::default()
            }
        );
    }
}
