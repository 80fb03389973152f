#![warn(clippy::pedantic)]

use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use liftplan_domain::{
    Cardio, CardioMachine, Catalog, DaysPerWeek, Equipment, ExerciseName, Level, LoggedSet,
    NameSet, PlanConstraints, ProgressService, Reps, Service, Settings, Split, Weight,
};
use log::{LevelFilter, debug, warn};
use rand::{SeedableRng, rngs::StdRng};

mod logger;
mod render;
mod storage;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(author, version, about = "Strength training plan generator and progress log")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file overriding generator settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// JSON file replacing the built-in exercise catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON file storing logged sets
    #[arg(long, global = true, default_value = "liftplan-progress.json")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a training plan
    Generate(GenerateArgs),

    /// List the exercises of the catalog
    Exercises,

    /// Log the sets of an exercise
    Log(LogArgs),

    /// Show the heaviest weight per workout of an exercise
    Progress {
        #[arg(value_parser = ExerciseName::new)]
        exercise: ExerciseName,
    },

    /// Show statistics over all logged sets
    Stats,
}

#[derive(Args)]
struct GenerateArgs {
    /// Available equipment (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "bodyweight")]
    equipment: Vec<Equipment>,

    /// Training days per week (1-6)
    #[arg(long, default_value = "3", value_parser = parse_days)]
    days: DaysPerWeek,

    /// Session length in minutes
    #[arg(long, default_value_t = 45)]
    session_length: u32,

    #[arg(long, default_value_t = Split::FullBody)]
    split: Split,

    #[arg(long, default_value_t = Level::Beginner)]
    level: Level,

    /// Cardio machine for the warmup
    #[arg(long, requires = "cardio_minutes")]
    cardio: Option<CardioMachine>,

    #[arg(long, requires = "cardio")]
    cardio_minutes: Option<u32>,

    /// Add an abs finisher
    #[arg(long)]
    abs: bool,

    /// Add a cool-down with stretching ideas
    #[arg(long)]
    flexibility: bool,

    /// Exercise to include on every day it fits
    #[arg(long, value_parser = ExerciseName::new)]
    must_have: Vec<ExerciseName>,

    /// Exercise to exclude
    #[arg(long)]
    avoid: Vec<String>,

    /// Seed for reproducible plans
    #[arg(long)]
    seed: Option<u64>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LogArgs {
    #[arg(value_parser = ExerciseName::new)]
    exercise: ExerciseName,

    /// Date of the workout (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Set as REPSxKG, e.g. 10x22.5
    #[arg(long = "set", required = true, value_parser = parse_set)]
    sets: Vec<LoggedSet>,
}

fn parse_days(value: &str) -> Result<DaysPerWeek, liftplan_domain::DaysError> {
    DaysPerWeek::try_from(value)
}

fn parse_set(value: &str) -> anyhow::Result<LoggedSet> {
    let Some((reps, weight)) = value.split_once(['x', 'X']) else {
        bail!("expected REPSxKG, e.g. 10x22.5");
    };
    Ok(LoggedSet {
        reps: Reps::try_from(reps.trim())?,
        weight: Weight::try_from(weight.trim())?,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    })?;

    let settings = storage::read_json_or_default::<Settings>(cli.settings.as_deref())?;
    let custom_catalog;
    let catalog = match cli.catalog.as_deref() {
        Some(path) => {
            custom_catalog = storage::read_json_or_default::<Catalog>(Some(path))?;
            debug!("using catalog {}", path.display());
            &custom_catalog
        }
        None => Catalog::builtin(),
    };

    match cli.command {
        Commands::Generate(args) => generate(catalog, &settings, args),
        Commands::Exercises => {
            print!("{}", render::exercises(catalog));
            Ok(())
        }
        Commands::Log(args) => {
            let exercise = known_exercise(catalog, &args.exercise)?;
            let date = args.date.unwrap_or_else(|| Local::now().date_naive());
            Service::new(storage::JsonFile::new(&cli.data))
                .log_sets(&exercise, date, args.sets)
                .context("failed to log sets")?;
            println!("Logged {exercise} on {date}");
            Ok(())
        }
        Commands::Progress { exercise } => {
            let series = Service::new(storage::JsonFile::new(&cli.data))
                .get_max_weight_series(&exercise)?;
            print!("{}", render::max_weight_series(&exercise.to_string(), &series));
            Ok(())
        }
        Commands::Stats => {
            let stats = Service::new(storage::JsonFile::new(&cli.data)).get_stats()?;
            print!("{}", render::stats(&stats));
            Ok(())
        }
    }
}

fn generate(catalog: &Catalog, settings: &Settings, args: GenerateArgs) -> anyhow::Result<()> {
    for name in &args.must_have {
        if catalog.find(&name.to_string()).is_none() {
            warn!("must-have exercise {name} is not in the catalog");
        }
    }

    let constraints = PlanConstraints {
        equipment: args.equipment.into_iter().collect::<BTreeSet<_>>(),
        days: args.days,
        session_length: args.session_length,
        split: args.split,
        fitness_level: args.level,
        cardio: args
            .cardio
            .zip(args.cardio_minutes)
            .map(|(machine, minutes)| Cardio { machine, minutes }),
        abs: args.abs,
        flexibility: args.flexibility,
        must_have: args.must_have,
        avoid: args.avoid.iter().collect::<NameSet>(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plan = liftplan_domain::generate(catalog, &constraints, settings, &mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::plan(&plan));
    }

    Ok(())
}

/// Resolves a user supplied name to the catalog spelling.
fn known_exercise(catalog: &Catalog, name: &ExerciseName) -> anyhow::Result<ExerciseName> {
    match catalog.find(&name.to_string()) {
        Some(exercise) => Ok(ExerciseName::new(&exercise.name)?),
        None => bail!("unknown exercise: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("10x22.5", 10, 22.5)]
    #[case("8X0", 8, 0.0)]
    #[case(" 5 x 100 ", 5, 100.0)]
    fn test_parse_set(#[case] input: &str, #[case] reps: u32, #[case] weight: f32) {
        assert_eq!(
            parse_set(input).unwrap(),
            LoggedSet {
                reps: Reps::new(reps).unwrap(),
                weight: Weight::new(weight).unwrap(),
            }
        );
    }

    #[rstest]
    #[case("10")]
    #[case("tenx20")]
    #[case("10x1.25")]
    #[case("1000x20")]
    fn test_parse_set_invalid(#[case] input: &str) {
        assert!(parse_set(input).is_err());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "liftplan",
            "generate",
            "--equipment",
            "dumbbells,pull-up-bar",
            "--days",
            "4",
            "--split",
            "upper-lower",
            "--level",
            "intermediate",
            "--cardio",
            "stair-climber",
            "--cardio-minutes",
            "10",
            "--must-have",
            "Pull-Up",
            "--avoid",
            "Dip",
            "--seed",
            "7",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(
            args.equipment,
            vec![Equipment::Dumbbells, Equipment::PullUpBar]
        );
        assert_eq!(u8::from(args.days), 4);
        assert_eq!(args.split, Split::UpperLower);
        assert_eq!(args.level, Level::Intermediate);
        assert_eq!(args.cardio, Some(CardioMachine::StairClimber));
        assert_eq!(args.must_have, vec![ExerciseName::new("Pull-Up").unwrap()]);
        assert_eq!(args.seed, Some(7));
    }

    #[rstest]
    #[case(&["liftplan", "generate", "--days", "7"])]
    #[case(&["liftplan", "generate", "--cardio", "bike"])]
    #[case(&["liftplan", "generate", "--equipment", "rope"])]
    #[case(&["liftplan", "log", "Dip"])]
    fn test_invalid_args(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_known_exercise() {
        let catalog = Catalog::builtin();

        assert_eq!(
            known_exercise(catalog, &ExerciseName::new("goblet   squat").unwrap()).unwrap(),
            ExerciseName::new("Goblet Squat").unwrap()
        );
        assert!(known_exercise(catalog, &ExerciseName::new("Moon Walk").unwrap()).is_err());
    }
}
