use std::fmt::Write;

use chrono::NaiveDate;
use liftplan_domain::{Catalog, DayPlan, ItemCategory, Plan, PlanItem, ProgressStats, Weight};

pub fn plan(plan: &Plan) -> String {
    let mut out = String::new();

    for week in &plan.weeks {
        let _ = writeln!(out, "Week {}\n", week.number);
        for day in &week.days {
            day_plan(&mut out, day);
        }
    }

    out
}

fn day_plan(out: &mut String, day: &DayPlan) {
    let header = day.header();
    let _ = writeln!(out, "{header}\n{}", "-".repeat(header.len()));

    for section in &day.sections {
        let _ = writeln!(out, "{}", section.title);
        for item in &section.items {
            plan_item(out, item);
        }
        out.push('\n');
    }
}

fn plan_item(out: &mut String, item: &PlanItem) {
    let _ = write!(out, "  - {}", item.name);

    let mut tags = item
        .category
        .iter()
        .map(|c| match c {
            ItemCategory::Compound => "compound".to_string(),
            ItemCategory::Isolation => "isolation".to_string(),
            ItemCategory::Cardio => "cardio".to_string(),
        })
        .collect::<Vec<_>>();
    tags.extend(item.muscles.iter().map(ToString::to_string));

    if !tags.is_empty() {
        let _ = write!(out, " [{}]", tags.join(", "));
    }
    out.push('\n');

    if let Some(details) = &item.details {
        let _ = writeln!(out, "    {details}");
    }
}

pub fn exercises(catalog: &Catalog) -> String {
    let mut out = String::new();

    for (group, exercises) in catalog.groups() {
        let _ = writeln!(out, "{group}");
        for exercise in exercises {
            let _ = writeln!(
                out,
                "  - {} ({}, {})",
                exercise.name, exercise.mechanic, exercise.difficulty
            );
        }
    }

    out
}

pub fn max_weight_series(name: &str, series: &[(NaiveDate, Weight)]) -> String {
    if series.is_empty() {
        return format!("No sets logged for {name}\n");
    }

    let mut out = format!("{name}\n");
    for (date, weight) in series {
        let _ = writeln!(out, "  {date}  {weight} kg");
    }
    out
}

pub fn stats(stats: &ProgressStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Workouts:     {}", stats.workouts);
    let _ = writeln!(out, "Total sets:   {}", stats.total_sets);
    let _ = writeln!(out, "Total volume: {:.1} kg", stats.total_volume);
    match &stats.heaviest {
        Some((name, weight)) => {
            let _ = writeln!(out, "Heaviest set: {weight} kg ({name})");
        }
        None => {
            let _ = writeln!(out, "Heaviest set: -");
        }
    }
    out
}
