//! The `aptreg summary` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use aptreg_core::config::load_config_from;
use aptreg_core::store::CsvStore;
use aptreg_core::summary::Summary;

pub fn execute(
    store_path: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?.with_overrides(store_path, None);

    let store = CsvStore::new(&config.store_path);
    let students = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    let summary = Summary::from_students(&students);

    match format.as_str() {
        "json" => println!("{}", summary.to_json()?),
        "table" => print_tables(&summary),
        "text" => println!("{}", summary.render_text()),
        other => anyhow::bail!("unknown format: {other} (expected text, table, or json)"),
    }

    Ok(())
}

fn print_tables(summary: &Summary) {
    let mut students = Table::new();
    students.set_header(vec![
        "Name",
        "Age",
        "Gender",
        "Grade",
        "Level",
        "Eligibility",
        "Test Score",
    ]);
    for s in &summary.students {
        students.add_row(vec![
            Cell::new(&s.name),
            Cell::new(s.age),
            Cell::new(s.gender),
            Cell::new(s.grade.map_or_else(|| "-".to_string(), |g| g.to_string())),
            Cell::new(s.level.map_or_else(|| "-".to_string(), |l| l.to_string())),
            Cell::new(if s.eligible { "Eligible" } else { "Not Eligible" }),
            Cell::new(s.test_score),
        ]);
    }

    let mut levels = Table::new();
    levels.set_header(vec!["Level", "Students", "Males", "Females"]);
    for (level, count) in summary.levels() {
        levels.add_row(vec![
            Cell::new(level),
            Cell::new(count.students),
            Cell::new(count.males),
            Cell::new(count.females),
        ]);
    }

    println!("{students}\n\n{levels}");
}
