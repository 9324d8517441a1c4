//! The `aptreg init` command.

use std::path::Path;

use anyhow::Result;

use aptreg_core::config::CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to choose where records are stored");
    println!("  2. Run: aptreg register");
    println!("  3. Run: aptreg summary --format table");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# aptreg configuration

# CSV file that registered students are appended to.
store_path = "students.csv"

# Uncomment to make every quiz reproducible.
# seed = 42
"#;
