use std::path::Path;

use colored::Colorize;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(data)?;
    let issues = tables.validate();

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }
    println!(
        "  {} NPC types, {} planes, {} tarot cards",
        tables.scenarios.len(),
        tables.planes.len(),
        tables.tarot.len()
    );

    Ok(())
}
