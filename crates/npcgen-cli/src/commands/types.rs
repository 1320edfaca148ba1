use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(data)?;

    if tables.scenarios.is_empty() {
        println!("  No NPC types defined. Any type rolls its alignment from a plane.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Good", "Neutral", "Evil", "Lawful", "Neutral", "Chaotic"]);

    for npc_type in tables.npc_types() {
        let Some(s) = tables.scenarios.get(npc_type) else {
            continue;
        };
        table.add_row(vec![
            npc_type.to_string(),
            percent(s.good),
            percent(s.neutral),
            percent(100.0 - s.good - s.neutral),
            percent(s.lawful),
            percent(s.neutral_ethic),
            percent(100.0 - s.lawful - s.neutral_ethic),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} NPC types", tables.npc_types().count());

    Ok(())
}

fn percent(value: f64) -> String {
    format!("{}%", value.max(0.0))
}
