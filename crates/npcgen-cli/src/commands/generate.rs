use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use npcgen_core::{GeneratedNpc, Generator, GeneratorConfig, NpcError};

pub fn run(
    data: Option<&Path>,
    npc_type: Option<&str>,
    seed: Option<u64>,
    count: u64,
    format: &str,
) -> Result<(), String> {
    if !matches!(format, "json" | "table") {
        return Err(format!(
            "unsupported format: \"{format}\". Use: json, table"
        ));
    }

    let tables = super::load_tables(data)?;
    let mut config = GeneratorConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut generator = Generator::new(tables, config);

    let npcs = (0..count)
        .map(|_| generator.generate(npc_type))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| match e {
            NpcError::MissingNpcType => {
                "no NPC type selected. Pass --type <TYPE> (see `npcgen types`)".to_string()
            }
            other => other.to_string(),
        })?;

    match format {
        "table" => {
            for npc in &npcs {
                print_table(npc);
            }
        }
        _ => println!("{}", render_json(&npcs)?),
    }

    Ok(())
}

fn render_json(npcs: &[GeneratedNpc]) -> Result<String, String> {
    let result = match npcs {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    result.map_err(|e| format!("JSON serialization error: {e}"))
}

fn print_table(npc: &GeneratedNpc) {
    let traits = npc.traits.join(", ");
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Alignment", npc.alignment.as_str()]);
    table.add_row(vec!["Plane", npc.plane.as_str()]);
    table.add_row(vec!["Traits", traits.as_str()]);
    table.add_row(vec!["Class", npc.class_name.as_deref().unwrap_or("—")]);
    table.add_row(vec!["Species", npc.species.as_deref().unwrap_or("—")]);
    table.add_row(vec!["Tarot", npc.tarot.as_deref().unwrap_or("—")]);

    println!("  {} {}", "NPC:".bold(), npc.npc_type);
    println!("{table}");
    println!();
}
