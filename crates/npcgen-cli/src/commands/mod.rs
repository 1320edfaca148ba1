pub mod check;
pub mod generate;
pub mod types;

use std::path::Path;

use npcgen_core::TableBundle;

/// Load tables from `dir`, or the built-in set when no directory is given.
fn load_tables(dir: Option<&Path>) -> Result<TableBundle, String> {
    let tables = match dir {
        Some(dir) => TableBundle::load_dir(dir),
        None => TableBundle::builtin(),
    };
    tables.map_err(|e| format!("failed to load tables: {e}"))
}
