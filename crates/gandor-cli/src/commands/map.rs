//! Room map listing as a table or JSON.

use comfy_table::{ContentArrangement, Table};
use gandor_core::builder::build_world;

pub fn run(format: &str) -> Result<(), String> {
    let world = build_world();
    world.validate().map_err(|e| e.to_string())?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&world).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        "table" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Room", "Exits", "Capabilities", "Items", "Description"]);

            for room in world.rooms() {
                let exits = room.exit_labels().join(", ");

                let mut caps = Vec::new();
                if let Some(enemy) = room.enemy() {
                    caps.push(format!("enemy: {}", enemy.name));
                }
                if room.riddle().is_some() {
                    caps.push("riddle".to_string());
                }
                if room.climb().is_some() {
                    caps.push("climb".to_string());
                }

                let items = room.items().len().to_string();

                let desc = truncate(&room.description, 60);

                table.add_row(vec![
                    room.id.to_string(),
                    exits,
                    caps.join(", "),
                    items,
                    desc,
                ]);
            }

            println!("{table}");
            println!();
            println!("  {} rooms", world.len());
            Ok(())
        }
        other => Err(format!("unknown format '{other}' (expected table or json)")),
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
