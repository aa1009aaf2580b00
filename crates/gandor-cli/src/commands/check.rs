//! Build the canonical world and verify graph integrity.

use colored::Colorize;
use gandor_core::builder::build_world;

pub fn run() -> Result<(), String> {
    let world = build_world();
    world.validate().map_err(|e| e.to_string())?;

    let enemies = world.rooms().filter(|r| r.enemy().is_some()).count();
    let riddles = world.rooms().filter(|r| r.riddle().is_some()).count();
    let climbs = world.rooms().filter(|r| r.climb().is_some()).count();

    println!("{} world graph is consistent", "ok:".green().bold());
    println!("  {} rooms, {} exits, {} items", world.len(), world.exit_count(), world.item_count());
    println!("  {enemies} enemies, {riddles} riddles, {climbs} climb gates");
    println!("  start: {}", world.start());

    Ok(())
}
