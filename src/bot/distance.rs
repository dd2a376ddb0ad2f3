//! `!ly <from> <to>`: straight-line distance and jump-drive reach.

use crate::sde::{SdeResult, StaticData, SystemPosition};

/// Metres per light-year as used by the game client.
pub const METRES_PER_LY: f64 = 9.4605284e15;

/// Base jump range in light-years per ship class, in reply order.
pub const SHIP_RANGES: [(&str, f64); 4] = [
    ("other", 3.5),
    ("blops", 4.0),
    ("JF", 5.0),
    ("super", 3.0),
];

pub const MAX_SKILL_LEVEL: u8 = 5;

/// Rows fetched when searching; more than two is an error anyway.
const MAX_MATCHES: usize = 6;

pub fn usage(prefix: char) -> String {
    format!("usage: {}ly <from> <to>", prefix)
}

/// Range at a skill level: +20% of base per level.
pub fn level_range(base_range: f64, level: u8) -> f64 {
    base_range * (1.0 + f64::from(level) * 0.2)
}

/// Lowest level whose range covers the distance (inclusive).
pub fn jump_level(distance_ly: f64, base_range: f64) -> Option<u8> {
    (0..=MAX_SKILL_LEVEL).find(|&level| distance_ly <= level_range(base_range, level))
}

pub fn lightyears(sde: &StaticData, prefix: char, args: &str) -> SdeResult<String> {
    let tokens: Vec<String> = args.split_whitespace().map(str::to_lowercase).collect();
    let [first, second] = tokens.as_slice() else {
        return Ok(usage(prefix));
    };

    let systems = sde.systems_by_prefixes(first, second, MAX_MATCHES)?;
    let (a, b) = match systems.as_slice() {
        // Rows come back sorted by name; reply in the order they were asked for.
        [a, b] if matches_prefix(b, first) && !matches_prefix(a, first) => (b, a),
        [a, b] => (a, b),
        [] | [_] => return Ok("error: one or both systems not found".to_string()),
        many => {
            let names: Vec<&str> = many.iter().map(|s| s.name.as_str()).collect();
            return Ok(format!("error: found too many systems: {}", names.join(" ")));
        }
    };

    let distance = a.distance_to(b) / METRES_PER_LY;
    Ok(format_reach(&a.name, &b.name, distance))
}

fn matches_prefix(system: &SystemPosition, prefix: &str) -> bool {
    system.name.to_lowercase().starts_with(prefix)
}

pub fn format_reach(from: &str, to: &str, distance_ly: f64) -> String {
    let mut lines = vec![format!("{} ⟷ {}: {:.3} ly", from, to, distance_ly)];
    for (ship, range) in SHIP_RANGES {
        let level = jump_level(distance_ly, range)
            .map(|l| l.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("{:<7}{}", format!("{}:", ship), level));
    }
    super::commands::code_block(&lines.join("\n"))
}
