//! `!jumps <from> <to> [secure]`: route between two systems via ESI.

use log::warn;

use crate::eve::humanize::{display_security, SecurityClass};
use crate::eve::models::RouteFlag;
use crate::eve::EveApi;
use crate::sde::{SdeResult, StaticData, SystemSecurity};

pub fn usage(prefix: char) -> String {
    format!("usage: {}jumps <from> <to> [secure]", prefix)
}

pub async fn jumps<A: EveApi>(
    sde: &StaticData,
    api: &A,
    prefix: char,
    args: &str,
) -> SdeResult<String> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if !(2..=3).contains(&tokens.len()) {
        return Ok(usage(prefix));
    }

    let (Some(origin), Some(destination)) =
        (sde.system_by_name(tokens[0])?, sde.system_by_name(tokens[1])?)
    else {
        return Ok("one or more systems not found".to_string());
    };
    let flag = tokens
        .get(2)
        .map(|word| RouteFlag::from_word(word))
        .unwrap_or(RouteFlag::Shortest);

    let hops = match api.route(origin.id, destination.id, flag).await {
        Ok(Some(hops)) => hops,
        Ok(None) => return Ok("no route found".to_string()),
        Err(e) => {
            warn!("Route {} -> {} failed: {}", origin.name, destination.name, e);
            return Ok("error getting jumps".to_string());
        }
    };

    let systems = hops
        .into_iter()
        .map(|id| sde.system_security(id))
        .collect::<SdeResult<Vec<_>>>()?;
    Ok(format_route(&systems, flag))
}

/// `N jumps (flag):` (`1 jump` for a single hop) then the hops joined by arrows. A hop whose security
/// class differs from the previous hop is tagged with its new class.
pub fn format_route(systems: &[SystemSecurity], flag: RouteFlag) -> String {
    let mut previous: Option<SecurityClass> = None;
    let hops: Vec<String> = systems
        .iter()
        .map(|system| {
            let class = SecurityClass::of(system.security);
            let hop = format!("{} {}", system.name, display_security(system.security));
            let changed = previous.is_some_and(|p| p != class);
            previous = Some(class);
            if changed {
                format!("[{}] {}", class.label(), hop)
            } else {
                hop
            }
        })
        .collect();
    let count = systems.len().saturating_sub(1);
    format!(
        "{} {} ({}):\n{}",
        count,
        if count == 1 { "jump" } else { "jumps" },
        flag.as_str(),
        hops.join(" -> ")
    )
}
