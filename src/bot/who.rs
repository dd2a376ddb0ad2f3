//! `!who <name>`: character / corporation / alliance summary.
//!
//! The name is resolved once through ESI, then each step only runs when the
//! previous one produced an id: character -> its corporation -> its alliance.
//! Killboard lookups are best-effort; a zKillboard outage shows zero counts
//! instead of failing the reply.

use chrono::{DateTime, Utc};
use log::warn;

use super::commands::code_block;
use crate::eve::humanize::humanize_since;
use crate::eve::models::{CharacterInfo, CorporationInfo, EntityKind, KillboardStats, UniverseIds};
use crate::eve::{EveApi, EveResult};

pub fn usage(prefix: char) -> String {
    format!("usage: {}who <name>", prefix)
}

pub fn not_found(sender: &str) -> String {
    format!("{}: couldn't find your sleazebag", sender)
}

pub const UPSTREAM_FAILURE: &str = "error talking to EVE services, try again later";

pub async fn who<A: EveApi>(
    api: &A,
    sender: &str,
    prefix: char,
    args: &str,
    now: DateTime<Utc>,
) -> String {
    let name = args.trim();
    if name.is_empty() {
        return usage(prefix);
    }
    match lookup(api, name, now).await {
        Ok(Some(lines)) => code_block(&lines.join("\n")),
        Ok(None) => not_found(sender),
        Err(e) if e.is_not_found_class() => not_found(sender),
        Err(e) => {
            warn!("Who lookup for '{}' failed: {}", name, e);
            UPSTREAM_FAILURE.to_string()
        }
    }
}

async fn lookup<A: EveApi>(api: &A, name: &str, now: DateTime<Utc>) -> EveResult<Option<Vec<String>>> {
    let ids: UniverseIds = api.resolve_ids(name).await?;
    if ids.is_empty() {
        return Ok(None);
    }

    let mut lines = Vec::new();

    let character = match ids.character_id() {
        Some(id) => Some(describe_character(api, id, now, &mut lines).await?),
        None => None,
    };

    let corporation_id = character
        .as_ref()
        .map(|c| c.corporation_id)
        .or_else(|| ids.corporation_id());
    let corporation = match corporation_id {
        Some(id) => Some(describe_corporation(api, id, &mut lines).await?),
        None => None,
    };

    // Only fall back to a matched alliance name when nothing more specific matched.
    let alliance_id = match &corporation {
        Some(corp) => corp.alliance_id,
        None => ids.alliance_id(),
    };
    if let Some(id) = alliance_id {
        let alliance = api.alliance(id).await?;
        let stats = killboard_stats(api, EntityKind::Alliance, id).await;
        lines.push(format!(
            "{} <{}> {} active members",
            alliance.name,
            alliance.ticker,
            stats.active_characters()
        ));
    }

    Ok(Some(lines))
}

async fn describe_character<A: EveApi>(
    api: &A,
    id: i64,
    now: DateTime<Utc>,
    lines: &mut Vec<String>,
) -> EveResult<CharacterInfo> {
    let character = api.character(id).await?;
    let stats = killboard_stats(api, EntityKind::Character, id).await;
    let last_kill = match api.latest_kill(EntityKind::Character, id).await {
        Ok(kill) => kill,
        Err(e) => {
            warn!("Latest kill for character {} unavailable: {}", id, e);
            None
        }
    };

    let mut line = format!(
        "{} ({:.2}) [{}/{}]",
        character.name,
        character.security_status.unwrap_or(0.0),
        stats.kills(),
        stats.losses()
    );
    if let Some(birthday) = character.birthday {
        line.push_str(&format!(" age {}", humanize_since(birthday, now)));
    }
    match last_kill.and_then(|k| k.killmail_time) {
        Some(at) => line.push_str(&format!(", last active {} ago", humanize_since(at, now))),
        None => line.push_str(", no recorded kills"),
    }
    lines.push(line);
    Ok(character)
}

async fn describe_corporation<A: EveApi>(
    api: &A,
    id: i64,
    lines: &mut Vec<String>,
) -> EveResult<CorporationInfo> {
    let corporation = api.corporation(id).await?;
    let stats = killboard_stats(api, EntityKind::Corporation, id).await;
    let members = corporation
        .member_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    lines.push(format!(
        "{} [{}] {} members, {} active",
        corporation.name,
        corporation.ticker,
        members,
        stats.active_characters()
    ));
    Ok(corporation)
}

async fn killboard_stats<A: EveApi>(api: &A, kind: EntityKind, id: i64) -> KillboardStats {
    api.killboard_stats(kind, id).await.unwrap_or_else(|e| {
        warn!("Killboard stats for {} {} unavailable: {}", kind.zkill_key(), id, e);
        KillboardStats::default()
    })
}
