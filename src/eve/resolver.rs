//! Item name resolution: exact, then prefix, then substring.
//!
//! Each stage asks the store for candidates. One candidate resolves. Two
//! candidates where exactly one is a blueprint resolve to the other one.
//! Anything else with candidates is ambiguous and every candidate is
//! reported.

use crate::sde::{like_exact, like_prefix, like_substring, ItemFilter, Record, SdeResult, StaticData};

const BLUEPRINT_SUFFIX: &str = "Blueprint";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Exact,
    Prefix,
    Substring,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotFound,
    Ambiguous(Vec<Record>),
    Resolved(Record),
}

impl Resolution {
    /// Reply text for the non-resolved outcomes; `None` when resolved.
    pub fn describe_failure(&self) -> Option<String> {
        match self {
            Resolution::NotFound => Some("Item not found".to_string()),
            Resolution::Ambiguous(records) => {
                let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
                Some(format!("Found items: {}", names.join(", ")))
            }
            Resolution::Resolved(_) => None,
        }
    }
}

/// Resolve an item name against the static data.
///
/// The exact stage ignores `filter` so a precisely typed name always
/// resolves; the partial stages honour it.
pub fn resolve_item(sde: &StaticData, query: &str, filter: ItemFilter) -> SdeResult<Resolution> {
    resolve_with(query, |stage, pattern| {
        let stage_filter = match stage {
            MatchStage::Exact => ItemFilter::Any,
            MatchStage::Prefix | MatchStage::Substring => filter,
        };
        sde.search_types(pattern, stage_filter)
    })
}

/// Stage driver over any candidate source. `search` receives the stage and a
/// lowercase, escaped `LIKE` pattern.
pub fn resolve_with<F>(query: &str, mut search: F) -> SdeResult<Resolution>
where
    F: FnMut(MatchStage, &str) -> SdeResult<Vec<Record>>,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(Resolution::NotFound);
    }

    let mut exact = search(MatchStage::Exact, &like_exact(query))?;
    if exact.len() == 1 {
        return Ok(Resolution::Resolved(exact.remove(0)));
    }

    for (stage, pattern) in [
        (MatchStage::Prefix, like_prefix(query)),
        (MatchStage::Substring, like_substring(query)),
    ] {
        if let Some(resolution) = classify(search(stage, &pattern)?) {
            return Ok(resolution);
        }
    }
    Ok(Resolution::NotFound)
}

fn is_blueprint(record: &Record) -> bool {
    record.name.ends_with(BLUEPRINT_SUFFIX)
}

fn classify(mut candidates: Vec<Record>) -> Option<Resolution> {
    match candidates.len() {
        0 => None,
        1 => Some(Resolution::Resolved(candidates.remove(0))),
        2 if is_blueprint(&candidates[0]) != is_blueprint(&candidates[1]) => {
            let keep = if is_blueprint(&candidates[0]) { 1 } else { 0 };
            Some(Resolution::Resolved(candidates.swap_remove(keep)))
        }
        _ => Some(Resolution::Ambiguous(candidates)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, name: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn exact_match_skips_later_stages() {
        let mut stages = Vec::new();
        let result = resolve_with("tritanium", |stage, _| {
            stages.push(stage);
            Ok(vec![rec(34, "Tritanium")])
        })
        .unwrap();
        assert_eq!(result, Resolution::Resolved(rec(34, "Tritanium")));
        assert_eq!(stages, vec![MatchStage::Exact]);
    }

    #[test]
    fn blueprint_pair_prefers_item_in_either_order() {
        for pair in [
            vec![rec(1, "Rifter"), rec(2, "Rifter Blueprint")],
            vec![rec(2, "Rifter Blueprint"), rec(1, "Rifter")],
        ] {
            let result = resolve_with("rift", |stage, _| match stage {
                MatchStage::Prefix => Ok(pair.clone()),
                _ => Ok(vec![]),
            })
            .unwrap();
            assert_eq!(result, Resolution::Resolved(rec(1, "Rifter")));
        }
    }

    #[test]
    fn two_blueprints_or_two_items_are_ambiguous() {
        let both_bp = vec![rec(1, "A Blueprint"), rec(2, "B Blueprint")];
        let result = resolve_with("x", |stage, _| match stage {
            MatchStage::Prefix => Ok(both_bp.clone()),
            _ => Ok(vec![]),
        })
        .unwrap();
        assert_eq!(result, Resolution::Ambiguous(both_bp));
    }

    #[test]
    fn substring_used_after_empty_prefix() {
        let result = resolve_with("plex", |stage, pattern| match stage {
            MatchStage::Substring => {
                assert_eq!(pattern, "%plex%");
                Ok(vec![rec(44992, "PLEX")])
            }
            _ => Ok(vec![]),
        })
        .unwrap();
        assert_eq!(result, Resolution::Resolved(rec(44992, "PLEX")));
    }

    #[test]
    fn ambiguous_keeps_every_candidate() {
        let many: Vec<Record> = (0..5).map(|i| rec(i, &format!("Drone {}", i))).collect();
        let result = resolve_with("drone", |stage, _| match stage {
            MatchStage::Exact => Ok(vec![]),
            _ => Ok(many.clone()),
        })
        .unwrap();
        let text = result.describe_failure().unwrap();
        for r in &many {
            assert!(text.contains(&r.name), "missing {} in {}", r.name, text);
        }
    }

    #[test]
    fn blank_query_is_not_found() {
        let result = resolve_with("   ", |_, _| panic!("store must not be queried")).unwrap();
        assert_eq!(result, Resolution::NotFound);
    }
}
