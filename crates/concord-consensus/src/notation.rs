//! Bracket notation: `[1,[2,3],4]` is a ranking of three items, the middle one
//! a tie-group.
//!
//! The core stages never touch text; this module is the boundary used by
//! `ConsensusEngine::run_json`.

use concord_core::{ClusterRanking, ConsensusError, ObjectId, RankItem, RankingError};
use serde_json::Value;

/// Parse a ranking from JSON array notation.
///
/// Accepts a top-level array whose elements are integers or non-empty arrays of
/// integers. Anything else is `MalformedRanking`.
pub fn parse_ranking(text: &str) -> Result<ClusterRanking, RankingError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| RankingError::malformed(format!("invalid JSON: {e}")))?;

    let Value::Array(elements) = value else {
        return Err(RankingError::malformed(format!(
            "expected a top-level array, found {}",
            kind(&value)
        )));
    };

    let items = elements
        .iter()
        .enumerate()
        .map(|(idx, element)| parse_item(idx, element))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClusterRanking::new(items))
}

fn parse_item(idx: usize, element: &Value) -> Result<RankItem, RankingError> {
    match element {
        Value::Array(members) => {
            if members.is_empty() {
                return Err(RankingError::malformed(format!("item {idx} is an empty tie-group")));
            }
            let group = members
                .iter()
                .map(|m| {
                    object_id(m).ok_or_else(|| {
                        RankingError::malformed(format!(
                            "item {idx}: tie-group members must be integers, found {}",
                            kind(m)
                        ))
                    })
                })
                .collect::<Result<_, _>>()?;
            Ok(RankItem::Group(group))
        }
        other => object_id(other).map(RankItem::Singleton).ok_or_else(|| {
            RankingError::malformed(format!(
                "item {idx} must be an integer or an array of integers, found {}",
                kind(other)
            ))
        }),
    }
}

fn object_id(value: &Value) -> Option<ObjectId> {
    value.as_i64()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an out-of-range integer",
        Value::Number(_) => "a non-integer number",
        Value::String(_) => "a string",
        Value::Array(_) => "a nested array",
        Value::Object(_) => "an object",
    }
}

/// Render a ranking in compact JSON array notation.
pub fn format_ranking(ranking: &ClusterRanking) -> Result<String, ConsensusError> {
    serde_json::to_string(ranking).map_err(|e| ConsensusError::Serialization {
        message: e.to_string(),
    })
}
