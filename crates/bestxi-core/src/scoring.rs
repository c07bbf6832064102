// Role compatibility scoring between a player's role tags and a slot.

use crate::roles::{parse_token, RoleCode};

/// Whether a single player tag reaches the slot through the goalkeeper
/// alias (`P` on one side, `Por` on the other).
fn goalkeeper_alias(tag: Option<RoleCode>, alternatives: &[RoleCode]) -> bool {
    match tag {
        Some(RoleCode::P) => alternatives.contains(&RoleCode::Por),
        Some(RoleCode::Por) => alternatives.contains(&RoleCode::P),
        _ => false,
    }
}

/// Individual role codes of a tag list; a compound tag such as `"W/A"`
/// yields one element per code.
fn split_tags<'a, S: AsRef<str>>(tags: &'a [S]) -> impl Iterator<Item = &'a str> + 'a {
    tags.iter().flat_map(|tag| tag.as_ref().split('/'))
}

/// Boolean compatibility gate.
///
/// Tags are compared case-insensitively against the slot's alternatives,
/// and the goalkeeper alias counts as a match.
pub fn is_compatible<S: AsRef<str>>(tags: &[S], alternatives: &[RoleCode]) -> bool {
    split_tags(tags).any(|tag| {
        let code = RoleCode::parse_ignore_case(tag.trim());
        code.is_some_and(|c| alternatives.contains(&c)) || goalkeeper_alias(code, alternatives)
    })
}

/// Number of tags that literally (case-sensitive) name one of the slot's
/// alternatives. Duplicate tags count once each.
pub fn literal_matches<S: AsRef<str>>(tags: &[S], alternatives: &[RoleCode]) -> u32 {
    split_tags(tags)
        .filter_map(RoleCode::parse)
        .filter(|code| alternatives.contains(code))
        .count() as u32
}

/// Compatibility score of a player's role tags for a slot. `0` means the
/// player cannot play there.
///
/// A compatible player scores the number of literal matches, and at least
/// 1 when the gate only passes through the alias or a case-insensitive match.
pub fn score<S: AsRef<str>>(tags: &[S], alternatives: &[RoleCode]) -> u32 {
    if !is_compatible(tags, alternatives) {
        return 0;
    }
    literal_matches(tags, alternatives).max(1)
}

/// [`score`] against a raw `/`-separated position token.
pub fn score_token<S: AsRef<str>>(tags: &[S], token: &str) -> u32 {
    score(tags, &parse_token(token))
}
