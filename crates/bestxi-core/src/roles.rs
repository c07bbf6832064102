// Role vocabulary: player role tags and compound position-role tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Every role code the lineup tables and the data feed use.
///
/// `P` is the goalkeeper code used by formation tables and some player
/// records; the remaining codes form the mantra vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCode {
    P,
    Por,
    B,
    DC,
    DD,
    DS,
    E,
    M,
    C,
    W,
    T,
    A,
    PC,
}

/// The mantra vocabulary in its canonical order.
pub const MANTRA_ROLES: [RoleCode; 12] = [
    RoleCode::Por,
    RoleCode::B,
    RoleCode::DC,
    RoleCode::DD,
    RoleCode::DS,
    RoleCode::E,
    RoleCode::M,
    RoleCode::C,
    RoleCode::W,
    RoleCode::T,
    RoleCode::A,
    RoleCode::PC,
];

const ALL_CODES: [RoleCode; 13] = [
    RoleCode::P,
    RoleCode::Por,
    RoleCode::B,
    RoleCode::DC,
    RoleCode::DD,
    RoleCode::DS,
    RoleCode::E,
    RoleCode::M,
    RoleCode::C,
    RoleCode::W,
    RoleCode::T,
    RoleCode::A,
    RoleCode::PC,
];

impl RoleCode {
    /// Parse a role code, matching case exactly (`"Por"` but not `"POR"`).
    pub fn parse(s: &str) -> Option<Self> {
        ALL_CODES.into_iter().find(|code| code.as_str() == s)
    }

    /// Parse a role code ignoring ASCII case.
    pub fn parse_ignore_case(s: &str) -> Option<Self> {
        ALL_CODES
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::P => "P",
            RoleCode::Por => "Por",
            RoleCode::B => "B",
            RoleCode::DC => "DC",
            RoleCode::DD => "DD",
            RoleCode::DS => "DS",
            RoleCode::E => "E",
            RoleCode::M => "M",
            RoleCode::C => "C",
            RoleCode::W => "W",
            RoleCode::T => "T",
            RoleCode::A => "A",
            RoleCode::PC => "PC",
        }
    }

    /// Whether this code belongs to the mantra vocabulary.
    pub fn is_mantra(&self) -> bool {
        MANTRA_ROLES.contains(self)
    }

    /// Whether this is one of the two goalkeeper spellings.
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, RoleCode::P | RoleCode::Por)
    }

    /// Broad pitch group, used for colouring and bench summaries.
    pub fn group(&self) -> RoleGroup {
        match self {
            RoleCode::P | RoleCode::Por => RoleGroup::Goalkeeper,
            RoleCode::B | RoleCode::DC | RoleCode::DD | RoleCode::DS => RoleGroup::Defender,
            RoleCode::E | RoleCode::M | RoleCode::C => RoleGroup::Midfielder,
            RoleCode::W | RoleCode::T => RoleGroup::AttackingMidfielder,
            RoleCode::A | RoleCode::PC => RoleGroup::Forward,
        }
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of role codes by pitch area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    AttackingMidfielder,
    Forward,
}

impl RoleGroup {
    /// Group of a free-form role string, keyed on its first `/` element.
    pub fn of_role(role: &str) -> Option<Self> {
        let main = role.split('/').next().unwrap_or_default().trim();
        RoleCode::parse(main).map(|code| code.group())
    }
}

/// Split a compound position token (`"W/A"`) into its alternatives, in order.
///
/// Sub-codes outside the vocabulary are dropped.
pub fn parse_token(token: &str) -> Vec<RoleCode> {
    token
        .split('/')
        .filter_map(|part| {
            let code = RoleCode::parse_ignore_case(part.trim());
            if code.is_none() {
                debug!("ignoring unknown role code '{}' in token '{}'", part, token);
            }
            code
        })
        .collect()
}

/// Join alternatives back into their `/`-separated token form.
pub fn token_string(alternatives: &[RoleCode]) -> String {
    alternatives
        .iter()
        .map(RoleCode::as_str)
        .collect::<Vec<_>>()
        .join("/")
}

/// Display label for a slot: the first alternative in the mantra
/// vocabulary, or the first alternative when none is.
pub fn resolve_label(alternatives: &[RoleCode]) -> Option<RoleCode> {
    alternatives
        .iter()
        .copied()
        .find(RoleCode::is_mantra)
        .or_else(|| alternatives.first().copied())
}
