// Formation codes and their fixed slot tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roles::{resolve_label, RoleCode};

/// Number of slots in every formation: one goalkeeper plus ten outfielders.
pub const SLOT_COUNT: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    #[error("unknown formation code: {0:?}")]
    Unknown(String),
}

/// The closed set of supported formations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Formation {
    F343,
    F3412,
    F3421,
    F352,
    F3511,
    F433,
    F4312,
    F442,
    F4141,
    F4411,
    F4231,
}

/// One position-role slot: the ordered `/` alternatives of its token.
pub type SlotRole = &'static [RoleCode];

use crate::roles::RoleCode::{A, B, C, DC, DD, DS, E, M, P, PC, T, W};

const GK: SlotRole = &[P];

const TABLE_343: [SlotRole; SLOT_COUNT] = [
    GK, &[DC], &[DC], &[DC, B], &[E], &[M, C], &[C], &[E], &[W, A], &[A, PC], &[W, A],
];
const TABLE_3412: [SlotRole; SLOT_COUNT] = [
    GK, &[DC], &[DC], &[DC, B], &[E], &[M, C], &[C], &[E], &[T], &[A, PC], &[A, PC],
];
const TABLE_3421: [SlotRole; SLOT_COUNT] = [
    GK, &[DC], &[DC], &[DC, B], &[E], &[M], &[M, C], &[E, W], &[T, A], &[T], &[A, PC],
];
const TABLE_352: [SlotRole; SLOT_COUNT] = [
    GK, &[DC], &[DC], &[DC, B], &[E], &[M], &[M, C], &[C], &[E], &[T, A], &[A, PC],
];
const TABLE_3511: [SlotRole; SLOT_COUNT] = [
    GK, &[DC], &[DC], &[DC, B], &[E, W], &[M], &[C], &[M], &[E, W], &[T, A], &[A, PC],
];
const TABLE_433: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[M, C], &[M], &[C], &[W, A], &[A, PC], &[W, A],
];
const TABLE_4312: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[M, C], &[M], &[C], &[T], &[A, PC], &[A, PC],
];
const TABLE_442: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[E, W], &[M, C], &[C], &[E, W], &[A, PC], &[A, PC],
];
const TABLE_4141: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[M], &[E, W], &[C, T], &[T], &[E, W], &[A, PC],
];
const TABLE_4411: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[E, W], &[M], &[C], &[E, W], &[T, A], &[A, PC],
];
const TABLE_4231: [SlotRole; SLOT_COUNT] = [
    GK, &[DS], &[DC], &[DC], &[DD], &[M], &[M, C], &[W, T], &[T], &[W, A], &[A, PC],
];

impl Formation {
    pub const ALL: [Formation; 11] = [
        Formation::F343,
        Formation::F3412,
        Formation::F3421,
        Formation::F352,
        Formation::F3511,
        Formation::F433,
        Formation::F4312,
        Formation::F442,
        Formation::F4141,
        Formation::F4411,
        Formation::F4231,
    ];

    /// The compact code, e.g. `"4231"`.
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F343 => "343",
            Formation::F3412 => "3412",
            Formation::F3421 => "3421",
            Formation::F352 => "352",
            Formation::F3511 => "3511",
            Formation::F433 => "433",
            Formation::F4312 => "4312",
            Formation::F442 => "442",
            Formation::F4141 => "4141",
            Formation::F4411 => "4411",
            Formation::F4231 => "4231",
        }
    }

    /// Slot roles in template order: goalkeeper first, then outfield slots
    /// from the defensive line forward.
    pub fn slots(&self) -> &'static [SlotRole; SLOT_COUNT] {
        match self {
            Formation::F343 => &TABLE_343,
            Formation::F3412 => &TABLE_3412,
            Formation::F3421 => &TABLE_3421,
            Formation::F352 => &TABLE_352,
            Formation::F3511 => &TABLE_3511,
            Formation::F433 => &TABLE_433,
            Formation::F4312 => &TABLE_4312,
            Formation::F442 => &TABLE_442,
            Formation::F4141 => &TABLE_4141,
            Formation::F4411 => &TABLE_4411,
            Formation::F4231 => &TABLE_4231,
        }
    }

    /// Resolved display label of each slot.
    pub fn labels(&self) -> Vec<RoleCode> {
        self.slots()
            .iter()
            .filter_map(|alternatives| resolve_label(alternatives))
            .collect()
    }

    /// Outfield row sizes, one digit per row (`433` -> `[4, 3, 3]`).
    pub fn row_sizes(&self) -> Vec<usize> {
        self.code()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect()
    }

    /// Number of rows on the pitch including the goalkeeper row.
    pub fn row_count(&self) -> usize {
        self.row_sizes().len() + 1
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Formation {
    type Err = FormationError;

    /// Accepts both the compact (`"433"`) and dashed (`"4-3-3"`) forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.trim().chars().filter(|c| *c != '-').collect();
        Formation::ALL
            .into_iter()
            .find(|f| f.code() == compact)
            .ok_or_else(|| FormationError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Formation {
    type Error = FormationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Formation> for String {
    fn from(value: Formation) -> Self {
        value.code().to_string()
    }
}
