// Lineup core: role vocabulary, formation tables, compatibility scoring,
// greedy slot assignment and pitch layout.

pub mod assign;
pub mod formation;
pub mod layout;
pub mod player;
pub mod roles;
pub mod scoring;

pub use assign::{assign, Fill, FillPolicy, Lineup, LineupSlot};
pub use formation::{Formation, FormationError, SLOT_COUNT};
pub use layout::{player_position, PitchPosition};
pub use player::{BestLineupData, Module, Player};
