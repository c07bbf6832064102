// Greedy lineup assignment over a player/slot compatibility matrix.
//
// Slots are filled in template order. For each slot the best-scoring
// unassigned player wins, ties going to whoever comes first in the
// remaining pool. This is not a global optimum and is kept that way:
// the tie-breaking order is part of the observable behavior.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::formation::{Formation, SlotRole};
use crate::layout::{player_position, PitchPosition};
use crate::player::Player;
use crate::roles::{resolve_label, token_string};
use crate::scoring::score;

/// What to do when the best remaining candidate for a slot is incompatible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Leave the slot to a placeholder.
    #[default]
    CompatibleOnly,
    /// Put the first remaining player there anyway.
    AnyRemaining,
}

/// How a slot ended up filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// A compatible player with the given score.
    Matched { score: u32 },
    /// An incompatible player, placed under [`FillPolicy::AnyRemaining`].
    Forced,
    /// No player; the slot holds a placeholder.
    Vacant,
}

/// One filled formation slot.
#[derive(Debug, Clone)]
pub struct LineupSlot {
    /// Position in the formation template, and in the render order.
    pub index: usize,
    pub role: SlotRole,
    pub label: String,
    /// The occupant, with `position_in_formation` set to `label`. A
    /// placeholder named "Unknown" when the slot is vacant.
    pub player: Player,
    pub fill: Fill,
}

impl LineupSlot {
    pub fn is_vacant(&self) -> bool {
        self.fill == Fill::Vacant
    }

    /// The slot's token in `/` form, e.g. `"W/A"`.
    pub fn token(&self) -> String {
        token_string(self.role)
    }
}

/// Result of one assignment run.
#[derive(Debug, Clone)]
pub struct Lineup {
    pub formation: Formation,
    /// One entry per template slot, in template order.
    pub slots: Vec<LineupSlot>,
    /// Players left over once every slot was handled.
    pub unused: Vec<Player>,
}

impl Lineup {
    /// Assigned players in slot order, placeholders included.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().map(|s| &s.player)
    }

    /// Every slot paired with its pitch coordinate.
    ///
    /// The coordinate is derived from the slot's index in this lineup, so
    /// the slot order must not be changed after assignment.
    pub fn placements(&self) -> impl Iterator<Item = (&LineupSlot, PitchPosition)> + '_ {
        self.slots.iter().filter_map(move |slot| {
            player_position(slot.index, self.formation).map(|pos| (slot, pos))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_vacant()).count()
    }

    pub fn vacant_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_vacant()).count()
    }

    /// Slots holding a player who cannot play there.
    pub fn forced_count(&self) -> usize {
        self.slots.iter().filter(|s| s.fill == Fill::Forced).count()
    }
}

fn slot_label(role: SlotRole) -> String {
    resolve_label(role)
        .map(|code| code.as_str().to_string())
        .unwrap_or_default()
}

/// Compatibility matrix: one row per player, one column per slot.
pub fn compatibility_matrix(players: &[Player], slots: &[SlotRole]) -> Vec<Vec<u32>> {
    players
        .iter()
        .map(|player| {
            slots
                .iter()
                .map(|role| score(&player.role_mantra, role))
                .collect()
        })
        .collect()
}

/// Pick the winning row among the live rows for one slot column.
///
/// Returns the position in `live` of the strictly best score, first
/// occurrence winning ties.
fn best_candidate(
    live: &[usize],
    matrix: &[Vec<u32>],
    column: usize,
    policy: FillPolicy,
) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (pos, &row) in live.iter().enumerate() {
        let s = matrix[row][column];
        if s == 0 && policy == FillPolicy::CompatibleOnly {
            continue;
        }
        if best.map_or(true, |(_, best_score)| s > best_score) {
            best = Some((pos, s));
        }
    }
    best
}

/// Assign `players` to the slots of `formation`.
///
/// Always returns exactly one entry per slot. Players beyond what the
/// formation can take end up in [`Lineup::unused`].
pub fn assign(players: Vec<Player>, formation: Formation, policy: FillPolicy) -> Lineup {
    let slots = formation.slots();
    let matrix = compatibility_matrix(&players, slots);

    let mut pool: Vec<Option<Player>> = players.into_iter().map(Some).collect();
    // Live matrix rows, in remaining-pool order.
    let mut live: Vec<usize> = (0..pool.len()).collect();
    let mut assigned = Vec::with_capacity(slots.len());

    for (index, role) in slots.iter().copied().enumerate() {
        let label = slot_label(role);

        let chosen = best_candidate(&live, &matrix, index, policy)
            .and_then(|(pos, s)| {
                let row = live.remove(pos);
                pool[row].take().map(|player| (player, s))
            });

        let slot = match chosen {
            Some((mut player, s)) => {
                debug!(
                    "{} -> {} (slot {}, token {}, score {})",
                    player.name,
                    label,
                    index,
                    token_string(role),
                    s
                );
                player.position_in_formation = label.clone();
                let fill = if s == 0 {
                    Fill::Forced
                } else {
                    Fill::Matched { score: s }
                };
                LineupSlot {
                    index,
                    role,
                    label,
                    player,
                    fill,
                }
            }
            None => {
                warn!(
                    "no compatible player found for position {} in {}",
                    token_string(role),
                    formation
                );
                LineupSlot {
                    index,
                    role,
                    player: Player::placeholder(&label),
                    label,
                    fill: Fill::Vacant,
                }
            }
        };
        assigned.push(slot);
    }

    let unused: Vec<Player> = live.into_iter().filter_map(|row| pool[row].take()).collect();
    if !unused.is_empty() {
        warn!("{} players could not be assigned a position", unused.len());
    }

    Lineup {
        formation,
        slots: assigned,
        unused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PLACEHOLDER_NAME;

    fn player(name: &str, mantra: &[&str]) -> Player {
        Player {
            name: name.to_string(),
            role_mantra: mantra.iter().map(|s| s.to_string()).collect(),
            ..Player::default()
        }
    }

    #[test]
    fn matrix_has_player_rows_and_slot_columns() {
        let players = vec![player("Keeper", &["Por"]), player("Striker", &["A", "PC"])];
        let matrix = compatibility_matrix(&players, Formation::F433.slots());
        assert_eq!(matrix.len(), 2);
        assert!(matrix.iter().all(|row| row.len() == 11));
        assert_eq!(matrix[0][0], 1);
        assert_eq!(matrix[1][9], 2);
        assert_eq!(matrix[1][8], 1);
        assert_eq!(matrix[1][1], 0);
    }

    #[test]
    fn higher_score_beats_earlier_player() {
        let players = vec![
            player("Wide", &["W"]),
            player("Both", &["W", "A"]),
        ];
        let lineup = assign(players, Formation::F433, FillPolicy::CompatibleOnly);
        // Slot 8 is W/A: "Both" scores 2 there.
        assert_eq!(lineup.slots[8].player.name, "Both");
        assert_eq!(lineup.slots[8].fill, Fill::Matched { score: 2 });
        assert_eq!(lineup.slots[10].player.name, "Wide");
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        let players = vec![player("First", &["DC"]), player("Second", &["DC"])];
        let lineup = assign(players, Formation::F433, FillPolicy::CompatibleOnly);
        assert_eq!(lineup.slots[2].player.name, "First");
        assert_eq!(lineup.slots[3].player.name, "Second");
    }

    #[test]
    fn vacant_slot_gets_placeholder() {
        let lineup = assign(vec![], Formation::F352, FillPolicy::CompatibleOnly);
        assert_eq!(lineup.slots.len(), 11);
        for slot in &lineup.slots {
            assert!(slot.is_vacant());
            assert_eq!(slot.player.name, PLACEHOLDER_NAME);
            assert_eq!(slot.player.position_in_formation, slot.label);
            assert_eq!(slot.player.role, slot.label);
        }
    }

    #[test]
    fn compatible_only_never_places_incompatible_player() {
        let players = vec![player("Striker", &["A"])];
        let lineup = assign(players, Formation::F433, FillPolicy::CompatibleOnly);
        assert!(lineup.slots[0].is_vacant());
        assert_eq!(lineup.slots[8].player.name, "Striker");
        assert_eq!(lineup.filled_count(), 1);
        assert_eq!(lineup.forced_count(), 0);
    }

    #[test]
    fn any_remaining_forces_first_candidate() {
        let players = vec![player("Striker", &["A"])];
        let lineup = assign(players, Formation::F433, FillPolicy::AnyRemaining);
        assert_eq!(lineup.slots[0].player.name, "Striker");
        assert_eq!(lineup.slots[0].fill, Fill::Forced);
        assert_eq!(lineup.slots[0].player.position_in_formation, "P");
        assert_eq!(lineup.vacant_count(), 10);
        assert_eq!(lineup.forced_count(), 1);
        assert_eq!(lineup.filled_count(), 1);
    }

    #[test]
    fn surplus_players_are_reported_unused() {
        let players: Vec<Player> = (0..14)
            .map(|i| player(&format!("DC{i}"), &["DC"]))
            .collect();
        let lineup = assign(players, Formation::F433, FillPolicy::AnyRemaining);
        assert_eq!(lineup.slots.len(), 11);
        assert_eq!(lineup.unused.len(), 3);
        let unused: Vec<&str> = lineup.unused.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(unused, vec!["DC11", "DC12", "DC13"]);
    }

    #[test]
    fn incompatible_players_stay_unused_under_compatible_only() {
        let players = vec![player("Keeper", &["Por"]), player("Mystery", &["X"])];
        let lineup = assign(players, Formation::F442, FillPolicy::CompatibleOnly);
        assert_eq!(lineup.slots[0].player.name, "Keeper");
        assert_eq!(lineup.unused.len(), 1);
        assert_eq!(lineup.unused[0].name, "Mystery");
    }

    #[test]
    fn placements_follow_slot_order() {
        let lineup = assign(vec![], Formation::F433, FillPolicy::CompatibleOnly);
        let placed: Vec<_> = lineup.placements().collect();
        assert_eq!(placed.len(), 11);
        let (keeper, pos) = placed[0];
        assert_eq!(keeper.index, 0);
        assert!((pos.y - 63.75).abs() < 1e-9);
        assert!((pos.x - 43.0).abs() < 1e-9);
    }
}
