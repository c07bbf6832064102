// Player records and the best-lineup payload as delivered by the data feed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::formation::Formation;

/// Name given to placeholder entries that fill unassignable slots.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Pool groups read from `pitch.main`, in flattening order.
pub const POOL_GROUPS: [&str; 4] = ["p", "d", "c", "a"];

/// Fixture the player is expected to play next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
}

/// A rated player. Ratings are computed upstream; this crate only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub team_slug: String,
    #[serde(default, rename = "match")]
    pub next_match: Option<MatchInfo>,
    /// Probability (percent) of starting the next match.
    #[serde(default)]
    pub expected_next_match_tit: Option<f64>,
    #[serde(default)]
    pub expected_fantavoto: Option<f64>,
    #[serde(default)]
    pub expected_voto_base: Option<f64>,
    #[serde(default)]
    pub player_status: String,
    #[serde(default)]
    pub ranking: Option<f64>,
    /// Alternate role codes, in the order the feed lists them.
    #[serde(default)]
    pub role_mantra: Vec<String>,
    /// Resolved slot label, set by the lineup assigner.
    #[serde(default)]
    pub position_in_formation: String,
}

impl Player {
    /// Placeholder entry for a slot no player could fill.
    pub fn placeholder(label: &str) -> Self {
        Player {
            name: PLACEHOLDER_NAME.to_string(),
            role: label.to_string(),
            position_in_formation: label.to_string(),
            ..Player::default()
        }
    }

    /// Role tags as a `/` joined string, `"N/A"` when the player has none.
    pub fn mantra_display(&self) -> String {
        if self.role_mantra.is_empty() {
            "N/A".to_string()
        } else {
            self.role_mantra.join(" / ")
        }
    }
}

/// Summary of one formation ("module") as scored by the data feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub module: String,
    #[serde(default)]
    pub adviced: bool,
    #[serde(default)]
    pub best_percentage: f64,
    #[serde(default)]
    pub fm: f64,
    #[serde(default)]
    pub less_percentage: f64,
    #[serde(default)]
    pub modificatore_difesa: f64,
}

impl Module {
    /// The formation this module names, if it is one of the supported codes.
    pub fn formation(&self) -> Option<Formation> {
        self.module.parse().ok()
    }
}

/// Starting pool grouped by pitch area, plus the bench.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    #[serde(default)]
    pub main: HashMap<String, Vec<Player>>,
    #[serde(default)]
    pub bench: Vec<Player>,
}

/// Full payload of the best-lineup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestLineupData {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub pitch: Option<Pitch>,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
    #[serde(default)]
    pub fasce_goal: Vec<(f64, f64)>,
    #[serde(default)]
    pub goal_percentages: HashMap<String, f64>,
    #[serde(default)]
    pub asse_x_distribuzione_fanta_media_totale: Vec<f64>,
    #[serde(default)]
    pub asse_y_distribuzione_fanta_media_totale: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl BestLineupData {
    /// Flatten the `p`, `d`, `c`, `a` groups into one working pool.
    ///
    /// Absent groups count as empty; an absent pitch yields an empty pool.
    pub fn player_pool(&self) -> Vec<Player> {
        let Some(pitch) = &self.pitch else {
            warn!("best-lineup payload has no pitch section, treating pool as empty");
            return Vec::new();
        };
        POOL_GROUPS
            .iter()
            .filter_map(|group| pitch.main.get(*group))
            .flatten()
            .cloned()
            .collect()
    }

    /// Bench players, empty when the payload carries none.
    pub fn bench(&self) -> &[Player] {
        self.pitch
            .as_ref()
            .map(|p| p.bench.as_slice())
            .unwrap_or_default()
    }

    /// The advised module's formation, else the first supported module.
    pub fn advised_formation(&self) -> Option<Formation> {
        self.modules
            .iter()
            .find(|m| m.adviced)
            .and_then(Module::formation)
            .or_else(|| self.modules.iter().find_map(Module::formation))
    }

    /// Module summary for a formation, if the feed scored it.
    pub fn module_for(&self, formation: Formation) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| m.formation() == Some(formation))
    }
}
