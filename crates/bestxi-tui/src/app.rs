// Application state: the loaded payload, the selected formation and the
// lineup currently shown.

use bestxi_core::{assign, BestLineupData, FillPolicy, Formation, Lineup, Module, Player};
use tracing::{info, warn};

use crate::config::Config;

/// Formation used when neither the config nor the payload names one.
pub const FALLBACK_FORMATION: Formation = Formation::F433;

pub struct LineupState {
    data: BestLineupData,
    policy: FillPolicy,
    lineup: Lineup,
}

impl LineupState {
    /// Build the initial state, choosing the opening formation from the
    /// override, then the payload's advised module, then its first
    /// supported module, then the fallback.
    pub fn new(data: BestLineupData, policy: FillPolicy, formation: Option<Formation>) -> Self {
        let formation = formation
            .or_else(|| data.advised_formation())
            .or_else(|| data.modules.iter().find_map(Module::formation))
            .unwrap_or(FALLBACK_FORMATION);
        let lineup = assign(data.player_pool(), formation, policy);
        info!(
            "initial formation {}: {} filled, {} vacant",
            formation,
            lineup.filled_count(),
            lineup.vacant_count()
        );
        LineupState {
            data,
            policy,
            lineup,
        }
    }

    pub fn from_config(data: BestLineupData, config: &Config) -> Self {
        Self::new(data, config.fill_policy, config.formation)
    }

    pub fn formation(&self) -> Formation {
        self.lineup.formation
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    pub fn modules(&self) -> &[Module] {
        &self.data.modules
    }

    pub fn bench(&self) -> &[Player] {
        self.data.bench()
    }

    pub fn policy(&self) -> FillPolicy {
        self.policy
    }

    /// Module summary for the selected formation, if the feed scored it.
    pub fn selected_module(&self) -> Option<&Module> {
        self.data.module_for(self.formation())
    }

    /// Re-run the assignment for `formation`.
    pub fn select(&mut self, formation: Formation) {
        self.lineup = assign(self.data.player_pool(), formation, self.policy);
        info!(
            "formation {}: {} filled, {} vacant",
            formation,
            self.lineup.filled_count(),
            self.lineup.vacant_count()
        );
    }

    /// Select the formation a feed module names. Returns false, leaving the
    /// lineup untouched, when the module code is not a supported formation.
    pub fn select_module(&mut self, code: &str) -> bool {
        match code.parse::<Formation>() {
            Ok(formation) => {
                self.select(formation);
                true
            }
            Err(e) => {
                warn!("cannot select module: {}", e);
                false
            }
        }
    }
}
