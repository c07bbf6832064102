// Integration tests for the Best XI dashboard.
//
// These exercise the library crate end to end: config text points at a
// saved payload, the payload is loaded and assigned, formations are
// switched, and the whole screen is rendered to a test backend.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bestxi_core::player::PLACEHOLDER_NAME;
use bestxi_core::{FillPolicy, Formation};
use bestxi_tui::app::LineupState;
use bestxi_tui::config::parse_config;
use bestxi_tui::feed;
use bestxi_tui::tui::{render_frame, SidebarTab, ViewState};

use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Payload shared with the core crate's scenarios.
fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../bestxi-core/tests/fixtures/best_lineup.json")
}

fn config_text(extra: &str) -> String {
    format!(
        r#"
[source]
base_url = "https://example.test/api/best-lineup"
league = "test-league"
competition_id = 1
team_id = 2
file = "{}"

[lineup]
{}
"#,
        fixture().display().to_string().replace('\\', "/"),
        extra
    )
}

async fn load_state(extra: &str) -> LineupState {
    let config = parse_config(&config_text(extra), Path::new("bestxi.toml")).unwrap();
    let data = feed::load(&config.source).await.unwrap();
    LineupState::from_config(data, &config)
}

fn screen_text(view: &ViewState, state: &LineupState) -> String {
    let backend = TestBackend::new(160, 50);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| render_frame(frame, view, state))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn assert_no_double_assignment(state: &LineupState) {
    let mut seen = HashSet::new();
    for slot in &state.lineup().slots {
        if slot.is_vacant() {
            assert_eq!(slot.player.name, PLACEHOLDER_NAME);
        } else {
            assert!(seen.insert(slot.player.name.clone()), "{} placed twice", slot.player.name);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[tokio::test]
async fn fixture_opens_on_advised_module() {
    let state = load_state("").await;
    assert_eq!(state.formation(), Formation::F433);
    assert_eq!(state.policy(), FillPolicy::CompatibleOnly);
    assert_eq!(state.lineup().vacant_count(), 0);
    assert_eq!(state.lineup().unused.len(), 1);
    assert_eq!(state.lineup().unused[0].name, "Thuram");
    assert_eq!(state.bench().len(), 3);
    assert_no_double_assignment(&state);
}

#[tokio::test]
async fn configured_formation_overrides_advice() {
    let state = load_state("formation = \"4-2-3-1\"").await;
    assert_eq!(state.formation(), Formation::F4231);
    assert_eq!(state.lineup().slots.len(), 11);
    assert_no_double_assignment(&state);
}

#[tokio::test]
async fn switching_modules_reassigns_full_pool() {
    let mut state = load_state("").await;
    let codes: Vec<String> = state.modules().iter().map(|m| m.module.clone()).collect();
    for code in &codes {
        assert!(state.select_module(code), "{code} should be selectable");
        let lineup = state.lineup();
        assert_eq!(lineup.slots.len(), 11);
        // 12 players in the pool: every one is either placed or left over.
        assert_eq!(lineup.filled_count() + lineup.unused.len(), 12);
        assert_no_double_assignment(&state);
    }
}

#[tokio::test]
async fn any_remaining_policy_fills_every_slot() {
    let mut state = load_state("fill_policy = \"any_remaining\"").await;
    state.select(Formation::F3511);
    assert_eq!(state.lineup().vacant_count(), 0);
    assert_eq!(state.lineup().unused.len(), 1);
    assert_no_double_assignment(&state);
}

#[tokio::test]
async fn full_screen_renders_both_tabs() {
    let state = load_state("").await;
    let mut view = ViewState::for_lineup(&state);

    let text = screen_text(&view, &state);
    assert!(text.contains("Main Lineup - 433"));
    assert!(text.contains("Sommer"));
    assert!(text.contains("Lautaro"));
    assert!(text.contains("4-3-3 *"));
    assert!(text.contains("[1:Formations]"));

    view.active_tab = SidebarTab::Bench;
    let text = screen_text(&view, &state);
    assert!(text.contains("Bench [2]"));
    assert!(text.contains("Frattesi"));
}
