// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` for tab and cursor position; the lineup itself
// lives in `LineupState` and is only replaced when a new formation is
// selected. The screen re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod palette;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, warn};

use crate::app::LineupState;
use input::UserCommand;
use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which list the sidebar shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Formations,
    Bench,
}

impl SidebarTab {
    pub fn next(self) -> Self {
        match self {
            SidebarTab::Formations => SidebarTab::Bench,
            SidebarTab::Bench => SidebarTab::Formations,
        }
    }
}

/// UI-only state: everything the key handler can change without touching
/// the lineup.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub active_tab: SidebarTab,
    /// Row under the cursor in the formations list.
    pub module_cursor: usize,
    /// Lineup slot shown in the player detail panel.
    pub slot_cursor: usize,
}

impl ViewState {
    /// View state with the cursor on the module currently on the pitch.
    pub fn for_lineup(state: &LineupState) -> Self {
        let formation = state.formation();
        let module_cursor = state
            .modules()
            .iter()
            .position(|m| m.formation() == Some(formation))
            .unwrap_or(0);
        ViewState {
            active_tab: SidebarTab::Formations,
            module_cursor,
            slot_cursor: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render every dashboard zone for one frame.
pub fn render_frame(frame: &mut Frame, view: &ViewState, state: &LineupState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state, view.active_tab);
    widgets::pitch::render(frame, layout.pitch, state.lineup(), view.slot_cursor);
    widgets::player_detail::render(
        frame,
        layout.detail,
        state.lineup().slots.get(view.slot_cursor),
    );
    render_sidebar(frame, &layout, view, state);
    render_help_bar(frame, &layout);
}

fn render_sidebar(frame: &mut Frame, layout: &AppLayout, view: &ViewState, state: &LineupState) {
    match view.active_tab {
        SidebarTab::Formations => widgets::modules::render(
            frame,
            layout.sidebar,
            state.modules(),
            view.module_cursor,
            state.formation(),
        ),
        SidebarTab::Bench => widgets::bench::render(frame, layout.sidebar, state.bench()),
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout) {
    let text = " q:Quit | 1:Formations 2:Bench | Up/Down j/k:Move | Enter:Select | Left/Right h/l:Player";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

/// Apply a command from the key handler. Returns false when the loop
/// should stop.
pub fn apply_command(command: UserCommand, state: &mut LineupState) -> bool {
    match command {
        UserCommand::Quit => false,
        UserCommand::SelectModule(index) => {
            let code = state.modules().get(index).map(|m| m.module.clone());
            match code {
                Some(code) => {
                    debug!("selecting module {}", code);
                    state.select_module(&code);
                }
                None => warn!("no module at index {}", index),
            }
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(mut state: LineupState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::for_lineup(&state);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        let module_count = state.modules().len();
                        if let Some(command) = input::handle_key(key_event, &mut view_state, module_count) {
                            if !apply_command(command, &mut state) {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("input error: {}", e);
                        break Err(e.into());
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state, &state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bestxi_core::player::Pitch;
    use bestxi_core::{BestLineupData, FillPolicy, Formation, Module, Player};
    use std::collections::HashMap;

    fn state_with_modules() -> LineupState {
        let data = BestLineupData {
            modules: vec![
                Module {
                    module: "3-4-3".into(),
                    ..Module::default()
                },
                Module {
                    module: "4-3-3".into(),
                    adviced: true,
                    ..Module::default()
                },
                Module {
                    module: "5-4-1".into(),
                    ..Module::default()
                },
            ],
            ..BestLineupData::default()
        };
        LineupState::new(data, FillPolicy::CompatibleOnly, None)
    }

    #[test]
    fn view_state_default_is_sensible() {
        let view = ViewState::default();
        assert_eq!(view.active_tab, SidebarTab::Formations);
        assert_eq!(view.module_cursor, 0);
        assert_eq!(view.slot_cursor, 0);
    }

    #[test]
    fn view_state_starts_on_selected_module() {
        let state = state_with_modules();
        assert_eq!(ViewState::for_lineup(&state).module_cursor, 1);
    }

    #[test]
    fn apply_command_selects_module() {
        let mut state = state_with_modules();
        assert!(apply_command(UserCommand::SelectModule(0), &mut state));
        assert_eq!(state.formation(), Formation::F343);
    }

    #[test]
    fn apply_command_ignores_bad_module() {
        let mut state = state_with_modules();
        assert!(apply_command(UserCommand::SelectModule(2), &mut state));
        assert!(apply_command(UserCommand::SelectModule(9), &mut state));
        assert_eq!(state.formation(), Formation::F433);
    }

    #[test]
    fn apply_command_quit_stops() {
        let mut state = state_with_modules();
        assert!(!apply_command(UserCommand::Quit, &mut state));
    }

    #[test]
    fn render_frame_marks_forced_slots() {
        let data = BestLineupData {
            pitch: Some(Pitch {
                main: HashMap::from([(
                    "a".to_string(),
                    vec![Player {
                        name: "Striker".into(),
                        role_mantra: vec!["A".into()],
                        ..Player::default()
                    }],
                )]),
                bench: vec![],
            }),
            ..BestLineupData::default()
        };
        let state = LineupState::new(data, FillPolicy::AnyRemaining, Some(Formation::F433));
        let view = ViewState::for_lineup(&state);
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_frame(frame, &view, &state))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Striker!"));
        assert!(text.contains("1 forced"));
        assert!(text.contains("out of position"));
    }

    #[test]
    fn render_frame_both_tabs() {
        let state = state_with_modules();
        let mut view = ViewState::for_lineup(&state);
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render_frame(frame, &view, &state))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Formations [1]"));
        assert!(text.contains("q:Quit"));
        assert!(text.contains("Player [h/l]"));
        assert!(text.contains("vacant"));

        view.active_tab = SidebarTab::Bench;
        terminal
            .draw(|frame| render_frame(frame, &view, &state))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Bench [2]"));
        assert!(text.contains("Bench is empty"));
    }
}
