// Keyboard input handling.
//
// Tab switching and cursor movement mutate ViewState directly; quitting and
// formation changes come back as a UserCommand for the run loop to apply.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use bestxi_core::SLOT_COUNT;

use super::{SidebarTab, ViewState};

/// Commands the run loop acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
    /// Select the module at this index of the payload's module list.
    SelectModule(usize),
}

/// Handle a keyboard event. `module_count` bounds the formations cursor.
pub fn handle_key(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    module_count: usize,
) -> Option<UserCommand> {
    // Windows emits Release events too; only act on Press.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Char('1') => {
            view_state.active_tab = SidebarTab::Formations;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = SidebarTab::Bench;
            None
        }
        KeyCode::Tab => {
            view_state.active_tab = view_state.active_tab.next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.module_cursor = view_state.module_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.module_cursor + 1 < module_count {
                view_state.module_cursor += 1;
            }
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            view_state.slot_cursor = view_state.slot_cursor.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if view_state.slot_cursor + 1 < SLOT_COUNT {
                view_state.slot_cursor += 1;
            }
            None
        }
        KeyCode::Enter => {
            if view_state.active_tab == SidebarTab::Formations && view_state.module_cursor < module_count {
                Some(UserCommand::SelectModule(view_state.module_cursor))
            } else {
                None
            }
        }
        _ => None,
    }
}
