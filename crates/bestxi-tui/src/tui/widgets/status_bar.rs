// Status bar widget: formation, fill counts, fill policy, tab indicator.
//
// The filled count includes forced slots; those are repeated in their own
// warning-coloured counter.

use bestxi_core::FillPolicy;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::LineupState;
use crate::tui::SidebarTab;

/// Render the status bar into the given area.
///
/// Layout: [formation] [filled/vacant] [forced] [unused] [policy] [tab bar]
pub fn render(frame: &mut Frame, area: Rect, state: &LineupState, active_tab: SidebarTab) {
    let lineup = state.lineup();
    let mut spans = Vec::new();

    let advised = state.selected_module().is_some_and(|m| m.adviced);
    spans.push(Span::styled(
        format!(" {}{} ", lineup.formation, if advised { " *" } else { "" }),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));

    let vacant = lineup.vacant_count();
    let count_color = if vacant == 0 { Color::Green } else { Color::Yellow };
    spans.push(Span::styled(
        format!("{} filled, {} vacant", lineup.filled_count(), vacant),
        Style::default().fg(count_color),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    let forced = lineup.forced_count();
    if forced > 0 {
        spans.push(Span::styled(
            format!("{} forced", forced),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    }

    spans.push(Span::styled(
        format!("{} unused", lineup.unused.len()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    spans.push(Span::styled(
        policy_label(state.policy()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    spans.extend(tab_spans(active_tab));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn policy_label(policy: FillPolicy) -> &'static str {
    match policy {
        FillPolicy::CompatibleOnly => "compatible only",
        FillPolicy::AnyRemaining => "any remaining",
    }
}

/// Tab indicator spans with the active tab highlighted.
pub fn tab_spans(active: SidebarTab) -> Vec<Span<'static>> {
    let tabs = [
        (SidebarTab::Formations, "1:Formations"),
        (SidebarTab::Bench, "2:Bench"),
    ];

    let mut spans = Vec::new();
    for (tab, label) in tabs {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }
    spans
}
