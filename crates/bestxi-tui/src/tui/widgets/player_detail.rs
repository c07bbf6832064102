// Player detail widget: the slot under the pitch cursor, with its fixture
// and start probability.

use bestxi_core::{Fill, LineupSlot, Player};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::palette::{format_number, role_color};

/// Fixture spans, `home vs away`, with the player's own side in bold.
pub fn fixture_spans(player: &Player) -> Vec<Span<'static>> {
    let Some(fixture) = player.next_match.as_ref() else {
        return vec![Span::styled(
            "No fixture",
            Style::default().fg(Color::DarkGray),
        )];
    };
    let side = |team: &str| {
        let style = Style::default().fg(Color::White);
        if !player.team.is_empty() && team.eq_ignore_ascii_case(&player.team) {
            Span::styled(team.to_string(), style.add_modifier(Modifier::BOLD))
        } else {
            Span::styled(team.to_string(), style)
        }
    };
    vec![
        side(&fixture.home_team),
        Span::styled(" vs ", Style::default().fg(Color::Gray)),
        side(&fixture.away_team),
    ]
}

fn fill_text(fill: Fill) -> (String, Color) {
    match fill {
        Fill::Matched { score } => (format!("match {}", score), Color::Green),
        Fill::Forced => ("out of position".to_string(), Color::Yellow),
        Fill::Vacant => ("vacant".to_string(), Color::DarkGray),
    }
}

pub fn detail_lines(slot: &LineupSlot) -> Vec<Line<'static>> {
    let player = &slot.player;
    let (fill, fill_color) = fill_text(slot.fill);

    let mut head = vec![
        Span::styled(
            format!(" {} ", slot.label),
            Style::default()
                .fg(role_color(&slot.label))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            player.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !player.team.is_empty() {
        head.push(Span::styled(
            format!(" ({})", player.team),
            Style::default().fg(Color::Gray),
        ));
    }
    head.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    head.push(Span::styled(fill, Style::default().fg(fill_color)));

    if slot.is_vacant() {
        return vec![Line::from(head)];
    }

    let mut info = vec![Span::raw(" ")];
    info.extend(fixture_spans(player));
    info.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    info.push(Span::raw(format!(
        "% to Start: {}",
        format_number(player.expected_next_match_tit)
    )));
    info.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    info.push(Span::raw(format!(
        "FV: {}  VB: {}",
        format_number(player.expected_fantavoto),
        format_number(player.expected_voto_base)
    )));

    vec![Line::from(head), Line::from(info)]
}

pub fn render(frame: &mut Frame, area: Rect, slot: Option<&LineupSlot>) {
    let lines = match slot {
        Some(slot) => detail_lines(slot),
        None => vec![Line::from(" No slot selected")],
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Player [h/l]"),
    );
    frame.render_widget(paragraph, area);
}
