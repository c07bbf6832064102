// Bench widget: players the feed left out of the starting pool.

use bestxi_core::Player;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::tui::palette::{format_number, role_color};

pub fn render(frame: &mut Frame, area: Rect, bench: &[Player]) {
    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Roles"),
        Cell::from("FV"),
        Cell::from("VB"),
        Cell::from("Start%"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if bench.is_empty() {
        vec![Row::new(vec![Cell::from("  Bench is empty")])]
    } else {
        bench
            .iter()
            .map(|player| {
                let color = player
                    .role_mantra
                    .first()
                    .map_or(Color::Gray, |role| role_color(role));
                Row::new(vec![
                    Cell::from(player.name.clone()),
                    Cell::from(player.mantra_display()).style(Style::default().fg(color)),
                    Cell::from(format_number(player.expected_fantavoto)),
                    Cell::from(format_number(player.expected_voto_base)),
                    Cell::from(format_number(player.expected_next_match_tit)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Bench [2]"),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
