// Pitch widget: the assigned lineup placed at its layout coordinates.
//
// Layout coordinates are percentages of the panel's inner area; each
// player label is centred on its coordinate and clipped to the panel.

use bestxi_core::layout::PitchPosition;
use bestxi_core::{Fill, Lineup, LineupSlot};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::palette::{format_number, rating_colors, role_color};

/// Width reserved for a player label, in cells.
const LABEL_WIDTH: u16 = 18;
/// Rows per player label: slot and name, role tags, ratings.
const LABEL_HEIGHT: u16 = 3;

/// Terminal cell of a layout coordinate inside `inner`.
pub fn cell_for(pos: PitchPosition, inner: Rect) -> (u16, u16) {
    let col = (pos.x / 100.0 * f64::from(inner.width)).round() as u16;
    let row = (pos.y / 100.0 * f64::from(inner.height)).round() as u16;
    (
        inner.x + col.min(inner.width.saturating_sub(1)),
        inner.y + row.min(inner.height.saturating_sub(1)),
    )
}

/// Label rectangle centred on `(col, row)` and kept inside `inner`.
pub fn label_rect(col: u16, row: u16, inner: Rect) -> Rect {
    let width = LABEL_WIDTH.min(inner.width);
    let height = LABEL_HEIGHT.min(inner.height);
    let max_x = inner.x + inner.width - width;
    let max_y = inner.y + inner.height - height;
    let x = col.saturating_sub(width / 2).clamp(inner.x, max_x);
    let y = row.saturating_sub(height / 2).clamp(inner.y, max_y);
    Rect::new(x, y, width, height)
}

fn name_style(slot: &LineupSlot, selected: bool) -> Style {
    let style = match slot.fill {
        Fill::Vacant => Style::default().fg(Color::DarkGray),
        Fill::Forced => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
        Fill::Matched { .. } => Style::default().fg(Color::White),
    };
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn slot_lines(slot: &LineupSlot, selected: bool) -> Vec<Line<'static>> {
    let player = &slot.player;
    // Coloured by the slot it fills, so placeholders get a colour too.
    let shirt = Style::default()
        .fg(role_color(&slot.label))
        .add_modifier(Modifier::BOLD);
    let name = if slot.fill == Fill::Forced {
        format!("{}!", player.name)
    } else {
        player.name.clone()
    };

    let head = Line::from(vec![
        Span::styled(format!("{} ", slot.label), shirt),
        Span::styled(name, name_style(slot, selected)),
    ]);

    if slot.is_vacant() {
        return vec![head];
    }

    let badge_color = player
        .role_mantra
        .first()
        .map_or(Color::Gray, |role| role_color(role));
    let badge = Line::from(Span::styled(
        player.mantra_display(),
        Style::default().fg(badge_color),
    ));

    let (fv_bg, fv_fg) = rating_colors(player.expected_fantavoto);
    let (vb_bg, vb_fg) = rating_colors(player.expected_voto_base);
    let ratings = Line::from(vec![
        Span::styled(
            format!("FV:{}", format_number(player.expected_fantavoto)),
            Style::default().bg(fv_bg).fg(fv_fg),
        ),
        Span::raw(" "),
        Span::styled(
            format!("VB:{}", format_number(player.expected_voto_base)),
            Style::default().bg(vb_bg).fg(vb_fg),
        ),
    ]);
    vec![head, badge, ratings]
}

/// Render the lineup onto the pitch panel. `cursor` is the slot index
/// highlighted for the detail panel.
pub fn render(frame: &mut Frame, area: Rect, lineup: &Lineup, cursor: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Main Lineup - {}", lineup.formation))
        .style(Style::default().bg(Color::Rgb(0x1B, 0x3A, 0x22)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    for (slot, pos) in lineup.placements() {
        let (col, row) = cell_for(pos, inner);
        let rect = label_rect(col, row, inner);
        let lines = slot_lines(slot, slot.index == cursor);
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, rect);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
