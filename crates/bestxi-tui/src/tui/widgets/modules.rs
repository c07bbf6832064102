// Formations widget: the payload's scored modules, with the advised one
// marked and the one on the pitch highlighted.

use bestxi_core::{Formation, Module};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// Display name of a module, with a marker when it is the advised one.
pub fn module_label(module: &Module) -> String {
    if module.adviced {
        format!("{} *", module.module)
    } else {
        module.module.clone()
    }
}

/// Render the module list. `cursor` is the row under the keyboard cursor;
/// `selected` is the formation currently assigned.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    modules: &[Module],
    cursor: usize,
    selected: Formation,
) {
    let header = Row::new(vec![
        Cell::from("Module"),
        Cell::from("Score"),
        Cell::from("Best"),
        Cell::from("Less"),
        Cell::from("Def Mod"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if modules.is_empty() {
        vec![Row::new(vec![Cell::from("  No modules in payload")])]
    } else {
        modules
            .iter()
            .enumerate()
            .map(|(i, module)| {
                let mut style = Style::default();
                if module.formation() == Some(selected) {
                    style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                }
                if module.formation().is_none() {
                    style = style.fg(Color::DarkGray);
                }
                if i == cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(module_label(module)),
                    Cell::from(format!("{:.2}", module.fm)),
                    Cell::from(format!("{:.2}%", module.best_percentage)),
                    Cell::from(format!("{:.2}%", module.less_percentage)),
                    Cell::from(format!("{:.2}", module.modificatore_difesa)),
                ])
                .style(style)
            })
            .collect()
    };

    let widths = [
        Constraint::Min(10),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Formations [1]"),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> Vec<Module> {
        vec![
            Module {
                module: "4-3-3".into(),
                adviced: true,
                fm: 73.8,
                best_percentage: 24.9,
                less_percentage: 6.3,
                modificatore_difesa: 2.0,
            },
            Module {
                module: "3-4-3".into(),
                fm: 71.25,
                ..Module::default()
            },
        ]
    }

    fn rendered(modules: &[Module]) -> String {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), modules, 0, Formation::F433))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn module_label_marks_advised() {
        let m = modules();
        assert_eq!(module_label(&m[0]), "4-3-3 *");
        assert_eq!(module_label(&m[1]), "3-4-3");
    }

    #[test]
    fn render_lists_scores() {
        let text = rendered(&modules());
        assert!(text.contains("4-3-3 *"));
        assert!(text.contains("73.80"));
        assert!(text.contains("24.90%"));
        assert!(text.contains("71.25"));
    }

    #[test]
    fn render_does_not_panic_empty() {
        let text = rendered(&[]);
        assert!(text.contains("No modules"));
    }
}
