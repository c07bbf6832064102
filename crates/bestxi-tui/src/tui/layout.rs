// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Pitch (65%)              | Sidebar (35%)          |
// |                          |  Formations | Bench    |
// +-------------------------+                        |
// | Player detail (4 rows)   |                        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: formation, fill counts, fill policy.
    pub status_bar: Rect,
    /// Left: the pitch diagram.
    pub pitch: Rect,
    /// Below the pitch: the player under the slot cursor.
    pub detail: Rect,
    /// Right: tab-switched formations list or bench.
    pub sidebar: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // pitch + sidebar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(vertical[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(horizontal[0]);

    AppLayout {
        status_bar: vertical[0],
        pitch: left[0],
        detail: left[1],
        sidebar: horizontal[1],
        help_bar: vertical[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("pitch", layout.pitch),
            ("detail", layout.detail),
            ("sidebar", layout.sidebar),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in rects {
            assert!(rect.width > 0 && rect.height > 0, "{name} is empty: {rect:?}");
        }
    }

    #[test]
    fn bars_are_single_rows() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.status_bar.y, 0);
        assert_eq!(layout.help_bar.y, 49);
    }

    #[test]
    fn pitch_is_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(layout.pitch.width > layout.sidebar.width);
        assert_eq!(layout.pitch.width + layout.sidebar.width, 160);
        assert_eq!(layout.pitch.height + layout.detail.height, 48);
        assert_eq!(layout.detail.height, 4);
        assert_eq!(layout.detail.y, layout.pitch.y + layout.pitch.height);
        assert_eq!(layout.sidebar.height, 48);
    }
}
