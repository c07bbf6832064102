// Static colour tables: role group colours and rating bands.

use bestxi_core::roles::RoleGroup;
use ratatui::style::Color;

/// Shirt colour for a role label, keyed on its first `/` element.
pub fn role_color(role: &str) -> Color {
    match RoleGroup::of_role(role) {
        Some(RoleGroup::Goalkeeper) => Color::Rgb(0xE9, 0xC4, 0x6A),
        Some(RoleGroup::Defender) => Color::Rgb(0x26, 0x46, 0x53),
        Some(RoleGroup::Midfielder) => Color::Rgb(0x2A, 0x9D, 0x8F),
        Some(RoleGroup::AttackingMidfielder) => Color::Rgb(0xF4, 0xA2, 0x61),
        Some(RoleGroup::Forward) => Color::Rgb(0xE7, 0x6F, 0x51),
        None => Color::Gray,
    }
}

/// Background and foreground colours for an expected-vote value.
pub fn rating_colors(value: Option<f64>) -> (Color, Color) {
    let Some(v) = value else {
        return (Color::DarkGray, Color::White);
    };
    if v >= 7.0 {
        (Color::Rgb(0x30, 0x69, 0x3D), Color::White)
    } else if v >= 6.5 {
        (Color::Rgb(0x4F, 0x9A, 0x5D), Color::White)
    } else if v >= 6.0 {
        (Color::Rgb(0x93, 0xC5, 0x72), Color::Black)
    } else if v >= 5.5 {
        (Color::Rgb(0xF0, 0xE6, 0x8C), Color::Black)
    } else if v >= 5.0 {
        (Color::Rgb(0xFF, 0xA5, 0x00), Color::Black)
    } else if v >= 4.5 {
        (Color::Rgb(0xFF, 0x63, 0x47), Color::White)
    } else {
        (Color::Rgb(0xFF, 0x00, 0x00), Color::White)
    }
}

/// Two-decimal formatting, `N/A` when the feed has no value.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_to_group_colours() {
        assert_eq!(role_color("P"), role_color("Por"));
        assert_eq!(role_color("DC"), role_color("DS/DD"));
        assert_eq!(role_color("W/A"), role_color("T"));
        assert_ne!(role_color("A"), role_color("M"));
        assert_eq!(role_color(""), Color::Gray);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(rating_colors(Some(7.0)).0, Color::Rgb(0x30, 0x69, 0x3D));
        assert_eq!(rating_colors(Some(6.99)).0, Color::Rgb(0x4F, 0x9A, 0x5D));
        assert_eq!(rating_colors(Some(6.0)).1, Color::Black);
        assert_eq!(rating_colors(Some(4.49)).0, Color::Rgb(0xFF, 0x00, 0x00));
        assert_eq!(rating_colors(None).0, Color::DarkGray);
    }

    #[test]
    fn format_number_two_decimals() {
        assert_eq!(format_number(Some(6.5)), "6.50");
        assert_eq!(format_number(Some(92.333)), "92.33");
        assert_eq!(format_number(None), "N/A");
    }
}
