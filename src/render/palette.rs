//! src/render/palette.rs
//!
//! Closed set of drawing roles and the table mapping them to colors and glyphs.

use ratatui::style::Color;

/// What a grid cell depicts; decides its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Fill characters of both axes.
    AxisLine,
    /// Tick-mark values on the axes.
    Mark,
    /// Data bars.
    Bar,
    /// x and y axis titles.
    Label,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::AxisLine, Role::Mark, Role::Bar, Role::Label];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub axis_color: Color,
    pub mark_color: Color,
    pub bar_color: Color,
    pub label_color: Color,

    /// Fill glyph of the y axis.
    pub vertical: char,
    /// Fill glyph of the x axis.
    pub horizontal: char,
    pub bar: char,
}

impl Palette {
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::AxisLine => self.axis_color,
            Role::Mark => self.mark_color,
            Role::Bar => self.bar_color,
            Role::Label => self.label_color,
        }
    }

    /// Replace the bar glyph (e.g. '▍' for thinner columns).
    pub fn with_bar_glyph(mut self, glyph: char) -> Self {
        self.bar = glyph;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            axis_color: Color::Black,
            mark_color: Color::Red,
            bar_color: Color::Green,
            label_color: Color::Blue,
            vertical: '|',
            horizontal: '_',
            bar: 'H',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let p = Palette::default();
        assert_eq!(p.color(Role::AxisLine), Color::Black);
        assert_eq!(p.color(Role::Mark), Color::Red);
        assert_eq!(p.color(Role::Bar), Color::Green);
        assert_eq!(p.color(Role::Label), Color::Blue);
        assert_eq!((p.vertical, p.horizontal, p.bar), ('|', '_', 'H'));
    }

    #[test]
    fn roles_have_distinct_default_colors() {
        let p = Palette::default();
        for (i, a) in Role::ALL.iter().enumerate() {
            for b in &Role::ALL[i + 1..] {
                assert_ne!(p.color(*a), p.color(*b), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn bar_glyph_override() {
        let p = Palette::default().with_bar_glyph('▍');
        assert_eq!(p.bar, '▍');
        assert_eq!(p.color(Role::Bar), Color::Green);
    }
}
