use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Padding},
};

pub struct PanelBlock;

impl PanelBlock {
    /// Bordered panel; the border and title light up when the panel owns
    /// the keyboard.
    pub fn titled<'a, T>(theme: &'a Theme, title: T, active: bool) -> Block<'a>
    where
        T: Into<ratatui::text::Line<'a>>,
    {
        let (border_color, title_style) = if active {
            (
                theme.accent,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (theme.border, Style::default().fg(theme.text_dim))
        };

        Block::default()
            .borders(Borders::ALL)
            .border_set(ratatui::symbols::border::PLAIN)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(title_style)
            .bg(theme.bg)
    }

    pub fn ghost<'a>(theme: &'a Theme) -> Block<'a> {
        Block::default()
            .bg(theme.bg)
            .padding(Padding::horizontal(1))
    }
}

pub fn selection_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.surface)
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD)
}
