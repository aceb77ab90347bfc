use crate::app::AppState;
use crate::routes::Route;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),  // Logo
            Constraint::Min(0),     // Navigation tabs
            Constraint::Length(22), // Language + theme
        ])
        .split(area);

    let logo = Paragraph::new(Span::styled(
        " BLOOM ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .bg(theme.bg);
    f.render_widget(logo, chunks[0]);

    let mut tabs = vec![];
    for (i, route) in Route::NAV.iter().enumerate() {
        let is_active = state.route == *route;
        let style = if is_active {
            Style::default().fg(theme.bg).bg(theme.accent).bold()
        } else {
            Style::default().fg(theme.text_dim)
        };
        tabs.push(Span::styled(
            format!(" {} ({}) ", route.title(&state.l10n), i + 1),
            style,
        ));
        tabs.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)).bg(theme.bg), chunks[1]);

    let lang = state.l10n.language().as_str().to_uppercase();
    let right = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", theme.name), Style::default().fg(theme.text_dim)),
        Span::styled(
            format!(" {} ", lang),
            Style::default().bg(theme.accent).fg(theme.bg).bold(),
        ),
    ]))
    .alignment(Alignment::Right)
    .bg(theme.bg);
    f.render_widget(right, chunks[2]);
}
