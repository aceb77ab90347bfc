use crate::app::AppState;
use crate::components::{
    analytics, auth, confessions, environments, header, home, journal, mood_check, not_found,
    reminders, shared::PanelBlock, status_bar,
};
use crate::routes::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Clear,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top Header (logo + tabs)
            Constraint::Min(0),    // Page body
            Constraint::Length(1), // Bottom Status Bar
        ])
        .split(f.size());

    f.render_widget(PanelBlock::ghost(&state.theme), f.size());

    header::render(f, chunks[0], state);

    match state.route {
        Route::Home => home::render(f, chunks[1], state),
        Route::Environments => environments::render(f, chunks[1], state),
        Route::MoodCheck => mood_check::render(f, chunks[1], state),
        Route::Reminders => reminders::render(f, chunks[1], state),
        Route::Journal => journal::render(f, chunks[1], state),
        Route::Confessions => confessions::render(f, chunks[1], state),
        Route::Analytics => analytics::render(f, chunks[1], state),
        Route::Login => auth::render_login(f, chunks[1], state),
        Route::Signup => auth::render_signup(f, chunks[1], state),
        Route::NotFound => not_found::render(f, chunks[1], state),
    }

    status_bar::render(f, chunks[2], state);

    if let Some((msg, _)) = &state.notification {
        render_toast(f, msg, state);
    }
}

fn render_toast(f: &mut Frame, message: &str, state: &AppState) {
    use ratatui::{
        layout::Alignment,
        style::{Style, Stylize},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph},
    };
    let area = centered_rect(50, 10, f.size());
    let toast_area = ratatui::layout::Rect::new(area.x, f.size().height - 4, area.width, 3);
    let text = Paragraph::new(Line::from(vec![
        Span::styled(
            " INFO ",
            Style::default()
                .bg(state.theme.accent)
                .fg(state.theme.bg)
                .bold(),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().fg(state.theme.text_main),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.accent))
            .bg(state.theme.sidebar),
    )
    .alignment(Alignment::Center);
    f.render_widget(Clear, toast_area);
    f.render_widget(text, toast_area);
}

pub fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    r: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
