use crate::app::{ActiveInput, AppState};
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

    let help_text = if state.input != ActiveInput::None {
        match state.input {
            ActiveInput::JournalForm | ActiveInput::ReminderForm => {
                " [Tab] Next Field  [Ent] Save  [Esc] Cancel "
            }
            ActiveInput::JournalSearch => " [Ent] Done  [Esc] Close ",
            _ => " [Ent] Send  [Esc] Close ",
        }
    } else {
        match state.route {
            Route::Home => " [←/→] Quote  [1-7] Pages  [L] Language  [T] Theme  [Q] Quit ",
            Route::Environments => " [↑/↓] Space  [Ent] Chat  [L] Language  [Q] Quit ",
            Route::MoodCheck => " [←/→] Mood  [Ent] Check In  [L] Language  [Q] Quit ",
            Route::Reminders => " [↑/↓] Select  [Space] On/Off  [C] Done  [N] New  [Q] Quit ",
            Route::Journal => " [↑/↓] Select  [/] Search  [N] New Entry  [Q] Quit ",
            Route::Confessions => " [↑/↓] Select  [S] Support  [N] Share  [Q] Quit ",
            Route::Analytics => " [1-7] Pages  [L] Language  [T] Theme  [Q] Quit ",
            Route::Login | Route::Signup => " [1-7] Pages  [L] Language  [Q] Quit ",
            Route::NotFound => " [1] Home  [Q] Quit ",
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let shortcuts = Paragraph::new(Line::from(vec![Span::styled(
        help_text,
        Style::default().fg(theme.text_dim),
    )]))
    .bg(theme.sidebar);
    f.render_widget(shortcuts, chunks[0]);

    let (label, bg) = if state.input == ActiveInput::None {
        (" NORMAL ", theme.accent)
    } else {
        (" INSERT ", theme.success)
    };
    let mode = Paragraph::new(Line::from(vec![Span::styled(
        label,
        Style::default().bg(bg).fg(theme.bg).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right)
    .bg(theme.sidebar);
    f.render_widget(mode, chunks[1]);
}
