use crate::app::AppState;
use crate::components::shared::PanelBlock;
use bloom_core::i18n::Key;
use bloom_core::models::MoodLevel;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let l10n = &state.l10n;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Mood picker
            Constraint::Length(5), // Streak
            Constraint::Min(0),    // Recent check-ins
        ])
        .split(area);

    // 1. Mood picker
    let mut picker_lines = vec![
        Line::from(Span::styled(
            l10n.text(Key::HowAreYouFeeling),
            Style::default()
                .fg(theme.text_main)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let mut mood_spans = Vec::new();
    for &mood in MoodLevel::ALL {
        let selected = state.mood_selected == Some(mood);
        let style = if selected {
            Style::default().bg(theme.accent).fg(theme.bg).bold()
        } else {
            Style::default().fg(theme.text_main)
        };
        mood_spans.push(Span::styled(
            format!("  {} {}  ", mood.emoji(), mood.label(l10n.language())),
            style,
        ));
    }
    picker_lines.push(Line::from(mood_spans));
    if state.store.mood.today_submitted {
        picker_lines.push(Line::from(""));
        picker_lines.push(Line::from(Span::styled(
            "✓",
            Style::default().fg(theme.success),
        )));
    }

    let picker = Paragraph::new(picker_lines)
        .alignment(Alignment::Center)
        .block(PanelBlock::titled(
            theme,
            format!(" {} ", l10n.text(Key::SelectMood)),
            !state.store.mood.today_submitted,
        ));
    f.render_widget(picker, chunks[0]);

    // 2. Streak
    let streak = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("🔥 {}", state.store.mood.streak),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", l10n.text(Key::MoodStreak), l10n.text(Key::Days)),
            Style::default().fg(theme.text_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(PanelBlock::titled(theme, "", false));
    f.render_widget(streak, chunks[1]);

    // 3. Recent check-ins
    let average = state.store.average_mood();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" avg {:.1}/5", average),
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
    ];
    for entry in state.store.recent_moods(7) {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", entry.date),
                Style::default().fg(theme.text_dim),
            ),
            Span::raw(entry.mood.emoji()),
            Span::styled(
                format!(" {}", entry.mood.label(l10n.language())),
                Style::default().fg(theme.text_main),
            ),
        ]));
    }
    let recent = Paragraph::new(lines).block(PanelBlock::titled(
        theme,
        format!(" {} ", l10n.text(Key::TrackMood)),
        false,
    ));
    f.render_widget(recent, chunks[2]);
}
