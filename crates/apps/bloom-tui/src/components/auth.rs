//! Login and signup pages. Presentational only: there is no account
//! backend, so these render the forms without accepting input.

use crate::app::AppState;
use crate::components::shared::PanelBlock;
use bloom_core::i18n::Key;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render_login(f: &mut Frame, area: Rect, state: &AppState) {
    render_card(f, area, state, state.l10n.text(Key::Login), false);
}

pub fn render_signup(f: &mut Frame, area: Rect, state: &AppState) {
    render_card(f, area, state, state.l10n.text(Key::SignUp), true);
}

fn render_card(f: &mut Frame, area: Rect, state: &AppState, title: &str, signup: bool) {
    let theme = &state.theme;
    let card = crate::view::centered_rect(50, 60, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🌸 BLOOM",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if signup {
        lines.push(field(theme, "name"));
    }
    lines.push(field(theme, "email"));
    lines.push(field(theme, "password"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {} ", title),
        Style::default().bg(theme.accent).fg(theme.bg),
    )));
    lines.push(Line::from(""));
    let hint = if signup {
        format!("{} → (8)", state.l10n.text(Key::SignIn))
    } else {
        format!("{} → (9)", state.l10n.text(Key::GetStartedFree))
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.text_dim),
    )));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(PanelBlock::titled(theme, format!(" {} ", title), true));
    f.render_widget(p, card);
}

fn field<'a>(theme: &crate::theme::Theme, label: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(theme.text_dim)),
        Span::styled(
            "________________",
            Style::default().fg(theme.border),
        ),
    ])
}
