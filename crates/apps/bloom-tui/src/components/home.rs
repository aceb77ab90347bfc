use crate::app::AppState;
use crate::components::shared::PanelBlock;
use bloom_core::i18n::Key;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let l10n = &state.l10n;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Length(8), // Rotating quote
            Constraint::Min(8),    // Feature cards
            Constraint::Length(5), // Call to action
        ])
        .split(area);

    // 1. Hero
    let hero = vec![
        Line::from(Span::styled(
            l10n.text(Key::MentalWellnessReimagined),
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(l10n.text(Key::WelcomeTo), Style::default().fg(theme.text_main)),
            Span::styled(
                " BLOOM",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            l10n.text(Key::MentalWellnessNewBeginning),
            Style::default().fg(theme.text_main),
        )),
        Line::from(Span::styled(
            l10n.text(Key::ExperienceHolistic),
            Style::default().fg(theme.text_dim),
        )),
    ];
    let p = Paragraph::new(hero)
        .alignment(Alignment::Center)
        .block(PanelBlock::titled(theme, "", false));
    f.render_widget(p, chunks[0]);

    // 2. Rotating quote
    render_quote(f, chunks[1], state);

    // 3. Feature cards
    render_features(f, chunks[2], state);

    // 4. Call to action
    let cta = vec![
        Line::from(Span::styled(
            l10n.text(Key::ReadyToBloom),
            Style::default()
                .fg(theme.text_main)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            l10n.text(Key::JoinThousands),
            Style::default().fg(theme.text_dim),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} (9) ", l10n.text(Key::GetStartedFree)),
                Style::default().bg(theme.accent).fg(theme.bg),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} (8) ", l10n.text(Key::SignIn)),
                Style::default().fg(theme.accent),
            ),
        ]),
    ];
    let p = Paragraph::new(cta)
        .alignment(Alignment::Center)
        .block(PanelBlock::titled(theme, "", false));
    f.render_widget(p, chunks[3]);
}

fn render_quote(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let quote = state.rotator.current();

    let dots: String = (0..state.rotator.len())
        .map(|i| if i == state.rotator.index() { '●' } else { '○' })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            quote.sanskrit,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            quote.transliteration,
            Style::default()
                .fg(theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            quote.meaning,
            Style::default().fg(theme.text_main),
        )),
        Line::from(Span::styled(quote.hindi, Style::default().fg(theme.text_main))),
        Line::from(""),
        Line::from(Span::styled(dots, Style::default().fg(theme.text_dim))),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(PanelBlock::titled(
            theme,
            format!(" {} ", state.l10n.text(Key::OurVision)),
            false,
        ));
    f.render_widget(p, area);
}

fn render_features(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let l10n = &state.l10n;

    let cards = [
        (Key::MindSpaces, Key::MindSpacesDesc),
        (Key::MoodGardens, Key::MoodGardensDesc),
        (Key::SacredVault, Key::SacredVaultDesc),
        (Key::WellnessCircle, Key::WellnessCircleDesc),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (i, (title, desc)) in cards.iter().enumerate() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                l10n.text(*title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                l10n.text(*desc),
                Style::default().fg(theme.text_dim),
            )),
        ];
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(PanelBlock::titled(theme, "", false));
        f.render_widget(p, chunks[i]);
    }
}
