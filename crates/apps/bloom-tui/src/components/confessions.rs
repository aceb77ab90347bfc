use crate::app::{ActiveInput, AppState};
use crate::components::shared::{PanelBlock, selection_style};
use bloom_core::models::ResponseKind;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.theme.clone();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // 1. Anonymous feed
    let items: Vec<ListItem> = state
        .store
        .confessions
        .items
        .iter()
        .map(|c| {
            let excerpt: String = c.content.chars().take(60).collect();
            ListItem::new(vec![
                Line::from(Span::styled(
                    excerpt,
                    Style::default().fg(theme.text_main),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("  ♥ {} ", c.support_count),
                        Style::default().fg(theme.danger),
                    ),
                    Span::styled(
                        format!("· {} · {}", c.timestamp, c.tags.join(", ")),
                        Style::default().fg(theme.text_dim),
                    ),
                ]),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(PanelBlock::titled(
            &theme,
            " CONFESSIONS ",
            state.input == ActiveInput::None,
        ))
        .highlight_style(selection_style(&theme));
    f.render_stateful_widget(list, chunks[0], &mut state.confessions_state);

    // 2. Selected confession with its responses
    let detail_lines = match state
        .confessions_state
        .selected()
        .and_then(|i| state.store.confessions.items.get(i))
    {
        Some(confession) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    confession.content.clone(),
                    Style::default().fg(theme.text_main),
                )),
                Line::from(Span::styled(
                    format!("♥ {} · {}", confession.support_count, confession.timestamp),
                    Style::default().fg(theme.text_dim),
                )),
                Line::from(""),
            ];
            for response in &confession.responses {
                let (who, color) = match response.kind {
                    ResponseKind::Community => (
                        response.author.as_deref().unwrap_or("Community"),
                        theme.accent,
                    ),
                    ResponseKind::Companion => ("Companion", theme.success),
                };
                lines.push(Line::from(Span::styled(
                    format!("{} · ♥ {}", who, response.support_count),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    response.content.clone(),
                    Style::default().fg(theme.text_main),
                )));
                lines.push(Line::from(""));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Select a confession, or press N to share anonymously.",
            Style::default().fg(theme.text_dim),
        ))],
    };
    let detail = Paragraph::new(detail_lines)
        .wrap(Wrap { trim: false })
        .block(PanelBlock::titled(&theme, " RESPONSES ", false));
    f.render_widget(detail, chunks[1]);

    if state.input == ActiveInput::ConfessionForm {
        render_form(f, state);
    }
}

fn render_form(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = crate::view::centered_rect(60, 30, f.size());
    f.render_widget(ratatui::widgets::Clear, area);

    let p = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}▏", state.confession_input),
            Style::default().fg(theme.text_main),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Shared anonymously. Be kind to yourself.",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(PanelBlock::titled(theme, " SHARE ", true));
    f.render_widget(p, area);
}
