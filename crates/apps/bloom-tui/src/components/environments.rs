use crate::app::{ActiveInput, AppState};
use crate::components::shared::{PanelBlock, selection_style};
use bloom_core::i18n::Key;
use bloom_core::models::{Environment, Sender};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let l10n = &state.l10n;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    // 1. Space selector
    let items: Vec<ListItem> = Environment::ALL
        .iter()
        .map(|env| {
            let marker = if *env == state.store.chat.selected {
                "● "
            } else {
                "○ "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(l10n.text(env.key()), Style::default().fg(theme.text_main)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(PanelBlock::titled(
            theme,
            format!(" {} ", l10n.text(Key::SelectEnvironment)),
            state.input == ActiveInput::None,
        ))
        .highlight_style(selection_style(theme));
    let mut list_state = ListState::default();
    list_state.select(Some(state.env_index));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    // 2. Conversation
    let convo_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chunks[1]);

    render_messages(f, convo_chunks[0], state);

    let typing = state.input == ActiveInput::Chat;
    let input_text = if state.chat_input.is_empty() && !typing {
        Span::styled(
            l10n.text(Key::TypeMessage),
            Style::default().fg(theme.text_dim),
        )
    } else {
        Span::styled(
            format!("{}▏", state.chat_input),
            Style::default().fg(theme.text_main),
        )
    };
    let input = Paragraph::new(Line::from(input_text)).block(PanelBlock::titled(
        theme,
        format!(" {} ", l10n.text(Key::Send)),
        typing,
    ));
    f.render_widget(input, convo_chunks[1]);
}

fn render_messages(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let title = state.l10n.text(state.store.chat.selected.key());

    let mut lines: Vec<Line> = Vec::new();
    for msg in &state.store.chat.messages {
        let (who, color) = match msg.sender {
            Sender::User => ("you", theme.accent),
            Sender::Companion => ("companion", theme.success),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} ", msg.timestamp, who),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(&*msg.content, Style::default().fg(theme.text_main)),
        ]));
        lines.push(Line::from(""));
    }
    if state.store.chat.pending.is_some() {
        lines.push(Line::from(Span::styled(
            "companion is typing…",
            Style::default()
                .fg(theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(PanelBlock::titled(theme, format!(" {} ", title), false));
    f.render_widget(p, area);
}
