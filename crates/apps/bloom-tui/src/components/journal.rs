use crate::app::{ActiveInput, AppState};
use crate::components::shared::{PanelBlock, selection_style};
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
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + stats
            Constraint::Min(0),    // Entries + preview
        ])
        .split(area);

    // 1. Search bar and stats
    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let searching = state.input == ActiveInput::JournalSearch;
    let query = if searching {
        format!("{}▏", state.journal_search)
    } else {
        state.journal_search.clone()
    };
    let search = Paragraph::new(Span::styled(query, Style::default().fg(theme.text_main)))
        .block(PanelBlock::titled(&theme, " SEARCH (/) ", searching));
    f.render_widget(search, top_chunks[0]);

    let (entries, avg_words) = state.store.journal_word_stats();
    let stats = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", entries),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("entries", Style::default().fg(theme.text_dim)),
        Span::styled(
            format!("  {} ", avg_words),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("avg words", Style::default().fg(theme.text_dim)),
    ]))
    .block(PanelBlock::titled(&theme, "", false));
    f.render_widget(stats, top_chunks[1]);

    // 2. Entry list and preview
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let hits: Vec<_> = state
        .store
        .search_journal(&state.journal_search)
        .into_iter()
        .cloned()
        .collect();

    let items: Vec<ListItem> = hits
        .iter()
        .map(|e| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        e.title.clone(),
                        Style::default()
                            .fg(theme.text_main)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", e.date),
                        Style::default().fg(theme.text_dim),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {} words · {}", e.word_count, e.tags.join(", ")),
                    Style::default().fg(theme.text_dim),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(PanelBlock::titled(
            &theme,
            " ENTRIES ",
            state.input == ActiveInput::None,
        ))
        .highlight_style(selection_style(&theme));
    f.render_stateful_widget(list, body_chunks[0], &mut state.journal_state);

    // Preview of the selected entry
    let preview_lines = match state.journal_state.selected().and_then(|i| hits.get(i)) {
        Some(entry) => vec![
            Line::from(Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                entry.date.clone(),
                Style::default().fg(theme.text_dim),
            )),
            Line::from(""),
            Line::from(Span::styled(
                entry.content.clone(),
                Style::default().fg(theme.text_main),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Select an entry, or press N to write one.",
            Style::default().fg(theme.text_dim),
        ))],
    };
    let preview = Paragraph::new(preview_lines)
        .wrap(Wrap { trim: false })
        .block(PanelBlock::titled(&theme, " PREVIEW ", false));
    f.render_widget(preview, body_chunks[1]);

    if state.input == ActiveInput::JournalForm {
        render_form(f, state);
    }
}

fn render_form(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let form = &state.journal_form;

    let area = crate::view::centered_rect(60, 50, f.size());
    f.render_widget(ratatui::widgets::Clear, area);

    let field_line = |label: &str, value: &str, active: bool| {
        let style = if active {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim)
        };
        let shown = if active {
            format!("{}▏", value)
        } else {
            value.to_string()
        };
        Line::from(vec![
            Span::styled(format!(" {:<10}", label), style),
            Span::styled(shown, Style::default().fg(theme.text_main)),
        ])
    };

    let lines = vec![
        Line::from(""),
        field_line("title", &form.title, form.field == 0),
        Line::from(""),
        field_line("content", &form.content, form.field == 1),
        Line::from(""),
        field_line("tags", &form.tags, form.field == 2),
    ];

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(PanelBlock::titled(theme, " NEW ENTRY ", true));
    f.render_widget(p, area);
}
