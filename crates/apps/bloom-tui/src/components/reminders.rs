use crate::app::{ActiveInput, AppState};
use crate::components::shared::{PanelBlock, selection_style};
use bloom_core::i18n::Key;
use bloom_core::models::{Frequency, ReminderKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
};

pub fn render(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.theme.clone();
    let l10n = state.l10n.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // 1. Daily progress
    let (done, active) = state.store.reminder_progress();
    let ratio = if active == 0 {
        0.0
    } else {
        done as f64 / active as f64
    };
    let gauge = Gauge::default()
        .block(PanelBlock::titled(&theme, " TODAY ", false))
        .gauge_style(Style::default().fg(theme.success).bg(theme.surface))
        .label(format!("{}/{}", done, active))
        .ratio(ratio);
    f.render_widget(gauge, chunks[0]);

    // 2. Reminder list
    let items: Vec<ListItem> = state
        .store
        .reminders
        .items
        .iter()
        .map(|r| {
            let check = if r.completed_today { "✓" } else { " " };
            let (toggle, toggle_color) = if r.enabled {
                ("on ", theme.success)
            } else {
                ("off", theme.text_dim)
            };
            let title_style = if r.enabled {
                Style::default().fg(theme.text_main)
            } else {
                Style::default()
                    .fg(theme.text_dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", check), Style::default().fg(theme.success)),
                Span::styled(format!("{} ", r.kind.icon()), Style::default().fg(theme.accent)),
                Span::styled(format!("{:<20}", r.title), title_style),
                Span::styled(format!(" {} ", r.time), Style::default().fg(theme.text_dim)),
                Span::styled(
                    format!("{:<14}", r.frequency.as_str()),
                    Style::default().fg(theme.text_dim),
                ),
                Span::styled(toggle, Style::default().fg(toggle_color)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(PanelBlock::titled(
            &theme,
            format!(" {} ", l10n.text(Key::YourReminders)),
            state.input == ActiveInput::None,
        ))
        .highlight_style(selection_style(&theme));
    f.render_stateful_widget(list, chunks[1], &mut state.reminders_state);

    if state.input == ActiveInput::ReminderForm {
        render_form(f, state);
    }
}

fn render_form(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let l10n = &state.l10n;
    let form = &state.reminder_form;

    let area = crate::view::centered_rect(50, 40, f.size());
    f.render_widget(ratatui::widgets::Clear, area);

    let kind = ReminderKind::ALL[form.kind_index];
    let frequency = Frequency::ALL[form.frequency_index];

    let field_line = |label: &str, value: String, active: bool| {
        let style = if active {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim)
        };
        Line::from(vec![
            Span::styled(format!(" {:<12}", label), style),
            Span::styled(value, Style::default().fg(theme.text_main)),
        ])
    };

    let lines = vec![
        Line::from(""),
        field_line(
            "type",
            format!("‹ {} ›", l10n.text(kind.key())),
            form.field == 0,
        ),
        field_line(
            "title",
            if form.field == 1 {
                format!("{}▏", form.title)
            } else {
                form.title.clone()
            },
            form.field == 1,
        ),
        field_line(
            "time",
            if form.field == 2 {
                format!("{}▏", form.time)
            } else {
                form.time.clone()
            },
            form.field == 2,
        ),
        field_line(
            "frequency",
            format!("‹ {} ›", frequency.as_str()),
            form.field == 3,
        ),
    ];

    let p = Paragraph::new(lines).block(PanelBlock::titled(
        theme,
        format!(" {} ", l10n.text(Key::AddReminder)),
        true,
    ));
    f.render_widget(p, area);
}
