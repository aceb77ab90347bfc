use crate::app::AppState;
use crate::components::shared::PanelBlock;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let card = crate::view::centered_rect(50, 40, area);

    let p = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This page wandered off to meditate.",
            Style::default().fg(theme.text_main),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 1 to return home.",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(PanelBlock::titled(theme, " NOT FOUND ", false));
    f.render_widget(p, card);
}
