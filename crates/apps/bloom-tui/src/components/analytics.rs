use crate::app::AppState;
use crate::components::shared::PanelBlock;
use bloom_core::models::Trend;
use bloom_core::seed::{MOOD_TREND, PATTERN_INSIGHTS, REMINDER_STATS, STREAKS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Sparkline},
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Weekly mood sparkline
            Constraint::Length(8),  // Habit completion + streaks
            Constraint::Min(0),     // Pattern insights
        ])
        .split(area);

    // 1. Weekly mood trend
    let mood_data: Vec<u64> = MOOD_TREND.iter().map(|p| p.mood).collect();
    let week: String = MOOD_TREND
        .iter()
        .map(|p| format!("{:^4}", p.day))
        .collect();
    let trend_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);
    let sparkline = Sparkline::default()
        .block(PanelBlock::titled(theme, " MOOD THIS WEEK ", false))
        .data(&mood_data)
        .style(Style::default().fg(theme.accent));
    f.render_widget(sparkline, trend_chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(week, Style::default().fg(theme.text_dim))),
        trend_chunks[1],
    );

    // 2. Habits and streaks
    let mid_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let habit_lines: Vec<Line> = REMINDER_STATS
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", s.category),
                    Style::default().fg(theme.text_main),
                ),
                Span::styled(
                    format!("{:>3}/{:<4}", s.completed, s.total),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    format!("  {}", s.rate),
                    Style::default().fg(theme.text_dim),
                ),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(habit_lines).block(PanelBlock::titled(theme, " HABITS ", false)),
        mid_chunks[0],
    );

    let streak_lines: Vec<Line> = STREAKS
        .iter()
        .map(|s| {
            let at_best = s.current >= s.longest;
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", s.activity),
                    Style::default().fg(theme.text_main),
                ),
                Span::styled(
                    format!("🔥 {:>2}", s.current),
                    Style::default()
                        .fg(if at_best { theme.warning } else { theme.accent })
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  best {} · target {}", s.longest, s.target),
                    Style::default().fg(theme.text_dim),
                ),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(streak_lines).block(PanelBlock::titled(theme, " STREAKS ", false)),
        mid_chunks[1],
    );

    // 3. Pattern insights
    let mut insight_lines = Vec::new();
    for insight in PATTERN_INSIGHTS {
        let (arrow, color) = match insight.trend {
            Trend::Positive => ("▲", theme.success),
            Trend::Negative => ("▼", theme.danger),
        };
        insight_lines.push(Line::from(vec![
            Span::styled(format!(" {} ", arrow), Style::default().fg(color)),
            Span::styled(
                insight.title,
                Style::default()
                    .fg(theme.text_main)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} confidence", insight.confidence),
                Style::default().fg(theme.text_dim),
            ),
        ]));
        insight_lines.push(Line::from(Span::styled(
            format!("   {}", insight.description),
            Style::default().fg(theme.text_dim),
        )));
    }
    f.render_widget(
        Paragraph::new(insight_lines).block(PanelBlock::titled(theme, " INSIGHTS ", false)),
        chunks[2],
    );
}
