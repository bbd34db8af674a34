use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::AppState;

pub struct ShortcutsWidget;

impl ShortcutsWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let hint = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));

        let mut spans = vec![
            key("↑↓"),
            hint(" select, "),
            key("←→"),
            hint(" adjust, "),
            key("g"),
            hint(" gen 2, "),
            key("Tab"),
            hint(" chart, "),
            key("o"),
            hint(" optimizations, "),
            key("s"),
            hint(" save, "),
            key("q"),
            hint(" quit"),
        ];

        if let Some(status) = &state.status_message {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(status.clone(), Style::default().fg(Color::Cyan)));
        }

        let shortcuts = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

        frame.render_widget(shortcuts, area);
    }
}
