use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::AppState;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let (gen2_text, gen2_color) = if state.config.gen2 {
            ("Gen 2 pricing", Color::Green)
        } else {
            ("Standard pricing", Color::Gray)
        };

        let header_text = vec![Line::from(vec![
            Span::styled(
                "Data Warehouse Cost Estimator",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", gen2_text),
                Style::default().fg(gen2_color),
            ),
        ])];

        let header = Paragraph::new(header_text)
            .block(Block::bordered().title("Annual Projection"))
            .alignment(Alignment::Center);

        frame.render_widget(header, area);
    }
}
