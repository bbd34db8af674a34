use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::form::FormField;
use crate::AppState;

pub struct InputsWidget;

impl InputsWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Self::section_line("Usage Details")];
        let mut in_savings_group = false;

        for (index, field) in FormField::ALL.iter().enumerate() {
            if field.is_optimization() && !in_savings_group {
                in_savings_group = true;
                lines.push(Line::from(" "));
                lines.push(Self::section_line("Potential Savings"));
            }

            let selected = index == state.selected_field;
            let label_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, label_style),
                Span::styled(format!("{:<20}", field.label()), label_style),
                Span::styled(
                    format!(" {}", field.display_value(&state.config)),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        let inputs = Paragraph::new(lines)
            .block(Block::bordered().title("Inputs"))
            .alignment(Alignment::Left);

        frame.render_widget(inputs, area);
    }

    fn section_line(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )])
    }
}
