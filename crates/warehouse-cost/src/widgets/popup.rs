use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use warehouse_cost_estimator::{applied_optimizations, optimizations::NO_OPTIMIZATIONS};

use crate::format::format_usd;
use crate::AppState;

pub struct OptimizationsPopupWidget;

impl OptimizationsPopupWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = Self::centered_rect(60, 60, area);

        // Clear the area first
        frame.render_widget(Clear, popup_area);

        let text = Self::create_optimizations_text(state);

        let popup = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title("Summary of Optimizations Applied")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);

        frame.render_widget(popup, popup_area);
    }

    fn create_optimizations_text(state: &AppState) -> Vec<Line> {
        let applied = applied_optimizations(&state.config);

        let mut text = Vec::new();

        if let Some(projection) = &state.projection {
            text.push(Line::from(vec![
                Span::styled("Annual Savings: ", Style::default().fg(Color::White)),
                Span::styled(
                    format!(
                        "{} ({:.1}%)",
                        format_usd(projection.savings(), 2),
                        projection.savings_pct()
                    ),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            text.push(Line::from(" "));
        }

        if applied.is_empty() {
            text.push(Line::from(Span::styled(
                NO_OPTIMIZATIONS,
                Style::default().fg(Color::Gray),
            )));
        } else {
            for optimization in applied {
                text.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(Color::Yellow)),
                    Span::styled(optimization.to_string(), Style::default().fg(Color::White)),
                ]));
            }
        }

        text.extend(vec![
            Line::from(" "),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "o",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to close", Style::default().fg(Color::Gray)),
            ]),
        ]);

        text
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
