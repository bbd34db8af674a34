use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::format::format_usd;
use crate::AppState;

pub struct SummaryWidget;

impl SummaryWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut summary_text = match &state.projection {
            Some(projection) => vec![
                Line::from(vec![
                    Span::styled("Total Annual Cost: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format_usd(projection.baseline_total(), 2),
                        Style::default()
                            .fg(Color::LightBlue)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        "Annual Cost After Optimization: ",
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format_usd(projection.optimized_total(), 2),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Savings: ", Style::default().fg(Color::White)),
                    Span::styled(
                        format!(
                            "{} ({:.1}%)",
                            format_usd(projection.savings(), 2),
                            projection.savings_pct()
                        ),
                        Style::default()
                            .fg(if projection.savings() >= 0.0 {
                                Color::Green
                            } else {
                                Color::Red
                            })
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
            None => vec![Line::from(vec![Span::styled(
                "No projection available",
                Style::default().fg(Color::Red),
            )])],
        };

        if let Some(error) = &state.error_message {
            summary_text.push(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::styled(
                    error.chars().take(60).collect::<String>()
                        + if error.chars().count() > 60 { "..." } else { "" },
                    Style::default().fg(Color::Red),
                ),
            ]));
        } else {
            summary_text.push(Line::from(vec![
                Span::styled("Last Update: ", Style::default().fg(Color::White)),
                Span::styled(
                    state.last_update.format("%H:%M:%S UTC").to_string(),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }

        let summary = Paragraph::new(summary_text)
            .block(Block::bordered().title("Summary"))
            .alignment(Alignment::Left);

        frame.render_widget(summary, area);
    }
}
