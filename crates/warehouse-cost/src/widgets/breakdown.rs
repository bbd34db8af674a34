use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Gauge, Row, Table},
    Frame,
};
use warehouse_cost_estimator::CostCategory;

use crate::format::format_usd;
use crate::AppState;

pub struct BreakdownWidget;

impl BreakdownWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(5)])
            .split(area);

        Self::render_table(frame, chunks[0], state);
        Self::render_distribution(frame, chunks[1], state);
    }

    fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows: Vec<Row> = match &state.projection {
            Some(projection) => CostCategory::ALL
                .iter()
                .map(|category| {
                    Row::new(vec![
                        category.name().to_string(),
                        format_usd(projection.baseline().category_total(*category), 0),
                        format_usd(projection.optimized().category_total(*category), 0),
                    ])
                })
                .collect(),
            None => Vec::new(),
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec!["Category", "Current", "Optimized"]).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(Block::bordered().title("Cost Breakdown"));

        frame.render_widget(table, area);
    }

    fn render_distribution(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::bordered().title("Cost Distribution");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(projection) = &state.projection else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        for (row, share) in rows.iter().zip(projection.baseline().breakdown()) {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(category_color(share.category())))
                .ratio((share.share_pct() / 100.0).clamp(0.0, 1.0))
                .label(format!(
                    "{} {:.1}%",
                    share.category().name(),
                    share.share_pct()
                ));

            frame.render_widget(gauge, *row);
        }
    }
}

pub fn category_color(category: CostCategory) -> Color {
    match category {
        CostCategory::Compute => Color::LightBlue,
        CostCategory::Storage => Color::LightGreen,
        CostCategory::Transfer => Color::LightMagenta,
    }
}
