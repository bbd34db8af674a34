use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use warehouse_cost_estimator::{CostCategory, ProjectionResult, MONTHS};

use super::breakdown::category_color;
use crate::format::{format_usd, format_usd_compact};
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    MonthlyBreakdown,
    Trend,
    Comparison,
}

impl ChartView {
    pub fn next(&self) -> ChartView {
        match self {
            ChartView::MonthlyBreakdown => ChartView::Trend,
            ChartView::Trend => ChartView::Comparison,
            ChartView::Comparison => ChartView::MonthlyBreakdown,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartView::MonthlyBreakdown => "Monthly Cost Breakdown",
            ChartView::Trend => "Monthly Cost Trend by Category",
            ChartView::Comparison => "Cost Savings by Category",
        }
    }
}

const OPTIMIZED_COLOR: Color = Color::Green;
const CURRENT_COLOR: Color = Color::LightBlue;

pub struct ChartsWidget;

impl ChartsWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(projection) = &state.projection else {
            let empty = Paragraph::new("Fix the highlighted input to see charts")
                .style(Style::default().fg(Color::Gray))
                .block(Block::bordered().title(state.chart_view.title()));
            frame.render_widget(empty, area);
            return;
        };

        match state.chart_view {
            ChartView::MonthlyBreakdown => {
                Self::render_breakdown(frame, area, projection, &state.month_labels)
            }
            ChartView::Trend => Self::render_trend(frame, area, projection, &state.month_labels),
            ChartView::Comparison => Self::render_comparison(frame, area, projection),
        }
    }

    fn legend<'a>(title: &'a str, entries: &[(&'a str, Color)]) -> Line<'a> {
        let mut spans = vec![Span::raw(format!("{} ", title))];
        for (name, color) in entries {
            spans.push(Span::styled(format!("■ {} ", name), Style::default().fg(*color)));
        }
        Line::from(spans)
    }

    fn category_legend(title: &str) -> Line<'_> {
        let entries: Vec<(&str, Color)> = CostCategory::ALL
            .iter()
            .map(|category| (category.name(), category_color(*category)))
            .collect();
        Self::legend(title, &entries)
    }

    fn render_breakdown(
        frame: &mut Frame,
        area: Rect,
        projection: &ProjectionResult,
        labels: &[String],
    ) {
        let baseline = projection.baseline();
        let totals = baseline.monthly_totals();
        let mut chart = BarChart::default()
            .block(Block::bordered().title(Self::category_legend(
                ChartView::MonthlyBreakdown.title(),
            )))
            .bar_width(3)
            .bar_gap(0)
            .group_gap(1)
            .max(dollars(baseline.peak_month_total()).max(1));

        for month in 0..MONTHS {
            let bars: Vec<Bar> = CostCategory::ALL
                .iter()
                .map(|category| {
                    Bar::default()
                        .value(dollars(baseline.series(*category)[month]))
                        .style(Style::default().fg(category_color(*category)))
                })
                .collect();

            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(total_label(labels, month, totals[month])))
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, area);
    }

    fn render_trend(
        frame: &mut Frame,
        area: Rect,
        projection: &ProjectionResult,
        labels: &[String],
    ) {
        let baseline = projection.baseline();
        let points: Vec<(CostCategory, Vec<(f64, f64)>)> = CostCategory::ALL
            .iter()
            .map(|category| {
                let series = baseline
                    .series(*category)
                    .iter()
                    .enumerate()
                    .map(|(month, value)| (month as f64, *value))
                    .collect();
                (*category, series)
            })
            .collect();

        let y_max = CostCategory::ALL
            .iter()
            .flat_map(|category| baseline.series(*category).iter().copied())
            .fold(0.0, f64::max)
            .max(1.0)
            * 1.1;

        let datasets = points
            .iter()
            .map(|(category, data)| {
                Dataset::default()
                    .name(category.name())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(category_color(*category)))
                    .data(data)
            })
            .collect();

        let x_labels = vec![
            month_label(labels, 0),
            month_label(labels, MONTHS / 2),
            month_label(labels, MONTHS - 1),
        ];
        let y_labels = vec![
            format_usd(0.0, 0),
            format_usd(y_max / 2.0, 0),
            format_usd(y_max, 0),
        ];

        let chart = Chart::new(datasets)
            .block(Block::bordered().title(ChartView::Trend.title()))
            .x_axis(
                Axis::default()
                    .title("Month")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, (MONTHS - 1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Cost ($)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_comparison(frame: &mut Frame, area: Rect, projection: &ProjectionResult) {
        let peak = CostCategory::ALL
            .iter()
            .flat_map(|category| {
                [
                    projection.baseline().category_total(*category),
                    projection.optimized().category_total(*category),
                ]
            })
            .fold(0.0, f64::max);

        let mut chart = BarChart::default()
            .block(Block::bordered().title(Self::legend(
                ChartView::Comparison.title(),
                &[("Current", CURRENT_COLOR), ("Optimized", OPTIMIZED_COLOR)],
            )))
            .bar_width(8)
            .bar_gap(1)
            .group_gap(4)
            .max(dollars(peak).max(1));

        for category in CostCategory::ALL {
            let current = projection.baseline().category_total(category);
            let optimized = projection.optimized().category_total(category);
            let bars = [
                Bar::default()
                    .value(dollars(current))
                    .text_value(format_usd_compact(current))
                    .style(Style::default().fg(CURRENT_COLOR)),
                Bar::default()
                    .value(dollars(optimized))
                    .text_value(format_usd_compact(optimized))
                    .style(Style::default().fg(OPTIMIZED_COLOR)),
            ];

            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(category.name()))
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, area);
    }
}

fn dollars(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

fn month_label(labels: &[String], month: usize) -> String {
    labels
        .get(month)
        .cloned()
        .unwrap_or_else(|| format!("M{}", month + 1))
}

/// Month name with that month's total, shown under each bar group.
fn total_label(labels: &[String], month: usize, total: f64) -> String {
    format!("{} {}", month_label(labels, month), format_usd_compact(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use warehouse_cost_estimator::{month_labels, CostProjector, UsageConfig};

    fn rendered(view: ChartView) -> String {
        let labels = month_labels(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut state = AppState::new(UsageConfig::default(), CostProjector::new(), labels);
        state.chart_view = view;

        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal
            .draw(|frame| ChartsWidget::render(frame, frame.area(), &state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_comparison_groups_by_category() {
        let screen = rendered(ChartView::Comparison);
        assert!(screen.contains("Cost Savings by Category"));
        for category in CostCategory::ALL {
            assert!(screen.contains(category.name()), "missing {}", category);
        }
    }

    #[test]
    fn test_chart_view_cycles() {
        let view = ChartView::MonthlyBreakdown;
        assert_eq!(view.next(), ChartView::Trend);
        assert_eq!(view.next().next(), ChartView::Comparison);
        assert_eq!(view.next().next().next(), ChartView::MonthlyBreakdown);
    }

    #[test]
    fn test_month_label_fallback() {
        let labels = vec!["Jan".to_string()];
        assert_eq!(month_label(&labels, 0), "Jan");
        assert_eq!(month_label(&labels, 4), "M5");
    }

    #[test]
    fn test_total_label_includes_month_total() {
        let labels = vec!["Jan".to_string()];
        assert_eq!(total_label(&labels, 0, 1234.0), "Jan $1.2k");
        assert_eq!(total_label(&labels, 1, 400.0), "M2 $400");
    }

    #[test]
    fn test_dollars_rounds_and_floors_at_zero() {
        assert_eq!(dollars(399.6), 400);
        assert_eq!(dollars(-5.0), 0);
    }
}
