//! Plain-text report for non-interactive runs.

use std::fmt::Write;
use warehouse_cost_estimator::optimizations::NO_OPTIMIZATIONS;
use warehouse_cost_estimator::{
    applied_optimizations, CostCategory, ProjectionResult, UsageConfig, MONTHS,
};

use crate::format::format_usd;

pub fn render_report(
    config: &UsageConfig,
    projection: &ProjectionResult,
    labels: &[String],
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = write_report(&mut out, config, projection, labels);
    out
}

fn write_report(
    out: &mut String,
    config: &UsageConfig,
    projection: &ProjectionResult,
    labels: &[String],
) -> std::fmt::Result {
    writeln!(out, "Total Annual Cost: {}", format_usd(projection.baseline_total(), 2))?;
    if config.gen2 {
        writeln!(
            out,
            "Gen 2 Warehouse pricing applied: 30% credit efficiency, scaling discounts, and pause optimization."
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Cost Breakdown")?;
    writeln!(out, "{:<14} {:>14} {:>8}", "Category", "Cost", "Share")?;
    for row in projection.baseline().breakdown() {
        writeln!(
            out,
            "{:<14} {:>14} {:>7.1}%",
            row.category().name(),
            format_usd(row.cost(), 0),
            row.share_pct()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly Costs")?;
    write!(out, "{:<6}", "Month")?;
    for category in CostCategory::ALL {
        write!(out, " {:>14}", category.name())?;
    }
    writeln!(out, " {:>14} {:>14}", "Total", "Optimized")?;

    let baseline = projection.baseline();
    let baseline_totals = baseline.monthly_totals();
    let optimized_totals = projection.optimized().monthly_totals();
    for month in 0..MONTHS {
        let label = labels.get(month).map(String::as_str).unwrap_or("-");
        write!(out, "{:<6}", label)?;
        for category in CostCategory::ALL {
            write!(out, " {:>14}", format_usd(baseline.series(category)[month], 0))?;
        }
        writeln!(
            out,
            " {:>14} {:>14}",
            format_usd(baseline_totals[month], 0),
            format_usd(optimized_totals[month], 0)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Potential Savings After Optimization")?;
    writeln!(
        out,
        "Annual Cost After Optimization: {}",
        format_usd(projection.optimized_total(), 2)
    )?;
    writeln!(
        out,
        "Savings: {} ({:.1}%)",
        format_usd(projection.savings(), 2),
        projection.savings_pct()
    )?;

    writeln!(out)?;
    writeln!(out, "Summary of Optimizations Applied")?;
    let applied = applied_optimizations(config);
    if applied.is_empty() {
        writeln!(out, "- {}", NO_OPTIMIZATIONS)?;
    }
    for optimization in applied {
        writeln!(out, "- {}", optimization)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_cost_estimator::{project, OptimizationOptions, WarehouseSize};

    fn labels() -> Vec<String> {
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_report_for_flat_usage() {
        let config = UsageConfig {
            warehouses: 1,
            size: WarehouseSize::XSmall,
            hours_per_day: 10.0,
            active_days_per_month: 20,
            storage_tb: 0.0,
            storage_growth_pct: 0.0,
            transfer_tb: 0.0,
            transfer_growth_pct: 0.0,
            ..UsageConfig::default()
        };
        let projection = project(&config).unwrap();
        let report = render_report(&config, &projection, &labels());

        assert!(report.contains("Total Annual Cost: $4,800.00"));
        assert!(report.contains("Savings: $0.00 (0.0%)"));
        assert!(report.contains(NO_OPTIMIZATIONS));
        assert!(report.lines().any(|line| line.starts_with("Dec")));
    }

    #[test]
    fn test_report_lists_optimizations() {
        let config = UsageConfig {
            gen2: true,
            optimization: OptimizationOptions {
                pause_hours_per_day: 2.0,
                ..OptimizationOptions::default()
            },
            ..UsageConfig::default()
        };
        let projection = project(&config).unwrap();
        let report = render_report(&config, &projection, &labels());

        assert!(report.contains("Gen 2 Warehouse pricing applied"));
        assert!(report.contains("Paused warehouses for 2 hours/day"));
        assert!(!report.contains(NO_OPTIMIZATIONS));
    }
}
