use std::env;
use warehouse_cost_estimator::prelude::*;
use warehouse_cost_estimator::{applied_optimizations, month_labels, ConfigLoader};

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn dollars(value: f64) -> String {
    let sign = if value.round() < 0.0 { "-" } else { "" };
    format!("{}${}", sign, format_number(value.abs().round() as u64))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Optional path to a JSON config; otherwise a sample medium-sized setup
    let (config, projector) = if args.len() >= 2 {
        println!("Loading estimator config from: {}", args[1]);
        let loaded = ConfigLoader::new().load_from_file(&args[1])?;
        let projector = CostProjector::with_price_sheet(loaded.price_sheet())?;
        (loaded.usage, projector)
    } else {
        let config = UsageConfig {
            warehouses: 3,
            size: WarehouseSize::Medium,
            hours_per_day: 14.0,
            storage_tb: 12.0,
            gen2: true,
            optimization: OptimizationOptions {
                pause_hours_per_day: 4.0,
                reduced_size: SizeReduction::To(WarehouseSize::Small),
                extra_discount_pct: 5.0,
            },
            ..UsageConfig::default()
        };
        (config, CostProjector::new())
    };

    let result = projector.project(&config)?;

    println!("\n=== Annual Projection ===");
    println!("Total annual cost:     {}", dollars(result.baseline_total()));
    println!("After optimization:    {}", dollars(result.optimized_total()));
    println!(
        "Savings:               {} ({:.1}%)",
        dollars(result.savings()),
        result.savings_pct()
    );

    println!("\n=== Cost Breakdown ===");
    for row in result.baseline().breakdown() {
        println!(
            "{:<14} {:>12} {:>6.1}%",
            row.category().name(),
            dollars(row.cost()),
            row.share_pct()
        );
    }

    println!("\n=== Monthly Totals ===");
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid start date"))?;
    let labels = month_labels(start);
    let baseline = result.baseline().monthly_totals();
    let optimized = result.optimized().monthly_totals();
    for (month, label) in labels.iter().enumerate() {
        println!(
            "{:<4} {:>12} {:>12}",
            label,
            dollars(baseline[month]),
            dollars(optimized[month])
        );
    }

    println!("\n=== Optimizations Applied ===");
    for optimization in applied_optimizations(&config) {
        println!("- {}", optimization);
    }

    Ok(())
}
