//! End-to-end walk through the numeric core: synthesize chart history,
//! smooth it, build a forecast band, then stress it with the what-if model.
//!
//! Run with: cargo run --example whatif_dashboard

use chart_math::moving_averages::sma;
use chart_math::series::generate_series;
use forecast_sim::band::generate_forecast;
use forecast_sim::metrics::forecast_accuracy;
use forecast_sim::whatif::{default_baseline, default_variables, default_weights};
use forecast_sim::{Algorithm, SensitivityModel};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(2024);

    // Thirty days of fabricated hot-rolled coil history plus a trend line.
    let history = generate_series(&mut rng, 40_500.0, 42_100.0, 30)?;
    let trend = sma(&history, 7)?;
    println!("last price: {}", history[history.len() - 1]);
    println!(
        "7-day SMA:  {:?}",
        trend.last().and_then(|v| *v)
    );

    // Seven-day outlook with a third of the chart showing realized history.
    let base = generate_forecast(&mut rng, 42_100.0, 42_800.0, 11, 0.02, true)?;
    println!("\nbase forecast:");
    for point in &base {
        println!(
            "  {:>15}  low {:>7}  mid {:>7}  high {:>7}",
            point.label, point.low, point.mid, point.high
        );
    }

    // Score the realized stretch against what the feed actually printed.
    let observed: Vec<f64> = base.iter().filter_map(|p| p.actual).collect();
    let realized = vec![42_150.0, 42_220.0, 42_310.0];
    println!("\n{}", forecast_accuracy(&observed, &realized)?);

    // Stress the outlook: dollar up 10%, iron ore up 5%.
    let mut variables = default_variables();
    if let Some(dollar) = variables.get_mut("dollar") {
        dollar.value *= 1.10;
    }
    if let Some(ore) = variables.get_mut("iron_ore") {
        ore.value *= 1.05;
    }

    let baseline = default_baseline();
    for algorithm in [Algorithm::Linear, Algorithm::Hybrid, Algorithm::Lstm] {
        let model = SensitivityModel::new(default_weights(), algorithm);
        let factor = model.impact_factor(&variables, &baseline)?;
        let stressed = model.simulate(&base, &variables, &baseline)?;
        let last = stressed.last().unwrap();
        println!(
            "\n{:?}: impact factor {:.4}, horizon mid {} -> {}",
            algorithm,
            factor,
            base.last().unwrap().mid,
            last.mid
        );
        println!("  as JSON: {}", serde_json::to_string(last)?);
    }

    Ok(())
}
