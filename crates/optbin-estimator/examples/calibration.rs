//! Fits an empirical calibration curve to synthetic binary labels
//!
//! Run with `RUST_LOG=optbin=debug` to see each search step.

use optbin_estimator::{Aggregation, BinnerBuilder, SmoothingPrior, Strategy};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Cauchy, Distribution};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(123);

    // Heavy-tailed mixture, truncated to a reasonable range
    let components = [
        (-5.0, 1.8, 500),
        (-4.0, 0.8, 2000),
        (-1.0, 0.3, 500),
        (2.0, 0.8, 1000),
        (4.0, 1.5, 500),
    ];
    let mut x: Vec<f64> = Vec::new();
    for (location, scale, count) in components {
        let cauchy = Cauchy::new(location, scale).unwrap();
        x.extend((0..count).map(|_| cauchy.sample(&mut rng)));
    }
    x.retain(|v| v.abs() < 15.0);

    // Labels are more likely to be positive to the right
    let y: Vec<f64> = x
        .iter()
        .map(|&v| {
            let p = 1.0 / (1.0 + (-0.6 * v).exp());
            if rng.gen::<f64>() < p { 1.0 } else { 0.0 }
        })
        .collect();

    println!("=== Density (unit weights) ===");
    let ones = vec![1.0; x.len()];
    for strategy in Strategy::ALL {
        let mut binner = BinnerBuilder::new()
            .strategy(strategy)
            .max_bins(100)
            .prior(SmoothingPrior::SampleMagnitude)
            .build()
            .unwrap();
        match binner.fit(&x, &ones) {
            Ok(model) => println!(
                "{model}: score={:.2}, evaluations={}",
                model.score(),
                model.evaluations()
            ),
            Err(e) => println!("{strategy}: {e}"),
        }
    }

    println!("\n=== Calibration (mean label per bin) ===");
    let mut binner = BinnerBuilder::new()
        .strategy(Strategy::GrowPrune)
        .max_bins(60)
        .smoothing(10.0)
        .aggregation(Aggregation::Mean)
        .build()
        .unwrap();
    let model = binner.fit(&x, &y).unwrap();
    println!("{model}");
    for bin in model.bins() {
        println!("  {bin}");
    }

    let queries = [-20.0, -5.0, 0.0, 5.0, 20.0];
    let probabilities = binner.transform(&queries).unwrap();
    for (q, p) in queries.iter().zip(probabilities) {
        println!("P(y=1 | x={q:>6.1}) = {p:.3}");
    }
}
