//! Walk through the kernel on a simple L-shaped plan.
//!
//! Usage:
//!   cargo run -p vastu-kernel --example l_plan -- [samples]
//!
//! Prints per-sector mean coverage, the coverage spread, and the band of each sector
//! against a flat 100 % ideal. Exits non-zero if the analysis fails.

use std::process::ExitCode;
use vastu_kernel::api::{analyze_plan, classify_deviation, AnalysisCfg, Polygon, SamplerCfg};

fn main() -> ExitCode {
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2000usize);
    let res = Polygon::from_xy(&[
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 50.0),
        (50.0, 50.0),
        (50.0, 100.0),
        (0.0, 100.0),
    ])
    .and_then(|boundary| {
        let cfg = AnalysisCfg {
            sampler: SamplerCfg::with_samples(samples),
            seed: 7,
            ..AnalysisCfg::default()
        };
        analyze_plan(&boundary, &cfg)
    });
    let res = match res {
        Ok(res) => res,
        Err(err) => {
            eprintln!("analysis failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    for (sector, coverage) in res.sector_coverage() {
        let band = classify_deviation(coverage - 100.0);
        println!("{:<4} {:6.1}%  {}", sector.code(), coverage, band.label());
    }
    println!("spread: {:.2}", res.coverage_spread());
    ExitCode::SUCCESS
}
