use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use vastu_kernel::api::{
    analyze_plan, classify_deviation, generate_32_zones, AnalysisCfg, CenterMode, RadialSampling,
    RingBounds, SamplerCfg,
};

mod input;
mod provenance;
mod report;

use provenance::{write_sidecar, InputRecord, SamplingRecord};
use report::{AnalysisReport, ZoneView};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Directional zone coverage analysis for floor plans")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample zone coverage of a boundary and write a JSON report
    Analyze {
        /// Boundary vertices: .csv with x,y columns or .json array
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Clockwise rotation of the drawing's North, in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rotation: f64,
        /// Samples per zone
        #[arg(long, default_value_t = 64)]
        samples: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Inner ring bound as a fraction of the radius (needs --ring-outer)
        #[arg(long, requires = "ring_outer")]
        ring_inner: Option<f64>,
        /// Outer ring bound as a fraction of the radius (needs --ring-inner)
        #[arg(long, requires = "ring_inner")]
        ring_outer: Option<f64>,
        /// Draw radii linearly (core-weighted) instead of area-uniform
        #[arg(long)]
        center_weighted: bool,
        /// Center the partition on the area centroid instead of the bounding box
        #[arg(long)]
        centroid: bool,
        /// JSON array of 32 ideal coverage percentages, zone order
        #[arg(long)]
        ideals: Option<PathBuf>,
    },
    /// Print the 32-zone table as JSON
    Zones {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rotation: f64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Print the band for a coverage deviation
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        deviation: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze {
            input,
            out,
            rotation,
            samples,
            seed,
            ring_inner,
            ring_outer,
            center_weighted,
            centroid,
            ideals,
        } => {
            let ring = match (ring_inner, ring_outer) {
                (Some(inner), Some(outer)) => Some(RingBounds::new(inner, outer)?),
                _ => None,
            };
            let cfg = AnalysisCfg {
                north_rotation: rotation,
                sampler: SamplerCfg {
                    sample_count: samples,
                    radial: if center_weighted {
                        RadialSampling::CenterWeighted
                    } else {
                        RadialSampling::AreaUniform
                    },
                },
                ring,
                center: if centroid {
                    CenterMode::AreaCentroid
                } else {
                    CenterMode::BoundingBox
                },
                seed,
                ..AnalysisCfg::default()
            };
            analyze(&input, &out, &cfg, ideals.as_deref())
        }
        Action::Zones { rotation, radius } => zones(rotation, radius),
        Action::Classify { deviation } => classify(deviation),
        Action::Report => report(),
    }
}

fn analyze(input: &Path, out: &Path, cfg: &AnalysisCfg, ideals: Option<&Path>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        rotation = cfg.north_rotation,
        samples = cfg.sampler.sample_count,
        seed = cfg.seed,
        "analyze"
    );
    let boundary = input::load_boundary(input)?;
    let res = analyze_plan(&boundary, cfg).context("analyzing boundary")?;
    let balance = match ideals {
        Some(path) => Some(res.balance(&input::load_ideals(path)?)?),
        None => None,
    };
    let doc = AnalysisReport::build(&res, balance.as_deref());
    tracing::info!(
        spread = doc.coverage_spread,
        estimated_area = doc.estimated_area,
        "analysis_done"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = write_sidecar(
        out,
        "analyze",
        &SamplingRecord::from(cfg),
        &InputRecord::new(input, ideals),
    )?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn zones(rotation: f64, radius: f64) -> Result<()> {
    tracing::info!(rotation, radius, "zones");
    ensure!(rotation.is_finite(), "rotation must be finite, got {rotation}");
    let partition = generate_32_zones(0.0, 0.0, radius, rotation);
    let rows: Vec<ZoneView> = partition.iter().map(ZoneView::from).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn classify(deviation: f64) -> Result<()> {
    println!("{}", classify_deviation(deviation).label());
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "kernel_version": vastu_kernel::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
