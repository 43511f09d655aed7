//! Provenance sidecars: enough to rerun an analysis and get the same report.
//!
//! Coverage numbers are Monte Carlo estimates, so the sidecar records the sampling setup
//! (seed, samples per zone, radial mode, ring) at the top level next to the inputs and the
//! kernel build that produced them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use vastu_kernel::api::AnalysisCfg;

/// Sampling setup behind a coverage report.
#[derive(Debug, Serialize)]
pub struct SamplingRecord {
    pub seed: u64,
    pub samples_per_zone: usize,
    pub radial: &'static str,
    /// `[inner, outer]` as fractions of the partition radius; absent for the full disc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<[f64; 2]>,
    pub north_rotation: f64,
    pub center: &'static str,
}

impl From<&AnalysisCfg> for SamplingRecord {
    fn from(cfg: &AnalysisCfg) -> Self {
        Self {
            seed: cfg.seed,
            samples_per_zone: cfg.sampler.sample_count,
            radial: cfg.sampler.radial.label(),
            ring: cfg.ring.map(|r| [r.inner, r.outer]),
            north_rotation: cfg.north_rotation,
            center: cfg.center.label(),
        }
    }
}

/// Files an analysis read.
#[derive(Debug, Serialize)]
pub struct InputRecord {
    pub boundary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideals: Option<String>,
}

impl InputRecord {
    pub fn new(boundary: &Path, ideals: Option<&Path>) -> Self {
        Self {
            boundary: boundary.display().to_string(),
            ideals: ideals.map(|p| p.display().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    command: &'static str,
    code_rev: String,
    kernel_version: &'static str,
    #[serde(flatten)]
    sampling: &'a SamplingRecord,
    inputs: &'a InputRecord,
    report: String,
}

/// Write `<report-stem>.provenance.json` next to `report` and return its path.
pub fn write_sidecar(
    report: &Path,
    command: &'static str,
    sampling: &SamplingRecord,
    inputs: &InputRecord,
) -> Result<PathBuf> {
    let path = sidecar_path(report);
    let doc = Sidecar {
        command,
        code_rev: code_rev(),
        kernel_version: vastu_kernel::VERSION,
        sampling,
        inputs,
        report: report.display().to_string(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_owned());
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// Source revision: `VASTU_CODE_REV` if set, else the short git hash, else `"unknown"`.
pub fn code_rev() -> String {
    if let Some(rev) = std::env::var("VASTU_CODE_REV").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
