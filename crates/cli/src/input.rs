use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;
use vastu_kernel::api::{Point, Polygon};

/// JSON vertex: either `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonVertex {
    Pair([f64; 2]),
    Object { x: f64, y: f64 },
}

impl From<JsonVertex> for Point {
    fn from(v: JsonVertex) -> Self {
        match v {
            JsonVertex::Pair([x, y]) => Point::new(x, y),
            JsonVertex::Object { x, y } => Point::new(x, y),
        }
    }
}

/// Load a boundary polygon from `.csv` (columns `x`, `y`) or `.json`.
pub fn load_boundary(path: &Path) -> Result<Polygon> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let vertices = match ext.as_deref() {
        Some("csv") => read_csv_vertices(path)?,
        Some("json") => read_json_vertices(path)?,
        _ => bail!(
            "unsupported boundary format for {} (expected .csv or .json)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), vertices = vertices.len(), "boundary_loaded");
    Polygon::new(vertices).with_context(|| format!("boundary in {}", path.display()))
}

fn read_csv_vertices(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        })
        .collect()
}

fn read_json_vertices(path: &Path) -> Result<Vec<Point>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let verts: Vec<JsonVertex> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing vertices from {}", path.display()))?;
    Ok(verts.into_iter().map(Point::from).collect())
}

/// Load a table of 32 ideal percentages (JSON array, zone order).
pub fn load_ideals(path: &Path) -> Result<Vec<f64>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing ideals from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_pairs_and_objects_load() {
        let dir = tempdir().unwrap();
        let pairs = dir.path().join("pairs.json");
        fs::write(&pairs, "[[0,0],[10,0],[10,10],[0,10]]").unwrap();
        assert_eq!(load_boundary(&pairs).unwrap().len(), 4);

        let objs = dir.path().join("objs.json");
        fs::write(&objs, r#"[{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":3}]"#).unwrap();
        let poly = load_boundary(&objs).unwrap();
        assert_eq!(poly.vertices()[2], Point::new(4.0, 3.0));
    }

    #[test]
    fn csv_columns_load_as_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        fs::write(&path, "x,y\n0,0\n100,0\n100,100\n0,100.5\n").unwrap();
        let poly = load_boundary(&path).unwrap();
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.vertices()[3], Point::new(0.0, 100.5));
    }

    #[test]
    fn short_or_unknown_inputs_fail() {
        let dir = tempdir().unwrap();
        let short = dir.path().join("short.json");
        fs::write(&short, "[[0,0],[1,1]]").unwrap();
        assert!(load_boundary(&short).is_err());
        let txt = dir.path().join("plan.txt");
        fs::write(&txt, "0 0").unwrap();
        assert!(load_boundary(&txt).is_err());
    }

    #[test]
    fn ideals_parse_as_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ideals.json");
        fs::write(&path, "[50, 60.5]").unwrap();
        assert_eq!(load_ideals(&path).unwrap(), vec![50.0, 60.5]);
    }
}
