//! Job runner: computes patterns and writes result files.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use fringe_core::display::{annotations, contrast_variance, fringe_visibility};
use fringe_core::model::{InterferenceModel, IntensityModel};
use fringe_core::types::{FringePattern, Parameters};

use crate::config::JobConfig;

/// Compute the pattern for a job's parameters.
pub fn run_job(job: &JobConfig) -> FringePattern {
    let params = job.parameters.to_parameters();
    run_parameters(&params)
}

/// Compute the pattern for explicit parameters, logging the derived values.
pub fn run_parameters(params: &Parameters) -> FringePattern {
    let model = IntensityModel;
    log::info!(
        "{}: d={:.3} mm, L={:.2} m, λ={:.1} nm, Δλ={:.1} nm",
        model.name(),
        params.slit_separation_mm(),
        params.screen_distance,
        params.wavelength_nm(),
        params.bandwidth_nm()
    );

    let pattern = model.compute(params);

    if pattern.has_fringes() {
        log::info!(
            "Fringe spacing {:.4} mm, {} bright fringes visible",
            pattern.fringe_spacing * 1e3,
            pattern.bright_fringes.len()
        );
    } else {
        log::warn!("Slit separation is zero: no fringe spacing, no bright fringes");
    }
    pattern
}

/// One row of a bandwidth sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub bandwidth_nm: f64,
    /// Largest sampled intensity.
    pub peak_intensity: f64,
    /// Intensity exactly at the first-order bright fringe, if one exists.
    pub first_order_intensity: Option<f64>,
    pub visibility: f64,
    /// Population variance of the sampled curve.
    pub variance: f64,
}

/// Evaluate the job's parameters at each bandwidth, in parallel.
///
/// Rows come back in the order the bandwidths were listed.
pub fn run_sweep(base: &Parameters, bandwidths_nm: &[f64]) -> Vec<SweepRow> {
    let model = IntensityModel;
    log::info!("Sweeping {} bandwidths", bandwidths_nm.len());

    bandwidths_nm
        .par_iter()
        .map(|&bw| {
            let params = Parameters { bandwidth: bw * 1e-9, ..*base };
            let pattern = model.compute(&params);
            let first_order_intensity = pattern
                .fringe(1)
                .map(|f| model.intensity_at(&params, f.position));
            log::debug!("Δλ={:.1} nm done", bw);
            SweepRow {
                bandwidth_nm: bw,
                peak_intensity: pattern.field.peak(),
                first_order_intensity,
                visibility: fringe_visibility(&pattern.field),
                variance: contrast_variance(&pattern.field),
            }
        })
        .collect()
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_parameter_header(file: &mut impl Write, params: &Parameters) -> Result<()> {
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# slit_separation_mm: {}", params.slit_separation_mm())?;
    writeln!(file, "# screen_distance_m: {}", params.screen_distance)?;
    writeln!(file, "# wavelength_nm: {}", params.wavelength_nm())?;
    writeln!(file, "# bandwidth_nm: {}", params.bandwidth_nm())?;
    Ok(())
}

/// Write the sampled intensity curve to a CSV file with a metadata header.
pub fn write_intensity_csv(pattern: &FringePattern, path: &Path) -> Result<()> {
    create_parent(path)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;

    writeln!(file, "# Fringe — Double-Slit Intensity Profile")?;
    write_parameter_header(&mut file, &pattern.parameters)?;
    writeln!(file, "# fringe_spacing_m: {:.6e}", pattern.fringe_spacing)?;
    writeln!(file, "#")?;
    writeln!(file, "x_m,intensity")?;

    for (x, i) in pattern.field.samples() {
        writeln!(file, "{:.6e},{:.6e}", x, i)?;
    }

    log::info!("Intensity profile written to: {}", path.display());
    Ok(())
}

/// Write the visible bright fringes and their labels to a CSV file.
pub fn write_fringes_csv(pattern: &FringePattern, path: &Path) -> Result<()> {
    create_parent(path)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;

    writeln!(file, "# Fringe — Bright Fringe Positions")?;
    write_parameter_header(&mut file, &pattern.parameters)?;
    writeln!(file, "#")?;
    writeln!(file, "order,position_m,label")?;

    for (fringe, ann) in pattern.bright_fringes.iter().zip(annotations(&pattern.bright_fringes)) {
        writeln!(file, "{},{:.6e},\"{}\"", fringe.order, fringe.position, ann.label)?;
    }

    log::info!("Bright fringes written to: {}", path.display());
    Ok(())
}

/// Write the full pattern to a JSON file.
pub fn write_pattern_json(pattern: &FringePattern, path: &Path) -> Result<()> {
    create_parent(path)?;
    let json = serde_json::to_string_pretty(pattern).context("JSON serialisation error")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write '{}'", path.display()))?;

    log::info!("Pattern (JSON) written to: {}", path.display());
    Ok(())
}

/// Write sweep results to a JSON file.
pub fn write_sweep_json(rows: &[SweepRow], path: &Path) -> Result<()> {
    create_parent(path)?;
    let json = serde_json::to_string_pretty(rows).context("JSON serialisation error")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write '{}'", path.display()))?;

    log::info!("Sweep (JSON) written to: {}", path.display());
    Ok(())
}

/// Write sweep results to a CSV file.
pub fn write_sweep_csv(rows: &[SweepRow], base: &Parameters, path: &Path) -> Result<()> {
    create_parent(path)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;

    writeln!(file, "# Fringe — Bandwidth Sweep")?;
    write_parameter_header(&mut file, base)?;
    writeln!(file, "#")?;
    writeln!(file, "bandwidth_nm,peak_intensity,first_order_intensity,visibility,variance")?;

    for row in rows {
        let first = row
            .first_order_intensity
            .map(|v| format!("{:.6}", v))
            .unwrap_or_default();
        writeln!(
            file,
            "{:.2},{:.6},{},{:.6},{:.6}",
            row.bandwidth_nm, row.peak_intensity, first, row.visibility, row.variance
        )?;
    }

    log::info!("Sweep written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fringe_core::model::SAMPLE_COUNT;

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_intensity_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("intensity.csv");
        let pattern = run_parameters(&Parameters::default());

        write_intensity_csv(&pattern, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# wavelength_nm: 632"));
        let lines = data_lines(&content);
        assert_eq!(lines[0], "x_m,intensity");
        assert_eq!(lines.len(), SAMPLE_COUNT + 1);
        assert!(lines[1].starts_with("-1.000000e-1,"));
    }

    #[test]
    fn test_fringes_csv_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fringes.csv");
        let pattern = run_parameters(&Parameters::default());

        write_fringes_csv(&pattern, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines[0], "order,position_m,label");
        assert_eq!(lines.len(), pattern.bright_fringes.len() + 1);
        assert!(content.contains("0,0.000000e0,\"k=0 (central maximum)\""));
        assert!(content.contains("\"k=-31\""));
    }

    #[test]
    fn test_fringes_csv_degenerate_has_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fringes.csv");
        let pattern = run_parameters(&Parameters::from_lab_units(0.0, 2.0, 632.0, 0.0));

        write_fringes_csv(&pattern, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(data_lines(&content), vec!["order,position_m,label"]);
    }

    #[test]
    fn test_pattern_json_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.json");
        let pattern = run_parameters(&Parameters::default());

        write_pattern_json(&pattern, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("fringe_spacing").is_some());
        assert_eq!(value["bright_fringes"].as_array().unwrap().len(), 63);
    }

    #[test]
    fn test_sweep_preserves_order_and_reduces_contrast() {
        let base = Parameters::default();
        let rows = run_sweep(&base, &[0.0, 25.0, 50.0]);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].bandwidth_nm, 0.0);
        assert_eq!(rows[2].bandwidth_nm, 50.0);
        for row in &rows {
            assert!(row.peak_intensity <= 4.0);
        }
        assert!(rows[1].variance < rows[0].variance);
        assert!(rows[2].variance < rows[0].variance);

        let mono = rows[0].first_order_intensity.unwrap();
        let broad = rows[2].first_order_intensity.unwrap();
        assert!(broad < mono);
    }

    #[test]
    fn test_sweep_json_uses_null_for_missing_first_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        let rows = run_sweep(&Parameters::from_lab_units(0.0, 2.0, 632.0, 0.0), &[5.0]);

        write_sweep_json(&rows, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value[0]["first_order_intensity"].is_null());
        assert_eq!(value[0]["bandwidth_nm"], 5.0);
    }

    #[test]
    fn test_sweep_csv_blank_for_missing_first_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let base = Parameters::from_lab_units(0.0, 2.0, 632.0, 0.0);
        let rows = run_sweep(&base, &[0.0, 10.0]);
        assert!(rows.iter().all(|r| r.first_order_intensity.is_none()));

        write_sweep_csv(&rows, &base, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0.00,4.000000,,"));
    }
}
