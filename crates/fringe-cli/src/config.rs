//! TOML configuration deserialisation for interference jobs.
//!
//! ```toml
//! [parameters]
//! slit_separation_mm = 0.5
//! screen_distance_m = 2.0
//! wavelength_nm = 632.0
//! bandwidth_nm = 0.0
//!
//! [output]
//! directory = "./output"
//! save_json = true
//!
//! [sweep]
//! bandwidths_nm = [0.0, 10.0, 25.0, 50.0, 100.0]
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use fringe_core::types::Parameters;

/// Top-level job configuration.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub parameters: ParameterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Bandwidth sweep, only used by the `sweep` subcommand.
    pub sweep: Option<SweepConfig>,
}

/// Experiment parameters in lab units. Missing keys fall back to the reset state.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParameterConfig {
    #[serde(default = "default_slit_separation_mm")]
    pub slit_separation_mm: f64,
    #[serde(default = "default_screen_distance_m")]
    pub screen_distance_m: f64,
    #[serde(default = "default_wavelength_nm")]
    pub wavelength_nm: f64,
    #[serde(default)]
    pub bandwidth_nm: f64,
}

fn default_slit_separation_mm() -> f64 {
    0.5
}
fn default_screen_distance_m() -> f64 {
    2.0
}
fn default_wavelength_nm() -> f64 {
    632.0
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            slit_separation_mm: default_slit_separation_mm(),
            screen_distance_m: default_screen_distance_m(),
            wavelength_nm: default_wavelength_nm(),
            bandwidth_nm: 0.0,
        }
    }
}

impl ParameterConfig {
    /// Convert to model parameters (metres).
    pub fn to_parameters(self) -> Parameters {
        Parameters::from_lab_units(
            self.slit_separation_mm,
            self.screen_distance_m,
            self.wavelength_nm,
            self.bandwidth_nm,
        )
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the sampled intensity curve as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_intensity: bool,
    /// Whether to save the visible bright fringes as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_fringes: bool,
    /// Whether to also save the full pattern as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_intensity: true,
            save_fringes: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Bandwidth sweep specification.
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    /// Spectral widths to evaluate (nm), all other parameters held fixed.
    pub bandwidths_nm: Vec<f64>,
}

/// Load, parse, and validate a TOML job configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config: JobConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    validate(&config)?;
    log::debug!("Loaded job configuration: {:?}", config);
    Ok(config)
}

/// Check parameters and any sweep bandwidths for physical validity.
pub fn validate(config: &JobConfig) -> anyhow::Result<()> {
    let params = config.parameters.to_parameters();
    params.validate().context("Invalid [parameters]")?;

    if let Some(sweep) = &config.sweep {
        if sweep.bandwidths_nm.is_empty() {
            anyhow::bail!("[sweep] bandwidths_nm must list at least one value");
        }
        for &bw in &sweep.bandwidths_nm {
            Parameters { bandwidth: bw * 1e-9, ..params }
                .validate()
                .with_context(|| format!("Invalid sweep bandwidth {} nm", bw))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("job.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_empty_config_uses_reset_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "");
        let job = load_config(&path).unwrap();

        let p = job.parameters.to_parameters();
        assert_eq!(p, Parameters::default());
        assert_eq!(job.output.directory, "./output");
        assert!(job.output.save_intensity);
        assert!(job.output.save_fringes);
        assert!(!job.output.save_json);
        assert!(job.sweep.is_none());
    }

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[parameters]
slit_separation_mm = 1.2
screen_distance_m = 3.5
wavelength_nm = 450.0
bandwidth_nm = 20.0

[output]
directory = "results"
save_json = true
save_fringes = false

[sweep]
bandwidths_nm = [0.0, 10.0, 40.0]
"#,
        );
        let job = load_config(&path).unwrap();
        let p = job.parameters.to_parameters();
        assert_relative_eq!(p.slit_separation, 1.2e-3, max_relative = 1e-12);
        assert_relative_eq!(p.screen_distance, 3.5);
        assert_relative_eq!(p.wavelength, 450e-9, max_relative = 1e-12);
        assert_relative_eq!(p.bandwidth, 20e-9, max_relative = 1e-12);
        assert_eq!(job.output.directory, "results");
        assert!(job.output.save_json);
        assert!(!job.output.save_fringes);
        assert_eq!(job.sweep.unwrap().bandwidths_nm, vec![0.0, 10.0, 40.0]);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[parameters]\nscreen_distance_m = -1.0\n");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("screen_distance"));
    }

    #[test]
    fn test_invalid_sweep_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[sweep]\nbandwidths_nm = [10.0, -5.0]\n");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("-5"));

        let path = write_config(&dir, "[sweep]\nbandwidths_nm = []\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/job.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/job.toml"));
    }
}
