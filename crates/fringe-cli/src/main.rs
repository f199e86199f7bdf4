//! Fringe command-line interface.
//!
//! Compute double-slit interference patterns from TOML job files:
//! ```sh
//! fringe-cli run job.toml
//! fringe-cli validate job.toml
//! fringe-cli summary --wavelength-nm 532 --bandwidth-nm 20
//! fringe-cli sweep job.toml
//! ```

mod config;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fringe_core::display::fringe_label;
use fringe_core::summary::ParameterSummary;
use fringe_core::types::Parameters;

#[derive(Parser)]
#[command(name = "fringe-cli")]
#[command(about = "Fringe: Young's double-slit interference simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a pattern from a TOML configuration file and write the results.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without computing anything.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Print the parameter summary and visible bright fringes.
    Summary {
        /// Slit separation (mm).
        #[arg(long, default_value_t = 0.5)]
        d_mm: f64,
        /// Slit-to-screen distance (m).
        #[arg(long, default_value_t = 2.0)]
        l_m: f64,
        /// Centre wavelength (nm).
        #[arg(long, default_value_t = 632.0)]
        wavelength_nm: f64,
        /// Spectral bandwidth (nm); 0 is an ideal monochromatic source.
        #[arg(long, default_value_t = 0.0)]
        bandwidth_nm: f64,
    },
    /// Evaluate fringe contrast over the bandwidths listed in the [sweep] table.
    Sweep {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Fringe Double-Slit Simulator");
            println!("============================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let pattern = runner::run_job(&job);

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_intensity {
                runner::write_intensity_csv(&pattern, &out_dir.join("intensity.csv"))?;
            }
            if job.output.save_fringes {
                runner::write_fringes_csv(&pattern, &out_dir.join("fringes.csv"))?;
            }
            if job.output.save_json {
                runner::write_pattern_json(&pattern, &out_dir.join("pattern.json"))?;
            }

            println!();
            print!("{}", ParameterSummary::new(&pattern));
            println!();
            println!("Results written to: {}", out_dir.display());
            Ok(())
        }
        Commands::Validate { config } => {
            let _job = config::load_config(&config)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Summary {
            d_mm,
            l_m,
            wavelength_nm,
            bandwidth_nm,
        } => {
            let params = Parameters::from_lab_units(d_mm, l_m, wavelength_nm, bandwidth_nm);
            params.validate()?;
            let pattern = runner::run_parameters(&params);

            print!("{}", ParameterSummary::new(&pattern));
            println!();
            if pattern.bright_fringes.is_empty() {
                println!("No bright fringes (slit separation is zero).");
            } else {
                println!("Bright fringes ({}):", pattern.bright_fringes.len());
                for f in &pattern.bright_fringes {
                    println!("  {:>24}  x = {:+.4} mm", fringe_label(f.order), f.position * 1e3);
                }
            }
            Ok(())
        }
        Commands::Sweep { config, output } => {
            let job = config::load_config(&config)?;
            let Some(sweep) = &job.sweep else {
                anyhow::bail!("'{}' has no [sweep] table", config.display());
            };

            let base = job.parameters.to_parameters();
            let rows = runner::run_sweep(&base, &sweep.bandwidths_nm);

            println!("{:>10}  {:>8}  {:>10}  {:>10}  {:>8}", "Δλ (nm)", "peak", "I(k=1)", "visibility", "variance");
            for row in &rows {
                let first = row
                    .first_order_intensity
                    .map(|v| format!("{:.4}", v))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:>10.1}  {:>8.4}  {:>10}  {:>10.4}  {:>8.4}",
                    row.bandwidth_nm, row.peak_intensity, first, row.visibility, row.variance
                );
            }

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            runner::write_sweep_csv(&rows, &base, &out_dir.join("sweep.csv"))?;
            if job.output.save_json {
                runner::write_sweep_json(&rows, &out_dir.join("sweep.json"))?;
            }
            Ok(())
        }
    }
}
