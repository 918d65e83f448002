use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tidal_love::io::csv;
use tidal_love::io::json::{self, LoveSummary};
use tidal_love::love::{love_number, relative_error};
use tidal_love::models::{self, ValidationConfig};
use tidal_love::{LoveError, Result};

#[derive(Parser, Debug)]
#[command(name = "tidal-love", about = "Tidal Love number k2 from a radial density profile")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the integrator against the uniform sphere and the n=1 polytrope
    Validate {
        /// Samples per profile
        #[arg(long, default_value_t = ValidationConfig::default().points)]
        points: usize,

        /// Write a JSON summary to this path
        #[arg(long)]
        summary_out: Option<PathBuf>,
    },
    /// Compute k2 for a tabulated `radius,density` profile
    Profile {
        /// CSV file with two columns: radius, density
        path: PathBuf,

        /// Known k2 to compare against
        #[arg(long)]
        expected: Option<f64>,

        /// Write radius, mass, mean density and eta at every sample
        #[arg(long)]
        trajectory_out: Option<PathBuf>,

        /// Write a JSON summary to this path
        #[arg(long)]
        summary_out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Validate {
        points: ValidationConfig::default().points,
        summary_out: None,
    });

    match command {
        Commands::Validate { points, summary_out } => {
            let config = ValidationConfig { points };
            let mut summaries = Vec::new();

            for case in models::cases(config.points)? {
                let k2 = case.profile.lovek2()?;
                let summary = LoveSummary {
                    name: case.name,
                    points: case.profile.len(),
                    k2,
                    expected: Some(case.expected),
                };
                print_summary(&summary);
                summaries.push(summary);
            }

            if let Some(path) = summary_out {
                json::write_summary_file(&path, &summaries)?;
                tracing::info!("wrote summary to {}", path.display());
            }
        }
        Commands::Profile { path, expected, trajectory_out, summary_out } => {
            let profile = csv::read_profile_file(&path)?;
            tracing::info!("loaded {} samples from {}", profile.len(), path.display());

            let k2 = match &trajectory_out {
                Some(out) => {
                    let shells = profile.integrate()?;
                    csv::write_trajectory_file(out, &shells)?;
                    tracing::info!("wrote trajectory to {}", out.display());
                    let surface = shells
                        .last()
                        .ok_or(LoveError::TooFewPoints { len: shells.len() })?;
                    love_number(surface.eta)?
                }
                None => profile.lovek2()?,
            };

            let summary = LoveSummary {
                name: path.display().to_string(),
                points: profile.len(),
                k2,
                expected,
            };
            print_summary(&summary);

            if let Some(out) = summary_out {
                json::write_summary_file(&out, &[summary])?;
            }
        }
    }

    Ok(())
}

fn print_summary(s: &LoveSummary) {
    println!();
    println!("{}, N={}", s.name, s.points);
    match s.expected {
        Some(expected) => println!(
            "expected: {:.6}; calculated: {:.6}; err: {:.3e}",
            expected,
            s.k2,
            relative_error(s.k2, expected)
        ),
        None => println!("calculated: {:.6}", s.k2),
    }
}
