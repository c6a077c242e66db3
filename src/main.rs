//! FIB-4 calculator CLI
//!
//! Command-line front end for the FIB-4 scoring library: takes the four lab
//! values, prints the score and risk band.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fib4::build_info::BuildInfo;
use fib4::labs::PlateletUnit;
use fib4::models::LabForm;
use fib4::scoring::score_form;

#[derive(Parser, Debug)]
#[command(name = "fib4")]
#[command(about = "FIB-4 liver fibrosis risk calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the FIB-4 score from lab values
    Score {
        /// Age in years
        #[arg(long)]
        age: String,

        /// AST in IU/L
        #[arg(long)]
        ast: String,

        /// ALT in IU/L
        #[arg(long)]
        alt: String,

        /// Platelet count
        #[arg(long)]
        platelets: String,

        /// Platelet unit (10^9/L, 10^3/uL, or /uL)
        #[arg(long, default_value = "10^9/L")]
        unit: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print build information
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fib4=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            age,
            ast,
            alt,
            platelets,
            unit,
            json,
        } => {
            // Unknown unit tags pass through as already-canonical
            let platelet_unit = PlateletUnit::from_str(&unit).unwrap_or_else(|| {
                tracing::warn!(
                    "Unrecognized platelet unit '{}'. Treating value as 10^9/L.",
                    unit
                );
                PlateletUnit::default()
            });

            let form = LabForm {
                age,
                ast,
                alt,
                platelets,
                platelet_unit,
            };

            match score_form(&form) {
                Ok(result) => {
                    if json {
                        println!("{}", serde_json::to_string(&result)?);
                    } else {
                        println!("FIB-4 Score: {}", result.score);
                        println!("Risk Category: {}", result.category.as_str());
                        println!("{}", result.category.advisory());
                    }
                }
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Status => {
            println!("{}", serde_json::to_string_pretty(&BuildInfo::current())?);
        }
    }

    Ok(())
}
