#![deny(missing_docs)]
//! A command-line interface for creating and reading secret sharing pads.

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use sspad_core::recovery;
use sspad_core::render;
use sspad_core::request::{self, PadRequest};
use std::fs;
use std::path::PathBuf;

mod printout;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Split the secrets in secrets.json across three pads\nsspad generate --secrets ./secrets.json --pads 3\n\n# Write the pads as JSON for another layout tool\nsspad generate --secrets ./secrets.json --format json --output ./pads.json\n\n# Read a secret back from two pads\nsspad decode --first \"512 077 903\" --second \"590 034 097\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split secrets across a new set of pads
    Generate {
        /// Path to a JSON file holding the secrets to split
        #[arg(short, long, value_name = "SECRETS_FILE")]
        secrets: PathBuf,

        /// The number of pads to create (2 to 26)
        #[arg(short, long, default_value_t = 2)]
        pads: usize,

        /// Text printed on every pad, e.g. who holds the other pads
        #[arg(short, long, default_value = "")]
        description: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Path to write the pads to. If omitted, the pads are printed to stdout.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Recover a secret from the codes of two pads
    Decode {
        /// Codes from the first pad, as printed
        #[arg(long, value_name = "CODES")]
        first: String,

        /// Codes from the second pad, listed next to the first pad's letter
        #[arg(long, value_name = "CODES")]
        second: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain text, one block per pad
    Text,
    /// JSON, for feeding a layout tool
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            secrets,
            pads,
            description,
            format,
            output,
        } => {
            let secrets_str = fs::read_to_string(&secrets).unwrap_or_else(|e| {
                error!("Failed to read secrets file '{}': {e}", secrets.display());
                std::process::exit(1);
            });
            let secret_list = request::secrets_from_json(&secrets_str).unwrap_or_else(|e| {
                error!("{e}");
                std::process::exit(1);
            });

            info!(
                "Splitting {} secret(s) across {pads} pad(s)...",
                secret_list.len()
            );
            let bundle = PadRequest::new(description, pads, secret_list)
                .build()
                .unwrap_or_else(|e| {
                    error!("Failed to create pads: {e}");
                    std::process::exit(1);
                });

            let rendered = match format {
                Format::Text => printout::render_bundle(&bundle),
                Format::Json => serde_json::to_string_pretty(&bundle).unwrap_or_else(|e| {
                    error!("Failed to serialize pads: {e}");
                    std::process::exit(1);
                }),
            };

            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, rendered) {
                        error!("Failed to write pads to '{}': {e}", path.display());
                        std::process::exit(1);
                    }
                    println!("Pads written to '{}'", path.display());
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Decode { first, second } => {
            let parse = |text: &str| {
                render::parse_codes(text).unwrap_or_else(|e| {
                    error!("{e}");
                    std::process::exit(1);
                })
            };
            let codes_a = parse(&first);
            let codes_b = parse(&second);

            match recovery::recover(&codes_a, &codes_b) {
                Ok(secret) => println!("{secret}"),
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
