use clap::{Parser, Subcommand, ValueEnum};
use coinchange::application::calculator::ChangeCalculator;
use coinchange::interfaces::csv::request_reader::RequestReader;
use coinchange::interfaces::csv::result_writer::ResultWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracing filter directive, e.g. `debug` or `coinchange=trace`
    #[arg(long, env = "COINCHANGE_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Break a single amount into coins
    Compute {
        /// Currency code (USD or GBP)
        currency: String,

        /// Amount in minor units (cents, pence) unless --major is given
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,

        /// Read the amount in major units (dollars, pounds)
        #[arg(long)]
        major: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute change for every `currency,amount` row of a CSV file
    Batch {
        /// Input requests CSV file
        input: PathBuf,

        /// Output CSV file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List supported currencies and their denominations
    Currencies,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let calculator = ChangeCalculator::default();

    match cli.command {
        Command::Compute {
            currency,
            amount,
            major,
            format,
        } => {
            let result = if major {
                calculator.compute_major(&currency, amount)
            } else {
                calculator.compute_decimal(&currency, amount)
            }
            .into_diagnostic()?;

            match format {
                OutputFormat::Text => println!("{result}"),
                OutputFormat::Json => {
                    let json = serde_json::to_string(&result).into_diagnostic()?;
                    println!("{json}");
                }
            }
        }
        Command::Batch { input, output } => {
            let file = File::open(&input).into_diagnostic()?;
            let destination: Box<dyn Write> = match output {
                Some(path) => Box::new(File::create(path).into_diagnostic()?),
                None => Box::new(io::stdout().lock()),
            };
            let mut writer = ResultWriter::new(destination);

            let reader = RequestReader::new(file);
            let mut processed = 0usize;
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        match calculator.compute_decimal(&request.currency, request.amount) {
                            Ok(result) => {
                                writer.write_result(&result).into_diagnostic()?;
                                processed += 1;
                            }
                            Err(e) => error!("Error computing change: {}", e),
                        }
                    }
                    Err(e) => error!("Error reading request: {}", e),
                }
            }
            writer.flush().into_diagnostic()?;
            info!(processed, input = %input.display(), "batch complete");
        }
        Command::Currencies => {
            for code in calculator.registry().supported() {
                let profile = calculator.registry().profile(code.as_str()).into_diagnostic()?;
                let coins: Vec<String> = profile
                    .denominations()
                    .iter()
                    .map(|d| format!("{}={}", d.value, d.name))
                    .collect();
                println!("{}: {}", code, coins.join(", "));
            }
        }
    }

    Ok(())
}
