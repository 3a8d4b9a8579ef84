//! Veracity Checker CLI

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use vc_core::{
    report::{self, ReportFormat},
    verdict::TIER_BANDS,
    ApiConfig, HttpDetectionClient, Orchestrator, RequestState, Verdict,
};

#[derive(Parser)]
#[command(name = "veracity")]
#[command(about = "Check text for plagiarism and AI-generated content")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Detection service host, e.g. https://detector.example.com
    #[arg(long, global = true, env = "VERACITY_API_HOST")]
    api_host: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a piece of text
    Check {
        /// Text to check (reads --file or stdin when omitted)
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (text, markdown, json)
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// List confidence tiers and their thresholds
    Tiers,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so reports can be piped
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    match cli.command {
        Commands::Check { text, file, output, output_file } => {
            cmd_check(cli.api_host, text, file, output, output_file).await;
        }
        Commands::Tiers => {
            cmd_tiers();
        }
    }
}

async fn cmd_check(
    api_host: Option<String>,
    text: Option<String>,
    file: Option<PathBuf>,
    output_format: String,
    output_file: Option<PathBuf>,
) {
    let Some(format) = ReportFormat::from_name(&output_format) else {
        error!("Unknown output format: {}", output_format);
        std::process::exit(1);
    };

    // Configuration problems are fatal before anything is read or sent
    let config = match ApiConfig::from_optional(api_host.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = match HttpDetectionClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let input = match read_input(text, file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    info!("Checking {} characters against {}", input.chars().count(), client.endpoint());

    let orchestrator = Orchestrator::new(client);

    match orchestrator.submit(&input).await {
        RequestState::Succeeded(result) => {
            let verdict = Verdict::new(result);

            match report::generate_report(&verdict, format) {
                Ok(report_content) => {
                    if let Some(out_path) = output_file {
                        if let Err(e) = std::fs::write(&out_path, &report_content) {
                            error!("Failed to write output file: {}", e);
                            std::process::exit(1);
                        }
                        info!("Report written to: {}", out_path.display());
                    } else {
                        println!("{}", report_content);
                    }
                }
                Err(e) => {
                    error!("Failed to generate report: {}", e);
                    std::process::exit(1);
                }
            }
        }
        RequestState::Failed(message) => {
            error!("{}", message);
            std::process::exit(1);
        }
        state => {
            error!("Check ended in unexpected state: {:?}", state);
            std::process::exit(1);
        }
    }
}

fn cmd_tiers() {
    println!("\nConfidence Tiers\n{}", "=".repeat(50));

    let mut lower = None;
    for band in TIER_BANDS.iter() {
        let range = match lower {
            None => format!("<= {}%", band.upper_bound),
            Some(low) if band.upper_bound.is_finite() => {
                format!("> {}% and <= {}%", low, band.upper_bound)
            }
            Some(low) => format!("> {}%", low),
        };
        println!("\n{} ({})", band.tier, range);
        println!("  Headline: {}", band.copy.headline);
        println!("  Accent:   {}", band.copy.accent);
        lower = Some(band.upper_bound);
    }
}

fn read_input(text: Option<String>, file: Option<&PathBuf>) -> std::io::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path);
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from([
            "veracity",
            "--api-host",
            "http://detector.internal:5000",
            "check",
            "--text",
            "hello world",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.api_host.as_deref(), Some("http://detector.internal:5000"));
        match cli.command {
            Commands::Check { text, file, output, output_file } => {
                assert_eq!(text.as_deref(), Some("hello world"));
                assert!(file.is_none());
                assert_eq!(output, "json");
                assert!(output_file.is_none());
            }
            Commands::Tiers => panic!("expected check"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let parsed = Cli::try_parse_from([
            "veracity", "check", "--text", "a", "--file", "input.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_read_input_prefers_text() {
        let input = read_input(Some("inline".to_string()), None).unwrap();
        assert_eq!(input, "inline");
    }

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("veracity-input-{}.txt", std::process::id()));
        std::fs::write(&path, "from a file").unwrap();

        let input = read_input(None, Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(input, "from a file");
    }
}
