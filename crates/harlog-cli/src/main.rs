use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use harlog_cli::{OutputFormat, commands, reader_options};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harlog")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Inspect HTTP Archive (HAR) files",
    long_about = "harlog reads HAR files into a typed model, resolves origin-relative \
                  redirect URLs against the request that produced them, and reports on the result."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// Resolve `//host/path` redirects by prefixing the request authority
    #[arg(long, global = true)]
    legacy_protocol_relative: bool,

    /// Skip timing, method, URL and page reference checks
    #[arg(long, global = true)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display HAR file statistics
    Stats {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Show all hosts with request counts
        #[arg(long)]
        hosts: bool,
    },

    /// List entries whose response redirects, with resolved targets
    Redirects {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let options = reader_options(cli.legacy_protocol_relative, cli.no_validate);

    match cli.command {
        Commands::Stats { file, hosts } => {
            commands::stats::execute(&file, hosts, cli.format, &options)
        }
        Commands::Redirects { file } => commands::redirects::execute(&file, cli.format, &options),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harlog=debug,harlog_cli=debug,harlog_core=debug")
    } else {
        EnvFilter::new("harlog=warn,harlog_cli=warn,harlog_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
