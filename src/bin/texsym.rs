//! texsym CLI - extract LaTeX ↔ Unicode symbol tables from unicode.xml

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
use std::process::ExitCode;
#[cfg(feature = "cli")]
use texsym::core::options::{DEFAULT_SEED, DEFAULT_SOURCE};
use texsym::{ExtractOptions, Extractor};
#[cfg(feature = "cli")]
use texsym::{JsonStyle, Pass, RunReport};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texsym")]
#[command(version)]
#[command(about = "Extract LaTeX ↔ Unicode symbol tables from a unicode.xml character database", long_about = None)]
struct Cli {
    /// Subcommand to run (defaults to `all`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Character database to read
    #[arg(short, long, default_value = DEFAULT_SOURCE, global = true)]
    source: PathBuf,

    /// Seed for the symbols table (skipped when the default file is absent)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Directory receiving the JSON tables
    #[arg(short, long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Indent the JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode: only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Run every pass (default action)
    All,

    /// commands.json, symbols.json, counts.json and multi.json
    Tables,

    /// fonts.json
    Fonts,

    /// negations.json
    Negations,

    /// Show version and table info
    Info,
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self, passes: Vec<Pass>) -> ExtractOptions {
        ExtractOptions {
            source: self.source.clone(),
            seed: self
                .seed
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED)),
            seed_required: self.seed.is_some(),
            output_dir: self.output_dir.clone(),
            style: if self.pretty {
                JsonStyle::Pretty
            } else {
                JsonStyle::Compact
            },
            passes,
        }
    }

    fn log_filter(&self) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(format!("warn,texsym={level}"))
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let passes = match cli.command.unwrap_or(Commands::All) {
        Commands::All => Pass::ALL.to_vec(),
        Commands::Tables => vec![Pass::Tables],
        Commands::Fonts => vec![Pass::Fonts],
        Commands::Negations => vec![Pass::Negations],
        Commands::Info => {
            print_info(&cli.options(Pass::ALL.to_vec()));
            return ExitCode::SUCCESS;
        }
    };

    let extractor = Extractor::new(cli.options(passes));
    match extractor.run() {
        Ok(report) => {
            if !cli.quiet {
                print_report(&extractor, &report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn print_report(extractor: &Extractor, report: &RunReport) {
    let dir = &extractor.options().output_dir;
    for table in &report.written {
        eprintln!("✓ {}", dir.join(table.file_name()).display());
    }
    for (pass, stats) in &report.passes {
        eprintln!("  {}: {}", pass, stats);
    }
}

#[cfg(feature = "cli")]
fn print_info(options: &ExtractOptions) {
    println!("texsym - LaTeX ↔ Unicode symbol table extractor");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Input:");
    println!("  {} (character database)", options.source.display());
    println!("  {} (optional seed for symbols)", options.seed.display());
    println!();
    println!("Passes:");
    for pass in &options.passes {
        let names: Vec<_> = pass.outputs().iter().map(|t| t.file_name()).collect();
        println!("  {:<10} → {}", pass.to_string(), names.join(", "));
    }
    println!();
    println!("Output directory: {}", options.output_dir.display());
}

#[cfg(not(feature = "cli"))]
fn main() -> ExitCode {
    match Extractor::new(ExtractOptions::default()).run() {
        Ok(report) => {
            eprintln!("✓ {} tables written", report.written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
