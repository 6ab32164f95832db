use base27::Repl;
use base27::core::config::{self, CliOverrides, LogLevel, ResolvedConfig};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "base27",
    about = "Convert between integers and base-27 letter strings ('a'-'z', '/')"
)]
struct Args {
    /// Prompt shown before each line of input
    #[arg(long)]
    prompt: Option<String>,

    /// Write logs to this file (logging is off without one)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Config file to use instead of ~/.base27/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level.to_filter(), log_config, log_file);
        }
        Err(e) => eprintln!("warning: cannot open log file {}: {e}", path.display()),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        eprintln!("warning: {e}; using defaults");
        config::Base27Config::default()
    });

    let cli = CliOverrides {
        prompt: args.prompt,
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);
    init_logging(&resolved);

    log::info!("base27 starting up");
    log::debug!("Resolved config: {:?}", resolved);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), resolved.prompt);
    repl.run()
}
