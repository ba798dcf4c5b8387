use alpha_key::config::{self, ConfigError};
use alpha_key::imaging::Method;
use alpha_key::output;
use alpha_key::process::{self, ProcessError, Request};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "alpha-key")]
#[command(version)]
#[command(about = "Convert an image's background into transparency")]
#[command(long_about = "\
Convert an image's background into transparency

Two methods are available:

  Gray removal (default)
    For images with a baked-in gray checkerboard background. Low-saturation
    pixels are made transparent; bright highlights (> 245) and dark
    outlines (< 20) are kept.

  Black-to-alpha (--black-bg)
    For images generated on a pure black background. Alpha = max(R, G, B)
    and color is un-premultiplied, so glow and neon effects survive and
    pure black becomes fully transparent.

The image is overwritten in place unless --output is given.

Examples:
  alpha-key assets/icon.png
  alpha-key assets/icon.png --black-bg
  alpha-key assets/icon.png --black-bg --output assets/icon-alpha.png")]
struct Cli {
    /// Image to convert
    image_path: Option<PathBuf>,

    /// Positional arguments after the image path are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// Use black-to-alpha method (recommended for new generations)
    #[arg(long)]
    black_bg: bool,

    /// Write the result here instead of overwriting the input
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// TOML file overriding thresholds and worker count
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum worker threads (overrides processing.max_processes)
    #[arg(long)]
    threads: Option<usize>,

    /// Print a documented stock config file and exit
    #[arg(long)]
    gen_config: bool,
}

#[derive(Error, Debug)]
enum RunError {
    #[error("no image path given")]
    Usage,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Usage) => {
            output::print_usage();
            ExitCode::FAILURE
        }
        Err(RunError::Process(ProcessError::SourceNotFound(path))) => {
            output::print_not_found(&path);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let input = cli.image_path.ok_or(RunError::Usage)?;
    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }

    let mut tool_config = config::load_config(cli.config.as_deref())?;
    if let Some(threads) = cli.threads {
        tool_config.processing.max_processes = Some(threads);
        tool_config.validate()?;
    }
    init_thread_pool(&tool_config.processing);

    let request = Request {
        input,
        output: cli.output,
        method: Method::from_black_bg(cli.black_bg),
        thresholds: tool_config.gray_key.thresholds(),
    };
    log::debug!("request: {request:?}");

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::process(&request, Some(tx));
    if printer.join().is_err() {
        log::warn!("output thread panicked");
    }

    let report = result?;
    log::info!(
        "{} {}x{} -> {}",
        report.method,
        report.width,
        report.height,
        report.output.display()
    );
    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    log::debug!("using {threads} worker threads");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
