use std::{
    io::{Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

/// Render an 8-slide Instagram carousel from a JSON request.
///
/// With INPUT, the request is read from that file and slides go to OUTPUT_DIR. Without it, the
/// request is read from stdin and its `output_dir` field picks the destination.
#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    /// Request JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output directory in file mode.
    #[arg(default_value = carousel::DEFAULT_FILE_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// JSON style file overriding colors, fonts and layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include every PNG as a base64 data URI in the result.
    #[arg(long)]
    embed: bool,

    /// Log filter (falls back to `RUST_LOG`, then `info`).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;

    let config = match &cli.config {
        Some(path) => carousel::CarouselConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => carousel::CarouselConfig::default(),
    };

    let (request, output_dir) = match &cli.input {
        Some(path) => (read_request_file(path)?, cli.output_dir.clone()),
        None => {
            let request = read_request_stdin()?;
            let dir = request
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(carousel::DEFAULT_STDIN_OUTPUT_DIR));
            (request, dir)
        }
    };

    let opts = carousel::GenerateOpts {
        embed_data_uris: cli.embed,
    };
    let output = carousel::generate_carousel(&request, &output_dir, &config, opts)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &output).context("write result JSON")?;
    writeln!(stdout)?;
    Ok(())
}

fn init_logging(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = match directive {
        Some(d) => tracing_subscriber::EnvFilter::try_new(d)
            .with_context(|| format!("invalid log filter '{d}'"))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

fn read_request_file(path: &Path) -> anyhow::Result<carousel::CarouselRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("open request '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| "parse request JSON")
}

fn read_request_stdin() -> anyhow::Result<carousel::CarouselRequest> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("read request from stdin")?;
    serde_json::from_str(&raw).with_context(|| "parse request JSON")
}
