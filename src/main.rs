// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use scout_lens::config::{self, PlayerConfig};
use scout_lens::domain::timeline::HighlightWindow;
use scout_lens::error::{Error, Result};
use scout_lens::infrastructure::load_tags;
use scout_lens::timeline::TimelineSynchronizer;

const HELP: &str = "\
Print the event tags active at given playback positions.

USAGE:
  scout_lens --tags <FILE> [OPTIONS] <SECONDS>...

OPTIONS:
  --tags <FILE>      JSON tag snapshot
  --window <SECS>    Highlight window for tags without an end
  --config <FILE>    Settings file (defaults to the user config dir)
  -h, --help         Print this help
";

struct Args {
    tags: PathBuf,
    window: Option<f64>,
    config: Option<PathBuf>,
    times: Vec<f64>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let usage = |err: pico_args::Error| Error::Config(err.to_string());

    let tags = args.value_from_str("--tags").map_err(usage)?;
    let window = args.opt_value_from_str("--window").map_err(usage)?;
    let config = args.opt_value_from_str("--config").map_err(usage)?;

    let mut times = Vec::new();
    for raw in args.finish() {
        let text = raw.to_string_lossy();
        let t = text
            .parse::<f64>()
            .map_err(|_| Error::Config(format!("not a position in seconds: {text}")))?;
        times.push(t);
    }

    Ok(Some(Args {
        tags,
        window,
        config,
        times,
    }))
}

fn run(args: Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "using default settings");
            PlayerConfig::default()
        }),
    };
    let window = args
        .window
        .map_or_else(|| settings.highlight_window(), HighlightWindow::new);

    let mut timeline = TimelineSynchronizer::new(window);
    timeline.set_tags(load_tags(&args.tags)?);
    tracing::info!(tags = timeline.tags().len(), window = window.value(), "timeline ready");

    for t in args.times {
        timeline.update(t);
        let labels: Vec<String> = timeline
            .active()
            .iter()
            .map(|tag| format!("{} {}", tag.id, tag.label))
            .collect();
        if labels.is_empty() {
            println!("{t:>9.3}s  -");
        } else {
            println!("{t:>9.3}s  {}", labels.join(", "));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
