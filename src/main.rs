//! Entry point for **hyprgroup**.
//!
//! Resolves the Hyprland socket from the environment, loads the optional
//! config file and runs one [`GroupToggler`] pass.  Exit status is `0` on
//! success, `1` when any stage fails and `2` on bad arguments.

use hyprgroup::config::{Config, ConfigError, StrategyKind};
use hyprgroup::error::{Stage, StageExt};
use hyprgroup::executor::DryRun;
use hyprgroup::grouper::{GroupToggler, Outcome};
use hyprgroup::hyprland::endpoint::Endpoint;
use hyprgroup::hyprland::socket::HyprlandSocket;
use hyprgroup::planner::effective_repeat;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
usage: hyprgroup [--sequential] [--dry-run] [--config <path>]

Toggle a group holding every window on the active Hyprland workspace.

  --sequential     send one command per exchange instead of [[BATCH]]
  --dry-run        query Hyprland but print dispatches instead of sending them
  --config <path>  read settings from <path>
                   (default: $XDG_CONFIG_HOME/hyprgroup/config.json)
  -h, --help       show this help";

#[derive(Debug, Default)]
struct Args {
    sequential: bool,
    dry_run: bool,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sequential" => parsed.sequential = true,
            "--dry-run" => parsed.dry_run = true,
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--config needs a path".to_string())?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Some(parsed))
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprgroup`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprgroup")
}

/// Load the config.
///
/// A file named with `--config` must load; the default location falls
/// back to compiled-in defaults when missing or invalid.
fn load_config(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (config_dir().join("config.json"), false),
    };
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("hyprgroup: {}\n\n{}", msg, USAGE);
            return ExitCode::from(2);
        }
    };

    let mut config = match load_config(args.config) {
        Ok(cfg) => cfg,
        Err(e) => return fail(&e),
    };
    if args.sequential {
        config.dispatch.strategy = StrategyKind::Sequential;
    }

    let endpoint = match Endpoint::from_env().stage(Stage::ResolveEndpoint) {
        Ok(ep) => ep,
        Err(e) => return fail(&e),
    };
    let socket = HyprlandSocket::new(&endpoint);
    debug!("hyprland socket: {}", socket.path().display());

    let strategy = config.dispatch.strategy();
    let repeat = effective_repeat(config.grouping.repeat);
    if repeat != config.grouping.repeat {
        warn!(
            "grouping.repeat {} out of range, using {}",
            config.grouping.repeat, repeat
        );
    }

    let result = if args.dry_run {
        let dry = DryRun::new(socket, std::io::stdout());
        GroupToggler::new(dry, strategy, repeat).run()
    } else {
        GroupToggler::new(socket, strategy, repeat).run()
    };

    match result {
        Ok(Outcome::Toggled) => {
            info!("done: group toggled");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Grouped { attached }) => {
            info!("done: {} window(s) attached", attached);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &dyn std::error::Error) -> ExitCode {
    error!("{}", e);
    eprintln!("hyprgroup: {}", e);
    ExitCode::FAILURE
}
