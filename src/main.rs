// SPDX-License-Identifier: MPL-2.0
use doc_extract::app::{self, paths, App, Flags};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
DocExtract - document data extraction dashboard

USAGE:
  doc_extract [OPTIONS]

OPTIONS:
  --lang <CODE>        Interface language (en, th)
  --route <PATH>       Location to open at startup, e.g. /#pricing
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  DOC_EXTRACT_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                 Log filter, default \"info\"
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    let app = match App::boot(flags) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(%err, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            ExitCode::FAILURE
        }
    }
}
