//! `kn` -- terminal client for the kaneo project-management API.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use kaneo_client::ClientError;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    init_logging(ctx.verbose);

    let result = match cli.command {
        Some(Commands::Projects) => commands::projects::run(&ctx),
        Some(Commands::Board(args)) => commands::board::run(&ctx, &args),
        Some(Commands::Tasks(args)) => commands::tasks::run(&ctx, &args),
        Some(Commands::Task(args)) => commands::task::run(&ctx, &args),
        Some(Commands::Notifications(args)) => commands::notifications::run(&ctx, &args),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        let hint = e
            .chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .and_then(ClientError::hint);

        if cli.global.json {
            let mut err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Some(hint) = hint {
                err_json["hint"] = serde_json::Value::from(hint);
            }
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
            if let Some(hint) = hint {
                eprintln!("Hint: {}", hint);
            }
        }
        std::process::exit(1);
    }
}

/// `-v` turns on debug logging for the client; otherwise `RUST_LOG` decides.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        Some(EnvFilter::new("kn=debug,kaneo_client=debug"))
    } else {
        EnvFilter::try_from_default_env().ok()
    };

    if let Some(filter) = filter {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
