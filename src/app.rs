//! Application orchestrator.
//! Merges config file and CLI flags, initializes logging, installs the
//! interrupt handler, validates paths, and runs the move pipeline.

use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::config::{self, Config, LoadResult, CONFIG_ENV};
use crate::errors::DerpMoveError;
use crate::fs_ops;
use crate::logging::init_tracing;
use crate::output as out;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match config::default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default derp_move config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // Resolve the config file; a freshly written template means the user
    // still has to fill in the bases, so explain and stop.
    let settings = match config::load_or_init()? {
        LoadResult::Loaded(s) => s,
        LoadResult::CreatedTemplate(path) => {
            out::print_success(&format!(
                "A template derp_move config was written to: {}",
                path.display()
            ));
            out::print_info("Edit the file to set `source_base` and `target_base`, and optionally `log_level` and `log_file`. Example:\n\n<config>\n  <source_base>/path/to/staging</source_base>\n  <target_base>/path/to/sorted</target_base>\n  <log_level>normal</log_level>\n</config>\n");
            out::print_info(&format!(
                "Then re-run this command. To use a different location set {CONFIG_ENV}."
            ));
            return Ok(());
        }
    };

    // Merge: CLI wins over the config file; both bases are required.
    let source_base = args
        .source_base
        .clone()
        .or(settings.source_base)
        .ok_or_else(|| {
            anyhow!("no source base configured; set <source_base> in the config file or pass --source-base")
        })?;
    let target_base = args
        .target_base
        .clone()
        .or(settings.target_base)
        .ok_or_else(|| {
            anyhow!("no target base configured; set <target_base> in the config file or pass --target-base")
        })?;

    let mut cfg = Config::new(source_base, target_base);
    if let Some(lvl) = args.effective_log_level() {
        cfg.log_level = lvl;
    } else if let Some(lvl) = settings.log_level {
        cfg.log_level = lvl;
    }
    cfg.log_file = settings.log_file;

    // Initialize logging and capture the guard so we can flush it on exit.
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // The guard needs to be dropped on SIGINT to flush file logs before the
    // process dies; there is no cooperative mid-batch cancellation.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            out::print_warn("Received interrupt; exiting...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
            std::process::exit(130);
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting derp_move: {:?}", args);

    // Main run (so we can drop the guard after)
    let result = (|| -> Result<()> {
        cfg.validate()?;
        match fs_ops::run_pipeline(&cfg) {
            Ok(moved) => {
                info!(count = moved.len(), "Batch completed");
                out::print_user(&format!(
                    "Moved {} file(s) from '{}' to '{}'",
                    moved.len(),
                    cfg.source_base.display(),
                    cfg.target_base.display()
                ));
                Ok(())
            }
            Err(e) => {
                if let Some(dm) = e.downcast_ref::<DerpMoveError>() {
                    let code = dm.code();
                    match dm {
                        DerpMoveError::Access { path, context } => {
                            error!(code, kind = "access", path = %path.display(), %context, "Batch failed")
                        }
                        DerpMoveError::NotFound(path) => {
                            error!(code, kind = "not_found", path = %path.display(), "Batch failed")
                        }
                        DerpMoveError::NameFormat { name, reason } => {
                            error!(code, kind = "name_format", %name, %reason, "Batch failed")
                        }
                        DerpMoveError::Collision(dest) => {
                            error!(code, kind = "collision", dest = %dest.display(), "Batch failed")
                        }
                    }
                } else {
                    error!(error = ?e, "Batch failed");
                }
                Err(e)
            }
        }
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
