use anyhow::{bail, Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber.
///
/// With a `log_dir` the output goes to a timestamped file in that directory,
/// otherwise to stderr. Filtering follows `RUST_LOG`. Fails without touching
/// the filesystem if a global subscriber is already installed.
pub fn init_logger(log_dir: Option<&str>) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        bail!("A global tracing subscriber is already installed");
    }

    let builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            let log_file = log_file_path(dir)?;
            let file = fs::File::create(&log_file)
                .with_context(|| format!("Failed to create log file {}", log_file))?;
            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            info!("Logger initialized, writing to {}", log_file);
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
            info!("Logger initialized");
        }
    }

    Ok(())
}

// Creates the directory if needed and returns a fresh timestamped file name in it
fn log_file_path(log_dir: &str) -> Result<String> {
    if !Path::new(log_dir).exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir))?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    Ok(format!("{}/ner_sensitivity_{}.log", log_dir, timestamp))
}
