//! Logging bootstrap for the civic store process.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend exactly once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical `LoggingConfig`.
//! - Re-initialization with a different config is rejected.
//! - Initialization never panics.

use crate::config::{normalize_level, LoggingConfig};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "civic";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    config: LoggingConfig,
    _logger: LoggerHandle,
}

/// Initializes process logging.
///
/// # Errors
/// - Returns an error when the level is unsupported.
/// - Returns an error when the log directory cannot be created.
/// - Returns an error when logging is already active with another config.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    let level = normalize_level(config.level).ok_or_else(|| {
        format!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            config.level
        )
    })?;
    let requested = LoggingConfig {
        level,
        log_dir: config.log_dir.clone(),
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&requested))?;
    if state.config != requested {
        return Err(format!(
            "logging already initialized with {}; refusing to switch to {}",
            describe(&state.config),
            describe(&requested)
        ));
    }
    Ok(())
}

/// Returns the active logging config, or `None` before initialization.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

fn start_logger(config: &LoggingConfig) -> Result<LoggingState, String> {
    let logger = Logger::try_with_str(config.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?;

    let logger = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::detailed_format),
    }
    .start()
    .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();
    info!(
        "event=logging_init module=core status=ok level={} target={} version={}",
        config.level,
        describe_target(config),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: logger,
    })
}

fn describe(config: &LoggingConfig) -> String {
    format!("level `{}` target `{}`", config.level, describe_target(config))
}

fn describe_target(config: &LoggingConfig) -> String {
    match &config.log_dir {
        Some(dir) => dir.display().to_string(),
        None => "stderr".to_string(),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

// Payloads may carry record text; keep them on one line and bounded.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, sanitize_message};
    use crate::config::LoggingConfig;

    #[test]
    fn sanitize_message_removes_newlines_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn sanitize_message_keeps_short_payloads() {
        assert_eq!(sanitize_message("boom", 8), "boom");
    }

    #[test]
    fn rejects_unknown_level_before_touching_state() {
        let err = init_logging(&LoggingConfig {
            level: "verbose",
            log_dir: None,
        })
        .expect_err("unknown level must fail");
        assert!(err.contains("unsupported log level"));
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().expect("temp dir should be created");
        let config = LoggingConfig {
            level: "info",
            log_dir: Some(log_dir.path().to_path_buf()),
        };

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let level_error = init_logging(&LoggingConfig {
            level: "debug",
            ..config.clone()
        })
        .expect_err("level conflict should fail");
        assert!(level_error.contains("refusing to switch"));

        let target_error = init_logging(&LoggingConfig {
            level: "info",
            log_dir: None,
        })
        .expect_err("target conflict should fail");
        assert!(target_error.contains("refusing to switch"));

        assert_eq!(logging_status(), Some(config));
    }
}
