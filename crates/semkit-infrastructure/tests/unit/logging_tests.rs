//! Logging Tests

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use semkit_infrastructure::constants::DEFAULT_LOG_LEVEL;
use semkit_infrastructure::logging::{
    LoggingConfig, init_logging, log_config_loaded, parse_log_level,
};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").expect("trace"), Level::TRACE);
    assert_eq!(parse_log_level("debug").expect("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").expect("info"), Level::INFO);
    assert_eq!(parse_log_level("warn").expect("warn"), Level::WARN);
    assert_eq!(parse_log_level("warning").expect("warning"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("error"), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_second_init_fails_instead_of_panicking() {
    let config = LoggingConfig::default();
    // Another test binary thread may have won the race; only the second call matters.
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_log_config_loaded_names_the_file() {
    let logs = capture(|| log_config_loaded(Some(Path::new("/etc/semkit/semkit.toml"))));
    assert!(logs.contains("Configuration loaded from /etc/semkit/semkit.toml"), "{logs}");
}

#[test]
fn test_log_config_loaded_without_file() {
    let logs = capture(|| log_config_loaded(None));
    assert!(logs.contains("No configuration file found"), "{logs}");
}
