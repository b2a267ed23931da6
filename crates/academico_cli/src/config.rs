//! Command-line and environment configuration.

use academico_core::LogLevel;
use clap::Parser;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_DIR_NAME: &str = "academico-logs";

/// Academic records console: pick a course and build a curriculum grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "academico", version, about)]
pub struct Config {
    /// SQLite file, dropped and rebuilt on every run
    #[arg(long, env = "ACADEMICO_DB_PATH", default_value = "academico.db")]
    pub db_path: PathBuf,

    /// Directory for rolling log files (defaults to the system temp dir)
    #[arg(long, env = "ACADEMICO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "ACADEMICO_LOG_LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

impl Config {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_else(LogLevel::build_default)
    }

    /// Absolute log directory; relative inputs resolve against `cwd`.
    pub fn log_dir(&self, cwd: &Path) -> PathBuf {
        match &self.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse::<LogLevel>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::Config;
    use academico_core::LogLevel;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn defaults_apply_without_flags() {
        let config = Config::try_parse_from(["academico"]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("academico.db"));
        assert_eq!(config.log_level(), LogLevel::build_default());
        assert!(config.log_dir(Path::new("/work")).is_absolute());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "academico",
            "--db-path",
            "/tmp/x.db",
            "--log-dir",
            "logs",
            "--log-level",
            "WARN",
        ])
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.log_level(), LogLevel::Warn);
        assert_eq!(config.log_dir(Path::new("/work")), PathBuf::from("/work/logs"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Config::try_parse_from(["academico", "--log-level", "loud"]).unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }
}
