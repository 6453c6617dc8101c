// ============================================
// src/logging.rs
// ログ出力の設定 (画面は TUI が使うのでファイルに書く)
// ============================================

use directories::ProjectDirs;
use thiserror::Error;
use tracing::Level;

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const LOG_FILE: &str = "english-study.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not determine a data directory for the log file")]
    NoDataDir,
    #[error("failed to open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

/// ログファイルの既定パス (OS ごとのデータディレクトリ)
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("jp", "Fukumoto0141", "ENGLISH_STUDY")
        .map(|dirs| dirs.data_dir().join(LOG_FILE))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(open_err)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}

/// グローバルな tracing subscriber を登録し、書き込み先のパスを返す
pub fn init(path: Option<&Path>, level: Level) -> Result<PathBuf, LoggingError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or(LoggingError::NoDataDir)?,
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    Ok(path)
}
