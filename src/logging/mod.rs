
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// Notices go to stdout, problems to stderr.
fn console_write(level: LogLevel, line: &str) {
    match level {
        LogLevel::Info => println!("{line}"),
        LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
    }
}

/// Session log file, created lazily on the first file-targeted line so a
/// console-only run never touches the disk.
struct SessionFile {
    dir: PathBuf,
    handle: Option<Arc<Mutex<File>>>,
    path: Option<PathBuf>,
    attempted: bool,
}

impl SessionFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            handle: None,
            path: None,
            attempted: false,
        }
    }

    fn open(&mut self) -> Option<Arc<Mutex<File>>> {
        if self.attempted {
            return self.handle.clone();
        }
        self.attempted = true;

        let result = fs::create_dir_all(&self.dir).and_then(|_| {
            let stamp = Local::now().format("%Y%m%d-%H%M%S");
            let path = self.dir.join(format!("session-{stamp}.log"));
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Ok((file, path))
        });

        match result {
            Ok((file, path)) => {
                let handle = Arc::new(Mutex::new(file));
                self.path = Some(path);
                self.handle = Some(handle.clone());
                Some(handle)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct Logger {
    session: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionFile::new(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            console_write(level, message);
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            let handle = self.session.lock().ok().and_then(|mut s| s.open());
            if let Some(handle) = handle {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                if let Ok(mut file) = handle.lock() {
                    let _ = writeln!(file, "[{timestamp}] {level:<5} {message}");
                }
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only effective before the first file-targeted line opens the sink.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut session) = self.session.lock() {
            if !session.attempted {
                session.dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.session.lock().ok().map(|s| s.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().ok().and_then(|s| s.path.clone())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .finish()
    }
}
