use crate::config::Config;
use crate::core::roster::Roster;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub roster: Roster,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        data_dir: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;
        // A `--data` override beats the configured directory.
        let data_dir = if data_dir == PathBuf::from(".") {
            config.data_dir()
        } else {
            data_dir
        };

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            roster: Roster::new(),
            logger,
            startup_displayed: false,
            config_path,
            data_dir,
            logs_dir,
        })
    }
}
