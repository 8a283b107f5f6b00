use crate::core::types::Bool;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDirConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for DataDirConfigItem {
    fn default() -> Self {
        Self {
            value: ".".to_string(),
            description: "Directory against which import/export filenames are resolved"
                .to_string(),
        }
    }
}

impl ConfigItem<String> for DataDirConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Write log messages to the session log file".to_string(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
