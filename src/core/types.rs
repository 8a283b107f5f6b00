use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// One entry on the interactive menu. Iteration order is display order;
/// `Exit` stays last so it renders as the closing `0.` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
pub enum MenuAction {
    AddStudent,
    ImportFile,
    ShowReportCard,
    FindHighest,
    FindLowest,
    FindByName,
    SortByCgpa,
    SaveFile,
    Exit,
}

impl MenuAction {
    /// The digit the user types to pick this action.
    pub fn selection(&self) -> &'static str {
        match self {
            MenuAction::AddStudent => "1",
            MenuAction::ImportFile => "2",
            MenuAction::ShowReportCard => "3",
            MenuAction::FindHighest => "4",
            MenuAction::FindLowest => "5",
            MenuAction::FindByName => "6",
            MenuAction::SortByCgpa => "7",
            MenuAction::SaveFile => "8",
            MenuAction::Exit => "0",
        }
    }

    /// Menu row label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddStudent => "Add Student Data Manually",
            MenuAction::ImportFile => "Import Student Data from File",
            MenuAction::ShowReportCard => "Show Class Report Card",
            MenuAction::FindHighest => "Find Highest Scorer",
            MenuAction::FindLowest => "Find Lowest Scorer",
            MenuAction::FindByName => "Find Student by Name",
            MenuAction::SortByCgpa => "Sort Students by CGPA",
            MenuAction::SaveFile => "Save Student Data to File",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Accepted spellings for textual booleans in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "True", to_string = "True")]
    TextTrue,
    #[strum(serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    pub fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
