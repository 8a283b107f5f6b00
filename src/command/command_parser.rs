use crate::core::types::MenuAction;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// The whole dispatch surface as one finite map: selection digit -> action.
static SELECTIONS: Lazy<HashMap<&'static str, MenuAction>> =
    Lazy::new(|| MenuAction::iter().map(|a| (a.selection(), a)).collect());

#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, selection: &str) -> Result<MenuAction> {
        let key = selection.trim();
        SELECTIONS
            .get(key)
            .copied()
            .ok_or_else(|| Error::invalid_choice(key))
    }
}
