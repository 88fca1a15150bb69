//! Fully-qualified board names
//!
//! `packager:architecture:boardId[:menuOptions]`, where menu options are
//! `key=value` pairs separated by commas (`cpu=atmega328,speed=16`).
//! The menu segment never makes an FQBN malformed: entries that aren't
//! `key=value` are kept in the raw segment but not exposed as options.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// A parsed FQBN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fqbn {
    /// Package name
    pub packager: String,
    /// Platform architecture
    pub architecture: String,
    /// Board id within the platform
    pub board_id: String,
    options: Vec<(String, String)>,
    menu: Option<String>,
}

impl Fqbn {
    /// Parse an FQBN string
    pub fn parse(fqbn: &str) -> Result<Self, BoardError> {
        let malformed = || BoardError::MalformedFqbn {
            fqbn: fqbn.to_string(),
        };

        let parts: Vec<&str> = fqbn.split(':').collect();
        if parts.len() < 3 || parts.len() > 4 || parts.iter().any(|p| p.is_empty()) {
            return Err(malformed());
        }

        let menu = parts.get(3).map(|menu| (*menu).to_string());
        let options = menu.as_deref().map(parse_options).unwrap_or_default();

        Ok(Self {
            packager: parts[0].to_string(),
            architecture: parts[1].to_string(),
            board_id: parts[2].to_string(),
            options,
            menu,
        })
    }

    /// Menu option selections, in declaration order
    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    /// Look up a menu option value by key
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn parse_options(menu: &str) -> Vec<(String, String)> {
    menu.split(',')
        .filter_map(|entry| {
            let parsed = entry.split_once('=').filter(|(key, _)| !key.is_empty());
            if parsed.is_none() && !entry.is_empty() {
                tracing::debug!("Ignoring menu entry '{entry}' without a value");
            }
            parsed
        })
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl FromStr for Fqbn {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fqbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.packager, self.architecture, self.board_id)?;
        if let Some(menu) = &self.menu {
            write!(f, ":{menu}")?;
        }
        Ok(())
    }
}
