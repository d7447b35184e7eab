//! Known header aliases per address field.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use skiptrace_model::LogicalField;
use tracing::info;

use crate::error::{MappingError, Result};

const HOUSE_ALIASES: &[&str] = &["MAIL HOUSE NUMBER", "HOUSE NUMBER"];
const STREET_ALIASES: &[&str] = &["MAIL STREET NAME", "STREET NAME"];
const CITY_ALIASES: &[&str] = &["MAIL CITY", "CITY"];
const STATE_ALIASES: &[&str] = &["MAIL STATE", "STATE"];
const ZIP_ALIASES: &[&str] = &["MAIL ZIP/ZIP+4", "ZIP"];

/// Ordered alias lists for all five fields, most preferred first.
///
/// Aliases are stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    lists: [Vec<String>; 5],
}

impl Default for AliasTable {
    fn default() -> Self {
        let list = |aliases: &[&str]| -> Vec<String> {
            aliases.iter().map(|alias| (*alias).to_string()).collect()
        };
        Self {
            lists: [
                list(HOUSE_ALIASES),
                list(STREET_ALIASES),
                list(CITY_ALIASES),
                list(STATE_ALIASES),
                list(ZIP_ALIASES),
            ],
        }
    }
}

impl AliasTable {
    pub fn aliases(&self, field: LogicalField) -> &[String] {
        &self.lists[field.ordinal()]
    }

    /// Replaces the alias list of one field.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::EmptyAliasList`] if no non-blank alias is given.
    pub fn set_aliases<I, S>(&mut self, field: LogicalField, aliases: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list: Vec<String> = aliases
            .into_iter()
            .map(|alias| alias.as_ref().trim().to_uppercase())
            .filter(|alias| !alias.is_empty())
            .collect();
        if list.is_empty() {
            return Err(MappingError::EmptyAliasList(field));
        }
        self.lists[field.ordinal()] = list;
        Ok(())
    }

    /// Fields with their alias lists, in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalField, &[String])> {
        LogicalField::ALL
            .into_iter()
            .map(move |field| (field, self.aliases(field)))
    }

    /// Parses an override document; fields it omits keep their defaults.
    ///
    /// ```toml
    /// [aliases]
    /// HOUSE = ["OWNER HOUSE NUMBER", "HOUSE NUMBER"]
    /// ZIP = ["ZIP CODE", "ZIP"]
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the document is not valid TOML or a list is empty.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let file: AliasFile = toml::from_str(content).map_err(|source| {
            MappingError::AliasFileParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let mut table = Self::default();
        let overrides = file.aliases;
        for (field, list) in [
            (LogicalField::House, overrides.house),
            (LogicalField::Street, overrides.street),
            (LogicalField::City, overrides.city),
            (LogicalField::State, overrides.state),
            (LogicalField::Zip, overrides.zip),
        ] {
            if let Some(list) = list {
                table.set_aliases(field, list)?;
            }
        }
        Ok(table)
    }
}

#[derive(Debug, Default, Deserialize)]
struct AliasFile {
    #[serde(default)]
    aliases: AliasOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct AliasOverrides {
    house: Option<Vec<String>>,
    street: Option<Vec<String>>,
    city: Option<Vec<String>>,
    state: Option<Vec<String>>,
    zip: Option<Vec<String>>,
}

/// Loads an alias table from `path`, or the built-in table when `None`.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_alias_table(path: Option<&Path>) -> Result<AliasTable> {
    let Some(path) = path else {
        return Ok(AliasTable::default());
    };
    let content = fs::read_to_string(path).map_err(|source| MappingError::AliasFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = AliasTable::from_toml_str(&content, path)?;
    info!(path = %path.display(), "loaded alias overrides");
    Ok(table)
}
