use crate::utils::error::Result;
use crate::utils::validation::{validate_record_fields, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory, base name and extension of a `/`-separated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParsedPath {
    pub directory: String,
    pub file_name: String,
    pub extension: String,
}

impl ParsedPath {
    pub fn new(
        directory: impl Into<String>,
        file_name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
            extension: extension.into(),
        }
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dir: {}, name: {}, ext: {}",
            self.directory, self.file_name, self.extension
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub address: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }

    /// 儲存前檢查必填欄位
    pub fn validate_before_save(&self) -> Result<()> {
        validate_record_fields(
            "user",
            self.id,
            &[(self.name.as_str(), "Name"), (self.address.as_str(), "Address")],
        )
    }
}

impl Validate for User {
    fn validate(&self) -> Result<()> {
        self.validate_before_save()
    }
}
