pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{JoinOptions, KitConfig, PathOptions};
pub use core::path_parser::{
    parse_by_pattern, parse_by_substring, parse_by_substring_with, PathPattern, PatternStrategy,
    SubstringStrategy,
};
pub use domain::model::{ParsedPath, User};
pub use domain::ports::PathStrategy;
pub use utils::error::{KitError, Result};
pub use utils::validation::{validate_field, validate_fields, validate_record_fields, Validate};
