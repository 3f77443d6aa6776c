pub mod path_parser;
pub mod text;
