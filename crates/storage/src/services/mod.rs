pub mod field_parse;
pub mod points;
