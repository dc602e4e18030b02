pub mod numeric_string;
pub mod type_conversion;
