//! Runtime data the marshalling layer works on: values, objects, classes.

pub mod class;
pub mod color;
pub mod error;
pub mod object;
pub mod operations;
pub mod string_table;
pub mod value;
