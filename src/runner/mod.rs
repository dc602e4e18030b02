//! Runtime pieces around native calls.
//!
//! - **[`ds`]** - values, objects, classes and their conversions
//! - **[`argconv`]** - coercion protocol and argument unpacking
//! - **[`plugin`]** - native function types, registry and configuration
//! - **[`std_lib`]** - built-in natives

pub mod argconv;
pub mod ds;
pub mod plugin;
pub mod std_lib;
