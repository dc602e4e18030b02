//! Standard library built-in objects.
//!
//! This module contains the natives for the display list, `Color` and
//! `CSMSettings`. They take their arguments through the argument unpacker.

pub mod core;
pub mod color;
pub mod csm_settings;
pub mod display;

pub use core::register_core_builtins;
