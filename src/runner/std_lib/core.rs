//! Core built-ins registration.
//!
//! This module provides the function to register all core built-in objects
//! with the BuiltInRegistry.

use crate::runner::plugin::registry::BuiltInRegistry;

use super::color;
use super::csm_settings;
use super::display;

/// Register all core built-in objects with the registry.
pub fn register_core_builtins(registry: &mut BuiltInRegistry) {
    display::register(registry);
    color::register(registry);
    csm_settings::register(registry);
}
