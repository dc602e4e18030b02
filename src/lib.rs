//! # argconv - native argument marshalling for a scripting runtime
//!
//! The layer between a script call carrying dynamically typed values and a
//! native function that wants statically typed parameters:
//! - A coercion protocol, [`Coercible`](runner::argconv::Coercible), with one
//!   forward/reverse conversion pair per native parameter type
//! - Owning handles for runtime objects that hold exactly one counted
//!   reference each
//! - A positional argument unpacker with required and defaulted slots
//! - A small runtime around it (values, classes, a native registry and a
//!   handful of built-in natives) so the layer can be exercised end to end
//!
//! ## Quick Start
//!
//! ```
//! use argconv::runner::plugin::registry::BuiltInRegistry;
//! use argconv::runner::plugin::types::EvalContext;
//! use argconv::runner::ds::value::JsValue;
//!
//! let registry = BuiltInRegistry::with_core();
//! let mut ctx = EvalContext::new();
//!
//! let color = registry.construct(&mut ctx, "Color", &[]).unwrap();
//! registry
//!     .call_method(&mut ctx, color.clone(), "setRGB", &[JsValue::from("0xff8000")])
//!     .unwrap();
//! let rgb = registry.call_method(&mut ctx, color, "getRGB", &[]).unwrap();
//! assert_eq!(rgb, JsValue::UnsignedInteger(0xff8000));
//! ```
//!
//! ## Reference counting
//!
//! Objects are `Rc<JsObject>` and the strong count is the object's reference
//! total. Forward coercion into a handle adds one reference, separate from
//! the one held by the caller's argument. Reverse coercion adds another
//! before publishing, so the native handle and the script value are
//! independent owners afterwards.
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Values, objects, classes, scalar conversions
//! - **[`runner::argconv`]** - Coercion protocol, handles, argument unpacker
//! - **[`runner::plugin`]** - Native function types, registry, configuration
//! - **[`runner::std_lib`]** - Built-in natives
//! - **[`logging`]** - `tracing-subscriber` setup

#[macro_use]
extern crate lazy_static;

pub mod logging;
pub mod runner;
