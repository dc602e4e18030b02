//! Native function surface.
//!
//! Natives are plain functions over an [`EvalContext`](types::EvalContext),
//! a `this` value and the call's arguments. They are grouped per runtime class
//! into a [`BuiltInObject`] and collected in a [`BuiltInRegistry`], which is
//! the boundary between script calls and native code:
//!
//! ```text
//! script call
//!   -> BuiltInRegistry::call_method   (resolve through the class chain, set callee)
//!     -> NativeFn                     (ArgUnpack binds arguments to native variables)
//!     <- Result<JsValue, JErrorType>  (return value published through Coercible)
//! ```
//!
//! Argument errors are ordinary `Err` values up to the registry; turning them
//! into script exceptions is the interpreter's job.
//!
//! ## Example: a native with typed arguments
//!
//! ```
//! use argconv::runner::argconv::ArgUnpack;
//! use argconv::runner::ds::error::JErrorType;
//! use argconv::runner::ds::value::JsValue;
//! use argconv::runner::plugin::registry::BuiltInRegistry;
//! use argconv::runner::plugin::types::{BuiltInObject, EvalContext};
//!
//! fn scale(ctx: &mut EvalContext, _this: JsValue, args: &[JsValue]) -> Result<JsValue, JErrorType> {
//!     let mut factor = 0.0;
//!     let mut times = 1;
//!     ArgUnpack::new(ctx, args)
//!         .required(&mut factor)?
//!         .defaulted(&mut times, 1)?;
//!     Ok(ctx.to_value(&(factor * times as f64)))
//! }
//!
//! let mut registry = BuiltInRegistry::new();
//! registry.register_object(BuiltInObject::new("Object").add_method("scale", scale));
//!
//! let mut ctx = EvalContext::new();
//! let this = JsValue::Object(ctx.new_object("Object").unwrap());
//! let result = registry
//!     .call_method(&mut ctx, this, "scale", &[JsValue::from("1.5"), JsValue::Integer(2)])
//!     .unwrap();
//! assert_eq!(result, JsValue::Number(3.0));
//! ```

pub mod config;
pub mod registry;
pub mod types;

pub use config::RuntimeConfig;
pub use registry::{BuiltInRegistry, PluginError};
pub use types::{BuiltInFn, BuiltInObject, Diagnostic, EvalContext, NativeFn};
