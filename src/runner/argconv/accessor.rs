//! Generated getter and setter natives for typed properties.
//!
//! The value lives in the object's property map as a script value; both
//! directions run it through `T` so it always reads back as a `T` would.

use crate::runner::argconv::coercion::Coercible;
use crate::runner::argconv::unpack::ArgUnpack;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::JsObjectRef;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::{BuiltInFn, EvalContext};

/// The receiver of a method call, which must be an object.
pub fn this_object<'v>(ctx: &EvalContext, this: &'v JsValue) -> Result<&'v JsObjectRef, JErrorType> {
    this.as_object().ok_or_else(|| {
        JErrorType::TypeError(format!(
            "{} called on incompatible receiver {}",
            ctx.callee(),
            this.class_name()
        ))
    })
}

pub fn native_getter<T: Coercible + Default + 'static>(name: &str) -> BuiltInFn {
    let name = name.to_string();
    BuiltInFn::Plugin(Box::new(
        move |ctx: &mut EvalContext, this: JsValue, args: &[JsValue]| -> Result<JsValue, JErrorType> {
            // Getters declare no slots; anything passed is reported as unconsumed.
            ArgUnpack::new(ctx, args).finish();
            let object = this_object(ctx, &this)?;
            let value = match object.get(&name) {
                Some(stored) => T::to_concrete(ctx, &stored)?,
                None => T::default(),
            };
            Ok(T::to_abstract(ctx, &value))
        },
    ))
}

pub fn native_setter<T: Coercible + Default + 'static>(name: &str) -> BuiltInFn {
    let name = name.to_string();
    BuiltInFn::Plugin(Box::new(
        move |ctx: &mut EvalContext, this: JsValue, args: &[JsValue]| -> Result<JsValue, JErrorType> {
            let mut value = T::default();
            ArgUnpack::new(ctx, args).required(&mut value)?;
            let object = this_object(ctx, &this)?;
            object.set(&name, T::to_abstract(ctx, &value));
            Ok(JsValue::Undefined)
        },
    ))
}
