//! Conversions between script values and the native types natives declare.
//!
//! Scalars delegate to the value's own conversions in
//! [`type_conversion`](crate::runner::ds::operations::type_conversion); this
//! module only dispatches. Reference types check the runtime class and move
//! counted references across the boundary.

use std::rc::Rc;

use crate::runner::argconv::handle::{AnyRef, Ref};
use crate::runner::ds::class::{NativeClass, OBJECT_CLASS};
use crate::runner::ds::color::Rgb;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::{ref_count, JsObjectRef};
use crate::runner::ds::operations::type_conversion::{
    to_boolean, to_color, to_int32, to_int64, to_js_string, to_number, to_uint32,
};
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::EvalContext;

/// A native type that can be bound to a script value and published back.
pub trait Coercible: Sized {
    /// Forward: script value to native value.
    fn to_concrete(ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType>;

    /// Reverse: native value to script value. References gain one count.
    fn to_abstract(ctx: &EvalContext, value: &Self) -> JsValue;
}

/// Clone `object` into a script value, adding the counted reference it owns.
fn publish(object: &JsObjectRef) -> JsValue {
    let object = Rc::clone(object);
    tracing::trace!(
        event = "ref_publish",
        id = %object.id(),
        count = ref_count(&object)
    );
    JsValue::Object(object)
}

impl Coercible for bool {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_boolean(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        JsValue::Boolean(*value)
    }
}

impl Coercible for i32 {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_int32(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        JsValue::Integer(*value)
    }
}

impl Coercible for u32 {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_uint32(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        JsValue::UnsignedInteger(*value)
    }
}

impl Coercible for i64 {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_int64(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        if *value >= i32::MIN as i64 && *value <= i32::MAX as i64 {
            JsValue::Integer(*value as i32)
        } else {
            JsValue::Number(*value as f64)
        }
    }
}

impl Coercible for f64 {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_number(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        JsValue::Number(*value)
    }
}

impl Coercible for String {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_js_string(value))
    }

    fn to_abstract(ctx: &EvalContext, value: &Self) -> JsValue {
        ctx.strings().to_value(value)
    }
}

impl Coercible for Rgb {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(to_color(value))
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        JsValue::UnsignedInteger(value.to_uint())
    }
}

/// Raw pass-through. Cloning the value clones any reference it holds.
impl Coercible for JsValue {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(value.clone())
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        value.clone()
    }
}

/// No type check: every value is accepted and published back unchanged.
impl Coercible for AnyRef {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        Ok(match value {
            JsValue::Undefined => AnyRef::Undefined,
            JsValue::Null => AnyRef::Null,
            JsValue::Object(o) => {
                let object = Rc::clone(o);
                tracing::trace!(
                    event = "ref_acquire",
                    id = %object.id(),
                    class = OBJECT_CLASS,
                    count = ref_count(&object)
                );
                AnyRef::Object(object)
            }
            other => AnyRef::Value(other.clone()),
        })
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        match value {
            AnyRef::Undefined => JsValue::Undefined,
            AnyRef::Null => JsValue::Null,
            AnyRef::Object(o) => publish(o),
            AnyRef::Value(v) => v.clone(),
        }
    }
}

impl<T: NativeClass> Coercible for Ref<T> {
    fn to_concrete(_ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        match value {
            JsValue::Object(o) if o.class().is_subclass_of(T::QUALIFIED_NAME) => {
                Ok(Ref::acquire(o))
            }
            _ => Err(JErrorType::check_type_failed(
                &value.class_name(),
                T::QUALIFIED_NAME,
            )),
        }
    }

    fn to_abstract(_ctx: &EvalContext, value: &Self) -> JsValue {
        publish(value.object())
    }
}

impl<T: NativeClass> Coercible for Option<Ref<T>> {
    fn to_concrete(ctx: &EvalContext, value: &JsValue) -> Result<Self, JErrorType> {
        if value.is_null_or_undefined() {
            Ok(None)
        } else {
            Ref::to_concrete(ctx, value).map(Some)
        }
    }

    fn to_abstract(ctx: &EvalContext, value: &Self) -> JsValue {
        match value {
            Some(r) => Ref::to_abstract(ctx, r),
            None => JsValue::Null,
        }
    }
}
