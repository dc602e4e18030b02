use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::object::JsObjectRef;
use crate::runner::ds::operations::type_conversion::{
    to_js_string, CLASS_STR_BOOLEAN, CLASS_STR_INT, CLASS_STR_NULL, CLASS_STR_NUMBER,
    CLASS_STR_STRING, CLASS_STR_UINT, CLASS_STR_UNDEFINED,
};

/// String payload of a value. The runtime string table owns the canonical copy.
pub type JsString = Rc<str>;

/// One scripting value as the interpreter hands it to a native call.
///
/// `Object` holds the stack slot's own counted reference; cloning the value
/// adds another one.
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    Integer(i32),
    UnsignedInteger(u32),
    Number(f64),
    String(JsString),
    Object(JsObjectRef),
}

impl JsValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    pub fn is_null_or_undefined(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    pub fn as_object(&self) -> Option<&JsObjectRef> {
        match self {
            JsValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// True when this is an object whose class is `qualified_name` or a
    /// subclass of it.
    pub fn is_instance_of(&self, qualified_name: &str) -> bool {
        match self {
            JsValue::Object(o) => o.class().is_subclass_of(qualified_name),
            _ => false,
        }
    }

    /// Runtime class name used in coercion diagnostics.
    pub fn class_name(&self) -> String {
        match self {
            JsValue::Undefined => CLASS_STR_UNDEFINED.to_string(),
            JsValue::Null => CLASS_STR_NULL.to_string(),
            JsValue::Boolean(_) => CLASS_STR_BOOLEAN.to_string(),
            JsValue::Integer(_) => CLASS_STR_INT.to_string(),
            JsValue::UnsignedInteger(_) => CLASS_STR_UINT.to_string(),
            JsValue::Number(_) => CLASS_STR_NUMBER.to_string(),
            JsValue::String(_) => CLASS_STR_STRING.to_string(),
            JsValue::Object(o) => o.class().name().to_string(),
        }
    }

    pub fn from_object(object: JsObjectRef) -> Self {
        JsValue::Object(object)
    }
}

impl Clone for JsValue {
    fn clone(&self) -> Self {
        match self {
            JsValue::Undefined => JsValue::Undefined,
            JsValue::Null => JsValue::Null,
            JsValue::Boolean(b) => JsValue::Boolean(*b),
            JsValue::Integer(i) => JsValue::Integer(*i),
            JsValue::UnsignedInteger(u) => JsValue::UnsignedInteger(*u),
            JsValue::Number(n) => JsValue::Number(*n),
            JsValue::String(s) => JsValue::String(Rc::clone(s)),
            JsValue::Object(o) => JsValue::Object(Rc::clone(o)),
        }
    }
}

impl Display for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::String(s) => write!(f, "\"{}\"", s),
            _ => write!(f, "{}", to_js_string(self)),
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::Integer(i) => write!(f, "JsValue::Integer({})", i),
            JsValue::UnsignedInteger(u) => write!(f, "JsValue::UnsignedInteger({})", u),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Object(o) => write!(f, "JsValue::Object({})", o),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Integer(a), JsValue::Integer(b)) => a == b,
            (JsValue::UnsignedInteger(a), JsValue::UnsignedInteger(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<i32> for JsValue {
    fn from(i: i32) -> Self {
        JsValue::Integer(i)
    }
}

impl From<u32> for JsValue {
    fn from(u: u32) -> Self {
        JsValue::UnsignedInteger(u)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(Rc::from(s))
    }
}

impl From<JsObjectRef> for JsValue {
    fn from(o: JsObjectRef) -> Self {
        JsValue::Object(o)
    }
}
