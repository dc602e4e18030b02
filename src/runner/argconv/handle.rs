//! Owning handles for runtime objects held by native code.
//!
//! Every handle owns exactly one counted reference. Dropping the handle gives
//! it back.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::rc::Rc;

use crate::runner::ds::class::NativeClass;
use crate::runner::ds::object::{ref_count, JsObject, JsObjectRef};
use crate::runner::ds::value::JsValue;

/// Strong, non-nullable handle to an instance of `T` or one of its subclasses.
pub struct Ref<T: NativeClass> {
    object: JsObjectRef,
    class: PhantomData<fn() -> T>,
}

impl<T: NativeClass> Ref<T> {
    /// Take a new counted reference on `object`.
    ///
    /// The caller vouches that `object` is an instance of `T`; the coercion
    /// protocol checks this before getting here.
    pub(crate) fn acquire(object: &JsObjectRef) -> Self {
        let object = Rc::clone(object);
        tracing::trace!(
            event = "ref_acquire",
            id = %object.id(),
            class = T::QUALIFIED_NAME,
            count = ref_count(&object)
        );
        Ref {
            object,
            class: PhantomData,
        }
    }

    /// Wrap a reference the caller already owns, without adding one.
    pub(crate) fn from_owned(object: JsObjectRef) -> Self {
        Ref {
            object,
            class: PhantomData,
        }
    }

    pub fn object(&self) -> &JsObjectRef {
        &self.object
    }

    pub fn into_object(self) -> JsObjectRef {
        self.object
    }

    /// Counted references currently held on the underlying object, this one included.
    pub fn ref_count(&self) -> usize {
        ref_count(&self.object)
    }

    pub fn ptr_eq(&self, other: &JsObjectRef) -> bool {
        Rc::ptr_eq(&self.object, other)
    }
}

impl<T: NativeClass> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Ref::acquire(&self.object)
    }
}

impl<T: NativeClass> Deref for Ref<T> {
    type Target = JsObject;

    fn deref(&self) -> &JsObject {
        &self.object
    }
}

impl<T: NativeClass> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.object, &other.object)
    }
}

impl<T: NativeClass> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref<{}>({})", T::QUALIFIED_NAME, self.object.id())
    }
}

/// Nullable handle. `None` is the empty state produced from null or undefined.
pub type NullableRef<T> = Option<Ref<T>>;

/// Universal reference: takes any value without a type check.
///
/// Null and undefined stay distinct. Only `Object` owns a counted reference.
#[derive(Clone)]
pub enum AnyRef {
    Undefined,
    Null,
    Object(JsObjectRef),
    Value(JsValue),
}

impl AnyRef {
    pub fn is_object(&self) -> bool {
        matches!(self, AnyRef::Object(_))
    }

    pub fn as_object(&self) -> Option<&JsObjectRef> {
        match self {
            AnyRef::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl Default for AnyRef {
    fn default() -> Self {
        AnyRef::Undefined
    }
}

impl PartialEq for AnyRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyRef::Undefined, AnyRef::Undefined) => true,
            (AnyRef::Null, AnyRef::Null) => true,
            (AnyRef::Object(a), AnyRef::Object(b)) => Rc::ptr_eq(a, b),
            (AnyRef::Value(a), AnyRef::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for AnyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRef::Undefined => write!(f, "AnyRef::Undefined"),
            AnyRef::Null => write!(f, "AnyRef::Null"),
            AnyRef::Object(o) => write!(f, "AnyRef::Object({} {})", o, o.id()),
            AnyRef::Value(v) => write!(f, "AnyRef::Value({:?})", v),
        }
    }
}
