//! Runtime classes and the registry natives resolve them from.
//!
//! Type compatibility for reference slots is nominal: an object matches a
//! class when the class appears somewhere on its superclass chain.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::{JsObject, JsObjectRef};

pub const OBJECT_CLASS: &str = "Object";

pub struct Class {
    name: String,
    package: String,
    qualified_name: String,
    super_class: Option<Rc<Class>>,
}

impl Class {
    pub fn new(name: &str, package: &str, super_class: Option<Rc<Class>>) -> Self {
        let qualified_name = if package.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", package, name)
        };
        Class {
            name: name.to_string(),
            package: package.to_string(),
            qualified_name,
            super_class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// `package::Name`, or just `Name` for top level classes.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn super_class(&self) -> Option<&Rc<Class>> {
        self.super_class.as_ref()
    }

    /// True if this class is `qualified_name` or inherits from it.
    pub fn is_subclass_of(&self, qualified_name: &str) -> bool {
        let mut current = Some(self);
        while let Some(c) = current {
            if c.qualified_name == qualified_name {
                return true;
            }
            current = c.super_class.as_deref();
        }
        false
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[class {}]", self.qualified_name)
    }
}

/// A Rust type standing for one runtime class.
pub trait NativeClass: 'static {
    const QUALIFIED_NAME: &'static str;
}

/// Declares a zero sized marker implementing [`NativeClass`].
#[macro_export]
macro_rules! native_class {
    ($(#[$meta:meta])* $marker:ident => $qualified:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $marker;

        impl $crate::runner::ds::class::NativeClass for $marker {
            const QUALIFIED_NAME: &'static str = $qualified;
        }
    };
}

native_class!(
    /// Root of the hierarchy. `Ref<Object>` accepts any object.
    Object => OBJECT_CLASS
);
native_class!(DisplayObject => "flash.display::DisplayObject");
native_class!(InteractiveObject => "flash.display::InteractiveObject");
native_class!(DisplayObjectContainer => "flash.display::DisplayObjectContainer");
native_class!(Sprite => "flash.display::Sprite");
native_class!(MovieClip => "flash.display::MovieClip");
native_class!(Shape => "flash.display::Shape");
native_class!(CSMSettings => "flash.text::CSMSettings");
native_class!(Color => "Color");

struct ClassDescriptor {
    name: &'static str,
    package: &'static str,
    parent: Option<&'static str>,
}

/// Built-in hierarchy, parents listed before children.
static BUILTIN_CLASSES: &[ClassDescriptor] = &[
    ClassDescriptor { name: "Object", package: "", parent: None },
    ClassDescriptor { name: "DisplayObject", package: "flash.display", parent: Some(OBJECT_CLASS) },
    ClassDescriptor { name: "InteractiveObject", package: "flash.display", parent: Some(DisplayObject::QUALIFIED_NAME) },
    ClassDescriptor { name: "DisplayObjectContainer", package: "flash.display", parent: Some(InteractiveObject::QUALIFIED_NAME) },
    ClassDescriptor { name: "Sprite", package: "flash.display", parent: Some(DisplayObjectContainer::QUALIFIED_NAME) },
    ClassDescriptor { name: "MovieClip", package: "flash.display", parent: Some(Sprite::QUALIFIED_NAME) },
    ClassDescriptor { name: "Shape", package: "flash.display", parent: Some(DisplayObject::QUALIFIED_NAME) },
    ClassDescriptor { name: "CSMSettings", package: "flash.text", parent: Some(OBJECT_CLASS) },
    ClassDescriptor { name: "Color", package: "", parent: Some(OBJECT_CLASS) },
];

/// Classes known to one runtime, keyed by qualified name.
pub struct ClassRegistry {
    classes: HashMap<String, Rc<Class>>,
}

impl ClassRegistry {
    /// Create a registry without any classes, not even `Object`.
    pub fn new() -> Self {
        ClassRegistry {
            classes: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in display hierarchy.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for d in BUILTIN_CLASSES.iter() {
            // Parents precede children in the table, so this cannot fail.
            if let Err(e) = registry.define_class(d.name, d.package, d.parent) {
                tracing::error!(class = d.name, error = %e, "built-in class table is inconsistent");
            }
        }
        registry
    }

    /// Register a class. `parent` is a qualified name that must already exist.
    pub fn define_class(
        &mut self,
        name: &str,
        package: &str,
        parent: Option<&str>,
    ) -> Result<Rc<Class>, JErrorType> {
        let super_class = match parent {
            None => None,
            Some(p) => Some(self.get(p).ok_or_else(|| {
                JErrorType::ReferenceError(format!("Class {} is not defined", p))
            })?),
        };
        let class = Rc::new(Class::new(name, package, super_class));
        tracing::debug!(class = class.qualified_name(), "class defined");
        self.classes
            .insert(class.qualified_name().to_string(), Rc::clone(&class));
        Ok(class)
    }

    pub fn get(&self, qualified_name: &str) -> Option<Rc<Class>> {
        self.classes.get(qualified_name).cloned()
    }

    pub fn class_of<T: NativeClass>(&self) -> Option<Rc<Class>> {
        self.get(T::QUALIFIED_NAME)
    }

    pub fn has_class(&self, qualified_name: &str) -> bool {
        self.classes.contains_key(qualified_name)
    }

    /// Allocate a fresh instance of a registered class.
    pub fn new_object(&self, qualified_name: &str) -> Result<JsObjectRef, JErrorType> {
        let class = self.get(qualified_name).ok_or_else(|| {
            JErrorType::ReferenceError(format!("Class {} is not defined", qualified_name))
        })?;
        Ok(Rc::new(JsObject::new(class)))
    }

    pub fn class_names(&self) -> Vec<&String> {
        self.classes.keys().collect()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
