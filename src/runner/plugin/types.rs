//! Core types for native functions and the objects that expose them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::runner::argconv::accessor::{native_getter, native_setter};
use crate::runner::argconv::coercion::Coercible;
use crate::runner::argconv::handle::Ref;
use crate::runner::ds::class::{ClassRegistry, NativeClass};
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::JsObjectRef;
use crate::runner::ds::string_table::StringTable;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::config::RuntimeConfig;

/// Callee name reported when no native is being invoked through the registry.
pub const UNKNOWN_CALLEE: &str = "object";

/// Non-fatal notices recorded while running natives.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An exact-arity native returned with arguments left over.
    UnconsumedArguments { callee: String, remaining: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnconsumedArguments { callee, remaining } => write!(
                f,
                "Not all arguments were unpacked on {} ({} left)",
                callee, remaining
            ),
        }
    }
}

/// Execution context passed to native functions.
/// One per worker; natives borrow it for the duration of a call.
pub struct EvalContext {
    config: RuntimeConfig,
    strings: StringTable,
    classes: ClassRegistry,
    diagnostics: RefCell<Vec<Diagnostic>>,
    callee: RefCell<Option<String>>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        EvalContext {
            config,
            strings: StringTable::new(),
            classes: ClassRegistry::with_builtins(),
            diagnostics: RefCell::new(Vec::new()),
            callee: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassRegistry {
        &mut self.classes
    }

    pub fn new_object(&self, qualified_name: &str) -> Result<JsObjectRef, JErrorType> {
        self.classes.new_object(qualified_name)
    }

    /// Allocate an instance of `T`. The returned handle holds the only reference.
    pub fn new_instance<T: NativeClass>(&self) -> Result<Ref<T>, JErrorType> {
        let object = self.classes.new_object(T::QUALIFIED_NAME)?;
        Ok(Ref::from_owned(object))
    }

    /// Produce the script value for a native one.
    pub fn to_value<T: Coercible>(&self, value: &T) -> JsValue {
        T::to_abstract(self, value)
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.replace(Vec::new())
    }

    /// Name of the native currently running, for argument errors.
    pub fn callee(&self) -> String {
        self.callee
            .borrow()
            .clone()
            .unwrap_or_else(|| UNKNOWN_CALLEE.to_string())
    }

    /// Set the running native's name and return the previous one.
    pub fn set_callee(&self, callee: Option<String>) -> Option<String> {
        self.callee.replace(callee)
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Function signature for built-in methods.
/// Native functions receive the evaluation context, `this` value, and arguments.
pub type NativeFn =
    fn(ctx: &mut EvalContext, this: JsValue, args: &[JsValue]) -> Result<JsValue, JErrorType>;

/// Built-in function - either compiled-in or generated.
pub enum BuiltInFn {
    /// Direct function pointer - zero overhead for compiled-in functions.
    Native(NativeFn),

    /// Boxed closure, used for generated accessors and overrides.
    Plugin(
        Box<
            dyn Fn(&mut EvalContext, JsValue, &[JsValue]) -> Result<JsValue, JErrorType>
                + Send
                + Sync,
        >,
    ),
}

impl BuiltInFn {
    /// Execute this built-in function.
    pub fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, JErrorType> {
        match self {
            BuiltInFn::Native(f) => f(ctx, this, args),
            BuiltInFn::Plugin(f) => f(ctx, this, args),
        }
    }
}

/// Getter and optional setter for one typed property.
pub struct Accessor {
    pub getter: BuiltInFn,
    pub setter: Option<BuiltInFn>,
}

/// Built-in object definition.
/// Describes the natives attached to one runtime class.
pub struct BuiltInObject {
    /// Qualified name of the class (e.g., "flash.display::MovieClip").
    pub name: String,

    /// Methods defined on this class.
    pub methods: HashMap<String, BuiltInFn>,

    /// Typed properties backed by generated getter/setter natives.
    pub accessors: HashMap<String, Accessor>,

    /// Constructor function, if this object is constructable.
    pub constructor: Option<BuiltInFn>,
}

impl BuiltInObject {
    /// Create a new built-in object with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        BuiltInObject {
            name: name.into(),
            methods: HashMap::new(),
            accessors: HashMap::new(),
            constructor: None,
        }
    }

    /// Add a native method.
    pub fn add_method(mut self, name: impl Into<String>, func: NativeFn) -> Self {
        self.methods.insert(name.into(), BuiltInFn::Native(func));
        self
    }

    /// Add a read/write property whose value is coerced through `T`.
    pub fn add_accessor<T: Coercible + Default + 'static>(mut self, name: &str) -> Self {
        self.accessors.insert(
            name.to_string(),
            Accessor {
                getter: native_getter::<T>(name),
                setter: Some(native_setter::<T>(name)),
            },
        );
        self
    }

    /// Add a read only property whose value is coerced through `T`.
    pub fn add_getter<T: Coercible + Default + 'static>(mut self, name: &str) -> Self {
        self.accessors.insert(
            name.to_string(),
            Accessor {
                getter: native_getter::<T>(name),
                setter: None,
            },
        );
        self
    }

    /// Set the constructor function.
    pub fn with_constructor(mut self, constructor: NativeFn) -> Self {
        self.constructor = Some(BuiltInFn::Native(constructor));
        self
    }
}
