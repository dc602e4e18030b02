//! Built-in registry for managing native classes and invoking their natives.

use std::collections::HashMap;

use super::types::{Accessor, BuiltInFn, BuiltInObject, EvalContext};
use crate::runner::ds::class::Class;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::std_lib::register_core_builtins;

/// Error type for registry and configuration operations.
#[derive(Debug)]
pub enum PluginError {
    /// Configuration error.
    ConfigError(String),
    /// Object not found in registry.
    ObjectNotFound(String),
    /// Method not found on object.
    MethodNotFound(String, String),
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            PluginError::ObjectNotFound(name) => write!(f, "Object not found: {}", name),
            PluginError::MethodNotFound(obj, method) => {
                write!(f, "Method not found: {}.{}", obj, method)
            }
        }
    }
}

impl std::error::Error for PluginError {}

/// Registry for built-in objects.
/// Maps qualified class names to the natives implementing them.
pub struct BuiltInRegistry {
    /// All registered built-in objects.
    objects: HashMap<String, BuiltInObject>,

    /// Override chain (object.method -> number of times replaced).
    overrides: HashMap<String, usize>,
}

impl BuiltInRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltInRegistry {
            objects: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    /// Create a registry with the core natives.
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        register_core_builtins(&mut registry);
        registry
    }

    /// Register a built-in object (programmatic API).
    pub fn register_object(&mut self, obj: BuiltInObject) {
        self.objects.insert(obj.name.clone(), obj);
    }

    /// Get a registered object by name.
    pub fn get_object(&self, name: &str) -> Option<&BuiltInObject> {
        self.objects.get(name)
    }

    /// Get a mutable reference to a registered object.
    pub fn get_object_mut(&mut self, name: &str) -> Option<&mut BuiltInObject> {
        self.objects.get_mut(name)
    }

    /// Override an existing built-in method.
    pub fn override_method(
        &mut self,
        object: &str,
        method: &str,
        func: BuiltInFn,
    ) -> Result<(), PluginError> {
        let obj = self
            .objects
            .get_mut(object)
            .ok_or_else(|| PluginError::ObjectNotFound(object.to_string()))?;

        let slot = obj.methods.get_mut(method).ok_or_else(|| {
            PluginError::MethodNotFound(object.to_string(), method.to_string())
        })?;
        *slot = func;

        *self
            .overrides
            .entry(format!("{}.{}", object, method))
            .or_insert(0) += 1;

        Ok(())
    }

    /// How many times `object.method` has been overridden.
    pub fn override_count(&self, object: &str, method: &str) -> usize {
        self.overrides
            .get(&format!("{}.{}", object, method))
            .copied()
            .unwrap_or(0)
    }

    /// Get a built-in function for execution.
    pub fn get_method(&self, object: &str, method: &str) -> Option<&BuiltInFn> {
        self.objects
            .get(object)
            .and_then(|obj| obj.methods.get(method))
    }

    /// Get a constructor function for an object.
    pub fn get_constructor(&self, object: &str) -> Option<&BuiltInFn> {
        self.objects
            .get(object)
            .and_then(|obj| obj.constructor.as_ref())
    }

    /// Check if an object exists in the registry.
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Check if a method exists on an object.
    pub fn has_method(&self, object: &str, method: &str) -> bool {
        self.objects
            .get(object)
            .map(|obj| obj.methods.contains_key(method))
            .unwrap_or(false)
    }

    /// Get list of all registered object names.
    pub fn object_names(&self) -> Vec<&String> {
        self.objects.keys().collect()
    }

    /// Find `method` on `class` or the nearest superclass defining it.
    /// Returns the short name of the defining class with the method.
    pub fn find_method(&self, class: &Class, method: &str) -> Option<(String, &BuiltInFn)> {
        let mut current = Some(class);
        while let Some(c) = current {
            if let Some(f) = self.get_method(c.qualified_name(), method) {
                return Some((c.name().to_string(), f));
            }
            current = c.super_class().map(|s| s.as_ref());
        }
        None
    }

    /// Invoke a method on `this`, resolving it through `this`'s class chain.
    ///
    /// This is the native call boundary: argument errors come back as `Err`
    /// for the caller to raise as script exceptions.
    pub fn call_method(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        method: &str,
        args: &[JsValue],
    ) -> Result<JsValue, JErrorType> {
        let class = match this.as_object() {
            Some(o) => o.class().clone(),
            None => {
                return Err(JErrorType::TypeError(format!(
                    "Cannot call method {} on {}",
                    method,
                    this.class_name()
                )))
            }
        };
        let (owner, func) = self.find_method(&class, method).ok_or_else(|| {
            JErrorType::TypeError(format!("{}.{} is not a function", class.name(), method))
        })?;
        invoke(ctx, format!("{}.{}", owner, method), func, this, args)
    }

    /// Allocate an instance of `class` and run its constructor on it.
    pub fn construct(
        &self,
        ctx: &mut EvalContext,
        class: &str,
        args: &[JsValue],
    ) -> Result<JsValue, JErrorType> {
        let object = ctx.new_object(class)?;
        let this = JsValue::Object(object);
        if let Some(constructor) = self.get_constructor(class) {
            let short_name = this.class_name();
            invoke(ctx, short_name, constructor, this.clone(), args)?;
        }
        Ok(this)
    }

    /// Read a typed property through its generated getter.
    pub fn get_property(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        property: &str,
    ) -> Result<JsValue, JErrorType> {
        let (owner, accessor) = self.find_accessor(&this, property)?;
        invoke(ctx, format!("{}.{}", owner, property), &accessor.getter, this, &[])
    }

    /// Write a typed property through its generated setter.
    pub fn set_property(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        property: &str,
        value: JsValue,
    ) -> Result<(), JErrorType> {
        let (owner, accessor) = self.find_accessor(&this, property)?;
        let setter = accessor.setter.as_ref().ok_or_else(|| {
            JErrorType::ReferenceError(format!(
                "Illegal write to read-only property {} on {}",
                property, owner
            ))
        })?;
        invoke(ctx, format!("{}.{}", owner, property), setter, this, &[value])?;
        Ok(())
    }

    fn find_accessor(
        &self,
        this: &JsValue,
        property: &str,
    ) -> Result<(String, &Accessor), JErrorType> {
        let not_found = || {
            JErrorType::ReferenceError(format!(
                "Property {} not found on {}",
                property,
                this.class_name()
            ))
        };
        let mut current = this.as_object().map(|o| o.class().clone());
        while let Some(c) = current {
            if let Some(accessor) = self
                .objects
                .get(c.qualified_name())
                .and_then(|obj| obj.accessors.get(property))
            {
                return Ok((c.name().to_string(), accessor));
            }
            current = c.super_class().cloned();
        }
        Err(not_found())
    }
}

/// Run one native with `callee` recorded on the context for diagnostics.
fn invoke(
    ctx: &mut EvalContext,
    callee: String,
    func: &BuiltInFn,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    tracing::debug!(callee = %callee, argc = args.len(), "invoking native");
    let previous = ctx.set_callee(Some(callee));
    let result = func.call(ctx, this, args);
    ctx.set_callee(previous);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "native raised");
    }
    result
}

impl Default for BuiltInRegistry {
    fn default() -> Self {
        Self::with_core()
    }
}
