use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::runner::ds::class::Class;
use crate::runner::ds::value::JsValue;

/// Counted reference to a runtime object. The `Rc` strong count is the
/// object's reference total.
pub type JsObjectRef = Rc<JsObject>;

pub struct JsObject {
    id: Uuid,
    class: Rc<Class>,
    properties: RefCell<HashMap<String, JsValue>>,
}

impl JsObject {
    pub fn new(class: Rc<Class>) -> Self {
        let id = Uuid::new_v4();
        tracing::trace!(event = "object_new", id = %id, class = class.qualified_name());
        JsObject {
            id,
            class,
            properties: RefCell::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<JsValue> {
        self.properties.borrow().get(name).cloned()
    }

    /// Store a property, returning the value it replaced.
    pub fn set(&self, name: &str, value: JsValue) -> Option<JsValue> {
        self.properties.borrow_mut().insert(name.to_string(), value)
    }

    pub fn has(&self, name: &str) -> bool {
        self.properties.borrow().contains_key(name)
    }

    pub fn delete(&self, name: &str) -> Option<JsValue> {
        self.properties.borrow_mut().remove(name)
    }

    pub fn property_names(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }
}

impl fmt::Display for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.class.name())
    }
}

impl Drop for JsObject {
    fn drop(&mut self) {
        tracing::trace!(event = "object_destroy", id = %self.id);
    }
}

/// Number of counted references currently held on `object`.
pub fn ref_count(object: &JsObjectRef) -> usize {
    Rc::strong_count(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::class::ClassRegistry;

    #[test]
    fn test_properties() {
        let registry = ClassRegistry::with_builtins();
        let o = registry.new_object("Object").unwrap();
        assert!(o.get("x").is_none());
        assert!(o.set("x", JsValue::Integer(1)).is_none());
        assert_eq!(o.set("x", JsValue::Integer(2)), Some(JsValue::Integer(1)));
        assert_eq!(o.get("x"), Some(JsValue::Integer(2)));
        assert!(o.has("x"));
        assert_eq!(o.delete("x"), Some(JsValue::Integer(2)));
        assert!(!o.has("x"));
    }

    #[test]
    fn test_display_and_ids() {
        let registry = ClassRegistry::with_builtins();
        let a = registry.new_object("flash.display::Sprite").unwrap();
        let b = registry.new_object("flash.display::Sprite").unwrap();
        assert_eq!(a.to_string(), "[object Sprite]");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_ref_count_tracks_values() {
        let registry = ClassRegistry::with_builtins();
        let o = registry.new_object("Object").unwrap();
        assert_eq!(ref_count(&o), 1);
        let v = JsValue::Object(Rc::clone(&o));
        assert_eq!(ref_count(&o), 2);
        drop(v);
        assert_eq!(ref_count(&o), 1);
    }
}
