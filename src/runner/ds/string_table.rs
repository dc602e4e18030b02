//! Interned strings handed out to script.
//!
//! The table keeps one counted reference to every string it has boxed, so a
//! `JsValue::String` produced here never owns the only copy.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::runner::ds::operations::type_conversion::{
    CLASS_STR_NULL, CLASS_STR_UNDEFINED,
};
use crate::runner::ds::value::{JsString, JsValue};

const NAMED_STRINGS: &[&str] = &[
    "", CLASS_STR_UNDEFINED, CLASS_STR_NULL, "undefined", "true", "false", "NaN",
];

lazy_static! {
    /// Named strings plus the decimal forms of single digits.
    static ref PRELOADED_STRINGS: Vec<String> = NAMED_STRINGS
        .iter()
        .map(|s| s.to_string())
        .chain((0..10).map(|d: u8| d.to_string()))
        .collect();
}

pub struct StringTable {
    strings: RefCell<HashSet<JsString>>,
}

impl StringTable {
    pub fn new() -> Self {
        let table = StringTable {
            strings: RefCell::new(HashSet::new()),
        };
        for s in PRELOADED_STRINGS.iter() {
            table.intern(s);
        }
        table
    }

    /// Return the canonical copy of `s`, adding it on first use.
    pub fn intern(&self, s: &str) -> JsString {
        if let Some(existing) = self.strings.borrow().get(s) {
            return Rc::clone(existing);
        }
        let boxed: JsString = Rc::from(s);
        self.strings.borrow_mut().insert(Rc::clone(&boxed));
        boxed
    }

    pub fn to_value(&self, s: &str) -> JsValue {
        JsValue::String(self.intern(s))
    }

    pub fn contains(&self, s: &str) -> bool {
        self.strings.borrow().contains(s)
    }

    pub fn len(&self) -> usize {
        self.strings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_returns_same_allocation() {
        let table = StringTable::new();
        let a = table.intern("hello");
        let b = table.intern("hello");
        assert!(Rc::ptr_eq(&a, &b));
        // table + a + b
        assert_eq!(Rc::strong_count(&a), 3);
    }

    #[test]
    fn test_table_keeps_string_alive() {
        let table = StringTable::new();
        let before = table.len();
        drop(table.intern("transient"));
        assert!(table.contains("transient"));
        assert_eq!(table.len(), before + 1);
    }

    #[test]
    fn test_preloaded() {
        let table = StringTable::new();
        assert!(table.contains(""));
        assert!(table.contains("null"));
        assert!(table.contains("void"));
        assert!(table.contains("7"));
        assert!(!table.contains("10"));
    }
}
