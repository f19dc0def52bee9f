//! Untyped configuration document
//!
//! The node configuration is treated as a generic JSON object. Only the keys
//! the patch touches are addressed; everything else passes through with its
//! original order.

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

/// A parsed configuration document whose root is a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Parse document text; the root must be a JSON object
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::not_an_object("<root>", &other)),
        }
    }

    /// Look up a value by key path
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.root.get(*first)?, |value, key| value.get(*key))
    }

    /// Replace a top-level field wholesale, inserting it when absent
    pub fn replace(&mut self, key: &str, value: Value) -> Option<Value> {
        self.root.insert(key.to_string(), value)
    }

    /// Assign `key` inside the object found at `parent`
    ///
    /// Every segment of `parent` must already exist and the last one must be
    /// an object. Nothing along the path is created.
    pub fn set_in_existing(&mut self, parent: &[&str], key: &str, value: Value) -> Result<()> {
        let mut current = &mut self.root;
        for (depth, segment) in parent.iter().enumerate() {
            let dotted = parent[..=depth].join(".");
            current = match current.get_mut(*segment) {
                Some(Value::Object(map)) => map,
                Some(other) => return Err(Error::not_an_object(dotted, other)),
                None => return Err(Error::missing_field(dotted)),
            };
        }
        current.insert(key.to_string(), value);
        Ok(())
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Serialize with four-space indentation and no trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        self.root.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
