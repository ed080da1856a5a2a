//! The merged spec namespace and its merge policy

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Sequence, Value};
use tracing::debug;

use crate::error::SpecError;

/// Recognized list-typed top-level attributes; merging appends
pub const LIST_SLOTS: [&str; 3] = ["tags", "schemes", "produces"];

/// Recognized mapping-typed top-level attributes; merging inserts or
/// overwrites per key
pub const MAPPING_SLOTS: [&str; 3] = ["parameters", "paths", "definitions"];

/// A merged swagger spec namespace.
///
/// The six recognized slots carry a fixed merge policy and are always
/// present, initialized empty, so merging is well-defined even when no
/// document defines them. Every other top-level attribute of the root
/// document is carried verbatim in `extra`; unrecognized attributes from
/// included documents are dropped.
///
/// A namespace is seeded once from the root document, mutated once per
/// included document in visitation order, and serialized exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecNamespace {
    /// Declared tag descriptors, concatenated across documents
    pub tags: Sequence,
    /// Supported transfer schemes, concatenated across documents
    pub schemes: Sequence,
    /// Produced media types, concatenated across documents
    pub produces: Sequence,
    /// Named request parameters; later documents overwrite per key
    pub parameters: Mapping,
    /// Path item definitions; later documents overwrite per key
    pub paths: Mapping,
    /// Type schema definitions; later documents overwrite per key
    pub definitions: Mapping,
    /// Root-document attributes with no merge policy, carried verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl SpecNamespace {
    /// Seed a namespace from the root document's top-level mapping.
    ///
    /// Recognized keys populate their slots; any other key is kept verbatim
    /// as a passthrough attribute. A recognized key bound to a value of the
    /// wrong shape is a format error.
    ///
    /// # Arguments
    /// * `document` - The root document's parsed top-level mapping
    ///
    /// # Returns
    /// * `Ok(SpecNamespace)` - Namespace seeded with the root's attributes
    /// * `Err(SpecError)` - If a recognized slot has the wrong YAML shape
    pub fn from_document(document: Mapping) -> Result<Self, SpecError> {
        let mut namespace = Self::default();
        for (key, value) in document {
            let slot = key.as_str().and_then(recognized_slot);
            match slot {
                Some(name) => namespace.merge_slot(name, value)?,
                None => {
                    namespace.extra.insert(key, value);
                }
            }
        }
        Ok(namespace)
    }

    /// Merge an included document's top-level mapping into this namespace.
    ///
    /// List-typed slots append after existing values, preserving both
    /// internal orders. Mapping-typed slots insert or overwrite per key,
    /// leaving untouched keys intact. Unrecognized attributes are dropped;
    /// only the root document's passthrough attributes survive.
    ///
    /// # Arguments
    /// * `document` - An included document's parsed top-level mapping
    ///
    /// # Returns
    /// * `Ok(())` - All recognized attributes merged
    /// * `Err(SpecError)` - If a recognized slot has the wrong YAML shape
    pub fn merge(&mut self, document: Mapping) -> Result<(), SpecError> {
        for (key, value) in document {
            let slot = key.as_str().and_then(recognized_slot);
            match slot {
                Some(name) => self.merge_slot(name, value)?,
                None => debug!(?key, "dropping unrecognized attribute from included spec"),
            }
        }
        Ok(())
    }

    /// Apply the slot's merge policy for a single recognized attribute
    fn merge_slot(&mut self, name: &str, value: Value) -> Result<(), SpecError> {
        match name {
            "tags" => extend_sequence(&mut self.tags, name, value),
            "schemes" => extend_sequence(&mut self.schemes, name, value),
            "produces" => extend_sequence(&mut self.produces, name, value),
            "parameters" => update_mapping(&mut self.parameters, name, value),
            "paths" => update_mapping(&mut self.paths, name, value),
            "definitions" => update_mapping(&mut self.definitions, name, value),
            _ => Ok(()),
        }
    }

    /// Serialize the namespace to YAML text.
    ///
    /// Emits the six recognized slots in declaration order, empty or not,
    /// followed by the passthrough attributes in root-document order. The
    /// output re-parses as a spec document with no includes.
    pub fn to_yaml(&self) -> Result<String, SpecError> {
        serde_yaml::to_string(self).map_err(SpecError::YamlError)
    }

    /// Write the serialized namespace to `path`
    pub fn write_to(&self, path: &Path) -> Result<(), SpecError> {
        let content = self.to_yaml()?;
        fs::write(path, content).map_err(SpecError::IoError)
    }
}

/// Whether a top-level attribute name has a declared merge policy
pub fn is_recognized(name: &str) -> bool {
    recognized_slot(name).is_some()
}

/// Canonical name of the recognized slot matching `name`, if any
fn recognized_slot(name: &str) -> Option<&'static str> {
    LIST_SLOTS
        .iter()
        .chain(MAPPING_SLOTS.iter())
        .find(|slot| **slot == name)
        .copied()
}

fn extend_sequence(slot: &mut Sequence, name: &str, value: Value) -> Result<(), SpecError> {
    match value {
        Value::Sequence(items) => {
            slot.extend(items);
            Ok(())
        }
        other => Err(SpecError::InvalidFormat(format!(
            "`{}` must be a sequence, found {}",
            name,
            value_kind(&other)
        ))),
    }
}

fn update_mapping(slot: &mut Mapping, name: &str, value: Value) -> Result<(), SpecError> {
    match value {
        Value::Mapping(entries) => {
            for (key, entry) in entries {
                slot.insert(key, entry);
            }
            Ok(())
        }
        other => Err(SpecError::InvalidFormat(format!(
            "`{}` must be a mapping, found {}",
            name,
            value_kind(&other)
        ))),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
