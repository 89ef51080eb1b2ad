//! Projection of a solver result onto its run-independent fields.
//!
//! Only `cost`, `educate`, `solution` and `evolution` are kept, and the
//! wall-clock `time` of every evolution entry is dropped. Entry order is kept
//! as is: it records the optimization progress.

use crate::error::StructureError;
use serde_json::{Map, Value};

/// Top-level fields that take part in the comparison
pub const ALLOWED_FIELDS: [&str; 4] = ["cost", "educate", "solution", "evolution"];

/// Field holding the per-iteration snapshots
pub const EVOLUTION_FIELD: &str = "evolution";

/// Snapshot fields that differ between runs of the same solver build
pub const VOLATILE_EVOLUTION_FIELDS: [&str; 1] = ["time"];

/// Which fields survive normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Top-level keys to keep. The evolution field is kept regardless.
    pub allowed_fields: Vec<String>,
    /// Keys removed from every evolution entry
    pub volatile_evolution_fields: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            allowed_fields: ALLOWED_FIELDS.iter().map(|s| s.to_string()).collect(),
            volatile_evolution_fields: VOLATILE_EVOLUTION_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NormalizeConfig {
    fn is_allowed(&self, key: &str) -> bool {
        self.allowed_fields.iter().any(|f| f == key)
    }

    fn is_volatile(&self, key: &str) -> bool {
        self.volatile_evolution_fields.iter().any(|f| f == key)
    }
}

/// Build the normalized form of a solver result.
///
/// Fails when the document is not an object, has no `evolution` field, or
/// when `evolution` is not an array of objects.
pub fn normalize(document: &Value, config: &NormalizeConfig) -> Result<Value, StructureError> {
    let fields = document.as_object().ok_or(StructureError::NotAnObject)?;

    let mut normalized: Map<String, Value> = fields
        .iter()
        .filter(|(key, _)| config.is_allowed(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let evolution = fields
        .get(EVOLUTION_FIELD)
        .ok_or_else(|| StructureError::MissingField(EVOLUTION_FIELD.to_string()))?;
    let entries = evolution
        .as_array()
        .ok_or_else(|| StructureError::NotAnArray(EVOLUTION_FIELD.to_string()))?;

    let stripped = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_object()
                .map(|fields| strip_volatile(fields, config))
                .ok_or_else(|| StructureError::EntryNotAnObject {
                    field: EVOLUTION_FIELD.to_string(),
                    index,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    normalized.insert(EVOLUTION_FIELD.to_string(), Value::Array(stripped));

    Ok(Value::Object(normalized))
}

fn strip_volatile(entry: &Map<String, Value>, config: &NormalizeConfig) -> Value {
    Value::Object(
        entry
            .iter()
            .filter(|(key, _)| !config.is_volatile(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}
