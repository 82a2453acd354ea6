//! Field-scoped validation errors shared by PromptHub form controllers
//!
//! Every form in PromptHub reports problems inline, next to the field that
//! caused them. `FieldErrors` is the map behind that: one optional message
//! per field, ordered by the field enum so hosts render them in form order.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A form field identifier.
///
/// Implemented by the field enums of each form. `name` is the wire/display
/// key used in logs and serialized error maps.
pub trait FormField: Copy + Ord + fmt::Debug {
    fn name(&self) -> &'static str;
}

/// Per-field error messages for a single form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<F: Ord> {
    entries: BTreeMap<F, String>,
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Attach `message` to `field`, replacing any previous message.
    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove the message for `field`, returning whether one was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields in declaration order with their messages
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> Vec<F> {
        self.entries.keys().copied().collect()
    }
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormField> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
            first = false;
        }
        Ok(())
    }
}
