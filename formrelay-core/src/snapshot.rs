//! Form snapshots captured at submission time.

use serde::{Deserialize, Serialize};

use crate::form::FormSource;

/// Ordered field name/value pairs read from a form at the moment of
/// submission.
///
/// A snapshot is created once per submission attempt and never mutated
/// afterwards; later edits to the form do not affect an in-flight request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSnapshot {
    form_id: String,
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    /// Captures the form's current fields.
    pub fn capture(form: &dyn FormSource) -> Self {
        Self {
            form_id: form.form_id().to_string(),
            fields: form.fields(),
        }
    }

    /// Identifier of the form this snapshot was taken from.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// The captured fields, in form order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Number of captured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the snapshot has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the snapshot into a multipart form body, one text part per
    /// field, preserving field order and exact names and values.
    pub fn into_multipart(self) -> reqwest::multipart::Form {
        let mut multipart = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            multipart = multipart.text(name, value);
        }
        multipart
    }
}
