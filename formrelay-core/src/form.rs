//! Form sources the submission handler can bind to.
//!
//! A form source is the stand-in for the page's form element: the handler is
//! bound to one explicitly at initialization and reads its current fields at
//! each submission, instead of relying on implicit global document state.

/// Trait for anything that can be submitted as a form.
///
/// Implementations expose the form's identifier and its current field values.
/// Fields are read-only from the handler's perspective; a submission never
/// mutates the source.
pub trait FormSource: Send + Sync + std::fmt::Debug {
    /// Identifier of this form.
    fn form_id(&self) -> &str;

    /// Current field values, in field order.
    ///
    /// Called once per submission attempt, at capture time.
    fn fields(&self) -> Vec<(String, String)>;
}

/// In-memory form with insertion-ordered fields.
///
/// Mirrors how a form element behaves: each field name names one control, so
/// setting an existing field updates its value in place and the field keeps
/// its original position.
#[derive(Debug, Clone)]
pub struct MemoryForm {
    form_id: String,
    fields: Vec<(String, String)>,
}

impl MemoryForm {
    /// Creates an empty form with the given identifier.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            fields: Vec::new(),
        }
    }

    /// Sets a field value, updating in place if the field already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Returns the current value of a field, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields currently in the form.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new(crate::config::FormConfig::default().form_id)
    }
}

impl FormSource for MemoryForm {
    fn form_id(&self) -> &str {
        &self.form_id
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut form = MemoryForm::new("dataForm");
        form.set("Date", "2024-01-02")
            .set("Price Sentiment", "positive")
            .set("Asset Comparison", "1");

        let names: Vec<&str> = form.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Date", "Price Sentiment", "Asset Comparison"]);
    }

    #[test]
    fn test_set_existing_field_updates_in_place() {
        let mut form = MemoryForm::new("dataForm");
        form.set("Date", "2024-01-02").set("News", "rates up");
        form.set("Date", "2024-01-03");

        assert_eq!(form.value("Date"), Some("2024-01-03"));
        assert_eq!(form.len(), 2);
        // Updated field keeps its original position
        assert_eq!(form.fields[0].0, "Date");
    }

    #[test]
    fn test_default_form_uses_configured_id() {
        let form = MemoryForm::default();
        assert_eq!(form.form_id(), "dataForm");
        assert!(form.is_empty());
    }
}
