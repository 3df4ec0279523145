//! Form state holder: field values, field errors and focus

use super::field::FormField;
use super::schema::FormSchema;
use std::collections::BTreeMap;

/// Buttons shown under every form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Cancel,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Submit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Cancel => "Cancel",
        }
    }
}

/// In-memory values of one form instance.
///
/// Focus runs over every field and then one extra stop for the buttons row.
#[derive(Debug, Clone)]
pub struct FormState {
    pub schema: FormSchema,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        let fields = schema.fields.iter().cloned().map(FormField::new).collect();
        Self {
            schema,
            fields,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Number of focus stops, buttons row included
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        self.set_active_field((self.active_field_index + 1) % count);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.set_active_field(self.field_count() - 1);
        } else {
            self.set_active_field(self.active_field_index - 1);
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    /// The focused field, or `None` on the buttons row
    pub fn active_field(&self) -> Option<&FormField> {
        self.get_field(self.active_field_index)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(|f| f.is_multiline())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Replace one value and clear that field's error. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.set_value(value.into());
        }
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.error = Some(message.into());
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Errors currently shown on fields, in field order
    pub fn error_messages(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|f| f.error.as_deref())
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.active_field_mut() {
            field.cycle_choice(forward);
        }
    }

    /// Snapshot of every value keyed by field name
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value.clone()))
            .collect()
    }

    /// Empty every value and error and return focus to the first field
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
    }
}

#[cfg(test)]
impl FormState {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Current value of a field, empty for unknown names
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }
}
