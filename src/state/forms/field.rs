//! Form field specs and value objects

/// How strictly a phone field is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    /// Exactly ten digits, nothing else
    Strict,
    /// Optional leading `+`, then 10-15 digits, spaces or dashes
    Loose,
}

/// Type of input a field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Email,
    Phone(PhoneRule),
    Choice(Vec<String>),
}

/// Static description of one field in a form schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Key used in the submitted payload when it differs from `name`
    pub payload_key: Option<String>,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
            payload_key: None,
        }
    }

    /// Create a required single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a required multiline text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    /// Create a required email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a required phone field
    pub fn phone(name: &str, label: &str, rule: PhoneRule) -> Self {
        Self::new(name, label, FieldKind::Phone(rule))
    }

    /// Create a required choice field
    pub fn choice(name: &str, label: &str, options: &[&str]) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::new(name, label, FieldKind::Choice(options))
    }

    /// Mark the field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Rename the field in the submitted payload
    pub fn renamed(mut self, key: &str) -> Self {
        self.payload_key = Some(key.to_string());
        self
    }

    /// Key this field is submitted under
    pub fn payload_key(&self) -> &str {
        self.payload_key.as_deref().unwrap_or(&self.name)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }
}

/// Represents a single form field with its spec, current value and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.is_multiline()
    }

    /// Replace the value and drop any error on this field
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.error = None;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if self.spec.is_choice() {
            return;
        }
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if self.spec.is_choice() {
            self.value.clear();
        } else {
            self.value.pop();
        }
        self.error = None;
    }

    /// Step through the options of a choice field, wrapping at either end.
    /// An empty value counts as "before the first option".
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = &self.spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.value = options[next].clone();
        self.error = None;
    }

    /// Clear the field value and error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.spec.kind {
            FieldKind::Choice(options) if self.value.is_empty() => {
                format!("< {} >", options.join(" | "))
            }
            FieldKind::Choice(_) => format!("< {} >", self.value),
            _ => self.value.clone(),
        }
    }
}
