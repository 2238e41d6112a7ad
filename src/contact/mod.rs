pub mod validation;

pub use validation::{validate, ContactSubmission, FormErrors, FormField};

/// Contact form state as the visitor interacts with it: the in-progress
/// submission plus whatever errors the last submit attempt surfaced.
#[derive(Debug, Default)]
pub struct ContactForm {
    input: ContactSubmission,
    errors: FormErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContactSubmission {
        &self.input
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Records a keystroke. Editing a field clears that field's error right
    /// away, without re-running validation on the rest of the form.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.input.name = value,
            FormField::Email => self.input.email = value,
            FormField::Phone => self.input.phone = value,
            FormField::Message => self.input.message = value,
        }
        self.errors.clear(field);
    }

    /// Validates the current input. On success the form resets to empty and
    /// the accepted submission is handed back; on failure the field errors are
    /// stored for display and `None` is returned.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        let errors = validate(&self.input);
        if errors.is_empty() {
            self.errors = FormErrors::default();
            Some(std::mem::take(&mut self.input))
        } else {
            self.errors = errors;
            None
        }
    }
}
