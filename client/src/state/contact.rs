//! Contact form model and validation rules.
//!
//! DESIGN
//! ======
//! Field values are bound to the inputs, so `ContactForm` always reflects what
//! the user typed. `validate` evaluates every rule on every call (no short
//! circuit), refreshing each field's error message. Submit and blur both go
//! through `validate`, so error state never depends on which control changed.
//!
//! Delivery is simulated: an accepted submission only shows the confirmation
//! text and clears the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 8;
pub const CONFIRMATION_MESSAGE: &str = "Gracias — tu mensaje ha sido enviado.";

/// Validated form controls, keyed in markup by `Field::key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    Terms,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Message, Field::Terms];

    /// Form control name and `data-for` key of the error element.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "mensaje",
            Field::Terms => "terms",
        }
    }
}

/// A failed field rule. `Display` is the text shown next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Ingresa un nombre válido (mín 2 letras)")]
    NameTooShort,
    #[error("Ingresa un email válido")]
    InvalidEmail,
    #[error("Escribe un mensaje más detallado (mín 8 caracteres)")]
    MessageTooShort,
    #[error("Debes aceptar ser contactado")]
    TermsNotAccepted,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageTooShort => Field::Message,
            FieldError::TermsNotAccepted => Field::Terms,
        }
    }
}

pub fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().chars().count() >= MIN_NAME_CHARS {
        Ok(())
    } else {
        Err(FieldError::NameTooShort)
    }
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn check_message(value: &str) -> Result<(), FieldError> {
    if value.trim().chars().count() >= MIN_MESSAGE_CHARS {
        Ok(())
    } else {
        Err(FieldError::MessageTooShort)
    }
}

pub fn check_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted { Ok(()) } else { Err(FieldError::TermsNotAccepted) }
}

/// Structural email check: `local@domain.tld` with no whitespace, exactly one
/// `@`, and a dot inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Per-field error text. Empty means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: String,
    email: String,
    message: String,
    terms: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Terms => &self.terms,
        }
    }

    /// Record the outcome of `field`'s rule: set its message or clear it.
    pub fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            Field::Terms => &mut self.terms,
        };
        slot.clear();
        if let Err(err) = outcome {
            slot.push_str(&err.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Contact form controls plus displayed messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub terms: bool,
    errors: FieldErrors,
    success: String,
}

impl ContactForm {
    /// Run all four rules, refresh every error message, and report validity.
    pub fn validate(&mut self) -> bool {
        let outcomes = [
            (Field::Name, check_name(&self.name)),
            (Field::Email, check_email(&self.email)),
            (Field::Message, check_message(&self.message)),
            (Field::Terms, check_terms(self.terms)),
        ];
        let mut valid = true;
        for (field, outcome) in outcomes {
            valid &= outcome.is_ok();
            self.errors.record(field, outcome);
        }
        valid
    }

    /// A control lost focus. Re-validates the whole form.
    pub fn blur(&mut self) -> bool {
        self.validate()
    }

    /// Handle a submit with the default navigation already prevented.
    ///
    /// On success the confirmation is shown and the controls are cleared; on
    /// failure the values stay so the user can correct them.
    pub fn submit(&mut self) -> bool {
        self.success.clear();
        if !self.validate() {
            return false;
        }
        self.success.push_str(CONFIRMATION_MESSAGE);
        self.reset();
        self.errors.clear();
        true
    }

    /// Clear the controls, like `HTMLFormElement.reset()` on an empty form.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.terms = false;
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn success(&self) -> &str {
        &self.success
    }
}
