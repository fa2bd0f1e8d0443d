//! Contact form validation.
//!
//! The form itself is plain markup posting to a form backend or `mailto:`;
//! this module only decides whether the browser should let the submit through.

/// Minimum message length after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Form field identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// `id` of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }

    /// `id` of the element carrying the error text.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name-error",
            Field::Email => "contact-email-error",
            Field::Message => "contact-message-error",
        }
    }
}

/// A single validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::Required(field) => field,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageTooShort => Field::Message,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required(Field::Name) => "Please enter your name.",
            FieldError::Required(Field::Email) => "Please enter your email address.",
            FieldError::Required(Field::Message) => "Please enter a message.",
            FieldError::InvalidEmail => "Please enter a valid email address.",
            FieldError::MessageTooShort => "Your message should be at least 10 characters.",
        }
    }
}

impl ContactForm {
    /// All problems with the current values, in field order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_plausible_email(email) {
            errors.push(FieldError::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(FieldError::MessageTooShort);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// One `@`, something before it, a dotted domain without empty labels, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
