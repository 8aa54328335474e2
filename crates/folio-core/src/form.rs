//! Contact form validation and submission state
//!
//! The only place with explicit rule checks. All three rules run
//! independently so every failing field is surfaced at once; submission
//! succeeds only when all pass. Success is purely local UI state and hides
//! itself after a fixed delay.

use std::time::{Duration, Instant};

use regex::Regex;
use tracing::debug;

use crate::config::FormConfig;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// A failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Stateless rule checks with a pre-compiled email pattern
#[derive(Debug, Clone)]
pub struct Validator {
    email_re: Regex,
    min_name_len: usize,
    min_message_len: usize,
}

impl Validator {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            // The pattern is a compile-time constant
            email_re: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
            min_name_len: config.min_name_len,
            min_message_len: config.min_message_len,
        }
    }

    /// Run every rule; never short-circuits
    pub fn validate(&self, input: &FormInput) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if input.name.trim().chars().count() < self.min_name_len {
            errors.push(FieldError {
                field: Field::Name,
                message: format!("Name must be at least {} characters.", self.min_name_len),
            });
        }

        if !self.email_re.is_match(&input.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Enter a valid email address.".into(),
            });
        }

        if input.message.trim().chars().count() < self.min_message_len {
            errors.push(FieldError {
                field: Field::Message,
                message: format!(
                    "Message must be at least {} characters.",
                    self.min_message_len
                ),
            });
        }

        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormState {
    Editing,
    Submitted { at: Instant },
}

/// The contact form state machine: editing, validation errors, or a
/// self-dismissing success panel
#[derive(Debug, Clone)]
pub struct ContactForm {
    validator: Validator,
    dismiss_after: Duration,
    pub input: FormInput,
    errors: Vec<FieldError>,
    state: FormState,
}

impl ContactForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            validator: Validator::new(config),
            dismiss_after: Duration::from_millis(config.success_dismiss_ms),
            input: FormInput::default(),
            errors: Vec::new(),
            state: FormState::Editing,
        }
    }

    /// Validate the current input. On success the fields are cleared and
    /// the success panel is shown; on failure all field errors are recorded.
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self, now: Instant) -> bool {
        self.errors = self.validator.validate(&self.input);
        if self.errors.is_empty() {
            debug!("contact form accepted");
            self.input.clear();
            self.state = FormState::Submitted { at: now };
            true
        } else {
            debug!(errors = self.errors.len(), "contact form rejected");
            false
        }
    }

    /// Hide the success panel once its delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        if let FormState::Submitted { at } = self.state {
            if now.duration_since(at) >= self.dismiss_after {
                self.state = FormState::Editing;
            }
        }
    }

    pub fn success_visible(&self) -> bool {
        matches!(self.state, FormState::Submitted { .. })
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Inline message for one field, if it failed the last submit
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Editing a field clears its stale error
    pub fn clear_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(&FormConfig::default())
    }

    fn validator() -> Validator {
        Validator::new(&FormConfig::default())
    }

    #[test]
    fn test_email_rules() {
        let v = validator();
        let ok = |email: &str| {
            let input = FormInput {
                name: "Jo".into(),
                email: email.into(),
                message: "Hello there!!".into(),
            };
            v.validate(&input).is_empty()
        };
        assert!(ok("a@b.co"));
        assert!(!ok("a@b"));
        assert!(!ok("a.b.com"));
        assert!(!ok(""));
        assert!(!ok("a b@c.co"));
    }

    #[test]
    fn test_name_length_is_trimmed() {
        let v = validator();
        let input = FormInput {
            name: "  a  ".into(),
            email: "a@b.co".into(),
            message: "long enough message".into(),
        };
        let errors = v.validate(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);

        let input = FormInput {
            name: "ab".into(),
            ..input
        };
        assert!(v.validate(&input).is_empty());
    }

    #[test]
    fn test_all_failures_surface_together() {
        let v = validator();
        let errors = v.validate(&FormInput::default());
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_submit_success_scenario() {
        let mut form = form();
        form.input = FormInput {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            message: "Hello there!!".into(),
        };

        let now = Instant::now();
        assert!(form.submit(now));
        assert!(form.errors().is_empty());
        assert!(form.success_visible());
        assert_eq!(form.input, FormInput::default());

        // Still visible just before the dismiss delay
        form.tick(now + Duration::from_millis(3999));
        assert!(form.success_visible());

        // Hidden at exactly 4000 ms
        form.tick(now + Duration::from_millis(4000));
        assert!(!form.success_visible());
    }

    #[test]
    fn test_rejected_submit_keeps_input() {
        let mut form = form();
        form.input.name = "Jo".into();
        form.input.email = "not-an-email".into();
        form.input.message = "Hello there!!".into();

        assert!(!form.submit(Instant::now()));
        assert!(!form.success_visible());
        assert_eq!(form.input.name, "Jo");
        assert_eq!(form.error_for(Field::Email), Some("Enter a valid email address."));
        assert!(form.error_for(Field::Name).is_none());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = form();
        form.submit(Instant::now());
        assert!(form.error_for(Field::Name).is_some());
        form.clear_error(Field::Name);
        assert!(form.error_for(Field::Name).is_none());
        assert!(form.error_for(Field::Email).is_some());
    }

    #[test]
    fn test_field_cycling() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
    }
}
