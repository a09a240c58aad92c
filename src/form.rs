// Contact form state machine and validation
//
// The form is pure state: field buffers, a focus cursor, an error map, and
// a submission lifecycle (Editing -> Submitting -> Submitted -> Editing).
// Validation is a set of independent synchronous predicates evaluated all
// at once; failures are data in the error map, never errors raised to the
// caller. The actual submission delay runs elsewhere (a spawned task in the
// TUI loop) - the form only records the transition.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// How long the fake network round-trip takes
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the success screen stays up before the form returns to editing
pub const SUCCESS_LINGER: Duration = Duration::from_secs(5);

/// Phone numbers are digits only, at most this many
const PHONE_MAX_DIGITS: usize = 14;

/// Minimum trimmed message length
const MESSAGE_MIN_CHARS: usize = 10;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{11,14}$").expect("valid phone pattern"))
}

/// The five form fields, in visual order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Subject,
            FormField::Message,
        ]
    }

    /// Placeholder text shown in an empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::Subject => "Email Subject",
            FormField::Message => "Your Message...",
        }
    }

    /// Next field in visual order (wraps)
    pub fn next(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|&f| f == self).unwrap_or(0);
        fields[(idx + 1) % fields.len()]
    }

    /// Previous field in visual order (wraps)
    pub fn prev(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|&f| f == self).unwrap_or(0);
        fields[(idx + fields.len() - 1) % fields.len()]
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Accepting input
    Editing,
    /// Background delay in flight; input locked
    Submitting,
    /// Success screen showing until it expires or is dismissed
    Submitted,
}

/// Contact form state
///
/// Owned by the Contact section; the app routes keys here while the form
/// has focus and drives `tick` each frame for the success-screen timeout.
#[derive(Debug)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,

    focused: FormField,
    errors: BTreeMap<FormField, String>,
    state: SubmitState,
    /// When the success screen appeared
    submitted_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            subject: String::new(),
            message: String::new(),
            focused: FormField::Name,
            errors: BTreeMap::new(),
            state: SubmitState::Editing,
            submitted_at: None,
        }
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Type one character into the focused field
    ///
    /// Phone input is shaped on entry: non-digits are dropped and the field
    /// caps at 14 digits. Editing a field clears its standing error.
    pub fn insert_char(&mut self, c: char) {
        if self.state != SubmitState::Editing {
            return;
        }
        let field = self.focused;
        match field {
            FormField::Phone => {
                if c.is_ascii_digit() && self.phone.len() < PHONE_MAX_DIGITS {
                    self.phone.push(c);
                }
            }
            _ => {
                if !c.is_control() {
                    self.field_mut(field).push(c);
                }
            }
        }
        self.errors.remove(&field);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if self.state != SubmitState::Editing {
            return;
        }
        let field = self.focused;
        self.field_mut(field).pop();
        self.errors.remove(&field);
    }

    /// Validate every field and refresh the error map
    ///
    /// Returns true when the form is clean. The predicates are independent;
    /// each failing field gets exactly one message.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_fields(
            &self.name,
            &self.email,
            &self.phone,
            &self.subject,
            &self.message,
        );
        self.errors.is_empty()
    }

    /// Attempt submission
    ///
    /// Validation failures keep the form in Editing and populate the error
    /// map. On success the form enters Submitting and the caller is
    /// responsible for scheduling the completion event.
    pub fn try_submit(&mut self) -> bool {
        if self.state != SubmitState::Editing {
            return false;
        }
        if !self.validate() {
            return false;
        }
        self.state = SubmitState::Submitting;
        true
    }

    /// The simulated round-trip finished: clear the form, show success
    pub fn complete_submission(&mut self) {
        if self.state != SubmitState::Submitting {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.subject.clear();
        self.message.clear();
        self.errors.clear();
        self.focused = FormField::Name;
        self.state = SubmitState::Submitted;
        self.submitted_at = Some(Instant::now());
    }

    /// Dismiss the success screen and return to editing
    pub fn dismiss_success(&mut self) {
        if self.state == SubmitState::Submitted {
            self.state = SubmitState::Editing;
            self.submitted_at = None;
        }
    }

    /// Frame tick: expire the success screen after its linger time
    pub fn tick(&mut self) {
        if self.state == SubmitState::Submitted {
            let expired = self
                .submitted_at
                .map(|at| at.elapsed() >= SUCCESS_LINGER)
                .unwrap_or(true);
            if expired {
                self.dismiss_success();
            }
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The field predicates, applied independently with no ordering between them
fn validate_fields(
    name: &str,
    email: &str,
    phone: &str,
    subject: &str,
    message: &str,
) -> BTreeMap<FormField, String> {
    let mut errors = BTreeMap::new();

    if name.trim().is_empty() {
        errors.insert(FormField::Name, "Full Name is required.".to_string());
    }

    if email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required.".to_string());
    } else if !email_regex().is_match(email) {
        errors.insert(
            FormField::Email,
            "Please enter a valid email address.".to_string(),
        );
    }

    if phone.trim().is_empty() {
        errors.insert(FormField::Phone, "Phone Number is required.".to_string());
    } else if !phone_regex().is_match(phone) {
        errors.insert(
            FormField::Phone,
            "Phone Number must be 11-14 digits.".to_string(),
        );
    }

    if subject.trim().is_empty() {
        errors.insert(FormField::Subject, "Email Subject is required.".to_string());
    }

    if message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required.".to_string());
    } else if message.trim().chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(
            FormField::Message,
            "Message must be at least 10 characters.".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ContactForm, field: FormField, text: &str) {
        while form.focused() != field {
            form.focus_next();
        }
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    fn fill_valid(form: &mut ContactForm) {
        type_into(form, FormField::Name, "Ada Lovelace");
        type_into(form, FormField::Email, "ada@example.org");
        type_into(form, FormField::Phone, "44770090012");
        type_into(form, FormField::Subject, "Engines");
        type_into(form, FormField::Message, "Shall we build one together?");
    }

    #[test]
    fn empty_form_fails_every_field() {
        let mut form = ContactForm::new();
        assert!(!form.try_submit());
        assert_eq!(form.error_count(), 5);
        assert_eq!(form.state(), SubmitState::Editing);
    }

    #[test]
    fn partial_form_reports_exactly_the_failing_fields() {
        // Empty name, short-domain email, 3-digit phone; subject and
        // message are fine - expect exactly three errors.
        let mut form = ContactForm::new();
        type_into(&mut form, FormField::Email, "a@b");
        type_into(&mut form, FormField::Phone, "123");
        type_into(&mut form, FormField::Subject, "Hello");
        type_into(&mut form, FormField::Message, "A long enough message.");

        assert!(!form.try_submit());
        assert_eq!(form.error_count(), 3);
        assert_eq!(form.error(FormField::Name), Some("Full Name is required."));
        assert_eq!(
            form.error(FormField::Email),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            form.error(FormField::Phone),
            Some("Phone Number must be 11-14 digits.")
        );
        assert!(form.error(FormField::Subject).is_none());
        assert!(form.error(FormField::Message).is_none());
    }

    #[test]
    fn valid_form_submits() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);

        assert!(form.try_submit());
        assert_eq!(form.state(), SubmitState::Submitting);
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn phone_input_drops_non_digits_and_caps_length() {
        let mut form = ContactForm::new();
        type_into(&mut form, FormField::Phone, "+44 (770) 090-0123456789");
        let digits = form.value(FormField::Phone);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(digits.len(), 14);
    }

    #[test]
    fn message_shorter_than_ten_chars_is_rejected() {
        let mut form = ContactForm::new();
        type_into(&mut form, FormField::Message, "too short");
        form.validate();
        assert_eq!(
            form.error(FormField::Message),
            Some("Message must be at least 10 characters.")
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::new();
        form.validate();
        assert!(form.error(FormField::Name).is_some());

        // Focus starts on Name; typing clears the standing error
        form.insert_char('R');
        assert!(form.error(FormField::Name).is_none());
        // Other field errors remain untouched
        assert!(form.error(FormField::Email).is_some());
    }

    #[test]
    fn completion_resets_fields_and_shows_success() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        assert!(form.try_submit());

        form.complete_submission();
        assert_eq!(form.state(), SubmitState::Submitted);
        for &field in FormField::all() {
            assert!(form.value(field).is_empty());
        }

        form.dismiss_success();
        assert_eq!(form.state(), SubmitState::Editing);
    }

    #[test]
    fn input_is_locked_while_submitting() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        assert!(form.try_submit());

        form.insert_char('x');
        assert_eq!(
            form.value(FormField::Message),
            "Shall we build one together?"
        );
        // A second submit attempt while in flight is refused
        assert!(!form.try_submit());
    }

    #[test]
    fn completion_only_applies_after_a_submit() {
        let mut form = ContactForm::new();
        form.complete_submission();
        assert_eq!(form.state(), SubmitState::Editing);
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut form = ContactForm::new();
        type_into(&mut form, FormField::Name, "   ");
        form.validate();
        assert_eq!(form.error(FormField::Name), Some("Full Name is required."));
    }

    #[test]
    fn field_focus_wraps_both_directions() {
        let mut form = ContactForm::new();
        assert_eq!(form.focused(), FormField::Name);
        form.focus_prev();
        assert_eq!(form.focused(), FormField::Message);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
    }
}
