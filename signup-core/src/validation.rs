//! Static field validation.
//!
//! Each field owns an ordered list of rules. Rules of one field are tried in
//! order and the first failure is that field's message, so a `Required` rule
//! placed first always shadows shape and length rules for empty input.
//! Every field is evaluated; one invalid field never hides another.

use regex::Regex;
use signup_types::{Field, RegistrationCandidate, ValidationErrors};
use std::sync::LazyLock;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is not valid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
/// Injected on the email field when the directory already holds the address.
pub const EMAIL_ALREADY_REGISTERED: &str = "You are already registered";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// One local, exactly one `@`, no spaces, and a final dot segment of at
/// least two characters.
#[allow(clippy::expect_used)] // literal pattern
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@ ]+@[^@ ]+\.[^@ .]{2,}$").expect("static regex should not panic")
});

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Fails on the empty string.
    Required(&'static str),
    /// Fails when nothing is left after trimming whitespace.
    NotBlank(&'static str),
    /// Fails when the value has fewer characters than the bound.
    MinLength(usize, &'static str),
    /// Fails when the predicate returns false.
    Matches(fn(&str) -> bool, &'static str),
}

impl Rule {
    /// Returns the rule's message if `value` breaks it.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let (ok, message) = match *self {
            Rule::Required(msg) => (!value.is_empty(), msg),
            Rule::NotBlank(msg) => (!value.trim().is_empty(), msg),
            Rule::MinLength(min, msg) => (value.chars().count() >= min, msg),
            Rule::Matches(pred, msg) => (pred(value), msg),
        };
        (!ok).then_some(message)
    }
}

/// The ordered rules attached to one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

impl FieldRules {
    /// Returns the first failing rule's message.
    pub fn first_error(&self, value: &str) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// The registration form's rule table, in display order.
pub const RULES: [FieldRules; 3] = [
    FieldRules {
        field: Field::Username,
        rules: &[Rule::NotBlank(USERNAME_REQUIRED)],
    },
    FieldRules {
        field: Field::Email,
        rules: &[
            Rule::Required(EMAIL_REQUIRED),
            Rule::Matches(is_valid_email, EMAIL_INVALID),
        ],
    },
    FieldRules {
        field: Field::Password,
        rules: &[
            Rule::Required(PASSWORD_REQUIRED),
            Rule::MinLength(PASSWORD_MIN_LEN, PASSWORD_TOO_SHORT),
        ],
    },
];

/// Returns true if `email` has the accepted address shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates every field of the candidate and returns a fresh error map.
///
/// Pure: the same candidate always yields the same map.
pub fn validate(candidate: &RegistrationCandidate) -> ValidationErrors {
    RULES
        .iter()
        .filter_map(|rules| {
            rules
                .first_error(candidate.value(rules.field))
                .map(|msg| (rules.field, msg))
        })
        .collect()
}
