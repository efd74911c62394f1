//! Invite Field Validation
//!
//! Per-field constraint tables and the routine that evaluates them against a
//! raw JSON object. Failures are collected into `validator::ValidationErrors`
//! keyed by field, with machine codes (`required`, `string`, `max`, `in`) that
//! the presentation layer renders in the configured locale.

use std::borrow::Cow;

use serde_json::{Map, Value};
use validator::{ValidateLength, ValidationError, ValidationErrors};

use crate::domain::entities::{InviteChanges, Presence};

/// Untyped request body as received from the client.
pub type InvitePayload = Map<String, Value>;

/// Expected shape of one field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A non-blank string, optionally bounded in characters.
    Text { max_len: Option<u64> },
    /// A string that must equal one of the listed values exactly.
    OneOf(&'static [&'static str]),
}

/// Constraint on a single payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    const fn text(field: &'static str, required: bool, max_len: Option<u64>) -> Self {
        Self {
            field,
            required,
            kind: FieldKind::Text { max_len },
        }
    }

    /// Check this rule against `payload`, recording any failure in `errors`.
    fn check(&self, payload: &InvitePayload, errors: &mut ValidationErrors) {
        let value = match payload.get(self.field) {
            None if self.required => {
                errors.add(self.field, ValidationError::new("required"));
                return;
            }
            None => return,
            Some(value) => value,
        };

        match (value, self.kind) {
            (Value::Null, FieldKind::Text { .. }) => {
                let code = if self.required { "required" } else { "string" };
                errors.add(self.field, ValidationError::new(code));
            }
            (Value::String(s), FieldKind::Text { .. }) if s.trim().is_empty() => {
                errors.add(self.field, ValidationError::new("required"));
            }
            (Value::String(s), FieldKind::Text { max_len: Some(max) }) => {
                if !s.validate_length(None, Some(max), None) {
                    let mut error = ValidationError::new("max");
                    error.add_param(Cow::from("max"), &max);
                    errors.add(self.field, error);
                }
            }
            (Value::String(_), FieldKind::Text { max_len: None }) => {}
            (_, FieldKind::Text { .. }) => {
                errors.add(self.field, ValidationError::new("string"));
            }
            (Value::Null, FieldKind::OneOf(_)) if self.required => {
                errors.add(self.field, ValidationError::new("required"));
            }
            (Value::String(s), FieldKind::OneOf(allowed))
                if allowed.iter().any(|v| *v == s.as_str()) => {}
            (_, FieldKind::OneOf(allowed)) => {
                let mut error = ValidationError::new("in");
                error.add_param(Cow::from("allowed"), &allowed.join(", "));
                errors.add(self.field, error);
            }
        }
    }
}

/// Rules for creating an invite: every field required.
pub const CREATE_RULES: &[FieldRule] = &[
    FieldRule::text("first_name", true, Some(255)),
    FieldRule::text("last_name", true, Some(255)),
    FieldRule::text("description", true, None),
    FieldRule::text("phone", true, Some(10)),
];

/// Rules for a partial update: same constraints, each field optional.
///
/// `presence` is absent; it only changes through
/// [`PRESENCE_RULES`].
pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::text("first_name", false, Some(255)),
    FieldRule::text("last_name", false, Some(255)),
    FieldRule::text("description", false, None),
    FieldRule::text("phone", false, Some(10)),
];

/// Rules for the presence transition.
pub const PRESENCE_RULES: &[FieldRule] = &[FieldRule {
    field: "presence",
    required: true,
    kind: FieldKind::OneOf(Presence::VALUES),
}];

/// Evaluate every rule in `rules` against `payload`.
pub fn check_rules(rules: &[FieldRule], payload: &InvitePayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        rule.check(payload, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validated create input, before the service assigns a presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteDraft {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub phone: String,
}

/// Turns raw payloads into typed, validated invite input.
pub trait InviteValidator: Send + Sync {
    /// Validate a create payload.
    fn validate_create(&self, payload: &InvitePayload) -> Result<InviteDraft, ValidationErrors>;

    /// Validate an update payload; only recognised, supplied fields come back.
    fn validate_update(&self, payload: &InvitePayload) -> Result<InviteChanges, ValidationErrors>;

    /// Validate a presence transition payload.
    fn validate_presence(&self, payload: &InvitePayload) -> Result<Presence, ValidationErrors>;
}

/// [`InviteValidator`] backed by the constraint tables in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn new() -> Self {
        Self
    }
}

/// Extract a string field that the rules have already accepted.
fn text(payload: &InvitePayload, field: &str) -> Option<String> {
    payload.get(field).and_then(Value::as_str).map(str::to_owned)
}

/// Build a single-field error for values the rules accepted but typing rejected.
fn single_error(field: &'static str, code: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code));
    errors
}

impl InviteValidator for RuleValidator {
    fn validate_create(&self, payload: &InvitePayload) -> Result<InviteDraft, ValidationErrors> {
        check_rules(CREATE_RULES, payload)?;

        let required = |field: &'static str| {
            text(payload, field).ok_or_else(|| single_error(field, "required"))
        };
        Ok(InviteDraft {
            first_name: required("first_name")?,
            last_name: required("last_name")?,
            description: required("description")?,
            phone: required("phone")?,
        })
    }

    fn validate_update(&self, payload: &InvitePayload) -> Result<InviteChanges, ValidationErrors> {
        check_rules(UPDATE_RULES, payload)?;

        Ok(InviteChanges {
            first_name: text(payload, "first_name"),
            last_name: text(payload, "last_name"),
            description: text(payload, "description"),
            phone: text(payload, "phone"),
        })
    }

    fn validate_presence(&self, payload: &InvitePayload) -> Result<Presence, ValidationErrors> {
        check_rules(PRESENCE_RULES, payload)?;

        text(payload, "presence")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| single_error("presence", "in"))
    }
}
