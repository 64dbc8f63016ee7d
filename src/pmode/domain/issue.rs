//! Accumulated conformance findings.
//!
//! Validators never stop at the first problem. Each finding is appended to an
//! [`ErrorList`] owned by the caller, who decides what a non-empty list means.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    /// Usable but discouraged; callers treat it as advisory.
    Warning,
    /// The input does not conform to the profile.
    Error,
}

/// Kind of rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// A required sub-structure or field is absent.
    MissingStructure,
    /// A tri-state flag is undefined where the profile needs a value.
    MandatoryUnset,
    /// A value lies outside the profile's allowed set.
    ValueMismatch,
    /// A repeatable element occurs the wrong number of times.
    Cardinality,
    /// A value is usable but discouraged.
    Advisory,
}

/// One conformance finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    level: IssueLevel,
    category: IssueCategory,
    field: String,
    message: String,
}

impl ValidationIssue {
    /// Creates an error-level finding.
    #[must_use]
    pub fn error(
        category: IssueCategory,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: IssueLevel::Error,
            category,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an advisory warning.
    #[must_use]
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            category: IssueCategory::Advisory,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the same finding with a different severity.
    #[must_use]
    pub const fn with_level(mut self, level: IssueLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> IssueLevel {
        self.level
    }

    /// Returns the rule category.
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        self.category
    }

    /// Returns the dotted path of the offending field, e.g.
    /// `leg1.security.x509_signature_algorithm`.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Returns `true` for error-level findings.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == IssueLevel::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Ordered, append-only collection of findings for one validation call.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::{ErrorList, IssueCategory, ValidationIssue};
///
/// let mut errors = ErrorList::new();
/// errors.push(ValidationIssue::warning("leg1.protocol.address", "non-standard scheme"));
/// assert!(!errors.is_empty());
/// assert!(!errors.has_errors());
///
/// errors.push(ValidationIssue::error(
///     IssueCategory::MissingStructure,
///     "leg1",
///     "PMode is missing Leg 1",
/// ));
/// assert!(errors.contains_any(|issue| issue.text().contains("Leg 1")));
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorList {
    issues: Vec<ValidationIssue>,
}

impl ErrorList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Appends a finding.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns `true` when any finding satisfies `predicate`.
    #[must_use]
    pub fn contains_any(&self, predicate: impl Fn(&ValidationIssue) -> bool) -> bool {
        self.issues.iter().any(predicate)
    }

    /// Returns `true` when no finding has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the number of findings, warnings included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns `true` when at least one error-level finding exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// Returns the number of error-level findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    /// Returns all findings in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Iterates over all findings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// Iterates over findings recorded for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.field() == field)
    }

    /// Converts the list into a pass/fail decision.
    ///
    /// Warnings alone do not fail; they are handed back for the caller to
    /// log or surface.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileValidationError::Violations`] carrying every finding,
    /// warnings included, when at least one error-level finding exists.
    pub fn into_result(self) -> Result<Vec<ValidationIssue>, ProfileValidationError> {
        if self.has_errors() {
            Err(ProfileValidationError::Violations(self.issues))
        } else {
            Ok(self.issues)
        }
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_issues(&self.issues))
    }
}

/// Failure produced from an [`ErrorList`] that contains errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    /// One or more profile rules were violated.
    #[error("profile validation failed: {}", format_issues(.0))]
    Violations(Vec<ValidationIssue>),
}

impl ProfileValidationError {
    /// Returns every finding, warnings included.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Violations(issues) => issues,
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
