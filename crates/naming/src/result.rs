use std::fmt;

use serde::Serialize;

/// One reason a name could not be validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldIssue {
    UnknownCategory {
        requested: String,
        known: Vec<String>,
    },
    MissingRequired {
        field: String,
    },
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
    Render {
        message: String,
    },
    /// Every field was blank, so there is no name to return.
    EmptyName {
        fields: Vec<String>,
    },
}

impl FieldIssue {
    /// The field the issue is about, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { field } | Self::NotAllowed { field, .. } => Some(field),
            Self::UnknownCategory { .. } | Self::Render { .. } | Self::EmptyName { .. } => None,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { requested, known } => write!(
                f,
                "unknown category '{requested}'. Known categories: {}",
                known.join(", ")
            ),
            Self::MissingRequired { field } => write!(f, "missing required field '{field}'"),
            Self::NotAllowed {
                field,
                value,
                allowed,
            } => write!(
                f,
                "'{value}' is not allowed for '{field}'. Allowed: {}",
                allowed.join(", ")
            ),
            Self::Render { message } => write!(f, "failed to render name: {message}"),
            Self::EmptyName { fields } => write!(
                f,
                "name is empty; provide a value for at least one of: {}",
                fields.join(", ")
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid {
        name: String,
    },
    /// `partial_name` shows missing required fields as `[FIELD]`.
    Invalid {
        issues: Vec<FieldIssue>,
        missing_fields: Vec<String>,
        partial_name: String,
    },
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Valid { name } => Some(name),
            Self::Invalid { .. } => None,
        }
    }

    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { issues, .. } => issues,
        }
    }

    /// Human-readable form of [`Self::issues`].
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.issues().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { missing_fields, .. } => missing_fields,
        }
    }

    #[must_use]
    pub fn partial_name(&self) -> Option<&str> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { partial_name, .. } => Some(partial_name),
        }
    }
}
