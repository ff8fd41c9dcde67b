use serde::{Deserialize, Serialize};

use crate::template::FormatTemplate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Value must be one of the field's `allowed_values`.
    ClosedList,
    FreeText,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClosedList => "closed_list",
            Self::FreeText => "free_text",
        }
    }
}

/// Validation policy for one field of one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    name: String,
    required: bool,
    kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allowed_values: Vec<String>,
}

impl FieldRule {
    pub(crate) fn new(
        name: String,
        required: bool,
        kind: FieldKind,
        allowed_values: Vec<String>,
    ) -> Self {
        Self {
            name,
            required,
            kind,
            allowed_values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Empty unless the field is a closed list.
    #[must_use]
    pub fn allowed_values(&self) -> &[String] {
        &self.allowed_values
    }

    /// Whether an already normalized value satisfies the vocabulary.
    /// Free-text fields accept anything.
    #[must_use]
    pub fn allows(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::FreeText => true,
            FieldKind::ClosedList => self.allowed_values.iter().any(|allowed| allowed == value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    id: String,
    name: String,
    description: String,
    keywords: Vec<String>,
    format: FormatTemplate,
    fields: Vec<FieldRule>,
}

impl CategoryDefinition {
    pub(crate) fn new(
        id: String,
        name: String,
        description: String,
        keywords: Vec<String>,
        format: FormatTemplate,
        fields: Vec<FieldRule>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            keywords,
            format,
            fields,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Uppercase keywords in declaration order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn format(&self) -> &FormatTemplate {
        &self.format
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldRule> + '_ {
        self.fields.iter().filter(|field| field.required)
    }

    #[must_use]
    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
}
