//! Per-entity-type field extraction
//!
//! The field table is the single source of truth for what is searchable:
//! per entity type, which attributes participate in matching and at what
//! weight. Changing a row changes search behavior - nothing else decides
//! this.
//!
//! Weights follow a three-tier scheme: title/name-like fields dominate,
//! description-like fields come second, tag/secondary fields contribute
//! least.

use atrium_core::{EntityType, Record};

/// Weight of title/name-like fields
pub const WEIGHT_TITLE: u32 = 3;

/// Weight of description-like fields
pub const WEIGHT_BODY: u32 = 2;

/// Weight of tag/capability/secondary fields
pub const WEIGHT_TAG: u32 = 1;

// ============================================================================
// Field Table
// ============================================================================

/// One row of the field table: a searchable attribute and its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name, as exposed to tests and diagnostics
    pub name: &'static str,
    /// Score contribution per token hit
    pub weight: u32,
}

/// The searchable attributes of one entity type, in extraction order
///
/// Extraction order matters: the first listed field with any token hit
/// supplies the highlighted snippet.
pub const fn field_table(entity_type: EntityType) -> &'static [FieldSpec] {
    match entity_type {
        EntityType::Project => &[
            FieldSpec { name: "name", weight: WEIGHT_TITLE },
            FieldSpec { name: "description", weight: WEIGHT_BODY },
            FieldSpec { name: "tags", weight: WEIGHT_TAG },
            FieldSpec { name: "owner", weight: WEIGHT_TAG },
        ],
        EntityType::Assistant => &[
            FieldSpec { name: "name", weight: WEIGHT_TITLE },
            FieldSpec { name: "description", weight: WEIGHT_BODY },
            FieldSpec { name: "capabilities", weight: WEIGHT_TAG },
        ],
        EntityType::User => &[
            FieldSpec { name: "name", weight: WEIGHT_TITLE },
            FieldSpec { name: "email", weight: WEIGHT_BODY },
            FieldSpec { name: "role", weight: WEIGHT_TAG },
            FieldSpec { name: "department", weight: WEIGHT_TAG },
        ],
        EntityType::Task => &[
            FieldSpec { name: "title", weight: WEIGHT_TITLE },
            FieldSpec { name: "description", weight: WEIGHT_BODY },
            FieldSpec { name: "assignee", weight: WEIGHT_TAG },
        ],
        EntityType::Invoice => &[
            FieldSpec { name: "number", weight: WEIGHT_TITLE },
            FieldSpec { name: "client", weight: WEIGHT_TITLE },
            FieldSpec { name: "concept", weight: WEIGHT_BODY },
            FieldSpec { name: "status", weight: WEIGHT_TAG },
        ],
        EntityType::Report => &[
            FieldSpec { name: "title", weight: WEIGHT_TITLE },
            FieldSpec { name: "summary", weight: WEIGHT_BODY },
            FieldSpec { name: "category", weight: WEIGHT_TAG },
            FieldSpec { name: "author", weight: WEIGHT_TAG },
        ],
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// One extracted (field, text, weight) tuple, ready for matching
///
/// Ephemeral view created during a search pass, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedField {
    /// Field name from the table row that produced this tuple
    pub name: &'static str,
    /// The attribute's text value (list attributes joined with spaces)
    pub text: String,
    /// Score contribution per token hit
    pub weight: u32,
}

/// Extract the searchable fields of a record, in table order
///
/// Fields whose text is empty are excluded: they never contribute and
/// never error. List attributes (tags, capabilities) are flattened into a
/// single space-joined text so substring matching sees every element.
pub fn extract_fields(record: &Record) -> Vec<ExtractedField> {
    let specs = field_table(record.entity_type());

    // Attribute values in the same order as the table rows above
    let values: Vec<String> = match record {
        Record::Project {
            name,
            description,
            tags,
            owner,
            ..
        } => vec![name.clone(), description.clone(), tags.join(" "), owner.clone()],
        Record::Assistant {
            name,
            description,
            capabilities,
            ..
        } => vec![name.clone(), description.clone(), capabilities.join(" ")],
        Record::User {
            name,
            email,
            role,
            department,
            ..
        } => vec![name.clone(), email.clone(), role.clone(), department.clone()],
        Record::Task {
            title,
            description,
            assignee,
            ..
        } => vec![title.clone(), description.clone(), assignee.clone()],
        Record::Invoice {
            number,
            client,
            concept,
            status,
            ..
        } => vec![number.clone(), client.clone(), concept.clone(), status.clone()],
        Record::Report {
            title,
            summary,
            category,
            author,
            ..
        } => vec![title.clone(), summary.clone(), category.clone(), author.clone()],
    };

    debug_assert_eq!(specs.len(), values.len());

    specs
        .iter()
        .zip(values)
        .filter(|(_, text)| !text.is_empty())
        .map(|(spec, text)| ExtractedField {
            name: spec.name,
            text,
            weight: spec.weight,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
