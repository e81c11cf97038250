//! The immutable entity model
//!
//! A [`Record`] is an opaque entity belonging to exactly one
//! [`EntityType`](crate::EntityType). Attributes vary by type; every record
//! carries a stable string id unique within its type. Records are immutable
//! for the duration of a search session - the store is initialized once and
//! read-only.
//!
//! Serialized as an internally tagged enum (`"type": "project"`, ...) so
//! record payloads are self-describing across an FFI or HTTP boundary.

use crate::entity::EntityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A searchable entity record
///
/// One variant per entity type. Field sets mirror what the portal renders;
/// which of these fields participate in matching (and at what weight) is
/// decided by the field-extraction table in the search crate, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    /// Internal project
    Project {
        /// Stable id, unique among projects
        id: String,
        /// Display name
        name: String,
        /// Free-text description
        description: String,
        /// Lifecycle status tag ("active", "planning", ...)
        status: String,
        /// Labels attached by users
        tags: Vec<String>,
        /// Display name of the owning user
        owner: String,
        /// Creation timestamp
        created_at: DateTime<Utc>,
    },
    /// AI assistant configured in the portal
    Assistant {
        /// Stable id, unique among assistants
        id: String,
        /// Display name
        name: String,
        /// Free-text description
        description: String,
        /// Capability tags ("ventas", "soporte", ...)
        capabilities: Vec<String>,
        /// Availability status ("online", "offline")
        status: String,
    },
    /// Portal user account
    User {
        /// Stable id, unique among users
        id: String,
        /// Full display name
        name: String,
        /// Contact email
        email: String,
        /// Role tag ("admin", "manager", ...)
        role: String,
        /// Department name
        department: String,
    },
    /// Work item
    Task {
        /// Stable id, unique among tasks
        id: String,
        /// Short title
        title: String,
        /// Free-text description
        description: String,
        /// Workflow status ("open", "done", ...)
        status: String,
        /// Priority tag ("high", "medium", "low")
        priority: String,
        /// Display name of the assignee
        assignee: String,
        /// Optional due date
        due_at: Option<DateTime<Utc>>,
    },
    /// Billing invoice
    Invoice {
        /// Stable id, unique among invoices
        id: String,
        /// Human-facing invoice number ("INV-2024-001")
        number: String,
        /// Billed client name
        client: String,
        /// Line concept / short description
        concept: String,
        /// Payment status ("paid", "pending", "overdue")
        status: String,
        /// Amount in minor currency units
        amount_cents: i64,
        /// Issue date
        issued_at: DateTime<Utc>,
    },
    /// Published report
    Report {
        /// Stable id, unique among reports
        id: String,
        /// Display title
        title: String,
        /// Free-text summary
        summary: String,
        /// Category tag ("ventas", "producto", ...)
        category: String,
        /// Author display name
        author: String,
        /// Publication timestamp
        published_at: DateTime<Utc>,
    },
}

impl Record {
    /// The record's stable id (unique within its entity type)
    pub fn id(&self) -> &str {
        match self {
            Record::Project { id, .. }
            | Record::Assistant { id, .. }
            | Record::User { id, .. }
            | Record::Task { id, .. }
            | Record::Invoice { id, .. }
            | Record::Report { id, .. } => id,
        }
    }

    /// The entity type this record belongs to
    pub fn entity_type(&self) -> EntityType {
        match self {
            Record::Project { .. } => EntityType::Project,
            Record::Assistant { .. } => EntityType::Assistant,
            Record::User { .. } => EntityType::User,
            Record::Task { .. } => EntityType::Task,
            Record::Invoice { .. } => EntityType::Invoice,
            Record::Report { .. } => EntityType::Report,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
