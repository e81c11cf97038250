//! Per-entity-type result projection
//!
//! How a matched record becomes a renderable result - title, subtitle,
//! description, deep link, icon - is a data table, not control flow: one
//! [`Projection`] of pure functions per entity type. Adding an entity type
//! is a new table entry, not a new conditional.
//!
//! Deep links follow `/{section}/{type}/{id}`. Administrative types (user,
//! invoice, report) route under the `admin` section; the rest live under
//! `workspace`. The engine only produces the path string - navigation is
//! the caller's collaborator.

use atrium_core::{EntityType, Record};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

// ============================================================================
// Projection
// ============================================================================

/// Pure projection functions for one entity type
#[derive(Clone, Copy)]
pub struct Projection {
    /// Route section this type lives under ("workspace" or "admin")
    pub section: &'static str,
    /// Icon tag for the presentation layer
    pub icon: &'static str,
    /// Result title
    pub title: fn(&Record) -> String,
    /// Result secondary line
    pub subtitle: fn(&Record) -> Option<String>,
    /// The record's free-text description, when it has one
    pub description: fn(&Record) -> Option<String>,
}

impl Projection {
    /// Deep-link path for a record of this type
    pub fn url(&self, record: &Record) -> String {
        format!(
            "/{}/{}/{}",
            self.section,
            record.entity_type().slug(),
            record.id()
        )
    }
}

/// Look up the projection for an entity type
pub fn projection(entity_type: EntityType) -> &'static Projection {
    // The table below covers every variant, so the lookup cannot miss
    &PROJECTIONS[&entity_type]
}

// ============================================================================
// Projection Table
// ============================================================================

static PROJECTIONS: Lazy<FxHashMap<EntityType, Projection>> = Lazy::new(|| {
    let mut table = FxHashMap::default();
    table.insert(
        EntityType::Project,
        Projection {
            section: "workspace",
            icon: "folder",
            title: project_title,
            subtitle: project_subtitle,
            description: free_text_description,
        },
    );
    table.insert(
        EntityType::Assistant,
        Projection {
            section: "workspace",
            icon: "smart_toy",
            title: assistant_title,
            subtitle: assistant_subtitle,
            description: free_text_description,
        },
    );
    table.insert(
        EntityType::User,
        Projection {
            section: "admin",
            icon: "person",
            title: user_title,
            subtitle: user_subtitle,
            description: |_| None,
        },
    );
    table.insert(
        EntityType::Task,
        Projection {
            section: "workspace",
            icon: "task_alt",
            title: task_title,
            subtitle: task_subtitle,
            description: free_text_description,
        },
    );
    table.insert(
        EntityType::Invoice,
        Projection {
            section: "admin",
            icon: "receipt_long",
            title: invoice_title,
            subtitle: invoice_subtitle,
            description: free_text_description,
        },
    );
    table.insert(
        EntityType::Report,
        Projection {
            section: "admin",
            icon: "monitoring",
            title: report_title,
            subtitle: report_subtitle,
            description: free_text_description,
        },
    );
    table
});

// ============================================================================
// Projection Functions
// ============================================================================

fn project_title(record: &Record) -> String {
    match record {
        Record::Project { name, .. } => name.clone(),
        _ => record.id().to_string(),
    }
}

fn project_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::Project { status, .. } => Some(format!("Status: {status}")),
        _ => None,
    }
}

fn assistant_title(record: &Record) -> String {
    match record {
        Record::Assistant { name, .. } => name.clone(),
        _ => record.id().to_string(),
    }
}

fn assistant_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::Assistant { capabilities, .. } if !capabilities.is_empty() => {
            Some(capabilities.join(", "))
        }
        _ => None,
    }
}

fn user_title(record: &Record) -> String {
    match record {
        Record::User { name, .. } => name.clone(),
        _ => record.id().to_string(),
    }
}

fn user_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::User { email, .. } => Some(email.clone()),
        _ => None,
    }
}

fn task_title(record: &Record) -> String {
    match record {
        Record::Task { title, .. } => title.clone(),
        _ => record.id().to_string(),
    }
}

fn task_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::Task { priority, .. } => Some(format!("Priority: {priority}")),
        _ => None,
    }
}

fn invoice_title(record: &Record) -> String {
    match record {
        Record::Invoice { number, .. } => number.clone(),
        _ => record.id().to_string(),
    }
}

fn invoice_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::Invoice { client, .. } => Some(client.clone()),
        _ => None,
    }
}

fn report_title(record: &Record) -> String {
    match record {
        Record::Report { title, .. } => title.clone(),
        _ => record.id().to_string(),
    }
}

fn report_subtitle(record: &Record) -> Option<String> {
    match record {
        Record::Report { category, .. } => Some(category.clone()),
        _ => None,
    }
}

fn free_text_description(record: &Record) -> Option<String> {
    let text = match record {
        Record::Project { description, .. }
        | Record::Assistant { description, .. }
        | Record::Task { description, .. } => description,
        Record::Invoice { concept, .. } => concept,
        Record::Report { summary, .. } => summary,
        Record::User { .. } => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
