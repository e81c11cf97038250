//! Entity type enumeration and type filters
//!
//! Every searchable record belongs to exactly one [`EntityType`]. The set is
//! closed: adding a new entity type means adding a variant here, a `Record`
//! variant, a field-table row, and a projection entry.
//!
//! [`TypeFilter`] carries the "all" pseudo-type used by search filters. It is
//! a query-time selector only - no record ever has type "all".

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// EntityType
// ============================================================================

/// The six searchable entity types of the portal
///
/// Used for type discrimination, routing, and field-table selection.
///
/// ## Invariant
///
/// This enum MUST have exactly 6 variants - one per concrete entity type.
/// The aggregate "all" selector is [`TypeFilter::All`], never a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Internal project
    Project,
    /// AI assistant configured in the portal
    Assistant,
    /// Portal user account
    User,
    /// Work item / task
    Task,
    /// Billing invoice
    Invoice,
    /// Published report
    Report,
}

impl EntityType {
    /// All concrete entity types, in canonical order
    ///
    /// Canonical order is the order duplicate-free filter expansion and
    /// cross-type scans iterate in, which keeps result sequences
    /// deterministic for a given store.
    pub const fn all() -> [EntityType; 6] {
        [
            EntityType::Project,
            EntityType::Assistant,
            EntityType::User,
            EntityType::Task,
            EntityType::Invoice,
            EntityType::Report,
        ]
    }

    /// Stable lowercase tag, as used in serialized filters and sort keys
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityType::Project => "project",
            EntityType::Assistant => "assistant",
            EntityType::User => "user",
            EntityType::Task => "task",
            EntityType::Invoice => "invoice",
            EntityType::Report => "report",
        }
    }

    /// Plural route segment used in deep links (`/{section}/{slug}/{id}`)
    pub const fn slug(&self) -> &'static str {
        match self {
            EntityType::Project => "projects",
            EntityType::Assistant => "assistants",
            EntityType::User => "users",
            EntityType::Task => "tasks",
            EntityType::Invoice => "invoices",
            EntityType::Report => "reports",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "project" => Ok(EntityType::Project),
            "assistant" => Ok(EntityType::Assistant),
            "user" => Ok(EntityType::User),
            "task" => Ok(EntityType::Task),
            "invoice" => Ok(EntityType::Invoice),
            "report" => Ok(EntityType::Report),
            _ => Err(()),
        }
    }
}

// ============================================================================
// TypeFilter
// ============================================================================

/// Entity-type selector for search filters
///
/// `All` is the aggregate pseudo-type: it expands to every concrete type at
/// query time via [`expand_type_filters`]. Serialized as the plain strings
/// `"all"`, `"project"`, `"assistant"`, ... so filter payloads round-trip
/// with front-end clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    /// Every concrete entity type
    All,
    /// A single concrete entity type
    Only(EntityType),
}

impl TypeFilter {
    /// Stable lowercase tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(ty) => ty.as_str(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TypeFilter::All);
        }
        EntityType::from_str(s).map(TypeFilter::Only)
    }
}

impl From<EntityType> for TypeFilter {
    fn from(ty: EntityType) -> Self {
        TypeFilter::Only(ty)
    }
}

impl Serialize for TypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TypeFilterVisitor;

        impl Visitor<'_> for TypeFilterVisitor {
            type Value = TypeFilter;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"all\" or an entity type tag")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<TypeFilter, E> {
                TypeFilter::from_str(v)
                    .map_err(|_| E::unknown_variant(v, &["all", "project", "assistant", "user", "task", "invoice", "report"]))
            }
        }

        deserializer.deserialize_str(TypeFilterVisitor)
    }
}

// ============================================================================
// Filter Expansion
// ============================================================================

/// Expand a filter list into concrete entity types
///
/// - Any occurrence of [`TypeFilter::All`] selects every concrete type.
/// - Duplicates collapse to a single entry, so a filter like
///   `[project, project]` never causes two scoring passes over projects.
/// - Output is in canonical [`EntityType::all`] order regardless of input
///   order, keeping downstream scans deterministic.
///
/// An empty filter list expands to every type (same as `[All]`), matching
/// the filter default.
pub fn expand_type_filters(filters: &[TypeFilter]) -> Vec<EntityType> {
    if filters.is_empty() || filters.contains(&TypeFilter::All) {
        return EntityType::all().to_vec();
    }

    EntityType::all()
        .into_iter()
        .filter(|ty| filters.contains(&TypeFilter::Only(*ty)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
