//! # Resource Identity — Object Metadata
//!
//! [`ObjectMeta`] carries the identity of a Domain resource: its name and
//! namespace, the UID assigned at admission, the finalizer list, and the
//! identity-level deletion marker set by the generic resource layer.
//!
//! ## Write Ownership
//!
//! - `deletion_timestamp` is written by the generic resource layer when a
//!   delete is requested. The domain model only reads it.
//! - `finalizers` is mutated by the controller through
//!   [`ObjectMeta::ensure_finalizer`] and [`ObjectMeta::remove_finalizer`];
//!   both are idempotent list edits with no other side effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one tracked resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Resource name, unique within its namespace.
    pub name: String,
    /// Namespace the resource lives in.
    pub namespace: String,
    /// UID assigned when the resource was admitted.
    #[serde(default)]
    pub uid: Uuid,
    /// Finalizer names that must be cleared before physical deletion.
    #[serde(default)]
    pub finalizers: Vec<String>,
    /// Identity-level deletion marker, set by the generic resource layer
    /// when a delete is requested.
    #[serde(default)]
    pub deletion_timestamp: Option<DateTime<Utc>>,
}

impl ObjectMeta {
    /// Create metadata for a new resource with a fresh UID, no finalizers,
    /// and no deletion marker.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            uid: Uuid::new_v4(),
            finalizers: Vec::new(),
            deletion_timestamp: None,
        }
    }

    /// Whether the given finalizer name is present.
    pub fn has_finalizer(&self, name: &str) -> bool {
        self.finalizers.iter().any(|f| f == name)
    }

    /// Add a finalizer if it is not already present.
    ///
    /// Returns `true` if the list changed.
    pub fn ensure_finalizer(&mut self, name: &str) -> bool {
        if self.has_finalizer(name) {
            return false;
        }
        self.finalizers.push(name.to_string());
        true
    }

    /// Remove a finalizer if present.
    ///
    /// Returns `true` if the list changed.
    pub fn remove_finalizer(&mut self, name: &str) -> bool {
        let before = self.finalizers.len();
        self.finalizers.retain(|f| f != name);
        self.finalizers.len() != before
    }
}
