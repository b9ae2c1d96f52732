//! # Domain Resource — Classification, Validation, Lifecycle
//!
//! A `Domain` records one DNS domain the controller manages. A domain is
//! either **primary** (`spec.sub` empty, e.g. `example.com`) or **shared**
//! (a single-label subdomain of some primary, e.g. `api` under
//! `example.com`). The reconciler consults the predicates here to decide
//! what to do with a resource; it never re-derives classification itself.
//!
//! ## Structural Validation
//!
//! [`Domain::is_valid_domain`] checks label-count shape only: `sub` must be
//! a single label and `primary_domain` must have at least two. Character
//! sets and length limits are NOT checked — callers must not assume RFC 1035
//! compliance. Invalid resources are representable and reported via the
//! boolean predicates, so the reconciler can surface them in status instead
//! of rejecting them at decode time.
//!
//! ## Deletion Protocol
//!
//! Deletion is two-phase. Either the identity-level or the status-level
//! deletion timestamp marks the resource for deletion
//! ([`Domain::is_marked_for_deletion`] ORs both — the status-level request
//! precedes generic garbage collection). Physical removal waits until the
//! controller removes [`FINALIZER`] from the metadata.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::metadata::ObjectMeta;

/// Finalizer the controller places on every Domain it manages. The resource
/// is not physically deleted while this entry remains in
/// `metadata.finalizers`.
pub const FINALIZER: &str = "domctl.io/domain";

/// Classification tag for a Domain resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    /// A root domain (`spec.sub` is empty).
    Primary,
    /// A subdomain of some primary domain.
    Shared,
}

impl DomainType {
    /// The canonical string tag: `"primary"` or `"shared"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Shared => "shared",
        }
    }
}

impl std::fmt::Display for DomainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller-written lifecycle phase of a Domain resource.
///
/// Only the reconciler writes this field; everyone else reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPhase {
    /// Just admitted, not yet reconciled.
    #[default]
    New,
    /// Claim is being processed (e.g. waiting on the parent primary).
    Pending,
    /// Claimed and in service.
    Ok,
    /// Reconciliation failed; `status.message` carries the reason.
    Failed,
}

impl DomainPhase {
    /// The canonical string tag of this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Pending => "pending",
            Self::Ok => "ok",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DomainPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "pending" => Ok(Self::Pending),
            "ok" => Ok(Self::Ok),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::UnknownPhase(other.to_string())),
        }
    }
}

/// Desired state of a Domain, submitted by an external actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSpec {
    /// The root domain, e.g. `"example.com"`.
    pub primary_domain: String,
    /// Subdomain label. Empty means this resource IS the primary domain.
    /// An absent field and an empty string are equivalent.
    #[serde(default)]
    pub sub: String,
}

/// Observed state of a Domain, written only by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStatus {
    /// Current lifecycle phase.
    #[serde(default)]
    pub phase: DomainPhase,
    /// Human-readable detail for the current phase.
    #[serde(default)]
    pub message: Option<String>,
    /// Status-level deletion marker, set by the reconciler when the domain
    /// itself (not the generic resource) is being torn down.
    #[serde(default)]
    pub deletion_timestamp: Option<DateTime<Utc>>,
    /// Last time the reconciler updated this status. Defaults to the Unix
    /// epoch, so a never-updated resource is maximally stale.
    #[serde(default = "unix_epoch")]
    pub last_update_time: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Default for DomainStatus {
    fn default() -> Self {
        Self {
            phase: DomainPhase::New,
            message: None,
            deletion_timestamp: None,
            last_update_time: unix_epoch(),
        }
    }
}

impl DomainStatus {
    /// Record a status write at the given instant. The caller supplies the
    /// clock so replayed reconciliations stay deterministic.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_update_time = now;
    }
}

/// One DNS domain resource tracked by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Resource identity: name, namespace, UID, finalizers, deletion marker.
    pub metadata: ObjectMeta,
    /// Desired state.
    pub spec: DomainSpec,
    /// Observed state.
    #[serde(default)]
    pub status: DomainStatus,
}

impl Domain {
    /// Create a primary domain resource in the `default` namespace.
    pub fn primary(name: impl Into<String>, primary_domain: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(name, "default"),
            spec: DomainSpec {
                primary_domain: primary_domain.into(),
                sub: String::new(),
            },
            status: DomainStatus::default(),
        }
    }

    /// Create a shared domain resource in the `default` namespace.
    pub fn shared(
        name: impl Into<String>,
        sub: impl Into<String>,
        primary_domain: impl Into<String>,
    ) -> Self {
        Self {
            metadata: ObjectMeta::new(name, "default"),
            spec: DomainSpec {
                primary_domain: primary_domain.into(),
                sub: sub.into(),
            },
            status: DomainStatus::default(),
        }
    }

    /// Whether the given finalizer name is present on the resource.
    ///
    /// The reconciler checks [`FINALIZER`] here before allowing physical
    /// deletion to proceed.
    pub fn has_finalizer(&self, name: &str) -> bool {
        self.metadata.has_finalizer(name)
    }

    /// Whether either deletion marker is set.
    ///
    /// The identity-level and status-level timestamps originate from
    /// different layers and either alone is authoritative. A status-level
    /// marker without an identity-level one still counts: the
    /// domain-specific deletion request precedes generic garbage collection.
    pub fn is_marked_for_deletion(&self) -> bool {
        self.metadata.deletion_timestamp.is_some() || self.status.deletion_timestamp.is_some()
    }

    /// Whether this is a primary domain (`spec.sub` is empty).
    pub fn is_primary(&self) -> bool {
        self.spec.sub.is_empty()
    }

    /// Shape-only structural validity: `sub` must be a single label and
    /// `primary_domain` must have at least two.
    ///
    /// Deliberately weak — no character-set or length validation. Callers
    /// must not assume RFC 1035 compliance from a `true` here.
    pub fn is_valid_domain(&self) -> bool {
        self.spec.sub.split('.').count() <= 1 && self.spec.primary_domain.split('.').count() >= 2
    }

    /// Whether this is a structurally valid shared domain:
    /// non-primary AND structurally valid.
    pub fn is_valid_shared_domain(&self) -> bool {
        !self.is_primary() && self.is_valid_domain()
    }

    /// The fully-qualified domain name: `primary_domain` for a primary
    /// domain, `sub + "." + primary_domain` for a shared one. No
    /// normalization (case, trailing dot) is performed.
    pub fn domain(&self) -> String {
        if self.is_primary() {
            self.spec.primary_domain.clone()
        } else {
            format!("{}.{}", self.spec.sub, self.spec.primary_domain)
        }
    }

    /// Classification tag for this resource.
    pub fn domain_type(&self) -> DomainType {
        if self.is_primary() {
            DomainType::Primary
        } else {
            DomainType::Shared
        }
    }

    /// The root domain, returned unconditionally. For a shared domain this
    /// is the parent's primary domain string, not the fully-qualified name.
    pub fn primary_domain(&self) -> &str {
        &self.spec.primary_domain
    }

    /// Produce an independent, fully-owned duplicate of this resource.
    ///
    /// Every substructure (metadata, finalizer list, spec, status) is owned,
    /// so the clone shares no mutable state with the original: mutating one
    /// never affects the other.
    pub fn deep_copy(&self) -> Domain {
        self.clone()
    }

    /// Whether the last status update is older than `expire_after`,
    /// measured against the current UTC time.
    ///
    /// Strict inequality: a resource exactly `expire_after` old is NOT
    /// expired. For deterministic tests use
    /// [`is_update_expired_at`](Self::is_update_expired_at).
    pub fn is_update_expired(&self, expire_after: Duration) -> bool {
        self.is_update_expired_at(expire_after, Utc::now())
    }

    /// Expiry check against an injected clock.
    pub fn is_update_expired_at(&self, expire_after: Duration, now: DateTime<Utc>) -> bool {
        self.status.last_update_time + expire_after < now
    }
}
