//! # domctl-core — Domain Resource Model for the domctl Controller
//!
//! This crate is the decision core of the domctl DNS controller. It defines
//! the `Domain` custom resource and the pure classification, validation, and
//! lifecycle predicates the reconciler consults before acting. The
//! reconciliation loop, API-server interaction, and DNS provisioning all
//! live in other crates; they call into this model and never the reverse.
//!
//! ## Key Design Principles
//!
//! 1. **Pure predicates.** Every query is a side-effect-free function of the
//!    resource's current field values. The only wall-clock read
//!    ([`Domain::is_update_expired`]) delegates to an injectable-clock
//!    variant so tests stay deterministic.
//!
//! 2. **Two independent deletion markers, one derived flag.** The generic
//!    resource layer and the domain-specific status layer each own a
//!    deletion timestamp. [`Domain::is_marked_for_deletion`] is the single
//!    OR-merge of both; consumers never inspect the fields directly.
//!
//! 3. **Finalizer-gated deletion.** A deletion request only sets a marker.
//!    Physical removal waits until the controller strips [`FINALIZER`] from
//!    the resource's metadata.
//!
//! 4. **Invalidity is a value, not an error.** A Domain whose spec fails the
//!    structural checks is representable; [`Domain::is_valid_domain`]
//!    reports it as a boolean. Only genuinely exceptional conditions (an
//!    unknown phase tag, a serialization failure) surface as
//!    [`DomainError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `domctl-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod domain;
pub mod error;
pub mod metadata;

// Re-export primary types for ergonomic imports.
pub use domain::{Domain, DomainPhase, DomainSpec, DomainStatus, DomainType, FINALIZER};
pub use error::DomainError;
pub use metadata::ObjectMeta;
