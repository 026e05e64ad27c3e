//! Structural error taxonomy for the Sigma protocol engine.
//!
//! These are the failures spec.md §7 calls "structural": programmer error or
//! corrupted input, never expected during normal operation. A proof that
//! simply fails to verify is *not* one of these — `verify_batch`/`verify_short`
//! return `Ok(false)` for that case, not an `Err`.

use thiserror::Error;

use crate::relation::RelationKind;

/// Errors raised by relation construction, proving, and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A witness, statement, or random-witness vector had the wrong length
    /// for the relation's arity.
    #[error("arity mismatch: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A `RelationDescriptor`'s arity triple disagreed with its kind's
    /// required pattern.
    #[error(
        "invalid arity for {kind:?}: got (num_witness={num_witness}, \
         num_generator={num_generator}, num_statement={num_statement})"
    )]
    InvalidArity {
        kind: RelationKind,
        num_witness: usize,
        num_generator: usize,
        num_statement: usize,
    },

    /// A proof (or descriptor) named a relation kind the engine has no
    /// dispatch entry for.
    #[error("unsupported relation kind")]
    UnsupportedKind,

    /// The kind tag carried by a proof did not match the kind the verifying
    /// instance was constructed for.
    #[error("proof kind does not match protocol instance kind")]
    KindMismatch,

    /// The group adapter failed: serialization, invalid encoding, or an
    /// unexpected point-at-infinity where a non-infinity point was required.
    #[error("group adapter error: {0}")]
    GroupError(String),
}
