//! Relation kinds and their fixed arity patterns (spec.md §4.1).
//!
//! A [`RelationDescriptor`] names which one-way group homomorphism a
//! [`crate::protocol::SigmaProtocol`] proves knowledge of a preimage for, and
//! how many witnesses/generators/statement elements that homomorphism takes.
//! The engine dispatches on `kind`, never on a class hierarchy: see
//! [`crate::homomorphism`] for the three closed-form families this collapses
//! into.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// The seven supported relation kinds, with the homomorphism each one
/// encodes (see spec.md §4.1 for the formulas).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// z = h·x
    Dlog,
    /// z = h₁·x₁ + h₂·x₂
    Pedersen,
    /// z = Σ hᵢ·xᵢ, for n ≥ 1
    Representation,
    /// zᵢ = hᵢ·xᵢ, for n ≥ 1
    SeveralDlog,
    /// (z₁, z₂) = (h₁·x, h₂·x)
    DlogEq,
    /// zᵢ = hᵢ·x, for n ≥ 1
    SeveralDlogEq,
    /// (z₁, z₃) = (h₁·x, h₂·x), with h₂ rebound by the caller to a
    /// previously committed point; dispatches identically to `DlogEq`.
    DHTriple,
}

/// The three families of closed-form homomorphism that [`RelationKind`]
/// collapses into for the purposes of dispatch (spec.md §9: "the engine
/// dispatches on kind-family, not on every kind").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum KindFamily {
    /// Single statement element, summed contributions: Dlog (n=1), Pedersen
    /// (n=2), Representation (n≥1).
    Sum,
    /// One statement element per witness/generator, independently: SeveralDlog.
    PerIndex,
    /// A single shared witness scalar reused against every generator:
    /// DlogEq, SeveralDlogEq, DHTriple.
    SharedWitness,
}

impl RelationKind {
    pub(crate) fn family(self) -> KindFamily {
        match self {
            RelationKind::Dlog | RelationKind::Pedersen | RelationKind::Representation => {
                KindFamily::Sum
            }
            RelationKind::SeveralDlog => KindFamily::PerIndex,
            RelationKind::DlogEq | RelationKind::SeveralDlogEq | RelationKind::DHTriple => {
                KindFamily::SharedWitness
            }
        }
    }

    /// Checks whether an arity triple is valid for this kind, per the table
    /// in spec.md §4.1. Variable-arity kinds (Representation, SeveralDlog,
    /// SeveralDlogEq) accept any n ≥ 1; DHTriple is fixed at (1,2,2) like
    /// DlogEq (spec.md §6 names only the three above as variable-arity).
    pub(crate) fn check_arity(
        self,
        num_witness: usize,
        num_generator: usize,
        num_statement: usize,
    ) -> Result<(), Error> {
        let ok = match self {
            RelationKind::Dlog => {
                num_witness == 1 && num_generator == 1 && num_statement == 1
            }
            RelationKind::Pedersen => {
                num_witness == 2 && num_generator == 2 && num_statement == 1
            }
            RelationKind::Representation => {
                num_witness >= 1 && num_generator == num_witness && num_statement == 1
            }
            RelationKind::SeveralDlog => {
                num_witness >= 1
                    && num_generator == num_witness
                    && num_statement == num_witness
            }
            RelationKind::DlogEq => {
                num_witness == 1 && num_generator == 2 && num_statement == 2
            }
            RelationKind::DHTriple => {
                num_witness == 1 && num_generator == 2 && num_statement == 2
            }
            RelationKind::SeveralDlogEq => {
                num_witness == 1 && num_generator >= 1 && num_statement == num_generator
            }
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidArity {
                kind: self,
                num_witness,
                num_generator,
                num_statement,
            })
        }
    }
}

/// Describes which relation is being proven and its arity (spec.md §3).
///
/// Immutable once constructed; a [`crate::protocol::SigmaProtocol`] is built
/// from one of these and a matching generator sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    pub kind: RelationKind,
    pub num_witness: usize,
    pub num_generator: usize,
    pub num_statement: usize,
}

impl RelationDescriptor {
    /// Builds a descriptor, failing with [`Error::ArityMismatch`] if the
    /// arity triple disagrees with the kind's required pattern.
    pub fn new(
        kind: RelationKind,
        num_witness: usize,
        num_generator: usize,
        num_statement: usize,
    ) -> Result<Self, Error> {
        kind.check_arity(num_witness, num_generator, num_statement)?;
        Ok(Self {
            kind,
            num_witness,
            num_generator,
            num_statement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dlog_arity_accepts_only_1_1_1() {
        assert!(RelationDescriptor::new(RelationKind::Dlog, 1, 1, 1).is_ok());
        assert!(RelationDescriptor::new(RelationKind::Dlog, 2, 1, 1).is_err());
        assert!(RelationDescriptor::new(RelationKind::Dlog, 1, 2, 1).is_err());
    }

    #[test]
    fn representation_accepts_any_n() {
        assert!(RelationDescriptor::new(RelationKind::Representation, 1, 1, 1).is_ok());
        assert!(RelationDescriptor::new(RelationKind::Representation, 5, 5, 1).is_ok());
        assert!(RelationDescriptor::new(RelationKind::Representation, 5, 4, 1).is_err());
    }

    #[test]
    fn several_dlog_eq_accepts_any_n() {
        assert!(RelationDescriptor::new(RelationKind::SeveralDlogEq, 1, 3, 3).is_ok());
        assert!(RelationDescriptor::new(RelationKind::SeveralDlogEq, 1, 1, 1).is_ok());
    }

    #[test]
    fn dhtriple_is_fixed_at_1_2_2() {
        assert!(RelationDescriptor::new(RelationKind::DHTriple, 1, 2, 2).is_ok());
        assert!(RelationDescriptor::new(RelationKind::DHTriple, 1, 2, 1).is_err());
        assert!(RelationDescriptor::new(RelationKind::DHTriple, 1, 3, 3).is_err());
    }

    #[test]
    fn arity_error_names_the_kind_and_actual_triple() {
        let err = RelationDescriptor::new(RelationKind::Representation, 5, 4, 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArity {
                kind: RelationKind::Representation,
                num_witness: 5,
                num_generator: 4,
                num_statement: 1,
            }
        );
    }

    #[test]
    fn pedersen_is_fixed_arity() {
        assert!(RelationDescriptor::new(RelationKind::Pedersen, 2, 2, 1).is_ok());
        assert!(RelationDescriptor::new(RelationKind::Pedersen, 3, 3, 1).is_err());
    }
}
