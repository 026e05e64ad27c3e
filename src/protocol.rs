//! The generic Sigma protocol engine (spec.md §4.2, §4.3).
//!
//! [`SigmaProtocol`] is immutable once constructed and holds only
//! non-owning references to the group's generators (spec.md §3: "the
//! protocol instance holds non-owning references to the group adapter and
//! the generator sequence"). A single instance serves arbitrarily many
//! `prove_*`/`verify_*` calls, each of which is a pure, stateless function
//! of its explicit inputs.

use ff::PrimeField;
use group::{Group, GroupEncoding};
use serde::{Deserialize, Serialize};

use crate::codec::{self, HashId};
use crate::errors::Error;
use crate::homomorphism::{self, require_no_infinity};
use crate::relation::{KindFamily, RelationDescriptor, RelationKind};

/// A proof carrying the first message (`rnd_statement`) and responses.
///
/// Transmits O(num_statement) points + O(num_witness) scalars (spec.md
/// §4.2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "G: Serialize, G::Scalar: Serialize",
    deserialize = "G: Deserialize<'de>, G::Scalar: Deserialize<'de>"
))]
pub struct BatchProof<G: Group> {
    pub kind: RelationKind,
    pub rnd_statement: Vec<G>,
    pub responses: Vec<G::Scalar>,
}

/// A proof carrying the challenge and responses; the verifier reconstructs
/// `rnd_statement` from them.
///
/// Transmits O(num_witness)+1 scalars (spec.md §4.2) — smaller on the wire
/// than [`BatchProof`] at the same soundness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "G: Serialize, G::Scalar: Serialize",
    deserialize = "G: Deserialize<'de>, G::Scalar: Deserialize<'de>"
))]
pub struct ShortProof<G: Group> {
    pub kind: RelationKind,
    pub challenge: G::Scalar,
    pub responses: Vec<G::Scalar>,
}

/// A non-interactive Sigma protocol instance for a fixed relation and
/// generator sequence.
///
/// Construction validates arity and rejects identity generators; every
/// `prove_*`/`verify_*` call afterwards is pure with respect to `self`.
#[derive(Clone, Debug)]
pub struct SigmaProtocol<'a, G: Group + GroupEncoding> {
    generators: &'a [G],
    descriptor: RelationDescriptor,
    hash_id: HashId,
}

fn check_len(actual: usize, expected: usize) -> Result<(), Error> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::ArityMismatch {
            expected,
            got: actual,
        })
    }
}

impl<'a, G> SigmaProtocol<'a, G>
where
    G: Group + GroupEncoding,
    G::Scalar: PrimeField,
{
    /// Constructs a protocol instance from a group generator sequence and a
    /// relation descriptor (spec.md §6). `generators` must contain at least
    /// `descriptor.num_generator` points, none the identity.
    pub fn new(
        generators: &'a [G],
        descriptor: RelationDescriptor,
        hash_id: HashId,
    ) -> Result<Self, Error> {
        if generators.len() < descriptor.num_generator {
            return Err(Error::ArityMismatch {
                expected: descriptor.num_generator,
                got: generators.len(),
            });
        }
        require_no_infinity(&generators[..descriptor.num_generator])?;
        Ok(Self {
            generators,
            descriptor,
            hash_id,
        })
    }

    fn generators(&self) -> &[G] {
        &self.generators[..self.descriptor.num_generator]
    }

    fn family(&self) -> KindFamily {
        self.descriptor.kind.family()
    }

    /// Applies the relation's homomorphism to `witness`, producing the
    /// public statement z = f(witness).
    pub fn to_statement(&self, witness: &[G::Scalar]) -> Result<Vec<G>, Error> {
        check_len(witness.len(), self.descriptor.num_witness)?;
        Ok(homomorphism::evaluate(self.family(), self.generators(), witness))
    }

    fn check_kind(&self, kind: RelationKind) -> Result<(), Error> {
        if kind == self.descriptor.kind {
            Ok(())
        } else {
            Err(Error::KindMismatch)
        }
    }

    /// Produces a batchable proof (spec.md §4.2, steps 1-4).
    pub fn prove_batch(
        &self,
        witness: &[G::Scalar],
        statement: &[G],
        rnd_witness: &[G::Scalar],
        context: &[u8],
    ) -> Result<BatchProof<G>, Error> {
        check_len(witness.len(), self.descriptor.num_witness)?;
        check_len(rnd_witness.len(), self.descriptor.num_witness)?;
        check_len(statement.len(), self.descriptor.num_statement)?;

        let rnd_statement = homomorphism::evaluate(self.family(), self.generators(), rnd_witness);
        let challenge = codec::challenge(
            self.generators(),
            statement,
            &rnd_statement,
            context,
            self.hash_id,
        );
        let responses = responses(witness, rnd_witness, challenge);

        Ok(BatchProof {
            kind: self.descriptor.kind,
            rnd_statement,
            responses,
        })
    }

    /// Recomputes the challenge and checks the kind-specific verification
    /// equations (spec.md §4.3). Returns `Ok(false)` for an invalid proof;
    /// `Err` only on structural mismatches.
    pub fn verify_batch(
        &self,
        statement: &[G],
        proof: &BatchProof<G>,
        context: &[u8],
    ) -> Result<bool, Error> {
        self.check_kind(proof.kind)?;
        check_len(statement.len(), self.descriptor.num_statement)?;
        check_len(proof.rnd_statement.len(), self.descriptor.num_statement)?;
        check_len(proof.responses.len(), self.descriptor.num_witness)?;

        let challenge = codec::challenge(
            self.generators(),
            statement,
            &proof.rnd_statement,
            context,
            self.hash_id,
        );

        Ok(verify_equations(
            self.family(),
            self.generators(),
            statement,
            &proof.rnd_statement,
            &proof.responses,
            challenge,
        ))
    }

    /// Produces a short (compact) proof: identical to `prove_batch` except
    /// `rnd_statement` is not retained; the proof carries the challenge
    /// instead.
    pub fn prove_short(
        &self,
        witness: &[G::Scalar],
        statement: &[G],
        rnd_witness: &[G::Scalar],
        context: &[u8],
    ) -> Result<ShortProof<G>, Error> {
        let batch = self.prove_batch(witness, statement, rnd_witness, context)?;
        let challenge = codec::challenge(
            self.generators(),
            statement,
            &batch.rnd_statement,
            context,
            self.hash_id,
        );
        Ok(ShortProof {
            kind: batch.kind,
            challenge,
            responses: batch.responses,
        })
    }

    /// Reconstructs `rnd_statement` from `(challenge, responses)` via the
    /// kind-specific inversion equation, recomputes the challenge, and
    /// compares it against the one carried by the proof (spec.md §4.2).
    pub fn verify_short(
        &self,
        statement: &[G],
        proof: &ShortProof<G>,
        context: &[u8],
    ) -> Result<bool, Error> {
        self.check_kind(proof.kind)?;
        check_len(statement.len(), self.descriptor.num_statement)?;
        check_len(proof.responses.len(), self.descriptor.num_witness)?;

        let rnd_statement = reconstruct_rnd_statement(
            self.family(),
            self.generators(),
            statement,
            &proof.responses,
            proof.challenge,
        );
        let recomputed = codec::challenge(
            self.generators(),
            statement,
            &rnd_statement,
            context,
            self.hash_id,
        );
        Ok(recomputed == proof.challenge)
    }
}

/// responses[i] = challenge·witness[i] + rnd_witness[i] (mod q), spec.md §4.2
/// step 3.
fn responses<F: PrimeField>(witness: &[F], rnd_witness: &[F], challenge: F) -> Vec<F> {
    witness
        .iter()
        .zip(rnd_witness)
        .map(|(&x, &r)| challenge * x + r)
        .collect()
}

/// Kind-specific batch verification equations (spec.md §4.3).
fn verify_equations<G: Group>(
    family: KindFamily,
    generators: &[G],
    statement: &[G],
    rnd_statement: &[G],
    responses: &[G::Scalar],
    challenge: G::Scalar,
) -> bool {
    match family {
        KindFamily::Sum => {
            let lhs = rnd_statement[0] + statement[0] * challenge;
            let rhs = generators
                .iter()
                .zip(responses)
                .fold(G::identity(), |acc, (h, s)| acc + *h * s);
            lhs == rhs
        }
        KindFamily::PerIndex => generators
            .iter()
            .zip(statement)
            .zip(rnd_statement)
            .zip(responses)
            .all(|(((h, z), a), s)| *a + *z * challenge == *h * s),
        KindFamily::SharedWitness => {
            let s = responses[0];
            generators
                .iter()
                .zip(statement)
                .zip(rnd_statement)
                .all(|((h, z), a)| *a + *z * challenge == *h * s)
        }
    }
}

/// Kind-specific short-proof inversion equations (spec.md §4.3): recovers
/// `rnd_statement` from `(challenge, responses)` instead of checking an
/// equation directly.
fn reconstruct_rnd_statement<G: Group>(
    family: KindFamily,
    generators: &[G],
    statement: &[G],
    responses: &[G::Scalar],
    challenge: G::Scalar,
) -> Vec<G> {
    match family {
        KindFamily::Sum => {
            let sum = generators
                .iter()
                .zip(responses)
                .fold(G::identity(), |acc, (h, s)| acc + *h * s);
            vec![sum - statement[0] * challenge]
        }
        KindFamily::PerIndex => generators
            .iter()
            .zip(statement)
            .zip(responses)
            .map(|((h, z), s)| *h * s - *z * challenge)
            .collect(),
        KindFamily::SharedWitness => {
            let s = responses[0];
            generators
                .iter()
                .zip(statement)
                .map(|(h, z)| *h * s - *z * challenge)
                .collect()
        }
    }
}
