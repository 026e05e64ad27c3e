//! Fiat-Shamir challenge oracle (spec.md §4.4).
//!
//! The challenge is the scalar interpretation of a hash over the canonical
//! transcript `generators ‖ statement ‖ rnd_statement ‖ context`, using each
//! group element's canonical encoding ([`GroupEncoding`]) in fixed order.
//! Identical ordering and identical `hash_id` on both sides is the entire
//! soundness-relevant contract of this module; it has no other state.

use ff::PrimeField;
use group::{Group, GroupEncoding};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Identifier of the hash function used to derive a challenge. Selected per
/// protocol instance (spec.md §4.4/§6); defaults to SHA-256.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashId {
    #[default]
    Sha256,
    Sha3_256,
}

impl HashId {
    fn digest(self, transcript: &[u8]) -> Vec<u8> {
        match self {
            HashId::Sha256 => Sha256::digest(transcript).to_vec(),
            HashId::Sha3_256 => Sha3_256::digest(transcript).to_vec(),
        }
    }
}

/// Builds the canonical transcript bytes and derives the Fiat-Shamir
/// challenge scalar, per spec.md §4.4.
///
/// The hash output is interpreted as a big-endian unsigned integer and
/// reduced into the scalar field via Horner's method over the field's own
/// arithmetic (equivalent to a wide/uniform reduction mod the group order,
/// without representing an out-of-field integer in any typed value). Both
/// prover and verifier call this function identically, so the reduction
/// convention never needs to leave the engine.
pub(crate) fn challenge<G>(
    generators: &[G],
    statement: &[G],
    rnd_statement: &[G],
    context: &[u8],
    hash_id: HashId,
) -> G::Scalar
where
    G: Group + GroupEncoding,
    G::Scalar: PrimeField,
{
    let mut transcript = Vec::new();
    for g in generators.iter().chain(statement).chain(rnd_statement) {
        transcript.extend_from_slice(g.to_bytes().as_ref());
    }
    transcript.extend_from_slice(context);

    let digest = hash_id.digest(&transcript);
    reduce_wide::<G::Scalar>(&digest)
}

/// Interprets `bytes` as a big-endian unsigned integer and reduces it into
/// `F` via Horner's method: `acc = acc * 256 + byte`, computed entirely with
/// field operations.
fn reduce_wide<F: PrimeField>(bytes: &[u8]) -> F {
    let base = F::from(256u64);
    bytes
        .iter()
        .fold(F::ZERO, |acc, &byte| acc * base + F::from(byte as u64))
}
