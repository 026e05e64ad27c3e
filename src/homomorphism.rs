//! The one-way group homomorphism each [`RelationKind`](crate::relation::RelationKind)
//! encodes, collapsed into the three closed-form families spec.md §9 calls
//! out: a summed single output, one output per index, and a single shared
//! witness scalar applied to every generator.
//!
//! Used both to turn a witness into its public statement (`to_statement`)
//! and to turn a random witness into the first message (`rnd_statement`) —
//! spec.md's data flow `witness → homomorphism → statement` runs through the
//! same function for both.

use group::Group;

use crate::errors::Error;
use crate::relation::KindFamily;

/// Evaluates the homomorphism for a given kind-family against `generators`
/// and `scalars`, returning the image (one point per constraint).
///
/// `generators` and `scalars` must already have been validated against the
/// relation's arity by the caller ([`crate::protocol::SigmaProtocol`]).
pub(crate) fn evaluate<G: Group>(family: KindFamily, generators: &[G], scalars: &[G::Scalar]) -> Vec<G> {
    match family {
        KindFamily::Sum => vec![msm(generators, scalars)],
        KindFamily::PerIndex => generators
            .iter()
            .zip(scalars)
            .map(|(h, x)| *h * x)
            .collect(),
        KindFamily::SharedWitness => {
            let x = scalars[0];
            generators.iter().map(|h| *h * x).collect()
        }
    }
}

/// Multi-scalar multiplication: Σ scalars[i] · bases[i].
fn msm<G: Group>(bases: &[G], scalars: &[G::Scalar]) -> G {
    bases
        .iter()
        .zip(scalars)
        .fold(G::identity(), |acc, (p, s)| acc + *p * s)
}

/// Validates that none of the given generators is the point at infinity, as
/// required by spec.md §3 ("never the point at infinity for generators").
pub(crate) fn require_no_infinity<G: Group>(generators: &[G]) -> Result<(), Error> {
    if generators.iter().any(|g| g.is_identity().into()) {
        return Err(Error::GroupError(
            "generator must not be the point at infinity".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::{ristretto::RistrettoPoint as G, scalar::Scalar};
    use rand::rngs::OsRng;

    #[test]
    fn sum_family_matches_msm() {
        let g1 = G::random(&mut OsRng);
        let g2 = G::random(&mut OsRng);
        let x1 = Scalar::random(&mut OsRng);
        let x2 = Scalar::random(&mut OsRng);
        let out = evaluate::<G>(KindFamily::Sum, &[g1, g2], &[x1, x2]);
        assert_eq!(out, vec![g1 * x1 + g2 * x2]);
    }

    #[test]
    fn per_index_family_is_independent() {
        let g1 = G::random(&mut OsRng);
        let g2 = G::random(&mut OsRng);
        let x1 = Scalar::random(&mut OsRng);
        let x2 = Scalar::random(&mut OsRng);
        let out = evaluate::<G>(KindFamily::PerIndex, &[g1, g2], &[x1, x2]);
        assert_eq!(out, vec![g1 * x1, g2 * x2]);
    }

    #[test]
    fn shared_witness_family_reuses_first_scalar() {
        let g1 = G::random(&mut OsRng);
        let g2 = G::random(&mut OsRng);
        let x = Scalar::random(&mut OsRng);
        let out = evaluate::<G>(KindFamily::SharedWitness, &[g1, g2], &[x]);
        assert_eq!(out, vec![g1 * x, g2 * x]);
    }
}
