//
// Authors:
// - Nugzari Uzoevi <nougzarm@icloud.com>
// - Michele Orrù <m@orru.net>
// - Lénaïck Gouriou <lg@leanear.io>

#![allow(non_snake_case)]
//! A generic engine for non-interactive Sigma protocols over a prime-order
//! elliptic-curve group.
//!
//! Covers seven relation kinds (`Dlog`, `Pedersen`, `Representation`,
//! `SeveralDlog`, `DlogEq`, `SeveralDlogEq`, `DHTriple`) behind a single
//! dispatch table, sharing one Fiat-Shamir construction and one verifier
//! across all of them. See [`SigmaProtocol`] for the entry point.

#![deny(unused_variables)]
#![deny(unused_mut)]

pub mod codec;
pub mod errors;
pub mod homomorphism;
pub mod protocol;
pub mod relation;

pub use codec::HashId;
pub use errors::Error;
pub use protocol::{BatchProof, SigmaProtocol, ShortProof};
pub use relation::{RelationDescriptor, RelationKind};
