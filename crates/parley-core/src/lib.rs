//! Session orchestration for the parley confidential message exchange.
//!
//! Two peers each own a [`session::Party`]; public-key blobs move between
//! them explicitly, and every sealed message derives its key fresh from the
//! local private key and the peer's blob. No transport is provided or
//! assumed; the caller carries blobs and envelopes between parties.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::Party;
