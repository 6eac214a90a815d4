//! Signature algorithms

pub(crate) mod rsa;
