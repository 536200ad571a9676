//! # EVM Contract Bindings
//!
//! ABI surface of the vesting vault and airdropper contracts, plus pure
//! calldata construction and return-data decoding. Nothing in this crate
//! talks to a transport: the web application's gateway feeds the bytes
//! produced here through the wallet's JSON-RPC surface and hands the reply
//! bytes back for decoding.
//!
//! Decoders normalize fixed-point on-chain integers into the
//! decimal-string projections defined in [`shared`], so no 256-bit word
//! escapes this crate.

pub mod abi;
pub mod calls;

pub use calls::AbiError;
