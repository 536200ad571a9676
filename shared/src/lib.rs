//! # Shared Domain Library
//!
//! Chain-independent core of the VestVault dashboard. Everything here
//! compiles for both the host and `wasm32-unknown-unknown`, carries no
//! browser or transport dependency, and is covered by plain `cargo test`.
//!
//! ## Structure
//!
//! - **[`session`]**: the wallet session state machine (accounts, active
//!   account, chain id) that the web app wraps in a reactive context
//! - **[`chains`]**: static registry of known EVM networks plus the
//!   network-match state used by the guard banner
//! - **[`types`]**: read-only projections of on-chain vesting state
//! - **[`bulk`]**: parsing and validation of bulk beneficiary/amount input
//! - **[`utils`]**: address validation and fixed-point display formatting
//!
//! ## Invariants owned here
//!
//! - A session's active account is always a member of its known-account
//!   list (or unset).
//! - Address-shaped input is validated against the `0x` + 40-hex-digit
//!   format before any caller gets to issue a remote call with it.
//! - Bulk submissions are rejected locally when the address and amount
//!   counts differ, or when any row fails validation.

pub mod bulk;
pub mod chains;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used items so downstream crates can keep short paths.
pub use bulk::*;
pub use chains::*;
pub use session::*;
pub use types::*;
pub use utils::*;
