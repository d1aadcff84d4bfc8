//! # nirvana
//!
//! The NAND gate, taken as given, and the glue that lets a host call it.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - nand(bool, bool) -> bool, type-level Nand<A, B>                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Boundary                                                |
//! |  - Truthy (host value -> bool), ArgumentError, coerce_args        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Registration                                            |
//! |  - exports! table, MODULE                                         |
//! |  - python: PyO3 module `nirvana` (feature = "python")             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nirvana::{nand, MODULE};
//!
//! assert!(nand(true, false));
//!
//! // Through the boundary, as a host would call it
//! assert_eq!(MODULE.call("nand", &[&1, &"yes"]), Ok(false));
//! assert!(MODULE.call("nand", &[&true]).is_err());
//! ```
//!
//! ## Features
//!
//! - `python`: compile the PyO3 binding module.
//! - `extension-module`: `python`, linked for `import nirvana` from CPython.

// Re-export paste for the exports! macro
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Boundary
// =============================================================================
pub mod boundary;

// =============================================================================
// Layer 2: Registration
// =============================================================================
pub mod registry;

#[cfg(feature = "python")]
pub mod python;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================
pub use boundary::{ArgumentError, Truthy, Uncoercible};
pub use primitives::{nand, Absent, Bool, Nand, Present};
pub use registry::{Export, Module, EXPORTS, MODULE};
