//! # Layer 0: Primitives
//!
//! - `gate.rs`: The NAND gate over strict `bool`s.
//! - `bool.rs`: The same gate over type-level booleans (Present/Absent).

pub mod bool;
pub mod gate;

// Re-export key types at this level
pub use bool::{Absent, Bool, Nand, Present, Select, SelectBool};
pub use gate::nand;
