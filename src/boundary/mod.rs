//! # Layer 1: Boundary
//!
//! Everything between a host call and the gate: arity and keyword checks,
//! then coercion of each argument to a strict `bool`. The gate itself never
//! fails; every error in this crate is raised here.

pub mod truthy;

pub use truthy::{Truthy, Uncoercible};

use thiserror::Error;

/// A call that cannot reach the gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgumentError {
    #[error("{function}() takes exactly {expected} argument{} ({given} given)", suffix(.expected))]
    Arity {
        function: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("{function}() takes no keyword arguments")]
    Keywords { function: &'static str },

    #[error("{function}() argument {position}: {source}")]
    Coercion {
        function: &'static str,
        /// 1-based
        position: usize,
        #[source]
        source: Uncoercible,
    },

    #[error("module has no function `{name}`")]
    UnknownFunction { name: String },
}

fn suffix(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

/// Check arity, then coerce each argument left to right.
///
/// Arity is validated before any argument is touched, so a malformed call
/// never runs a host value's truthiness hook.
pub fn coerce_args<const N: usize>(
    function: &'static str,
    args: &[&dyn Truthy],
) -> Result<[bool; N], ArgumentError> {
    if args.len() != N {
        return Err(ArgumentError::Arity {
            function,
            expected: N,
            given: args.len(),
        });
    }

    let mut out = [false; N];
    for (position, (slot, arg)) in out.iter_mut().zip(args).enumerate() {
        *slot = arg.truthy().map_err(|source| ArgumentError::Coercion {
            function,
            position: position + 1,
            source,
        })?;
    }
    Ok(out)
}

/// Exported functions are positional-only.
pub fn reject_keywords(function: &'static str, count: usize) -> Result<(), ArgumentError> {
    if count == 0 {
        Ok(())
    } else {
        Err(ArgumentError::Keywords { function })
    }
}
