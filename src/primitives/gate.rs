//! The NAND gate.
//!
//! Everything above this layer is treated as composed from it; nothing
//! below it is modelled.

/// Logical NAND: `false` only when both inputs are `true`.
///
/// | a     | b     | out   |
/// |-------|-------|-------|
/// | false | false | true  |
/// | false | true  | true  |
/// | true  | false | true  |
/// | true  | true  | false |
///
/// ```
/// use nirvana::nand;
///
/// assert!(nand(false, true));
/// assert!(!nand(true, true));
/// ```
#[inline(always)]
#[must_use]
pub const fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

// Truth table, checked at compile time.
const _: () = {
    assert!(nand(false, false));
    assert!(nand(false, true));
    assert!(nand(true, false));
    assert!(!nand(true, true));
};
