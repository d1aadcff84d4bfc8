//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! `Nand` is the only gate defined here; `Not` and `And` exist because
//! `Nand` is written in terms of them.

use super::gate;

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical NOT
    type Not: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical NAND, i.e. `Not<And<Other>>`
    type Nand<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type Not = Absent;
    type And<Other: Bool> = Other;
    type Nand<Other: Bool> = Other::Not;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type Not = Present;
    type And<Other: Bool> = Absent;
    type Nand<Other: Bool> = Present;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Type-level bool for a const bool.
pub type Select<const B: bool> = <() as SelectBool<B>>::Out;

/// Type-level NAND of `A` and `B`.
pub type Nand<A, B> = <A as Bool>::Nand<B>;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <Select<C> as Bool>::If<T, E>;

/// `true` when the type-level NAND of `A` and `B` agrees with [`gate::nand`].
pub const fn agrees<A: Bool, B: Bool>() -> bool {
    <Nand<A, B> as Bool>::VALUE == gate::nand(A::VALUE, B::VALUE)
}

const _: () = {
    assert!(agrees::<Absent, Absent>());
    assert!(agrees::<Absent, Present>());
    assert!(agrees::<Present, Absent>());
    assert!(agrees::<Present, Present>());
};
