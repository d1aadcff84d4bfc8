//! # Layer 2: Registration
//!
//! The exported surface as data: one static table listing every function a
//! host may call, and the module that owns it. Host bindings walk the table
//! once at load time; nothing in it changes afterwards.
//!
//! ```text
//! exports! { name(args) => gate, doc; }
//!        |
//!        +--> __export_name(&[&dyn Truthy])   (coerce_args, then gate)
//!        +--> Export { name, arity, doc, entry }
//! ```

use core::ffi::CStr;
use core::fmt;

use crate::boundary::{ArgumentError, Truthy};

/// Entry point generated for each export.
pub type Entry = fn(&[&dyn Truthy]) -> Result<bool, ArgumentError>;

/// One exported function.
#[derive(Clone, Copy)]
pub struct Export {
    pub name: &'static str,
    /// `name`, NUL-terminated
    pub c_name: &'static CStr,
    pub arity: usize,
    pub doc: &'static str,
    /// `doc`, NUL-terminated
    pub c_doc: &'static CStr,
    pub entry: Entry,
}

impl Export {
    /// Validate, coerce, and run the gate.
    pub fn call(&self, args: &[&dyn Truthy]) -> Result<bool, ArgumentError> {
        match (self.entry)(args) {
            Ok(out) => {
                tracing::trace!(function = self.name, out, "call");
                Ok(out)
            }
            Err(err) => {
                tracing::debug!(function = self.name, given = args.len(), %err, "rejected call");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Export")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

/// A named collection of exports.
#[derive(Debug, Clone, Copy)]
pub struct Module {
    pub name: &'static str,
    pub doc: &'static str,
    pub exports: &'static [Export],
}

impl Module {
    pub fn get(&self, name: &str) -> Option<&'static Export> {
        self.exports.iter().find(|export| export.name == name)
    }

    /// Call an export by name.
    pub fn call(&self, name: &str, args: &[&dyn Truthy]) -> Result<bool, ArgumentError> {
        let export = self.get(name).ok_or_else(|| ArgumentError::UnknownFunction {
            name: name.to_owned(),
        })?;
        export.call(args)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.exports.iter().map(|export| export.name)
    }
}

#[doc(hidden)]
pub const fn c_str(with_nul: &'static str) -> &'static CStr {
    match CStr::from_bytes_with_nul(with_nul.as_bytes()) {
        Ok(s) => s,
        Err(_) => panic!("export name or doc contains an interior NUL"),
    }
}

// =============================================================================
// exports! - Declarative registration
// =============================================================================

/// Declare a table of exported gates.
///
/// Each line names the export, its parameters, the `fn(bool, ..) -> bool`
/// it forwards to, and its doc string. Arity is the parameter count.
///
/// ```
/// use nirvana::exports;
///
/// fn xnor(a: bool, b: bool) -> bool { a == b }
///
/// exports! {
///     const TABLE = [
///         xnor(a, b) => xnor, "Equality of two truthy values.";
///     ];
/// }
///
/// assert_eq!(TABLE[0].arity, 2);
/// assert_eq!(TABLE[0].call(&[&1, &0]), Ok(false));
/// ```
#[macro_export]
macro_rules! exports {
    (
        $(#[$meta:meta])*
        $vis:vis const $table:ident = [
            $( $name:ident ( $($arg:ident),* $(,)? ) => $gate:path, $doc:literal; )*
        ];
    ) => {
        $crate::paste::paste! {
            $(
                fn [<__export_ $name>](
                    args: &[&dyn $crate::boundary::Truthy],
                ) -> ::core::result::Result<bool, $crate::boundary::ArgumentError> {
                    let [$($arg),*] = $crate::boundary::coerce_args::<{ $crate::__count!($($arg)*) }>(
                        stringify!($name),
                        args,
                    )?;
                    ::core::result::Result::Ok($gate($($arg),*))
                }
            )*

            $(#[$meta])*
            $vis const $table: &[$crate::registry::Export] = &[
                $(
                    $crate::registry::Export {
                        name: stringify!($name),
                        c_name: $crate::registry::c_str(concat!(stringify!($name), "\0")),
                        arity: $crate::__count!($($arg)*),
                        doc: $doc,
                        c_doc: $crate::registry::c_str(concat!($doc, "\0")),
                        entry: [<__export_ $name>],
                    },
                )*
            ];
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + $crate::__count!($($tail)*) };
}

// =============================================================================
// The nirvana module
// =============================================================================

exports! {
    /// Functions exported by [`MODULE`].
    pub const EXPORTS = [
        nand(a, b) => crate::primitives::gate::nand, "Logical NAND of two truthy values.";
    ];
}

/// Primitive chips, taken as given.
pub static MODULE: Module = Module {
    name: "nirvana",
    doc: "Primitive chips written in Rust, taken as given.",
    exports: EXPORTS,
};
