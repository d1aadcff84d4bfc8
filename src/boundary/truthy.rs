//! Truthiness of host values.
//!
//! A value is truthy when it is "present / non-zero": non-zero numbers,
//! non-empty strings, `Some` of a truthy value.

use std::borrow::Cow;

use thiserror::Error;

/// Why a value has no truth value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot interpret `{type_name}` as a boolean: {reason}")]
pub struct Uncoercible {
    pub type_name: Cow<'static, str>,
    pub reason: Cow<'static, str>,
}

impl Uncoercible {
    pub fn new(
        type_name: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// A host value that may be interpreted as a boolean.
///
/// Object-safe: a call's arguments arrive as `&[&dyn Truthy]`.
pub trait Truthy {
    fn truthy(&self) -> Result<bool, Uncoercible>;
}

impl Truthy for bool {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        Ok(*self)
    }
}

macro_rules! impl_truthy_nonzero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn truthy(&self) -> Result<bool, Uncoercible> {
                    Ok(*self != 0)
                }
            }
        )*
    };
}

impl_truthy_nonzero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// NaN compares unequal to zero, so it is truthy.
impl Truthy for f32 {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        Ok(*self != 0.0)
    }
}

impl Truthy for f64 {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        Ok(*self != 0.0)
    }
}

impl Truthy for str {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        Ok(!self.is_empty())
    }
}

impl Truthy for String {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        self.as_str().truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truthy(&self) -> Result<bool, Uncoercible> {
        match self {
            Some(value) => value.truthy(),
            None => Ok(false),
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        (**self).truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn truthy(&self) -> Result<bool, Uncoercible> {
        (**self).truthy()
    }
}
