//! Integer addition, plus a tiny suite of named checks showing how a
//! passing and a failing assertion are reported.

pub mod demo;

/// Errors from the checked arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{a} + {b} overflows i32")]
    Overflow { a: i32, b: i32 },
}

/// Wraps on overflow, the same in debug and release builds.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Like [`add`], but reports overflow instead of wrapping.
pub fn try_add(a: i32, b: i32) -> Result<i32, Error> {
    a.checked_add(b).ok_or(Error::Overflow { a, b })
}
