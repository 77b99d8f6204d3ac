//! Arithmetic operators for runtime value lists
//!
//! Supported operators:
//! - Binary: Add `A + B`, Sub `A - B`, Mul `A * B`
//! - Unary: Double `V * 2`, Negate `-V`
//!
//! Overflow is reported as an error rather than wrapped or saturated, the
//! same as the compile-time operators.

use std::fmt;

use crate::type_level::{TypeLevelError, TypeLevelResult};

/// Integer types usable as value list elements
pub trait Numeric: Copy + PartialEq + fmt::Debug + fmt::Display {
    fn checked_add(
        self,
        rhs: Self,
    ) -> Option<Self>;

    fn checked_sub(
        self,
        rhs: Self,
    ) -> Option<Self>;

    fn checked_mul(
        self,
        rhs: Self,
    ) -> Option<Self>;

    /// `None` when `-self` is not representable: a nonzero unsigned value,
    /// or `MIN` of a signed type
    fn checked_neg(self) -> Option<Self>;

    fn to_i128(self) -> i128;
}

macro_rules! numeric {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn checked_add(self, rhs: Self) -> Option<Self> { <$t>::checked_add(self, rhs) }
            fn checked_sub(self, rhs: Self) -> Option<Self> { <$t>::checked_sub(self, rhs) }
            fn checked_mul(self, rhs: Self) -> Option<Self> { <$t>::checked_mul(self, rhs) }
            fn checked_neg(self) -> Option<Self> { <$t>::checked_neg(self) }
            fn to_i128(self) -> i128 { self as i128 }
        }
    )*};
}

numeric!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// Addition: +
    Add,

    /// Subtraction: -
    Sub,

    /// Multiplication: *
    Mul,
}

impl ArithOp {
    /// Apply the operator
    pub fn apply<T: Numeric>(
        self,
        lhs: T,
        rhs: T,
    ) -> TypeLevelResult<T> {
        let result = match self {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
        };
        result.ok_or_else(|| TypeLevelError::Overflow {
            op: format!("{} {} {}", lhs, self.symbol(), rhs),
        })
    }

    /// Operator name
    pub fn name(&self) -> &'static str {
        match self {
            ArithOp::Add => "Add",
            ArithOp::Sub => "Sub",
            ArithOp::Mul => "Mul",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
        }
    }
}

/// Unary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryArith {
    /// `V * 2`
    Double,

    /// `-V`; for unsigned types only `0` negates
    Negate,
}

impl UnaryArith {
    /// Apply the operator
    pub fn apply<T: Numeric>(
        self,
        val: T,
    ) -> TypeLevelResult<T> {
        let result = match self {
            UnaryArith::Double => val.checked_add(val),
            UnaryArith::Negate => val.checked_neg(),
        };
        result.ok_or_else(|| TypeLevelError::Overflow {
            op: format!("{}({})", self.name(), val),
        })
    }

    /// Operator name
    pub fn name(&self) -> &'static str {
        match self {
            UnaryArith::Double => "Double",
            UnaryArith::Negate => "Negate",
        }
    }
}
