use num_traits::ops::wrapping::{WrappingAdd, WrappingMul, WrappingSub};
use num_traits::{One, Zero};
use std::fmt;

use crate::errors::*;

/// Binary operators understood by the calculator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Returns the operator for a character or `None` if the character is not an operator
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn priority(self) -> i32 {
        match self {
            Operator::Add | Operator::Sub => 0,
            Operator::Mul | Operator::Div => 1,
            Operator::Pow => 2,
        }
    }

    /// Only power is right associative: `2^3^2` is `2^(3^2)`
    pub fn is_right_assoc(self) -> bool {
        self == Operator::Pow
    }

    /// Decides whether `self`, already waiting on the operator stack, must be
    /// applied before `incoming` is pushed
    pub fn binds_before(self, incoming: Operator) -> bool {
        let (top, next) = (self.priority(), incoming.priority());
        top > next || (top == next && !incoming.is_right_assoc())
    }

    /// Calculates `left <op> right`. Addition, subtraction, multiplication and
    /// power wrap on overflow; division truncates toward zero
    pub fn calc(self, left: i64, right: i64) -> CalcResult {
        match self {
            Operator::Add => Ok(WrappingAdd::wrapping_add(&left, &right)),
            Operator::Sub => Ok(WrappingSub::wrapping_sub(&left, &right)),
            Operator::Mul => Ok(WrappingMul::wrapping_mul(&left, &right)),
            Operator::Div => {
                if right.is_zero() {
                    return Err(CalcError::DividedByZero);
                }
                // i64::MIN / -1 is the only overflowing case
                Ok(left.wrapping_div(right))
            }
            Operator::Pow => Ok(int_power(left, right)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Raises `x` to the power `y` by repeated multiplication. A negative `y`
/// performs no multiplication and returns one
pub(crate) fn int_power<T>(x: T, y: i64) -> T
where
    T: One + WrappingMul,
{
    let mut pow = T::one();
    let mut i = 0;
    while i < y {
        pow = pow.wrapping_mul(&x);
        i += 1;
    }
    pow
}
