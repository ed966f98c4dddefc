use std::fmt;

/// Expression calculation result: either value or error
pub type CalcResult = Result<i64, CalcError>;
pub type CalcErrorResult = Result<(), CalcError>;

#[derive(Clone, Debug, PartialEq)]
pub enum CalcError {
    /// an operator was found while an operand was due
    OperandExpected,
    /// a number followed another number with no operator in between
    OperatorExpected,
    IllegalChar(char),
    /// a stack was popped or peeked while empty; holds the stack name
    StackUnderflow(&'static str),
    TooManyOperands,
    DividedByZero,
}

impl std::error::Error for CalcError {}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::OperandExpected => write!(f, "operand expected but operator found"),
            CalcError::OperatorExpected => write!(f, "operator expected but operand found"),
            CalcError::IllegalChar(c) => write!(f, "{:?} is an illegal character", c),
            CalcError::StackUnderflow(name) => write!(f, "{} stack underflow", name),
            CalcError::TooManyOperands => write!(f, "too many operands"),
            CalcError::DividedByZero => write!(f, "division by zero"),
        }
    }
}
