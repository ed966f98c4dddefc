use log::debug;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::errors::*;
use crate::stack::Evaluator;
use crate::value::Operator;

const ERROR_PREFIX: &str = "illegal expression: ";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Operand(i64),
    Op(Operator),
    OpenB,
    CloseB,
}

/// Informational message produced while scanning: a bracket was seen.
/// Brackets are reported but do not group subexpressions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notice {
    OpenB,
    CloseB,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Notice::OpenB => write!(f, "{:?} is an open parenthesis", '('),
            Notice::CloseB => write!(f, "{:?} is a close parenthesis", ')'),
        }
    }
}

/// Splits an expression into tokens on demand, skipping spaces. An illegal
/// character ends the scan with an error at the point it is reached
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(expr: &'a str) -> Self {
        Lexer {
            chars: expr.chars().peekable(),
        }
    }

    // consumes the digit run starting at the current position
    fn number(&mut self) -> i64 {
        let mut v: i64 = 0;
        while let Some(&c) = self.chars.peek() {
            let Some(d) = c.to_digit(10) else {
                break;
            };
            v = v.wrapping_mul(10).wrapping_add(i64::from(d));
            self.chars.next();
        }
        v
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &c = self.chars.peek()?;
            if c.is_ascii_digit() {
                return Some(Ok(Token::Operand(self.number())));
            }
            self.chars.next();
            let tok = match c {
                ' ' => continue,
                '(' => Token::OpenB,
                ')' => Token::CloseB,
                _ => match Operator::from_char(c) {
                    Some(op) => Token::Op(op),
                    None => return Some(Err(CalcError::IllegalChar(c))),
                },
            };
            return Some(Ok(tok));
        }
    }
}

/// Evaluates an expression and returns either result or error. Brackets met
/// on the way are appended to `notices` in the order they appear, including
/// those seen before an error stopped the evaluation
pub fn eval_with_notices(expr: &str, notices: &mut Vec<Notice>) -> CalcResult {
    let mut stk = Evaluator::new();
    let mut operand_expected = true;

    for tok in Lexer::new(expr) {
        match tok? {
            Token::Operand(v) => {
                if !operand_expected {
                    return Err(CalcError::OperatorExpected);
                }
                stk.push_value(v);
                operand_expected = false;
            }
            Token::Op(op) => {
                if operand_expected {
                    return Err(CalcError::OperandExpected);
                }
                stk.push_op(op)?;
                operand_expected = true;
            }
            Token::OpenB => notices.push(Notice::OpenB),
            Token::CloseB => notices.push(Notice::CloseB),
        }
    }
    stk.calculate()
}

/// evaluates a given expression and returns either result or error
pub fn eval(expr: &str) -> CalcResult {
    let mut notices = Vec::new();
    eval_with_notices(expr, &mut notices)
}

/// Returns the output lines for one input line: a line per bracket and then
/// either the result or `illegal expression: <reason>`
pub fn render(expr: &str) -> Vec<String> {
    let mut notices = Vec::new();
    let res = eval_with_notices(expr, &mut notices);
    match &res {
        Ok(v) => debug!("{:?} = {}", expr, v),
        Err(e) => debug!("{:?} failed: {}", expr, e),
    }

    let mut lines: Vec<String> = notices.iter().map(|n| n.to_string()).collect();
    lines.push(match res {
        Ok(v) => v.to_string(),
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    });
    lines
}
