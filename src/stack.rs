use log::trace;

use crate::errors::*;
use crate::value::Operator;

/// LIFO container. `pop` and `top` on an empty stack report a
/// `StackUnderflow` carrying the stack's name
#[derive(Clone, Debug)]
pub struct Stack<T> {
    name: &'static str,
    items: Vec<T>,
}

impl<T: Copy> Stack<T> {
    pub fn new(name: &'static str) -> Self {
        Stack {
            name,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, v: T) {
        self.items.push(v);
    }

    pub fn pop(&mut self) -> Result<T, CalcError> {
        self.items.pop().ok_or(CalcError::StackUnderflow(self.name))
    }

    /// Returns the top value without removing it
    pub fn top(&self) -> Result<T, CalcError> {
        self.items.last().copied().ok_or(CalcError::StackUnderflow(self.name))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// The pair of stacks used to evaluate a single expression: operands and
/// operators waiting for their right-hand side
pub struct Evaluator {
    values: Stack<i64>,
    queue: Stack<Operator>,
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator {
            values: Stack::new("operand"),
            queue: Stack::new("operator"),
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push_value(&mut self, v: i64) {
        trace!("push operand {}", v);
        self.values.push(v);
    }

    /// Applies every waiting operator that binds tighter than `op` (or as
    /// tight, for left associative `op`) and then queues `op`
    pub fn push_op(&mut self, op: Operator) -> CalcErrorResult {
        while !self.queue.is_empty() {
            if !self.queue.top()?.binds_before(op) {
                break;
            }
            self.apply()?;
        }
        trace!("push operator {}", op);
        self.queue.push(op);
        Ok(())
    }

    /// Pops an operator, then its right and left operands, and pushes the result
    pub fn apply(&mut self) -> CalcErrorResult {
        let op = self.queue.pop()?;
        let right = self.values.pop()?;
        let left = self.values.pop()?;
        let v = op.calc(left, right)?;
        trace!("apply {} {} {} = {}", left, op, right, v);
        self.values.push(v);
        Ok(())
    }

    /// Applies all remaining operators. Must be called only after the
    /// expression ends. Consumes the evaluator: the stacks live for one
    /// expression only
    pub fn calculate(mut self) -> CalcResult {
        while !self.queue.is_empty() {
            self.apply()?;
        }
        let result = self.values.pop()?;
        if !self.values.is_empty() {
            return Err(CalcError::TooManyOperands);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack() {
        let mut stack: Stack<i64> = Stack::new("operand");
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(CalcError::StackUnderflow("operand")));
        assert_eq!(stack.top(), Err(CalcError::StackUnderflow("operand")));
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Ok(2));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_simple_order() {
        let mut stack = Evaluator::new();
        // 2 + 3 * 2 + 5 = 13
        stack.push_value(2);
        let _ = stack.push_op(Operator::Add);
        stack.push_value(3);
        let _ = stack.push_op(Operator::Mul);
        stack.push_value(2);
        let _ = stack.push_op(Operator::Add);
        stack.push_value(5);
        assert_eq!(stack.calculate(), Ok(13));
    }

    #[test]
    fn test_left_assoc() {
        let mut stack = Evaluator::new();
        // 100 / 10 / 5 = 2
        stack.push_value(100);
        let _ = stack.push_op(Operator::Div);
        stack.push_value(10);
        let _ = stack.push_op(Operator::Div);
        stack.push_value(5);
        assert_eq!(stack.calculate(), Ok(2));
    }

    #[test]
    fn test_power() {
        let mut stack = Evaluator::new();
        // 5 + 2 ^ 2 ^ 3 + 1 = 262
        stack.push_value(5);
        let _ = stack.push_op(Operator::Add);
        stack.push_value(2);
        let _ = stack.push_op(Operator::Pow);
        stack.push_value(2);
        let _ = stack.push_op(Operator::Pow);
        stack.push_value(3);
        let _ = stack.push_op(Operator::Add);
        stack.push_value(1);
        assert_eq!(stack.calculate(), Ok(262));
    }

    #[test]
    fn test_apply_underflow() {
        let mut stack = Evaluator::new();
        assert_eq!(stack.apply(), Err(CalcError::StackUnderflow("operator")));

        let mut stack = Evaluator::new();
        stack.push_value(1);
        let _ = stack.push_op(Operator::Sub);
        assert_eq!(stack.calculate(), Err(CalcError::StackUnderflow("operand")));

        assert_eq!(Evaluator::new().calculate(), Err(CalcError::StackUnderflow("operand")));
    }

    #[test]
    fn test_too_many_operands() {
        let mut stack = Evaluator::new();
        stack.push_value(3);
        stack.push_value(4);
        assert_eq!(stack.calculate(), Err(CalcError::TooManyOperands));
    }

    #[test]
    fn test_division_by_zero() {
        let mut stack = Evaluator::new();
        stack.push_value(5);
        let _ = stack.push_op(Operator::Div);
        stack.push_value(0);
        assert_eq!(stack.calculate(), Err(CalcError::DividedByZero));
    }
}
