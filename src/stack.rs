use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack underflow")]
    Underflow
}

type Result<T> = std::result::Result<T, StackError>;

/// Last-in-first-out container. `len()` is the number of pushes minus pops since the last `clear()`.
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item)
    }

    pub fn pop(&mut self) -> Result<T> {
        self.0.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Result<&T> {
        self.0.last().ok_or(StackError::Underflow)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        for i in 1..=5 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 5);

        let popped: Vec<_> = (0..5).map(|_| stack.pop().unwrap()).collect();
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.peek(), Ok(&'b'));
        assert_eq!(stack.peek(), Ok(&'b'));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn clear_resets_length() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.pop().unwrap();
        stack.push(3);
        stack.clear();
        assert_eq!(stack.len(), 0);

        stack.push(9);
        assert_eq!(stack.pop(), Ok(9));
    }

    #[test]
    fn underflow_on_empty() {
        let mut stack: Stack<u32> = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.peek(), Err(StackError::Underflow));

        stack.push(1);
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }
}
