/// A last-in-first-out stack.
///
/// Values are pushed onto and popped off the top of the stack.
/// ```
/// # use generics_store::stack::Stack;
/// let mut stack = Stack::empty();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.try_pop(), Some(1));
/// assert_eq!(stack.try_pop(), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    inner: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub const fn empty() -> Self {
        Self { inner: Vec::new() }
    }

    /// Create an empty stack
    pub const fn new() -> Self {
        Self::empty()
    }

    /// Create an empty stack with room for at least `cap` values
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Pop a value off the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    /// Check `Self::is_empty` first or use `Self::try_pop`.
    pub fn pop(&mut self) -> T {
        match self.inner.pop() {
            Some(value) => value,
            None => panic!("tried to pop a value off an empty stack"),
        }
    }

    /// Pop a value off the stack, or `None` if the stack is empty
    pub fn try_pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// A reference to the value on top of the stack
    pub fn peek(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Create an iterator over the values on the stack, from the bottom to the top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.inner.iter()
    }

    /// A draining iterator over the values on the stack.
    /// Values are yielded from the top of the stack to the bottom.
    /// ```
    /// # use generics_store::stack::Stack;
    /// let mut stack = Stack::empty();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// assert_eq!(stack.drain().next(), Some(2));
    /// assert!(stack.is_empty());
    /// ```
    pub fn drain(&mut self) -> impl DoubleEndedIterator<Item = T> + '_ {
        self.inner.drain(..).rev()
    }

    /// Clear the values from the stack
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Check if the stack contains a given value
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The last value of the iterator ends up on top of the stack
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::empty();
        stack.push(21);
        stack.push(22);
        stack.push(23);

        assert_eq!(23, stack.pop());
        assert_eq!(22, stack.pop());
        assert_eq!(21, stack.pop());
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty stack")]
    fn pop_empty() {
        let mut stack = Stack::<usize>::empty();
        stack.pop();
    }

    #[test]
    fn try_pop_empty() {
        let mut stack = Stack::<usize>::empty();
        assert_eq!(None, stack.try_pop());

        stack.push(1);
        assert_eq!(Some(1), stack.try_pop());
        assert_eq!(None, stack.try_pop());
    }

    #[test]
    fn peek() {
        let mut stack = Stack::empty();
        assert!(stack.peek().is_none());

        stack.push("a");
        stack.push("b");
        assert_eq!(Some(&"b"), stack.peek());
        assert_eq!(2, stack.len());
    }

    #[test]
    fn drain() {
        let mut stack = Stack::empty();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        let values = stack.drain().collect::<Vec<_>>();
        assert_eq!(vec![3, 2, 1], values);
        assert!(stack.is_empty());
    }

    #[test]
    fn drop_unfinished_drain() {
        let mut stack = Stack::empty();
        stack.push(1);
        stack.push(2);

        let mut iter = stack.drain();
        assert_eq!(2, iter.next().unwrap());
        drop(iter);

        assert!(stack.is_empty());
    }

    #[test]
    fn from_iter_and_extend() {
        let mut stack = (1..=3).collect::<Stack<_>>();
        stack.extend([4, 5]);

        assert!(stack.contains(&4));
        assert!(!stack.contains(&6));
        assert_eq!(vec![1, 2, 3, 4, 5], stack.iter().copied().collect::<Vec<_>>());
        assert_eq!(5, stack.pop());
    }

    #[test]
    fn clear() {
        let mut stack = Stack::with_capacity(4);
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert_eq!(0, stack.len());
        assert_eq!(None, stack.try_pop());
    }
}
