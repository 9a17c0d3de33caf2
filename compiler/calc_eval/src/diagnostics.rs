//! Call frame tracking for the evaluator.
//!
//! Every user call and every forced deferred binding pushes a [`CallFrame`].
//! The depth check in [`CallStack::push`] turns runaway recursion, including
//! cyclic bindings such as `(set x x)`, into an error instead of a crash.

use calc_ir::{Name, Span};

use crate::errors::{depth_limit_exceeded, EvalError};

/// Default for `InterpreterBuilder::max_call_depth`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// A single frame in the live call stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CallFrame {
    /// Function called, or identifier whose binding is being forced.
    pub name: Name,
    /// Where the call or reference appears.
    pub call_span: Span,
}

/// Live call stack for the interpreter.
///
/// ```text
/// stack.push(CallFrame { name, call_span })?;
/// // ... evaluate ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` is unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(depth_limit_exceeded(max, frame.call_span));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn frame(span_start: u32) -> CallFrame {
        CallFrame {
            name: Name::EMPTY,
            call_span: Span::new(span_start, span_start + 1),
        }
    }

    #[test]
    fn test_push_pop() {
        let mut stack = CallStack::new(None);
        assert!(stack.is_empty());
        stack.push(frame(0)).ok();
        stack.push(frame(1)).ok();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_frame(), Some(&frame(1)));
        stack.pop();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_limit() {
        let mut stack = CallStack::new(Some(2));
        assert!(stack.push(frame(0)).is_ok());
        assert!(stack.push(frame(1)).is_ok());
        let err = stack.push(frame(2)).err();
        assert_eq!(
            err.map(|e| (e.kind, e.span)),
            Some((EvalErrorKind::DepthLimitExceeded { limit: 2 }, Span::new(2, 3)))
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(CallStack::default().max_depth(), Some(DEFAULT_MAX_CALL_DEPTH));
    }
}
