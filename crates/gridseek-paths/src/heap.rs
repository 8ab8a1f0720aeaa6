//! A binary min-heap ordered by a caller-supplied score accessor.
//!
//! Unlike [`std::collections::BinaryHeap`], [`ScoreHeap`] lets callers find
//! an element by identity after insertion: it can be removed from the middle
//! of the heap or moved after its score changed. Identity is the element's
//! `PartialEq`, so an element type may compare equal on a node id while
//! carrying a score that differs between copies.

use crate::error::QueueError;

/// Array-backed binary min-heap.
///
/// For every element at index `i`, the score of the element is not greater
/// than the scores of its children at `2i + 1` and `2i + 2`. Elements with
/// equal scores come out in no particular order.
pub struct ScoreHeap<T, F> {
    content: Vec<T>,
    score: F,
}

impl<T, F> ScoreHeap<T, F> {
    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The element with the smallest score, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.content.first()
    }

    /// The backing array in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.content
    }

    /// Drop every queued element, keeping the allocation.
    pub fn clear(&mut self) {
        self.content.clear();
    }
}

impl<T, F, S> ScoreHeap<T, F>
where
    F: Fn(&T) -> S,
    S: PartialOrd,
{
    /// Create an empty heap ordered by `score`.
    pub fn new(score: F) -> Self {
        Self {
            content: Vec::new(),
            score,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, score: F) -> Self {
        Self {
            content: Vec::with_capacity(capacity),
            score,
        }
    }

    /// Score of `element` as seen by this heap.
    #[inline]
    pub fn score_of(&self, element: &T) -> S {
        (self.score)(element)
    }

    /// Insert `element`.
    pub fn push(&mut self, element: T) {
        self.content.push(element);
        self.sink(self.content.len() - 1);
    }

    /// Remove and return the element with the smallest score.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let end = self.content.pop().ok_or(QueueError::Empty)?;
        if self.content.is_empty() {
            return Ok(end);
        }
        let root = std::mem::replace(&mut self.content[0], end);
        self.bubble(0);
        Ok(root)
    }

    /// Whether an element equal to `element` is queued.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(element).is_some()
    }

    /// Remove the queued element equal to `element` and return it.
    ///
    /// Returns `None` if no such element is queued.
    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let i = self.position(element)?;
        let end = self.content.pop()?;
        if i == self.content.len() {
            return Some(end);
        }
        let removed = std::mem::replace(&mut self.content[i], end);
        if (self.score)(&self.content[i]) < (self.score)(&removed) {
            self.sink(i);
        } else {
            self.bubble(i);
        }
        Some(removed)
    }

    /// Replace the queued element equal to `element` with `element` and
    /// move it to where its new score belongs.
    ///
    /// Both cheaper and more expensive scores are handled.
    pub fn rescore(&mut self, element: T) -> Result<(), QueueError>
    where
        T: PartialEq,
    {
        let i = self.position(&element).ok_or(QueueError::NotQueued)?;
        self.content[i] = element;
        if self.sink(i) == i {
            self.bubble(i);
        }
        Ok(())
    }

    fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.content.iter().position(|e| e == element)
    }

    /// Move the element at `n` toward the root while it scores below its
    /// parent. Returns its final index.
    fn sink(&mut self, mut n: usize) -> usize {
        while n > 0 {
            let parent = ((n + 1) >> 1) - 1;
            if (self.score)(&self.content[n]) < (self.score)(&self.content[parent]) {
                self.content.swap(n, parent);
                n = parent;
            } else {
                break;
            }
        }
        n
    }

    /// Move the element at `n` away from the root while a child scores
    /// below it, always swapping with the cheaper child.
    fn bubble(&mut self, mut n: usize) {
        let len = self.content.len();
        let elem_score = (self.score)(&self.content[n]);

        loop {
            let child2 = (n + 1) << 1;
            let child1 = child2 - 1;
            let mut swap: Option<(usize, S)> = None;

            if child1 < len {
                let s = (self.score)(&self.content[child1]);
                if s < elem_score {
                    swap = Some((child1, s));
                }
            }
            if child2 < len {
                let s = (self.score)(&self.content[child2]);
                let cheaper = match &swap {
                    Some((_, s1)) => s < *s1,
                    None => s < elem_score,
                };
                if cheaper {
                    swap = Some((child2, s));
                }
            }

            match swap {
                Some((c, _)) => {
                    self.content.swap(n, c);
                    n = c;
                }
                None => break,
            }
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for ScoreHeap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreHeap")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
