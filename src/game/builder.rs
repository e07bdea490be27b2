//! Slot-by-slot code entry

use crate::core::{Code, Color};

/// Collects one color pick at a time until a full code is entered
///
/// Shells feed it single picks (a key press, a click) and get a [`Code`] back
/// as soon as the last slot is filled. The builder is then empty again.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    length: usize,
    picks: Vec<Color>,
}

impl CodeBuilder {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            picks: Vec::with_capacity(length),
        }
    }

    /// Add a pick; returns the finished code when this filled the last slot
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    /// use mastermind::game::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::new(2);
    /// assert!(builder.push(Color::Red).is_none());
    /// let code = builder.push(Color::Blue).unwrap();
    /// assert_eq!(code.to_string(), "RB");
    /// assert!(builder.is_empty());
    /// ```
    pub fn push(&mut self, color: Color) -> Option<Code> {
        self.picks.push(color);
        if self.picks.len() < self.length {
            return None;
        }
        Some(Code::new(std::mem::take(&mut self.picks)))
    }

    /// Remove the most recent pick
    pub fn pop(&mut self) -> Option<Color> {
        self.picks.pop()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Picks entered so far
    #[must_use]
    pub fn picks(&self) -> &[Color] {
        &self.picks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Slots still to fill
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.length - self.picks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn completes_after_length_picks() {
        let mut builder = CodeBuilder::new(4);
        assert!(builder.push(Red).is_none());
        assert!(builder.push(Green).is_none());
        assert!(builder.push(Blue).is_none());
        assert_eq!(builder.remaining(), 1);

        let code = builder.push(Yellow).unwrap();
        assert_eq!(code.to_string(), "RGBY");
        assert!(builder.is_empty());
        assert_eq!(builder.remaining(), 4);
    }

    #[test]
    fn pop_and_clear() {
        let mut builder = CodeBuilder::new(4);
        builder.push(Red);
        builder.push(Green);
        assert_eq!(builder.pop(), Some(Green));
        assert_eq!(builder.picks(), &[Red]);

        builder.clear();
        assert!(builder.is_empty());
        assert_eq!(builder.pop(), None);
    }
}
