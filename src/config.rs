/// Capacities of the text buffers the programs read into.
///
/// Both capacities count the terminator slot of the fixed-size buffers the
/// exercises were written with, so a capacity of 10 holds at most 9 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub word_capacity: usize,
    pub name_capacity: usize,
}

impl Limits {
    pub const DEFAULT: Limits = Limits {
        word_capacity: 10,
        name_capacity: 100,
    };

    /// Longest word the repeater accepts.
    #[inline]
    pub fn max_word_len(&self) -> usize {
        self.word_capacity.saturating_sub(1)
    }

    /// Longest line the greeter keeps, trailing newline included.
    #[inline]
    pub fn max_name_len(&self) -> usize {
        self.name_capacity.saturating_sub(1)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
