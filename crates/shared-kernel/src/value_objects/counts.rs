// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Number of lines read from one file or accumulated over many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCount(usize);

impl LineCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a LineCount> for LineCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LineCount> for usize {
    fn from(value: LineCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for LineCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

/// Number of files that contributed to a tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileCount(usize);

impl FileCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Counts one more file.
    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Default for FileCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for FileCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for FileCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for FileCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<usize> for FileCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<FileCount> for usize {
    fn from(value: FileCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for FileCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::{FileCount, LineCount};

    // Delegate so width and alignment flags reach the inner integer.
    impl fmt::Display for LineCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.value(), f)
        }
    }

    impl fmt::Display for FileCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.value(), f)
        }
    }
}
