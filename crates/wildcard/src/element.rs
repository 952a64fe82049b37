// third-party imports
use memchr::memchr3;

// ---

/// A single unit of a pattern or subject sequence.
///
/// Implementors provide equality and the three reserved wildcard values.
/// The matcher never inspects elements beyond comparing them, so any
/// granularity works as long as the wildcards are distinguishable from
/// ordinary elements.
pub trait Element: Copy + Eq {
    /// Matches exactly one element.
    const DOT: Self;
    /// Matches zero or one element.
    const QUESTION: Self;
    /// Matches zero or more elements.
    const STAR: Self;

    #[inline]
    fn is_wildcard(self) -> bool {
        self == Self::DOT || self == Self::QUESTION || self == Self::STAR
    }

    /// Returns the position of the first wildcard in `items`, if any.
    #[inline]
    fn find_wildcard(items: &[Self]) -> Option<usize> {
        items.iter().position(|item| item.is_wildcard())
    }
}

impl Element for u8 {
    const DOT: Self = b'.';
    const QUESTION: Self = b'?';
    const STAR: Self = b'*';

    #[inline]
    fn find_wildcard(items: &[Self]) -> Option<usize> {
        memchr3(Self::DOT, Self::QUESTION, Self::STAR, items)
    }
}

impl Element for char {
    const DOT: Self = '.';
    const QUESTION: Self = '?';
    const STAR: Self = '*';
}
