//! Defines traits for converting trie words into symbol sequences and back.
use std::borrow::Cow;

/// A trait for word types that can be viewed as a sequence of symbols `S`.
///
/// `Cow` allows for borrowing if the word can provide a direct slice,
/// or owning (e.g., collecting the `char`s of a `str`) if a conversion is
/// necessary.
pub trait AsSymbols<S: Clone> {
    /// Converts the word into a `Cow<[S]>`.
    fn symbols(&self) -> Cow<'_, [S]>;
}

/// A trait for owned word types that can be rebuilt from a symbol sequence.
///
/// Used by operations that hand stored words back to the caller, such as
/// `keys_with_prefix` and `longest_prefix`.
pub trait FromSymbols<S> {
    /// Builds the word spelled by `symbols`.
    fn from_symbols(symbols: &[S]) -> Self;
}

impl AsSymbols<char> for str {
    fn symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl AsSymbols<char> for String {
    fn symbols(&self) -> Cow<'_, [char]> {
        self.as_str().symbols()
    }
}

impl AsSymbols<u8> for str {
    fn symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl AsSymbols<u8> for String {
    fn symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl<S: Clone> AsSymbols<S> for [S] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self)
    }
}

impl<S: Clone> AsSymbols<S> for Vec<S> {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<S: Clone, const N: usize> AsSymbols<S> for [S; N] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(&self[..])
    }
}

impl<S: Clone, T: AsSymbols<S> + ?Sized> AsSymbols<S> for &T {
    fn symbols(&self) -> Cow<'_, [S]> {
        (**self).symbols()
    }
}

impl FromSymbols<char> for String {
    fn from_symbols(symbols: &[char]) -> Self {
        symbols.iter().collect()
    }
}

impl<S: Clone> FromSymbols<S> for Vec<S> {
    fn from_symbols(symbols: &[S]) -> Self {
        symbols.to_vec()
    }
}
