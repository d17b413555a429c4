//! Words over a generator set.

use std::fmt;

use crate::decide::check_generators;
use crate::error::{BoundednessError, Result};
use crate::TropicalMatrix;

/// A finite sequence of generator indices (0-based letters).
///
/// Its value is the left-to-right product of the named generators; the
/// empty word denotes the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word {
    letters: Vec<usize>,
}

impl Word {
    /// Create a word from 0-based letters.
    pub fn new(letters: Vec<usize>) -> Self {
        Self { letters }
    }

    /// Decode a word of `length` letters from its base-`alphabet` code.
    ///
    /// The most significant digit is the first letter, so codes enumerate
    /// words of one length in lexicographic order.
    ///
    /// ```
    /// use tropical_bounded::Word;
    ///
    /// // 5 = 1·2² + 0·2 + 1
    /// let word = Word::from_code(5, 3, 2).unwrap();
    /// assert_eq!(word.letters(), &[1, 0, 1]);
    /// ```
    pub fn from_code(code: u64, length: usize, alphabet: usize) -> Result<Self> {
        if alphabet == 0 {
            return Err(BoundednessError::EmptyGenerators);
        }
        let base = alphabet as u64;
        let mut rest = code;
        let mut letters = vec![0; length];
        for slot in letters.iter_mut().rev() {
            *slot = (rest % base) as usize;
            rest /= base;
        }
        Ok(Self { letters })
    }

    /// The letters in order.
    #[inline]
    pub fn letters(&self) -> &[usize] {
        &self.letters
    }

    /// Number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether this is the empty word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Fail if any letter names no generator.
    pub fn check_letters(&self, alphabet: usize) -> Result<()> {
        match self.letters.iter().find(|&&l| l >= alphabet) {
            Some(&letter) => Err(BoundednessError::LetterOutOfRange { letter, alphabet }),
            None => Ok(()),
        }
    }

    /// The tropical product of the generators this word names.
    pub fn product(&self, generators: &[TropicalMatrix]) -> Result<TropicalMatrix> {
        let dimension = check_generators(generators)?;
        self.check_letters(generators.len())?;
        let mut result = TropicalMatrix::identity(dimension);
        for &letter in &self.letters {
            result.times_in_place(&generators[letter])?;
        }
        Ok(result)
    }
}

impl From<Vec<usize>> for Word {
    fn from(letters: Vec<usize>) -> Self {
        Self::new(letters)
    }
}

/// Lists the letters 1-based, e.g. `[1, 2, 2]`.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", letter + 1)?;
        }
        f.write_str("]")
    }
}
