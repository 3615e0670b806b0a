//! Parsed input text: the word sequence the wrapper and the width search
//! operate on.

/// A text split into words, with per-word character lengths cached.
///
/// Splitting happens once; the width search then probes many candidate widths
/// against the same `Text` without re-scanning the raw string. Words preserve
/// input order, are never empty, and never contain spaces. Runs of
/// consecutive separators are treated as one.
///
/// # Examples
///
/// ```
/// use riverrun::Text;
///
/// let text = Text::parse("ink flows down the page");
/// assert_eq!(text.word_count(), 5);
/// assert_eq!(text.longest_word_len(), 5);
/// assert_eq!(text.char_len(), 23);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text<'a> {
    words: Vec<&'a str>,
    /// Character length of each word, parallel to `words`.
    word_lens: Vec<usize>,
}

impl<'a> Text<'a> {
    /// Split `raw` on single spaces, discarding empty fragments.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut words = Vec::new();
        let mut word_lens = Vec::new();
        for word in raw.split(' ') {
            if word.is_empty() {
                continue;
            }
            words.push(word);
            word_lens.push(word.chars().count());
        }
        Self { words, word_lens }
    }

    /// The words in input order.
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Words paired with their cached character lengths.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.words
            .iter()
            .copied()
            .zip(self.word_lens.iter().copied())
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Character length of the longest word; 0 for an empty text.
    ///
    /// This is the narrowest width at which any layout exists.
    #[must_use]
    pub fn longest_word_len(&self) -> usize {
        self.word_lens.iter().copied().max().unwrap_or(0)
    }

    /// Canonical character length of the whole text: all words joined by
    /// single spaces. 0 for an empty text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        if self.words.is_empty() {
            return 0;
        }
        self.word_lens.iter().sum::<usize>() + self.words.len() - 1
    }
}
