use std::collections::BTreeMap;

/// Character frequency multiset.
///
/// Backed by an ordered map so that equal multisets compare and hash equally,
/// which makes two anagrams produce the same `Counter`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Counter {
    counts: BTreeMap<char, usize>,
}

impl Counter {
    /// Counts every character of `s`, whitespace and punctuation included.
    pub fn new(s: &str) -> Self {
        s.chars().collect()
    }

    /// Counts only the alphabetic characters of `s`.
    pub fn letters(s: &str) -> Self {
        s.chars().filter(|c| c.is_alphabetic()).collect()
    }

    fn increment(&mut self, c: char) {
        *self.counts.entry(c).or_insert(0) += 1;
    }

    /// How many times `c` was counted, zero when never seen.
    pub fn get(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of characters counted, duplicates included.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Highest count, ties resolved towards the smallest character.
    pub fn most_common(&self) -> Option<(char, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(char, usize)>, (&c, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((c, n)),
            })
    }

    /// `(char, count)` pairs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl FromIterator<char> for Counter {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counter = Counter::default();
        for c in iter {
            counter.increment(c);
        }
        counter
    }
}

impl From<&str> for Counter {
    fn from(s: &str) -> Self {
        Counter::new(s)
    }
}
