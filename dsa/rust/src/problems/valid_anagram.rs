use super::Counter;

/// Whether `a` and `b` use exactly the same letters the same number of times.
///
/// Anything that is not a letter (spaces, digits, punctuation) is ignored,
/// so `"restfu l"` and `"fluster"` are anagrams. Comparison is case sensitive.
pub fn is_anagram(a: &str, b: &str) -> bool {
    Counter::letters(a) == Counter::letters(b)
}
