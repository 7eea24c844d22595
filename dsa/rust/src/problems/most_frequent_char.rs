use super::Counter;

/// Most frequent character in `s`. Ties go to whichever appears first in `s`.
pub fn most_frequent_char(s: &str) -> Option<char> {
    let counter = Counter::new(s);

    let mut best: Option<(char, usize)> = None;
    for c in s.chars() {
        let count = counter.get(c);
        match best {
            Some((_, max)) if max >= count => {}
            _ => best = Some((c, count)),
        }
    }

    best.map(|(c, _)| c)
}
