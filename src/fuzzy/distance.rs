// File: src/fuzzy/distance.rs

/// Damerau-Levenshtein distance (optimal string alignment form) between two
/// strings, counted in chars. Insertion, deletion, substitution and swapping
/// two adjacent chars each cost 1.
///
/// Complexity: O(|a| * |b|) time and space over a `(|a|+1) x (|b|+1)` table.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (table[(i - 1) * width + j] + 1)
                .min(table[i * width + j - 1] + 1)
                .min(table[(i - 1) * width + j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(table[(i - 2) * width + j - 2] + 1);
            }
            table[i * width + j] = best;
        }
    }

    table[a.len() * width + b.len()]
}

#[cfg(test)]
mod tests {
    use super::damerau_levenshtein;

    #[test]
    fn identical_and_empty() {
        assert_eq!(damerau_levenshtein("depot", "depot"), 0);
        assert_eq!(damerau_levenshtein("", "depot"), 5);
        assert_eq!(damerau_levenshtein("depot", ""), 5);
        assert_eq!(damerau_levenshtein("", ""), 0);
    }

    #[test]
    fn transposition_is_one_edit() {
        assert_eq!(damerau_levenshtein("adn", "and"), 1);
        assert_eq!(damerau_levenshtein("teh", "the"), 1);
        assert_eq!(damerau_levenshtein("opne", "open"), 1);
    }

    #[test]
    fn single_operations() {
        assert_eq!(damerau_levenshtein("opning", "opening"), 1);
        assert_eq!(damerau_levenshtein("depots", "depot"), 1);
        assert_eq!(damerau_levenshtein("hours", "houses"), 2);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(damerau_levenshtein("café", "cafe"), 1);
    }
}
