/// Index of the largest count, or `None` when every count is zero.
///
/// Ties go to the lowest index: a later entry must be strictly greater to
/// take over.
pub fn majority_index(counts: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_count = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > best_count {
            best = Some(i);
            best_count = c;
        }
    }
    best
}

/// Shannon entropy in bits of a class histogram. Empty histograms have
/// entropy 0.
pub fn entropy_of_counts(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut entropy = 0.0;
    for &c in counts.iter().filter(|&&c| c > 0) {
        let p = c as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_prefers_first_of_tied_maxima() {
        assert_eq!(majority_index(&[2, 5, 5, 1]), Some(1));
        assert_eq!(majority_index(&[3, 3]), Some(0));
        assert_eq!(majority_index(&[0, 0, 1]), Some(2));
    }

    #[test]
    fn majority_of_nothing_is_none() {
        assert_eq!(majority_index(&[]), None);
        assert_eq!(majority_index(&[0, 0]), None);
    }

    #[test]
    fn entropy_reference_values() {
        assert_eq!(entropy_of_counts(&[4, 0]), 0.0);
        assert_eq!(entropy_of_counts(&[0, 0]), 0.0);
        assert!((entropy_of_counts(&[1, 1]) - 1.0).abs() < 1e-12);
        assert!((entropy_of_counts(&[1, 1, 1, 1]) - 2.0).abs() < 1e-12);
        // 9 yes / 5 no, the classic weather split
        assert!((entropy_of_counts(&[9, 5]) - 0.940_285_958_670_631).abs() < 1e-12);
    }
}
