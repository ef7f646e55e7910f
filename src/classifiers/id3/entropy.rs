use crate::core::instances::Instance;
use crate::utils::math::{entropy_of_counts, majority_index};

/// Class-distribution summary of the instances a predicate selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropySummary {
    /// Shannon entropy in bits; 0 for an empty selection.
    pub entropy: f64,
    /// Class with the highest count, lowest index on ties. `None` when
    /// nothing was selected.
    pub most_common_class: Option<usize>,
    pub size: usize,
}

pub fn entropy<I, P>(subset: &[I], number_of_classes: usize, predicate: P) -> EntropySummary
where
    I: Instance,
    P: Fn(&I) -> bool,
{
    let mut counts = vec![0usize; number_of_classes];
    let mut size = 0;
    for instance in subset.iter().filter(|i| predicate(i)) {
        counts[instance.class_value()] += 1;
        size += 1;
    }

    EntropySummary {
        entropy: entropy_of_counts(&counts),
        most_common_class: majority_index(&counts),
        size,
    }
}

/// Entropy reduction obtained by partitioning `subset` on `split_attribute`.
///
/// Equivalent to evaluating [`entropy`] once per domain value with an
/// `value == v` predicate, but done in a single pass over `subset`. Values
/// nobody takes contribute neither weight nor entropy.
pub fn information_gain<I: Instance>(
    subset: &[I],
    number_of_classes: usize,
    current_entropy: f64,
    split_attribute: usize,
    split_domain_size: usize,
) -> f64 {
    if subset.is_empty() {
        return 0.0;
    }

    let mut counts = vec![vec![0usize; number_of_classes]; split_domain_size];
    for instance in subset {
        counts[instance.value_at_index(split_attribute)][instance.class_value()] += 1;
    }

    let total = subset.len() as f64;
    let remainder: f64 = counts
        .iter()
        .map(|per_class| {
            let n: usize = per_class.iter().sum();
            if n == 0 {
                0.0
            } else {
                (n as f64 / total) * entropy_of_counts(per_class)
            }
        })
        .sum();

    current_entropy - remainder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{dataset_from_rows, random_dataset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn entropy_of_pure_and_mixed_sets() {
        let ds = dataset_from_rows(&[2], 2, &[[0, 0], [0, 0], [1, 1], [1, 1]]);
        let all = ds.instances();

        let whole = entropy(&all, 2, |_| true);
        assert!((whole.entropy - 1.0).abs() < 1e-12);
        assert_eq!(whole.most_common_class, Some(0));
        assert_eq!(whole.size, 4);

        let left = entropy(&all, 2, |i| i.value_at_index(0) == 0);
        assert_eq!(left.entropy, 0.0);
        assert_eq!(left.most_common_class, Some(0));
        assert_eq!(left.size, 2);
    }

    #[test]
    fn empty_selection_has_zero_entropy_and_no_class() {
        let ds = dataset_from_rows(&[2], 2, &[[0, 1]]);
        let all = ds.instances();
        let none = entropy(&all, 2, |_| false);
        assert_eq!(none.entropy, 0.0);
        assert_eq!(none.most_common_class, None);
        assert_eq!(none.size, 0);
    }

    #[test]
    fn most_common_class_counts_instead_of_first_seen() {
        let ds = dataset_from_rows(&[1], 3, &[[0, 2], [0, 1], [0, 1], [0, 2], [0, 1]]);
        let s = entropy(&ds.instances(), 3, |_| true);
        assert_eq!(s.most_common_class, Some(1));
    }

    #[test]
    fn gain_of_perfect_split_equals_entropy() {
        let ds = dataset_from_rows(&[2, 2], 2, &[[0, 0, 0], [0, 1, 0], [1, 0, 1], [1, 1, 1]]);
        let all = ds.instances();
        let h = entropy(&all, 2, |_| true).entropy;
        assert!((information_gain(&all, 2, h, 0, 2) - 1.0).abs() < 1e-12);
        assert!(information_gain(&all, 2, h, 1, 2).abs() < 1e-12);
    }

    #[test]
    fn gain_ignores_unused_domain_values() {
        let ds = dataset_from_rows(&[4], 2, &[[0, 0], [3, 1]]);
        let all = ds.instances();
        let h = entropy(&all, 2, |_| true).entropy;
        assert!((information_gain(&all, 2, h, 0, 4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_bounded_and_gain_non_negative_on_random_data() {
        let mut rng = StdRng::seed_from_u64(2024);
        for classes in 2..5 {
            for _ in 0..25 {
                let ds = random_dataset(&mut rng, &[2, 3, 4], classes, 30);
                let all = ds.instances();
                let h = entropy(&all, classes, |_| true).entropy;
                assert!(h >= 0.0);
                assert!(h <= (classes as f64).log2() + 1e-12);

                for a in 0..ds.number_of_attributes() {
                    let g = information_gain(&all, classes, h, a, ds.attribute_domain_size(a));
                    assert!(g >= -1e-12, "gain {g} for attribute {a}");
                    assert!(g <= h + 1e-12);
                }
            }
        }
    }
}
