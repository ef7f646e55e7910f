use crate::core::Dataset;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use rand::Rng;
use std::sync::Arc;

/// Header with attributes `a0, a1, ...` whose domains are `"v0".."v{n-1}"`,
/// and classes `"c0".."c{k-1}"`.
pub fn header_with_domains(
    domain_sizes: &[usize],
    number_of_classes: usize,
) -> Arc<InstanceHeader> {
    let labels = |prefix: &str, n: usize| -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    };
    let attributes = domain_sizes
        .iter()
        .enumerate()
        .map(|(a, &n)| NominalAttribute::with_values(format!("a{a}"), labels("v", n)))
        .collect();
    Arc::new(InstanceHeader::new(
        "synthetic".into(),
        attributes,
        NominalAttribute::with_values("class".into(), labels("c", number_of_classes)),
    ))
}

/// Builds a dataset from rows laid out as `[attribute values..., class]`.
pub fn dataset_from_rows<const N: usize>(
    domain_sizes: &[usize],
    number_of_classes: usize,
    rows: &[[usize; N]],
) -> Dataset {
    assert_eq!(N, domain_sizes.len() + 1, "rows must be attributes + class");
    let header = header_with_domains(domain_sizes, number_of_classes);
    let columns = (0..domain_sizes.len())
        .map(|a| rows.iter().map(|r| r[a]).collect())
        .collect();
    let classes = rows.iter().map(|r| r[N - 1]).collect();
    Dataset::new(header, columns, classes).expect("valid synthetic rows")
}

/// Uniformly random dataset; every value and class is inside its domain.
pub fn random_dataset<R: Rng>(
    rng: &mut R,
    domain_sizes: &[usize],
    number_of_classes: usize,
    rows: usize,
) -> Dataset {
    let header = header_with_domains(domain_sizes, number_of_classes);
    let columns = domain_sizes
        .iter()
        .map(|&n| (0..rows).map(|_| rng.random_range(0..n)).collect())
        .collect();
    let classes = (0..rows)
        .map(|_| rng.random_range(0..number_of_classes))
        .collect();
    Dataset::new(header, columns, classes).expect("valid random rows")
}
