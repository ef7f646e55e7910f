use crate::core::DatasetError;
use crate::core::dataset::Dataset;
use crate::core::schema::DatasetSchema;
use crate::utils::file_parsing::{UNKNOWN_VALUE, split_record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Loads a comma separated data file described by `schema`.
///
/// Unknown values (`?`) are replaced by a uniformly drawn value of the
/// column's domain; `seed` makes that choice reproducible.
pub fn load_dataset<P: AsRef<Path>>(
    schema: &DatasetSchema,
    path: P,
    seed: u64,
) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let dataset = read_dataset(schema, BufReader::new(file), &mut rng)?;
    info!(
        relation = %schema.relation,
        path = %path.display(),
        instances = dataset.number_of_instances(),
        "loaded dataset"
    );
    Ok(dataset)
}

pub fn read_dataset<R: BufRead, G: Rng>(
    schema: &DatasetSchema,
    reader: R,
    rng: &mut G,
) -> Result<Dataset, DatasetError> {
    let compiled = schema.compile()?;
    let expected = compiled.resolvers.len();

    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); expected - 1];
    let mut classes = Vec::new();
    let mut unknowns = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(&line);
        if fields.len() != expected {
            return Err(DatasetError::ColumnCount {
                line: line_number,
                expected,
                found: fields.len(),
            });
        }

        let mut attribute = 0;
        for (column, (raw, resolver)) in fields.iter().zip(&compiled.resolvers).enumerate() {
            let domain = resolver.attribute().domain_size();
            let value = if raw == UNKNOWN_VALUE {
                unknowns += 1;
                rng.random_range(0..domain)
            } else {
                resolver
                    .resolve(raw)
                    .ok_or_else(|| DatasetError::UnknownValue {
                        line: line_number,
                        attribute: resolver.attribute().name.clone(),
                        value: raw.clone(),
                    })?
            };

            if column == compiled.class_column {
                classes.push(value);
            } else {
                columns[attribute].push(value);
                attribute += 1;
            }
        }
    }

    if unknowns > 0 {
        debug!(unknowns, "resolved unknown values to random domain values");
    }

    Dataset::new(compiled.header, columns, classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Instance;
    use crate::core::schema::AttributeSpec;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn schema() -> DatasetSchema {
        DatasetSchema {
            relation: "votes".into(),
            columns: vec![
                AttributeSpec::nominal("class", &["dem", "rep"]),
                AttributeSpec::nominal("v1", &["y", "n"]),
                AttributeSpec::Discretized {
                    name: "age".into(),
                    bucket_boundaries: vec![30.0, 60.0],
                },
            ],
            class_column: 0,
        }
    }

    #[test]
    fn reads_class_first_rows() {
        let data = "dem,y,25\n\nrep,n,61\n'rep', \"y\" ,30\n";
        let mut rng = StdRng::seed_from_u64(1);
        let ds = read_dataset(&schema(), Cursor::new(data), &mut rng).unwrap();

        assert_eq!(ds.number_of_instances(), 3);
        assert_eq!(ds.number_of_attributes(), 2);
        let classes: Vec<_> = ds.instances().iter().map(|i| i.class_value()).collect();
        assert_eq!(classes, vec![0, 1, 1]);
        assert_eq!(ds.column(0), &[0, 1, 0]);
        assert_eq!(ds.column(1), &[0, 2, 1]);
    }

    #[test]
    fn unknowns_resolve_inside_domain_and_reproducibly() {
        let data = "dem,?,?\nrep,?,10\n?,y,70\n";
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = read_dataset(&schema(), Cursor::new(data), &mut a).unwrap();
        let second = read_dataset(&schema(), Cursor::new(data), &mut b).unwrap();

        for row in 0..3 {
            let x = first.instance(row);
            let y = second.instance(row);
            assert_eq!(x.class_value(), y.class_value());
            assert!(x.value_at_index(0) < 2);
            assert!(x.value_at_index(1) < 3);
            assert_eq!(x.value_at_index(0), y.value_at_index(0));
            assert_eq!(x.value_at_index(1), y.value_at_index(1));
        }
    }

    #[test]
    fn unknown_label_reports_line() {
        let data = "dem,y,1\nrep,maybe,2\n";
        let mut rng = StdRng::seed_from_u64(0);
        let err = read_dataset(&schema(), Cursor::new(data), &mut rng).unwrap_err();
        match err {
            DatasetError::UnknownValue {
                line,
                attribute,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(attribute, "v1");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_column_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = read_dataset(&schema(), Cursor::new("dem,y\n"), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::ColumnCount {
                line: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn load_from_file() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "rep,n,45").unwrap();
        writeln!(tf, "dem,y,12").unwrap();

        let ds = load_dataset(&schema(), tf.path(), 3).unwrap();
        assert_eq!(ds.number_of_instances(), 2);
        assert_eq!(ds.class_distribution(), vec![1, 1]);
        assert_eq!(ds.header().relation_name(), "votes");
    }
}
