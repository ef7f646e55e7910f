use crate::core::DatasetError;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One raw column of a data file.
///
/// Numeric columns are discretized on load: a value `x` falls in bucket
/// `#{b in bucket_boundaries : b <= x}`, so `n` boundaries give `n + 1`
/// buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeSpec {
    Nominal {
        name: String,
        values: Vec<String>,
    },
    Discretized {
        name: String,
        bucket_boundaries: Vec<f64>,
    },
}

impl AttributeSpec {
    pub fn nominal(name: &str, values: &[&str]) -> Self {
        AttributeSpec::Nominal {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AttributeSpec::Nominal { name, .. } | AttributeSpec::Discretized { name, .. } => name,
        }
    }
}

/// Describes a comma separated data file: its columns in file order and
/// which of them holds the class label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSchema {
    pub relation: String,
    pub columns: Vec<AttributeSpec>,
    pub class_column: usize,
}

/// Per-column label resolution compiled from an [`AttributeSpec`].
#[derive(Debug, Clone)]
pub(crate) enum ColumnResolver {
    Nominal(NominalAttribute),
    Discretized {
        attribute: NominalAttribute,
        boundaries: Vec<f64>,
    },
}

impl ColumnResolver {
    pub(crate) fn attribute(&self) -> &NominalAttribute {
        match self {
            ColumnResolver::Nominal(attribute) | ColumnResolver::Discretized { attribute, .. } => {
                attribute
            }
        }
    }

    /// Maps a raw (already unquoted) label to its value index.
    pub(crate) fn resolve(&self, raw: &str) -> Option<usize> {
        match self {
            ColumnResolver::Nominal(attribute) => attribute.index_of_value(raw),
            ColumnResolver::Discretized { boundaries, .. } => {
                let x: f64 = raw.parse().ok()?;
                if x.is_nan() {
                    return None;
                }
                Some(boundaries.iter().take_while(|b| **b <= x).count())
            }
        }
    }
}

/// A validated schema, ready for the loader.
#[derive(Debug, Clone)]
pub(crate) struct CompiledSchema {
    pub(crate) header: Arc<InstanceHeader>,
    pub(crate) resolvers: Vec<ColumnResolver>,
    pub(crate) class_column: usize,
}

impl DatasetSchema {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn number_of_columns(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn compile(&self) -> Result<CompiledSchema, DatasetError> {
        if self.class_column >= self.columns.len() {
            return Err(DatasetError::ClassColumnOutOfRange {
                column: self.class_column,
                columns: self.columns.len(),
            });
        }

        let resolvers = self
            .columns
            .iter()
            .map(compile_column)
            .collect::<Result<Vec<_>, _>>()?;

        let class_attribute = match &resolvers[self.class_column] {
            ColumnResolver::Nominal(attribute) => attribute.clone(),
            ColumnResolver::Discretized { attribute, .. } => {
                return Err(DatasetError::NumericClass(attribute.name.clone()));
            }
        };

        let attributes = resolvers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.class_column)
            .map(|(_, r)| r.attribute().clone())
            .collect();

        Ok(CompiledSchema {
            header: Arc::new(InstanceHeader::new(
                self.relation.clone(),
                attributes,
                class_attribute,
            )),
            resolvers,
            class_column: self.class_column,
        })
    }

    /// Header this schema produces, without loading any data.
    pub fn header(&self) -> Result<Arc<InstanceHeader>, DatasetError> {
        Ok(self.compile()?.header)
    }

    /// The 1984 United States Congressional Voting Records schema: class
    /// label first, then sixteen yes/no votes.
    pub fn house_votes() -> Self {
        const ISSUES: [&str; 16] = [
            "handicapped-infants",
            "water-project-cost-sharing",
            "adoption-of-the-budget-resolution",
            "physician-fee-freeze",
            "el-salvador-aid",
            "religious-groups-in-schools",
            "anti-satellite-test-ban",
            "aid-to-nicaraguan-contras",
            "mx-missile",
            "immigration",
            "synfuels-corporation-cutback",
            "education-spending",
            "superfund-right-to-sue",
            "crime",
            "duty-free-exports",
            "export-administration-act-south-africa",
        ];

        let mut columns = vec![AttributeSpec::nominal("class", &["democrat", "republican"])];
        columns.extend(ISSUES.iter().map(|n| AttributeSpec::nominal(n, &["y", "n"])));

        DatasetSchema {
            relation: "house-votes-84".into(),
            columns,
            class_column: 0,
        }
    }
}

fn compile_column(spec: &AttributeSpec) -> Result<ColumnResolver, DatasetError> {
    match spec {
        AttributeSpec::Nominal { name, values } => {
            if values.is_empty() {
                return Err(DatasetError::EmptyDomain(name.clone()));
            }
            Ok(ColumnResolver::Nominal(NominalAttribute::with_values(
                name.clone(),
                values.clone(),
            )))
        }
        AttributeSpec::Discretized {
            name,
            bucket_boundaries,
        } => {
            let finite = bucket_boundaries.iter().all(|b| b.is_finite());
            let increasing = bucket_boundaries.windows(2).all(|w| w[0] < w[1]);
            if !finite || !increasing {
                return Err(DatasetError::InvalidBuckets(name.clone()));
            }
            Ok(ColumnResolver::Discretized {
                attribute: NominalAttribute::with_values(
                    name.clone(),
                    bucket_labels(bucket_boundaries),
                ),
                boundaries: bucket_boundaries.clone(),
            })
        }
    }
}

fn bucket_labels(boundaries: &[f64]) -> Vec<String> {
    let Some((first, last)) = boundaries.first().zip(boundaries.last()) else {
        return vec!["any".to_string()];
    };
    let mut labels = Vec::with_capacity(boundaries.len() + 1);
    labels.push(format!("<{first}"));
    for w in boundaries.windows(2) {
        labels.push(format!("[{},{})", w[0], w[1]));
    }
    labels.push(format!(">={last}"));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_columns_from_json() {
        let json = r#"{
            "relation": "iris",
            "columns": [
                {"name": "petal-length", "bucket_boundaries": [2.5, 5.0]},
                {"name": "class", "values": ["setosa", "versicolor", "virginica"]}
            ],
            "class_column": 1
        }"#;
        let schema: DatasetSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.number_of_columns(), 2);
        assert_eq!(schema.columns[0].name(), "petal-length");

        let header = schema.header().unwrap();
        assert_eq!(header.number_of_attributes(), 1);
        assert_eq!(header.number_of_classes(), 3);
        assert_eq!(
            header.attributes[0].values,
            vec!["<2.5", "[2.5,5)", ">=5"]
        );
    }

    #[test]
    fn discretized_resolution_counts_boundaries() {
        let compiled = DatasetSchema {
            relation: "r".into(),
            columns: vec![
                AttributeSpec::Discretized {
                    name: "x".into(),
                    bucket_boundaries: vec![1.0, 2.0],
                },
                AttributeSpec::nominal("c", &["a"]),
            ],
            class_column: 1,
        }
        .compile()
        .unwrap();

        let r = &compiled.resolvers[0];
        assert_eq!(r.resolve("0.5"), Some(0));
        assert_eq!(r.resolve("1.0"), Some(1));
        assert_eq!(r.resolve("1.99"), Some(1));
        assert_eq!(r.resolve("7"), Some(2));
        assert_eq!(r.resolve("abc"), None);
        assert_eq!(r.resolve("NaN"), None);
    }

    #[test]
    fn rejects_bad_schemas() {
        let numeric_class = DatasetSchema {
            relation: "r".into(),
            columns: vec![AttributeSpec::Discretized {
                name: "y".into(),
                bucket_boundaries: vec![0.0],
            }],
            class_column: 0,
        };
        assert!(matches!(
            numeric_class.compile(),
            Err(DatasetError::NumericClass(_))
        ));

        let out_of_range = DatasetSchema {
            relation: "r".into(),
            columns: vec![AttributeSpec::nominal("c", &["a"])],
            class_column: 3,
        };
        assert!(matches!(
            out_of_range.compile(),
            Err(DatasetError::ClassColumnOutOfRange { .. })
        ));

        let unsorted = DatasetSchema {
            relation: "r".into(),
            columns: vec![
                AttributeSpec::Discretized {
                    name: "x".into(),
                    bucket_boundaries: vec![2.0, 1.0],
                },
                AttributeSpec::nominal("c", &["a"]),
            ],
            class_column: 1,
        };
        assert!(matches!(
            unsorted.compile(),
            Err(DatasetError::InvalidBuckets(_))
        ));

        let empty = DatasetSchema {
            relation: "r".into(),
            columns: vec![AttributeSpec::nominal("c", &[])],
            class_column: 0,
        };
        assert!(matches!(empty.compile(), Err(DatasetError::EmptyDomain(_))));
    }

    #[test]
    fn house_votes_has_sixteen_binary_issues() {
        let header = DatasetSchema::house_votes().header().unwrap();
        assert_eq!(header.number_of_attributes(), 16);
        assert_eq!(header.number_of_classes(), 2);
        assert!((0..16).all(|a| header.attribute_domain_size(a) == 2));
        assert_eq!(header.class_label(0), Some("democrat"));
    }
}
