use crate::core::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::RowInstance;
use std::sync::Arc;

/// Column-oriented store of fully resolved instances.
///
/// `columns[a][row]` is the value index of attribute `a` for `row`, and
/// `classes[row]` its class index. Every column has exactly
/// [`number_of_instances`](Self::number_of_instances) entries and every
/// index lies within its domain; [`Dataset::new`] refuses anything else.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    columns: Vec<Vec<usize>>,
    classes: Vec<usize>,
}

impl Dataset {
    pub fn new(
        header: Arc<InstanceHeader>,
        columns: Vec<Vec<usize>>,
        classes: Vec<usize>,
    ) -> Result<Self, DatasetError> {
        if columns.len() != header.number_of_attributes() {
            return Err(DatasetError::AttributeCount {
                expected: header.number_of_attributes(),
                found: columns.len(),
            });
        }

        let rows = classes.len();
        for (attribute, column) in columns.iter().enumerate() {
            if column.len() != rows {
                return Err(DatasetError::ColumnLength {
                    attribute,
                    expected: rows,
                    found: column.len(),
                });
            }
            let domain = header.attribute_domain_size(attribute);
            if let Some((row, &value)) = column.iter().enumerate().find(|(_, v)| **v >= domain) {
                return Err(DatasetError::ValueOutOfDomain {
                    attribute,
                    row,
                    value,
                });
            }
        }

        let number_of_classes = header.number_of_classes();
        if let Some((row, &class)) = classes
            .iter()
            .enumerate()
            .find(|(_, c)| **c >= number_of_classes)
        {
            return Err(DatasetError::ClassOutOfDomain { row, class });
        }

        Ok(Self {
            header,
            columns,
            classes,
        })
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn number_of_instances(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn number_of_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.header.number_of_attributes()
    }

    pub fn attribute_domain_size(&self, attribute: usize) -> usize {
        self.header.attribute_domain_size(attribute)
    }

    #[inline]
    pub fn value_at(&self, row: usize, attribute: usize) -> usize {
        self.columns[attribute][row]
    }

    #[inline]
    pub fn class_at(&self, row: usize) -> usize {
        self.classes[row]
    }

    pub fn column(&self, attribute: usize) -> &[usize] {
        &self.columns[attribute]
    }

    pub fn instance(&self, row: usize) -> RowInstance<'_> {
        assert!(row < self.number_of_instances(), "row {row} out of range");
        RowInstance::new(self, row)
    }

    pub fn instances(&self) -> Vec<RowInstance<'_>> {
        (0..self.number_of_instances())
            .map(|row| RowInstance::new(self, row))
            .collect()
    }

    /// Per-class instance counts over the whole dataset.
    pub fn class_distribution(&self) -> Vec<usize> {
        let mut counts = vec![0; self.number_of_classes()];
        for &c in &self.classes {
            counts[c] += 1;
        }
        counts
    }
}
