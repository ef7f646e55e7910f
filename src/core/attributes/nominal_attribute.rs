use std::collections::HashMap;

/// A categorical attribute: a name plus an ordered, finite domain of labels.
///
/// Value indices are dense and zero-based, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_size(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}
