use crate::core::attributes::NominalAttribute;

/// Immutable schema shared by a [`Dataset`](crate::core::Dataset) and every
/// instance view over it.
///
/// Feature attributes are indexed `0..number_of_attributes()`; the class
/// attribute is kept apart so feature indices never need shifting around it.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<NominalAttribute>,
    pub class_attribute: NominalAttribute,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_attribute: NominalAttribute,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_attribute,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute.domain_size()
    }

    pub fn attribute_domain_size(&self, index: usize) -> usize {
        self.attributes[index].domain_size()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.class_attribute
    }

    pub fn class_label(&self, class: usize) -> Option<&str> {
        self.class_attribute.value(class)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }
}
