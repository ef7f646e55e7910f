use crate::core::dataset::Dataset;
use crate::core::instances::Instance;

/// A `(dataset, row)` pair. Borrowed from the dataset, so it can never
/// outlive it, and cheap enough to copy into per-node subsets.
#[derive(Debug, Clone, Copy)]
pub struct RowInstance<'a> {
    dataset: &'a Dataset,
    row: usize,
}

impl<'a> RowInstance<'a> {
    pub(crate) fn new(dataset: &'a Dataset, row: usize) -> Self {
        Self { dataset, row }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }
}

impl Instance for RowInstance<'_> {
    #[inline]
    fn class_value(&self) -> usize {
        self.dataset.class_at(self.row)
    }

    #[inline]
    fn value_at_index(&self, attribute: usize) -> usize {
        self.dataset.value_at(self.row, attribute)
    }

    fn number_of_attributes(&self) -> usize {
        self.dataset.header().number_of_attributes()
    }
}
