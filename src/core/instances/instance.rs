/// Read-only view of one labelled example whose attribute values and class
/// are already resolved to domain indices.
///
/// Implementations never validate indices per call; a loader that produced
/// the data is responsible for keeping them inside their domains.
pub trait Instance {
    fn class_value(&self) -> usize;

    fn value_at_index(&self, attribute: usize) -> usize;

    fn number_of_attributes(&self) -> usize;
}
