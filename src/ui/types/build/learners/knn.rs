use crate::classifiers::knn::{DifferenceMode, KNearestNeighbor};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{DifferenceChoice, KNearestNeighborParameters};

impl From<DifferenceChoice> for DifferenceMode {
    fn from(choice: DifferenceChoice) -> Self {
        match choice {
            DifferenceChoice::Absolute => DifferenceMode::Absolute,
            DifferenceChoice::Signed => DifferenceMode::Signed,
        }
    }
}

impl TryFrom<KNearestNeighborParameters> for KNearestNeighbor {
    type Error = BuildError;

    fn try_from(p: KNearestNeighborParameters) -> Result<Self, Self::Error> {
        Ok(KNearestNeighbor::new(p.k)?
            .with_exponent(p.exponent)?
            .with_difference(p.difference.into())
            .with_parallel(p.parallel))
    }
}
