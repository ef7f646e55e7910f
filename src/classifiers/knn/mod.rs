mod knn;
mod neighbors;
mod vdm;

pub use knn::{DEFAULT_EXPONENT, DEFAULT_K, KNearestNeighbor, VdmModel};
pub use neighbors::{Neighbor, NeighborSet};
pub use vdm::{
    ConditionalProbabilities, DifferenceMode, VdmCache, conditional_probability, value_difference,
};
