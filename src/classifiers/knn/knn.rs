use crate::classifiers::knn::neighbors::{Neighbor, NeighborSet};
use crate::classifiers::knn::vdm::{DifferenceMode, VdmCache};
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Instance, RowInstance};
use tracing::{debug, info};

pub const DEFAULT_K: usize = 5;
pub const DEFAULT_EXPONENT: u32 = 1;

/// k-nearest-neighbour classifier under the value difference metric.
#[derive(Debug, Clone)]
pub struct KNearestNeighbor {
    k: usize,
    exponent: u32,
    mode: DifferenceMode,
    parallel: bool,
}

impl Default for KNearestNeighbor {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            exponent: DEFAULT_EXPONENT,
            mode: DifferenceMode::default(),
            parallel: false,
        }
    }
}

impl KNearestNeighbor {
    pub fn new(k: usize) -> Result<Self, ClassifierError> {
        if k == 0 {
            return Err(ClassifierError::InvalidK);
        }
        Ok(Self {
            k,
            ..Self::default()
        })
    }

    pub fn with_exponent(mut self, exponent: u32) -> Result<Self, ClassifierError> {
        if exponent == 0 {
            return Err(ClassifierError::InvalidExponent);
        }
        self.exponent = exponent;
        Ok(self)
    }

    pub fn with_difference(mut self, mode: DifferenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn difference_mode(&self) -> DifferenceMode {
        self.mode
    }

    /// Snapshot of `training` ready to answer queries.
    pub fn fit<'t, I: Instance + Sync>(
        &self,
        header: &InstanceHeader,
        training: &'t [I],
    ) -> Result<VdmModel<'t, I>, ClassifierError> {
        if training.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        Ok(VdmModel {
            cache: VdmCache::new(header, training, self.parallel),
            training,
            number_of_classes: header.number_of_classes(),
            k: self.k,
            exponent: self.exponent,
            mode: self.mode,
            parallel: self.parallel,
        })
    }
}

/// Probability tables plus the training instances they were derived from.
#[derive(Debug)]
pub struct VdmModel<'t, I> {
    cache: VdmCache,
    training: &'t [I],
    number_of_classes: usize,
    k: usize,
    exponent: u32,
    mode: DifferenceMode,
    parallel: bool,
}

impl<I: Instance + Sync> VdmModel<'_, I> {
    pub fn cache(&self) -> &VdmCache {
        &self.cache
    }

    pub fn nearest<Q: Instance + Sync + ?Sized>(&self, query: &Q) -> NeighborSet {
        let distances = self.cache.distances(
            self.training,
            query,
            self.exponent,
            self.mode,
            self.parallel,
        );
        let mut neighbors = NeighborSet::new(self.k);
        for (instance, distance) in self.training.iter().zip(distances) {
            neighbors.offer(Neighbor {
                distance,
                class: instance.class_value(),
            });
        }
        neighbors
    }

    pub fn classify<Q: Instance + Sync + ?Sized>(&self, query: &Q) -> usize {
        // never empty: k >= 1 and training is non-empty
        self.nearest(query)
            .majority_class(self.number_of_classes)
            .unwrap_or(0)
    }
}

impl Classifier for KNearestNeighbor {
    fn name(&self) -> &str {
        "k-nearest-neighbor"
    }

    fn predict(
        &self,
        dataset: &Dataset,
        training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<Vec<usize>, ClassifierError> {
        let model = self.fit(dataset.header(), training)?;
        info!(
            k = self.k,
            exponent = self.exponent,
            mode = ?self.mode,
            training = training.len(),
            test = test.len(),
            "classifying with value difference metric"
        );
        let predictions: Vec<usize> = test.iter().map(|q| model.classify(q)).collect();
        debug!(predicted = predictions.len(), "k-nn done");
        Ok(predictions)
    }
}
