use crate::classifiers::Classifier;
use crate::classifiers::id3::Id3;
use crate::classifiers::knn::KNearestNeighbor;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::LearnerChoice;

mod id3;
mod knn;

pub fn build_learner(choice: LearnerChoice) -> Result<Box<dyn Classifier>, BuildError> {
    match choice {
        LearnerChoice::Id3(_) => Ok(Box::new(Id3::new())),
        LearnerChoice::Id3Pruned(p) => Ok(Box::new(Id3::try_from(p)?)),
        LearnerChoice::KNearestNeighbor(p) => Ok(Box::new(KNearestNeighbor::try_from(p)?)),
    }
}
