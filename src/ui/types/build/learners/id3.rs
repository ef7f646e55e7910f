use crate::classifiers::id3::Id3;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::Id3PrunedParameters;

impl TryFrom<Id3PrunedParameters> for Id3 {
    type Error = BuildError;

    fn try_from(p: Id3PrunedParameters) -> Result<Self, Self::Error> {
        Ok(Id3::with_pruning(p.pruning_fraction, p.seed)?)
    }
}
