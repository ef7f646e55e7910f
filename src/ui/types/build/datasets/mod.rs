use crate::core::Dataset;
use crate::core::loader::load_dataset;
use crate::core::schema::DatasetSchema;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::DatasetChoice;

pub fn build_dataset(choice: DatasetChoice) -> Result<Dataset, BuildError> {
    match choice {
        DatasetChoice::SchemaFile(p) => {
            let schema = DatasetSchema::from_json_file(&p.schema_path)?;
            Ok(load_dataset(&schema, &p.data_path, p.seed)?)
        }
        DatasetChoice::HouseVotes(p) => Ok(load_dataset(
            &DatasetSchema::house_votes(),
            &p.data_path,
            p.seed,
        )?),
    }
}
