mod dataset_choice;
mod evaluator_choice;
mod learner_choice;
mod schema;
mod task_choice;
mod ui_choice;

pub use dataset_choice::*;
pub use evaluator_choice::*;
pub use learner_choice::*;
pub use schema::*;
pub use task_choice::*;
pub use ui_choice::{UIChoice, params_value};
