use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Confirm, CustomType, Select, Text};
use std::fmt::Display;
use std::str::FromStr;

pub struct InquireDriver;

fn check_range<T: PartialOrd + Display>(x: &T, min: Option<T>, max: Option<T>) -> Validation {
    let message = match (&min, &max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => format!("Must be between {lo} and {hi}"),
        (Some(lo), None) if x < lo => format!("Must be ≥ {lo}"),
        (None, Some(hi)) if x > hi => format!("Must be ≤ {hi}"),
        _ => return Validation::Valid,
    };
    Validation::Invalid(ErrorMessage::Custom(message))
}

fn ask_number<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Clone + Copy + PartialOrd + Display + FromStr + 'static,
{
    Ok(CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| Ok(check_range(x, min, max)))
        .prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        let start = default
            .and_then(|d| options.iter().position(|o| o == d))
            .unwrap_or(0);
        Ok(Select::new(title, options.to_vec())
            .with_starting_cursor(start)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_number(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_number(title, help, default, min, max)
    }
}
