use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, schema_for, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_label<K>(k: K) -> String
where
    K: Copy + Into<&'static str> + EnumMessage,
{
    let label = k.get_message().unwrap_or_else(|| k.into());
    match k.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
        _ => label.to_string(),
    }
}

/// Walks the user through one choice enum: pick a variant, then answer one
/// prompt per field of its parameter schema, then any nested choices.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = C::Kind::iter().collect();
    let labels: Vec<String> = kinds.iter().map(|&k| kind_label(k)).collect();

    let picked = driver.ask_select(
        C::prompt_label(),
        C::prompt_help().unwrap_or(""),
        &labels,
        None,
    )?;
    let index = labels
        .iter()
        .position(|l| *l == picked)
        .context("selection is not one of the offered kinds")?;
    let choice_kind = kinds[index];

    let key: &'static str = choice_kind.into();
    let schema = schema_for::<C>();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

/// `None` leaves an optional field out so its serde default applies.
fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");
    let unset = matches!(init, None | Some(Value::Null));

    if !s.required && unset && s.kind != FieldKind::Boolean {
        return prompt_optional(driver, s, help);
    }

    let value = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            let answered = if let Some(options) = &s.options {
                driver.ask_select(&s.title, help, options, Some(&def))?
            } else if let Some(hint) = &s.path {
                let exts: Vec<&str> = hint.extensions.iter().map(String::as_str).collect();
                prompt_path_until_ok(driver, &s.title, help, &def, hint.must_exist, &exts)?
                    .to_string_lossy()
                    .into_owned()
            } else {
                driver.ask_string(&s.title, help, &def)?
            };
            Value::String(answered)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(Some(value))
}

fn prompt_optional<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    help: &str,
) -> Result<Option<Value>> {
    let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    let value = match s.kind {
        FieldKind::Integer => {
            let n: u64 = answer
                .parse()
                .with_context(|| format!("invalid integer for {}", s.title))?;
            Value::from(n)
        }
        FieldKind::Number => {
            let x: f64 = answer
                .parse()
                .with_context(|| format!("invalid number for {}", s.title))?;
            Value::from(x)
        }
        FieldKind::String => Value::String(answer.to_string()),
        FieldKind::Boolean => bail!("boolean fields always have a default"),
    };
    Ok(Some(value))
}

fn validate_path_str(input: &str, must_exist: bool, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::ReportFormat;
    use crate::ui::types::choices::{
        DatasetChoice, DifferenceChoice, EvaluatorChoice, LearnerChoice, TaskChoice,
    };
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tempfile::NamedTempFile;

    /// Answers prompts from a script. Selections match by prefix so tests
    /// don't depend on the dimmed description suffix.
    struct ScriptedDriver {
        answers: RefCell<VecDeque<String>>,
    }

    impl ScriptedDriver {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            }
        }

        fn next(&self, title: &str) -> Result<String> {
            self.answers
                .borrow_mut()
                .pop_front()
                .with_context(|| format!("no scripted answer for {title}"))
        }

        fn remaining(&self) -> usize {
            self.answers.borrow().len()
        }
    }

    impl PromptDriver for ScriptedDriver {
        fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
            let a = self.next(title)?;
            Ok(if a.is_empty() { default } else { a == "y" })
        }

        fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
            let a = self.next(title)?;
            Ok(if a.is_empty() { default.to_string() } else { a })
        }

        fn ask_select(
            &self,
            title: &str,
            _help: &str,
            options: &[String],
            default: Option<&str>,
        ) -> Result<String> {
            let a = self.next(title)?;
            if a.is_empty() {
                return Ok(default.map(str::to_string).unwrap_or_else(|| options[0].clone()));
            }
            options
                .iter()
                .find(|o| o.starts_with(&a))
                .cloned()
                .with_context(|| format!("{a} is not an option of {title}"))
        }

        fn ask_u64(
            &self,
            title: &str,
            _help: &str,
            default: u64,
            _min: Option<u64>,
            _max: Option<u64>,
        ) -> Result<u64> {
            let a = self.next(title)?;
            Ok(if a.is_empty() { default } else { a.parse()? })
        }

        fn ask_f64(
            &self,
            title: &str,
            _help: &str,
            default: f64,
            _min: Option<f64>,
            _max: Option<f64>,
        ) -> Result<f64> {
            let a = self.next(title)?;
            Ok(if a.is_empty() { default } else { a.parse()? })
        }
    }

    #[test]
    fn knn_with_defaults_and_one_override() {
        // kind, k, exponent, difference, parallel
        let driver = ScriptedDriver::new(&["k-Nearest", "3", "", "signed", ""]);
        let choice: LearnerChoice = prompt_choice(&driver).unwrap();
        let LearnerChoice::KNearestNeighbor(p) = choice else {
            panic!("expected k-nn, got {choice:?}");
        };
        assert_eq!((p.k, p.exponent), (3, 1));
        assert_eq!(p.difference, DifferenceChoice::Signed);
        assert!(!p.parallel);
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn path_prompt_repeats_until_valid() {
        let data = NamedTempFile::with_suffix(".data").unwrap();
        let good = data.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(&["Congressional", "/no/such/file.data", &good, "7"]);
        let choice: DatasetChoice = prompt_choice(&driver).unwrap();
        let DatasetChoice::HouseVotes(p) = choice else {
            panic!("expected house votes");
        };
        assert_eq!(p.data_path, PathBuf::from(&good));
        assert_eq!(p.seed, 7);
    }

    #[test]
    fn full_task_with_nested_choices() {
        let data = NamedTempFile::with_suffix(".data").unwrap();
        let good = data.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(&[
            "Cross-Validate",
            "10",  // folds
            "",    // seed
            "",    // report path: none
            "json", // report format
            "ID3 Decision Tree",
            "Congressional",
            &good,
            "",
            "Basic",
            "y",
        ]);
        let TaskChoice::CrossValidate(p) = prompt_choice(&driver).unwrap();
        assert_eq!((p.folds, p.seed), (10, 42));
        assert_eq!(p.report_path, None);
        assert_eq!(p.report_format, ReportFormat::Json);
        assert!(matches!(p.learner, LearnerChoice::Id3(_)));
        let EvaluatorChoice::BasicClassification(e) = p.evaluator;
        assert!(e.precision_recall_output);
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn validate_paths() {
        let tf = NamedTempFile::with_suffix(".json").unwrap();
        let p = tf.path().to_str().unwrap();
        assert!(validate_path_str(p, true, &["json"]).is_ok());
        assert!(validate_path_str(p, true, &["csv"]).is_err());
        assert!(validate_path_str("  ", false, &[]).is_err());
        assert!(validate_path_str("missing.json", false, &["json"]).is_ok());
        assert!(validate_path_str("missing.json", true, &["json"]).is_err());
    }
}
