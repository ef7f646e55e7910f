use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// File-path hints carried by `x-*` schema extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathHint {
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Allowed values of a string enum field.
    pub options: Option<Vec<String>>,
    pub path: Option<PathHint>,
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let Some(props) = bobj.get("properties").and_then(|v| v.as_object()) else {
            continue;
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props.get("params").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };
        let Some(params_obj) = resolve_ref_obj(root_obj, params_obj) else {
            return Ok(vec![]);
        };
        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let required: Vec<String> = params_obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            let field_obj = field_schema
                .as_object()
                .context("field schema not object")?;
            let resolved = resolve_ref_obj(root_obj, field_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

            // annotations may sit next to the $ref or on the referenced schema
            let lookup = |key: &str| field_obj.get(key).or_else(|| resolved.get(key));

            let title = lookup("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();

            let description = lookup("description")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let default = lookup("default").cloned();

            let Some(kind) = detect_field_kind(resolved.get("type")) else {
                continue;
            };

            let min = resolved
                .get("minimum")
                .or_else(|| resolved.get("exclusiveMinimum"))
                .and_then(|v| v.as_f64());

            let max = resolved
                .get("maximum")
                .or_else(|| resolved.get("exclusiveMaximum"))
                .and_then(|v| v.as_f64());

            let options = resolved.get("enum").and_then(|v| v.as_array()).map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            });

            let path = (lookup("format").and_then(|v| v.as_str()) == Some("path")).then(|| {
                PathHint {
                    must_exist: lookup("x-must-exist")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false),
                    extensions: lookup("x-extensions")
                        .and_then(|v| v.as_array())
                        .map(|a| {
                            a.iter()
                                .filter_map(|v| v.as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default(),
                }
            });

            out.push(FieldSpec {
                name: name.clone(),
                title,
                description,
                required: required.iter().any(|r| r == name),
                kind,
                default,
                min,
                max,
                options,
                path,
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    if let Some(arr) = tobj.get("enum").and_then(|v| v.as_array()) {
        if arr.len() == 1 && arr[0].as_str() == Some(kind_key) {
            return true;
        }
    }
    false
}

/// Resolve a local $ref like "#/$defs/ReportFormat" against the root object,
/// also looking through a single-element `allOf` wrapper.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    if let Some(Value::Array(all)) = obj.get("allOf") {
        if let [only] = all.as_slice() {
            return resolve_ref_obj(root_obj, only.as_object()?);
        }
    }
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn kind_of(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty {
        Some(Value::String(s)) => kind_of(s),
        // unions like ["string","null"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{DatasetChoice, LearnerChoice};

    #[test]
    fn knn_fields_in_declaration_order() {
        let schema = schema_for::<LearnerChoice>();
        let specs = specs_for_kind(&schema, "k-nearest-neighbor").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["k", "exponent", "difference", "parallel"]);

        let k = &specs[0];
        assert_eq!(k.kind, FieldKind::Integer);
        assert_eq!(k.min, Some(1.0));
        assert_eq!(k.default, Some(Value::from(5)));
        assert!(!k.required);

        let difference = &specs[2];
        assert_eq!(difference.kind, FieldKind::String);
        assert_eq!(
            difference.options.as_deref(),
            Some(&["absolute".to_string(), "signed".to_string()][..])
        );
        assert_eq!(specs[3].kind, FieldKind::Boolean);
    }

    #[test]
    fn unit_params_have_no_fields() {
        let schema = schema_for::<LearnerChoice>();
        assert!(specs_for_kind(&schema, "id3").unwrap().is_empty());
    }

    #[test]
    fn path_hints_are_extracted() {
        let schema = schema_for::<DatasetChoice>();
        let specs = specs_for_kind(&schema, "schema-file").unwrap();
        let schema_path = specs.iter().find(|s| s.name == "schema_path").unwrap();
        assert!(schema_path.required);
        assert_eq!(
            schema_path.path,
            Some(PathHint {
                must_exist: true,
                extensions: vec!["json".into()],
            })
        );
        let seed = specs.iter().find(|s| s.name == "seed").unwrap();
        assert_eq!(seed.path, None);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let schema = schema_for::<LearnerChoice>();
        assert!(specs_for_kind(&schema, "naive-bayes").is_err());
    }
}
