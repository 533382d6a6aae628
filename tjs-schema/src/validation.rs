//! Schema constraints that the binding types do not enforce by construction.
//!
//! Required features, non-empty lists and `xsd:choice` groups are all
//! representable in an invalid state while a document is being built. This
//! module walks an object graph and reports every violation it finds.

use crate::document::Document;
use crate::error::{Result, SchemaError};
use crate::join::{OutputType, StatusType};
use crate::request::{AttributeDataType, GetCapabilitiesType};
use crate::values::ValuesType;
use std::fmt;
use tjs_core::{FeatureDef, Multiplicity, Reflective};
use tracing::debug;

/// Section names allowed in a `GetCapabilities` request.
pub const CAPABILITIES_SECTIONS: &[&str] = &[
    "ServiceIdentification",
    "ServiceProvider",
    "OperationsMetadata",
    "Contents",
    "Themes",
];

/// One constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Element path from the validated root, e.g. `GDAS/Framework/Dataset`.
    pub path: String,
    /// Schema type of the offending object.
    pub type_name: &'static str,
    /// Description of the violation.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl From<Diagnostic> for SchemaError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Validation {
            path: diagnostic.path,
            message: diagnostic.message,
        }
    }
}

/// Validates an object and everything it contains.
///
/// Paths start at the schema type name of `root`.
#[must_use]
pub fn validate(root: &dyn Reflective) -> Vec<Diagnostic> {
    validate_from(root, root.type_name())
}

/// Validates an object, reporting paths relative to `root_path`.
#[must_use]
pub fn validate_from(root: &dyn Reflective, root_path: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    walk(root, root_path, &mut diagnostics);
    diagnostics
}

/// Validates a document.
///
/// # Errors
/// Returns the first violation as [`SchemaError::Validation`].
pub fn validate_document(document: &Document) -> Result<()> {
    match document.validate().into_iter().next() {
        Some(diagnostic) => Err(diagnostic.into()),
        None => Ok(()),
    }
}

/// Returns true if `sections` is a comma-separated list of known section
/// names.
#[must_use]
pub fn is_valid_sections(sections: &str) -> bool {
    sections
        .split(',')
        .all(|name| CAPABILITIES_SECTIONS.contains(&name))
}

fn walk(object: &dyn Reflective, path: &str, out: &mut Vec<Diagnostic>) {
    for def in object.features() {
        check_feature(object, def, path, out);
    }
    check_constraints(object, path, out);

    let mut seen = vec![0usize; object.features().len()];
    object.visit_children(&mut |def, child| {
        let child_path = if def.is_many() {
            let count = &mut seen[def.id.index()];
            *count += 1;
            format!("{path}/{}[{count}]", def.xml_name.local)
        } else {
            format!("{path}/{}", def.xml_name.local)
        };
        walk(child, &child_path, out);
    });
}

fn check_feature(object: &dyn Reflective, def: &FeatureDef, path: &str, out: &mut Vec<Diagnostic>) {
    if !def.is_required() || def.unsettable {
        return;
    }
    let present = object.e_is_set(def.id).unwrap_or(false);
    if present {
        return;
    }
    let message = match def.multiplicity {
        Multiplicity::OneOrMore => format!("at least one '{}' is required", def.xml_name),
        _ => format!("'{}' is required", def.xml_name),
    };
    report(out, object, path, message);
}

fn check_constraints(object: &dyn Reflective, path: &str, out: &mut Vec<Diagnostic>) {
    if let Some(values) = object.downcast_ref::<ValuesType>() {
        let count = values.choice_count();
        check_choice(object, path, count, "Nominal, Ordinal, Count or Measure", out);
    } else if let Some(status) = object.downcast_ref::<StatusType>() {
        check_choice(object, path, status.choice_count(), "Accepted, Completed or Failed", out);
    } else if let Some(data) = object.downcast_ref::<AttributeDataType>() {
        let count =
            usize::from(data.is_set_get_data_url()) + usize::from(data.is_set_get_data_xml());
        check_choice(object, path, count, "GetDataURL or GetDataXML", out);
    } else if let Some(output) = object.downcast_ref::<OutputType>() {
        let count =
            usize::from(output.is_set_resource()) + usize::from(output.is_set_exception_report());
        check_choice(object, path, count, "Resource or ExceptionReport", out);
    } else if let Some(request) = object.downcast_ref::<GetCapabilitiesType>() {
        if let Some(sections) = request.sections() {
            if !is_valid_sections(sections) {
                report(out, object, path, format!("invalid Sections '{sections}'"));
            }
        }
    }
}

fn check_choice(
    object: &dyn Reflective,
    path: &str,
    count: usize,
    choices: &str,
    out: &mut Vec<Diagnostic>,
) {
    if count != 1 {
        report(
            out,
            object,
            path,
            format!("exactly one of {choices} is required, found {count}"),
        );
    }
}

fn report(out: &mut Vec<Diagnostic>, object: &dyn Reflective, path: &str, message: String) {
    debug!(path, type_name = object.type_name(), %message, "constraint violation");
    out.push(Diagnostic {
        path: path.to_string(),
        type_name: object.type_name(),
        message,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::{
        JoinDataResponseType, JoinedOutputsType, MechanismType, ResourceType,
    };
    use crate::ows::ExceptionType;
    use crate::request::JoinDataType;
    use crate::values::{MeasureType, NominalType, UOMType};

    #[test]
    fn test_sections_pattern() {
        assert!(is_valid_sections("ServiceIdentification"));
        assert!(is_valid_sections("OperationsMetadata,Contents,Themes"));
        assert!(!is_valid_sections(""));
        assert!(!is_valid_sections("Contents,"));
        assert!(!is_valid_sections("Contents, Themes"));
        assert!(!is_valid_sections("All"));

        let request = GetCapabilitiesType::default().with_sections("Everything");
        let diagnostics = validate(&request);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "invalid Sections 'Everything'");
    }

    #[test]
    fn test_missing_required() {
        let mut diagnostics = validate(&UOMType::default());
        diagnostics.sort_by(|a, b| a.message.cmp(&b.message));
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["'tjs:LongForm' is required", "'tjs:ShortForm' is required"]);
        assert_eq!(diagnostics[0].path, "UOMType");
    }

    #[test]
    fn test_defaults_satisfy_required() {
        let request = JoinDataType::default().with_attribute_data(
            AttributeDataType::default().with_get_data_url("http://host/data"),
        );
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn test_values_choice() {
        let values = ValuesType::default()
            .with_nominal(NominalType::default())
            .with_measure(MeasureType::default().with_uom(UOMType::new("m", "metre")));
        let diagnostics = validate(&values);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("exactly one of Nominal"));
        assert!(diagnostics[0].message.ends_with("found 2"));

        assert!(validate(&ValuesType::default().with_nominal(NominalType::default())).is_empty());
    }

    #[test]
    fn test_nested_paths() {
        let response = JoinDataResponseType::new("http://host/caps", "en")
            .with_status(StatusType::new_completed("http://host/status"))
            .with_joined_outputs(
                JoinedOutputsType::default()
                    .with_output(OutputType::delivered(
                        MechanismType::wms(),
                        ResourceType::new("http://host/wms"),
                    ))
                    .with_output(OutputType::default().with_mechanism(MechanismType::wfs()))
                    .with_output(OutputType::exception(
                        MechanismType::shapefile(),
                        ExceptionType::new("NoApplicableCode", "failed"),
                    )),
            );

        let diagnostics = validate_from(&response, "JoinDataResponse");
        let paths: Vec<_> = diagnostics.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            ["JoinDataResponse", "JoinDataResponse/JoinedOutputs/Output[2]"]
        );
        assert_eq!(diagnostics[0].message, "'tjs:DataInputs' is required");
        assert_eq!(diagnostics[1].type_name, "OutputType");
    }

    #[test]
    fn test_validate_document() {
        let document = Document::from(JoinDataType::default());
        let err = validate_document(&document).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Validation { ref path, .. } if path == "JoinData"
        ));
    }
}
