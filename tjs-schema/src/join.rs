//! `DescribeJoinAbilities` and `JoinData` responses.

use crate::dataset::DatasetType3;
use crate::framework::{FrameworkType2, SpatialFrameworksType};
use crate::ows::ExceptionType;
use chrono::{SecondsFormat, Utc};
use tjs_derive::TjsType;

/// `DescribeJoinAbilities` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "JoinAbilitiesType")]
pub struct JoinAbilitiesType {
    #[tjs(element = "SpatialFrameworks", required)]
    spatial_frameworks: Option<SpatialFrameworksType>,
    #[tjs(element = "AttributeLimit", required)]
    attribute_limit: Option<u64>,
    #[tjs(element = "OutputMechanisms", required)]
    output_mechanisms: Option<OutputMechanismsType>,
    #[tjs(element = "OutputStylings")]
    output_stylings: Option<OutputStylingsType1>,
    #[tjs(element = "ClassificationSchemaURL")]
    classification_schema_url: Option<String>,
    #[tjs(attribute = "capabilities", required)]
    capabilities: Option<String>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "updateSupported", required, default = "false")]
    update_supported: Option<bool>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

/// Output mechanisms offered for joined data.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OutputMechanismsType")]
pub struct OutputMechanismsType {
    #[tjs(element = "Mechanism", required)]
    mechanism: Vec<MechanismType>,
}

/// One way joined data can be delivered.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "MechanismType")]
pub struct MechanismType {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<String>,
    #[tjs(element = "Reference", required)]
    reference: Option<String>,
}

const WMS_ABSTRACT: &str = concat!(
    "The OpenGIS® Web Map Service Interface Standard (WMS) provides a simple HTTP interface ",
    "for requesting geo-registered map images from one or more distributed geospatial ",
    "databases. A WMS request defines the geographic layer(s) and area of interest to be ",
    "processed. The response to the request is one or more geo-registered map images ",
    "(returned as JPEG, PNG, etc) that can be displayed in a browser application. The ",
    "interface also supports the ability to specify whether the returned images should be ",
    "transparent so that layers from multiple servers can be combined or no",
);

const WFS_ABSTRACT: &str = concat!(
    "The Web Feature Service (WFS) represents a change in the way geographic information is ",
    "created, modified and exchanged on the Internet. Rather than sharing geographic ",
    "information at the file level using File Transfer Protocol (FTP), for example, the WFS ",
    "offers direct fine-grained access to geographic information at the feature and feature ",
    "property level. Web feature services allow clients to only retrieve or modify the data ",
    "they are seeking, rather than retrieving a file that contains the data they are seeking ",
    "and possibly much more. That data can then be used for a wide variety of purposes, ",
    "including purposes other than their producers' intended ones.",
);

impl MechanismType {
    /// Creates a mechanism from its four descriptive elements.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        abstract_: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_identifier(identifier)
            .with_title(title)
            .with_abstract(abstract_)
            .with_reference(reference)
    }

    /// Zipped ESRI shapefile download.
    #[must_use]
    pub fn shapefile() -> Self {
        Self::new(
            "shapefile",
            "ESRI shapefile",
            "ESRI shapefile with spatial dataset",
            "ESRI shapefile with spatial dataset",
        )
    }

    /// Web Map Service layer.
    #[must_use]
    pub fn wms() -> Self {
        Self::new(
            "WMS",
            "WMS Server v1.1.1",
            WMS_ABSTRACT,
            "http://schemas.opengis.net/wms/1.1.1/",
        )
    }

    /// Web Feature Service feature type.
    #[must_use]
    pub fn wfs() -> Self {
        Self::new(
            "WFS",
            "WFS Server v2.0",
            WFS_ABSTRACT,
            "http://schemas.opengis.net/wfs/2.0/",
        )
    }
}

/// Styling languages the service can apply to joined output.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OutputStylingsType1")]
pub struct OutputStylingsType1 {
    #[tjs(element = "Styling", required)]
    styling: Vec<StylingType>,
}

/// One styling language.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "StylingType")]
pub struct StylingType {
    #[tjs(element = "Identifier", required)]
    identifier: Option<String>,
    #[tjs(element = "Title", required)]
    title: Option<String>,
    #[tjs(element = "Abstract", required)]
    abstract_: Option<String>,
    #[tjs(element = "Reference", required)]
    reference: Option<String>,
    #[tjs(element = "Schema")]
    schema: Option<String>,
}

/// `JoinData` response.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "JoinDataResponseType")]
pub struct JoinDataResponseType {
    #[tjs(element = "Status", required)]
    status: Option<StatusType>,
    #[tjs(element = "DataInputs", required)]
    data_inputs: Option<DataInputsType>,
    #[tjs(element = "JoinedOutputs", required)]
    joined_outputs: Option<JoinedOutputsType>,
    #[tjs(attribute = "capabilities", required)]
    capabilities: Option<String>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

impl JoinDataResponseType {
    /// Creates an empty response envelope.
    ///
    /// # Arguments
    /// * `capabilities` - URL of the service capabilities document
    /// * `lang` - Language of the response
    #[must_use]
    pub fn new(capabilities: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::default()
            .with_capabilities(capabilities)
            .with_lang(lang)
    }

    /// Returns the joined outputs, or nothing if none were attached.
    pub fn outputs(&self) -> &[OutputType] {
        self.joined_outputs
            .as_ref()
            .map(JoinedOutputsType::output)
            .unwrap_or_default()
    }
}

/// Execution status of a join; exactly one state is present.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "StatusType")]
pub struct StatusType {
    #[tjs(element = "Accepted")]
    accepted: Option<String>,
    #[tjs(element = "Completed")]
    completed: Option<String>,
    #[tjs(element = "Failed")]
    failed: Option<FailedType>,
    #[tjs(attribute = "creationTime", required)]
    creation_time: Option<String>,
    #[tjs(attribute = "xlink:href", required)]
    href: Option<String>,
}

impl StatusType {
    /// Status of a request that has been queued.
    #[must_use]
    pub fn new_accepted(href: impl Into<String>) -> Self {
        Self::stamped(href).with_accepted(String::new())
    }

    /// Status of a request whose outputs are available.
    #[must_use]
    pub fn new_completed(href: impl Into<String>) -> Self {
        Self::stamped(href).with_completed(String::new())
    }

    /// Status of a request that could not be processed.
    #[must_use]
    pub fn new_failed(href: impl Into<String>) -> Self {
        Self::stamped(href).with_failed(FailedType::default())
    }

    /// Returns true once the join finished, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed.is_some() || self.failed.is_some()
    }

    /// Returns how many of the alternatives are set.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        usize::from(self.accepted.is_some())
            + usize::from(self.completed.is_some())
            + usize::from(self.failed.is_some())
    }

    fn stamped(href: impl Into<String>) -> Self {
        Self::default()
            .with_creation_time(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
            .with_href(href)
    }
}

/// Marker for a failed join; details are reported in the outputs.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "FailedType")]
pub struct FailedType {}

/// Framework and dataset that were joined.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DataInputsType")]
pub struct DataInputsType {
    #[tjs(element = "Framework", required)]
    framework: Option<FrameworkType2>,
    #[tjs(element = "Dataset", required)]
    dataset: Option<DatasetType3>,
}

/// Products of a join.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "JoinedOutputsType")]
pub struct JoinedOutputsType {
    #[tjs(element = "Output", required)]
    output: Vec<OutputType>,
}

/// One product, delivered through a mechanism or reported as an exception.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OutputType")]
pub struct OutputType {
    #[tjs(element = "Mechanism", required)]
    mechanism: Option<MechanismType>,
    #[tjs(element = "Resource")]
    resource: Option<ResourceType>,
    #[tjs(element = "ExceptionReport")]
    exception_report: Option<ExceptionReportType>,
}

impl OutputType {
    /// Output available at a resource.
    #[must_use]
    pub fn delivered(mechanism: MechanismType, resource: ResourceType) -> Self {
        Self::default()
            .with_mechanism(mechanism)
            .with_resource(resource)
    }

    /// Output that could not be produced.
    #[must_use]
    pub fn exception(mechanism: MechanismType, exception: ExceptionType) -> Self {
        Self::default()
            .with_mechanism(mechanism)
            .with_exception_report(ExceptionReportType::default().with_exception(exception))
    }
}

/// Location of an output and the parameters to access it.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ResourceType")]
pub struct ResourceType {
    #[tjs(element = "URL", required)]
    url: Option<String>,
    #[tjs(element = "Parameter")]
    parameter: Vec<ParameterType>,
}

impl ResourceType {
    /// Creates a resource at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::default().with_url(url)
    }

    /// Appends a named access parameter.
    #[must_use]
    pub fn with_named_parameter(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_parameter(ParameterType::default().with_name(name).with_value(value))
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn parameter_value(&self, name: &str) -> Option<&str> {
        self.parameter
            .iter()
            .find(|p| p.name() == Some(name))
            .and_then(ParameterType::value)
    }
}

/// Named access parameter of a resource.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ParameterType")]
pub struct ParameterType {
    #[tjs(attribute = "name", required)]
    name: Option<String>,
    #[tjs(text)]
    value: Option<String>,
}

/// Exception wrapper for a failed output.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ExceptionReportType")]
pub struct ExceptionReportType {
    #[tjs(element = "ows:Exception", required)]
    exception: Option<ExceptionType>,
}

/// Builds the endpoint of a joined-output service.
///
/// When the base URL ends in `ows` or `tjs` (any case), the first occurrence
/// of that name in the URL is replaced by `{workspace}/{service}`. Any other
/// base has `/{workspace}/{service}` appended as is, so a trailing `/` on the
/// base yields a doubled separator.
///
/// # Example
/// ```
/// use tjs_schema::join::service_endpoint;
///
/// assert_eq!(
///     service_endpoint("http://localhost/geoserver/ows", "tjs", "wms"),
///     "http://localhost/geoserver/tjs/wms"
/// );
/// assert_eq!(
///     service_endpoint("http://localhost/geoserver", "tjs", "wfs"),
///     "http://localhost/geoserver/tjs/wfs"
/// );
/// ```
#[must_use]
pub fn service_endpoint(base_url: &str, workspace: &str, service: &str) -> String {
    let lower = base_url.to_ascii_lowercase();
    if lower.ends_with("ows") || lower.ends_with("tjs") {
        let needle = &lower[lower.len() - 3..];
        if let Some(pos) = lower.find(needle) {
            return format!(
                "{}{workspace}/{service}{}",
                &base_url[..pos],
                &base_url[pos + 3..]
            );
        }
    }
    format!("{base_url}/{workspace}/{service}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{DecodeOptions, EncodeOptions, QName, XmlReader, XmlValue, XmlWriter};

    fn encode<T: XmlValue>(value: &T, local: &'static str) -> String {
        let mut writer =
            XmlWriter::new(EncodeOptions::new().with_indent(None).with_declaration(false));
        value
            .write_xml(&mut writer, QName::tjs(local))
            .expect("Failed to write");
        writer.finish().expect("Failed to finish")
    }

    fn decode<T: XmlValue>(xml: &str) -> T {
        let mut reader = XmlReader::new(xml, DecodeOptions::new());
        let tag = reader.root().expect("Failed to parse").expect("no root");
        T::read_xml(&mut reader, &tag).expect("Failed to parse")
    }

    #[test]
    fn test_service_endpoint() {
        assert_eq!(
            service_endpoint("http://host/geoserver/OWS", "tjs", "wms"),
            "http://host/geoserver/tjs/wms"
        );
        assert_eq!(
            service_endpoint("http://host/geoserver/tjs", "joins", "wfs"),
            "http://host/geoserver/joins/wfs"
        );
        assert_eq!(
            service_endpoint("http://host/geoserver", "tjs", "wms"),
            "http://host/geoserver/tjs/wms"
        );
        assert_eq!(
            service_endpoint("http://host/geoserver/", "tjs", "wms"),
            "http://host/geoserver//tjs/wms"
        );
    }

    #[test]
    fn test_service_endpoint_replaces_first_occurrence() {
        assert_eq!(
            service_endpoint("http://tjs.example.org/tjs", "ws", "wms"),
            "http://ws/wms.example.org/tjs"
        );
    }

    #[test]
    fn test_standard_mechanisms() {
        let shapefile = MechanismType::shapefile();
        assert_eq!(shapefile.identifier(), Some("shapefile"));
        assert_eq!(shapefile.abstract_(), Some("ESRI shapefile with spatial dataset"));
        assert_eq!(shapefile.reference(), shapefile.abstract_());

        let wms = MechanismType::wms();
        assert_eq!(wms.title(), Some("WMS Server v1.1.1"));
        let text = wms.abstract_().expect("abstract");
        assert!(text.starts_with("The OpenGIS® Web Map Service Interface Standard (WMS) "));
        assert!(text.ends_with("layers from multiple servers can be combined or no"));

        let wfs = MechanismType::wfs();
        assert_eq!(wfs.reference(), Some("http://schemas.opengis.net/wfs/2.0/"));
        let text = wfs.abstract_().expect("abstract");
        assert!(text.contains("File Transfer Protocol (FTP), for example, the WFS offers"));
        assert!(text.ends_with("other than their producers' intended ones."));
    }

    #[test]
    fn test_status_builders() {
        let status = StatusType::new_completed("http://host/status/1");
        assert_eq!(status.choice_count(), 1);
        assert!(status.is_finished());
        assert_eq!(status.completed(), Some(""));
        let stamp = status.creation_time().expect("creation time is set");
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());

        let accepted = StatusType::new_accepted("http://host/status/2");
        assert!(!accepted.is_finished());
        assert!(StatusType::new_failed("x").is_finished());
    }

    #[test]
    fn test_status_round_trip() {
        let status = StatusType::new_accepted("http://host/status/3");
        let xml = encode(&status, "Status");
        assert!(xml.contains("<tjs:Accepted/>"));

        let back: StatusType = decode(&xml);
        assert_eq!(back, status);
        assert_eq!(back.accepted(), Some(""));
    }

    #[test]
    fn test_failed_status_is_empty_element() {
        let status = StatusType::new_failed("http://host/status/4");
        let xml = encode(&status, "Status");
        assert!(xml.contains("<tjs:Failed/>"));
        let back: StatusType = decode(&xml);
        assert!(back.failed().is_some());
    }

    #[test]
    fn test_outputs() {
        let wms = ResourceType::new(service_endpoint("http://host/ows", "tjs", "wms"))
            .with_named_parameter("layers", "tjs:states_pop");
        let response = JoinDataResponseType::new("http://host/tjs?request=GetCapabilities", "en")
            .with_status(StatusType::new_completed("http://host/status/5"))
            .with_joined_outputs(
                JoinedOutputsType::default()
                    .with_output(OutputType::delivered(MechanismType::wms(), wms))
                    .with_output(OutputType::exception(
                        MechanismType::shapefile(),
                        ExceptionType::new("NoApplicableCode", "export failed"),
                    )),
            );

        let outputs = response.outputs();
        assert_eq!(outputs.len(), 2);
        assert_eq!(
            outputs[0].resource().and_then(|r| r.parameter_value("layers")),
            Some("tjs:states_pop")
        );
        assert_eq!(outputs[0].mechanism().and_then(MechanismType::identifier), Some("WMS"));
        assert!(outputs[1].exception_report().is_some());
        assert_eq!(response.service(), "TJS");
    }

    #[test]
    fn test_join_abilities_defaults() {
        let mut abilities = JoinAbilitiesType::default()
            .with_attribute_limit(10u64)
            .with_output_mechanisms(
                OutputMechanismsType::default()
                    .with_mechanism(MechanismType::wms())
                    .with_mechanism(MechanismType::wfs()),
            );
        assert!(!abilities.update_supported());
        abilities.set_update_supported(true);
        assert!(abilities.update_supported());
        assert_eq!(abilities.attribute_limit(), Some(10));

        let xml = encode(&abilities, "JoinAbilities");
        assert!(xml.contains("updateSupported=\"true\""));
        assert!(xml.contains("<tjs:AttributeLimit>10</tjs:AttributeLimit>"));
        let back: JoinAbilitiesType = decode(&xml);
        assert_eq!(back, abilities);
    }
}
