//! OWS 1.1 common types referenced by TJS documents.
//!
//! Only the parts of the OWS schema that appear in TJS capabilities and
//! exception reports are bound.

use tjs_derive::TjsType;

/// Metadata about the service itself.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ServiceIdentificationType")]
pub struct ServiceIdentificationType {
    #[tjs(element = "ows:Title")]
    title: Vec<String>,
    #[tjs(element = "ows:Abstract")]
    abstract_: Vec<String>,
    #[tjs(element = "ows:Keywords")]
    keywords: Vec<KeywordsType>,
    #[tjs(element = "ows:ServiceType", required)]
    service_type: Option<String>,
    #[tjs(element = "ows:ServiceTypeVersion", required)]
    service_type_version: Vec<String>,
    #[tjs(element = "ows:Fees")]
    fees: Option<String>,
    #[tjs(element = "ows:AccessConstraints")]
    access_constraints: Vec<String>,
}

/// List of keywords with an optional thesaurus type.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "KeywordsType")]
pub struct KeywordsType {
    #[tjs(element = "ows:Keyword", required)]
    keyword: Vec<String>,
    #[tjs(element = "ows:Type")]
    type_: Option<String>,
}

/// Organization providing the service.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ServiceProviderType")]
pub struct ServiceProviderType {
    #[tjs(element = "ows:ProviderName", required)]
    provider_name: Option<String>,
    #[tjs(element = "ows:ProviderSite")]
    provider_site: Option<OnlineResourceType>,
    #[tjs(element = "ows:ServiceContact", required)]
    service_contact: Option<ResponsiblePartySubsetType>,
}

/// Reference to an online resource.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OnlineResourceType")]
pub struct OnlineResourceType {
    #[tjs(attribute = "xlink:href")]
    href: Option<String>,
}

/// Contact person of the service provider.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ResponsiblePartySubsetType")]
pub struct ResponsiblePartySubsetType {
    #[tjs(element = "ows:IndividualName")]
    individual_name: Option<String>,
    #[tjs(element = "ows:PositionName")]
    position_name: Option<String>,
    #[tjs(element = "ows:Role")]
    role: Option<String>,
}

/// Operations implemented by the server.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OperationsMetadataType")]
pub struct OperationsMetadataType {
    #[tjs(element = "ows:Operation", required)]
    operation: Vec<OperationType>,
    #[tjs(element = "ows:Parameter")]
    parameter: Vec<DomainType>,
    #[tjs(element = "ows:Constraint")]
    constraint: Vec<DomainType>,
}

/// One operation and the endpoints it is available at.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "OperationType")]
pub struct OperationType {
    #[tjs(element = "ows:DCP", required)]
    dcp: Vec<DcpType>,
    #[tjs(element = "ows:Parameter")]
    parameter: Vec<DomainType>,
    #[tjs(element = "ows:Constraint")]
    constraint: Vec<DomainType>,
    #[tjs(attribute = "name", required)]
    name: Option<String>,
}

/// Distributed computing platform of an operation.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DCPType")]
pub struct DcpType {
    #[tjs(element = "ows:HTTP", required)]
    http: Option<HttpType>,
}

/// HTTP endpoints of an operation.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "HTTPType")]
pub struct HttpType {
    #[tjs(element = "ows:Get")]
    get: Vec<RequestMethodType>,
    #[tjs(element = "ows:Post")]
    post: Vec<RequestMethodType>,
}

/// URL of one HTTP request method.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RequestMethodType")]
pub struct RequestMethodType {
    #[tjs(element = "ows:Constraint")]
    constraint: Vec<DomainType>,
    #[tjs(attribute = "xlink:href")]
    href: Option<String>,
}

/// Valid domain of a parameter or constraint.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DomainType")]
pub struct DomainType {
    #[tjs(element = "ows:AllowedValues")]
    allowed_values: Option<AllowedValuesType>,
    #[tjs(element = "ows:DefaultValue")]
    default_value: Option<String>,
    #[tjs(attribute = "name", required)]
    name: Option<String>,
}

/// Enumerated allowed values.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AllowedValuesType")]
pub struct AllowedValuesType {
    #[tjs(element = "ows:Value", required)]
    value: Vec<String>,
}

/// Output formats accepted by the client.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AcceptFormatsType")]
pub struct AcceptFormatsType {
    #[tjs(element = "ows:OutputFormat")]
    output_format: Vec<String>,
}

/// Exception reported by the server.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "ExceptionType")]
pub struct ExceptionType {
    #[tjs(element = "ows:ExceptionText")]
    exception_text: Vec<String>,
    #[tjs(attribute = "exceptionCode", required)]
    exception_code: Option<String>,
    #[tjs(attribute = "locator")]
    locator: Option<String>,
}

impl ExceptionType {
    /// Creates an exception with a code and message.
    ///
    /// # Arguments
    /// * `code` - OWS exception code such as `InvalidParameterValue`
    /// * `text` - Human-readable message
    #[must_use]
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::default()
            .with_exception_code(code)
            .with_exception_text(text)
    }
}
