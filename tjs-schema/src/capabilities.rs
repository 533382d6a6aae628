//! `GetCapabilities` response.

use crate::ows::{OperationsMetadataType, ServiceIdentificationType, ServiceProviderType};
use tjs_derive::TjsType;

/// Service metadata document returned by `GetCapabilities`.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "tjsCapabilitiesType")]
pub struct TjsCapabilitiesType {
    #[tjs(element = "ows:ServiceIdentification")]
    service_identification: Option<ServiceIdentificationType>,
    #[tjs(element = "ows:ServiceProvider")]
    service_provider: Option<ServiceProviderType>,
    #[tjs(element = "ows:OperationsMetadata")]
    operations_metadata: Option<OperationsMetadataType>,
    #[tjs(element = "Languages", required)]
    languages: Option<LanguagesType>,
    #[tjs(element = "WSDL")]
    wsdl: Option<WSDLType>,
    #[tjs(attribute = "lang", required)]
    lang: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "updateSequence")]
    update_sequence: Option<String>,
    #[tjs(attribute = "version", required, default = "1.0")]
    version: Option<String>,
}

/// Languages supported by the service.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "LanguagesType")]
pub struct LanguagesType {
    #[tjs(element = "ows:Language", required)]
    language: Vec<String>,
}

/// Reference to a WSDL description of the service.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "WSDLType")]
pub struct WSDLType {
    #[tjs(attribute = "xlink:href", required)]
    href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{Reflective, Value};

    #[test]
    fn test_capabilities_defaults() {
        let caps = TjsCapabilitiesType::default();
        assert_eq!(caps.service(), "TJS");
        assert_eq!(caps.version(), "1.0");
        assert!(!caps.is_set_version());
        assert!(caps.lang().is_none());
    }

    #[test]
    fn test_languages_list() {
        let mut languages = LanguagesType::default();
        assert!(!languages.is_set_language());
        languages.add_language("en");
        languages.add_language("es");
        assert_eq!(languages.language(), ["en".to_string(), "es".to_string()]);

        let value = languages
            .e_get(LanguagesType::LANGUAGE)
            .expect("Failed to get")
            .expect("list is always present");
        assert_eq!(value.as_list().map(<[Value]>::len), Some(2));

        languages.unset_language();
        assert!(languages.language().is_empty());
    }

    #[test]
    fn test_containment_visit() {
        let caps = TjsCapabilitiesType::default()
            .with_languages(LanguagesType::default().with_language("en"))
            .with_wsdl(WSDLType::default().with_href("http://example.org/tjs?wsdl"));

        let mut visited = Vec::new();
        caps.visit_children(&mut |def, child| visited.push((def.name, child.type_name())));
        assert_eq!(
            visited,
            [("languages", "LanguagesType"), ("wsdl", "WSDLType")]
        );
    }
}
