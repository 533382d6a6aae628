//! Operation request types.
//!
//! Every request except `GetCapabilities` extends [`RequestBaseType`] and
//! carries its `language`, `service` and `version` attributes. The
//! [`RequestBase`] trait exposes them uniformly.

use crate::enums::{RequestServiceType, UpdateType, VersionType, VersionType2};
use crate::ows::AcceptFormatsType;
use tjs_core::Reflective;
use tjs_derive::TjsType;

/// Attributes shared by every TJS operation request.
pub trait RequestBase: Reflective {
    /// Returns the requested response language, `None` if unset.
    fn language(&self) -> Option<&str>;

    /// Returns the service type, `"TJS"` unless set otherwise.
    fn service(&self) -> &str;

    /// Returns the protocol version, [`VersionType2::V1`] unless set.
    fn version(&self) -> VersionType2;

    /// Sets the requested response language.
    fn set_language(&mut self, language: String);

    /// Sets the protocol version.
    fn set_version(&mut self, version: VersionType2);

    /// Copies the shared attributes into a bare [`RequestBaseType`],
    /// preserving which of them are explicitly set.
    fn to_base(&self) -> RequestBaseType;
}

/// Common envelope of TJS operation requests.
///
/// Also the type of the `DescribeJoinAbilities` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "RequestBaseType")]
pub struct RequestBaseType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
}

/// `GetCapabilities` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "GetCapabilitiesType")]
pub struct GetCapabilitiesType {
    #[tjs(element = "AcceptVersions")]
    accept_versions: Option<AcceptVersionsType>,
    #[tjs(element = "Sections")]
    sections: Option<String>,
    #[tjs(element = "AcceptFormats")]
    accept_formats: Option<AcceptFormatsType>,
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "RequestServiceType::Tjs")]
    service: Option<RequestServiceType>,
    #[tjs(attribute = "updateSequence")]
    update_sequence: Option<String>,
}

/// Versions accepted by the client, in order of preference.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AcceptVersionsType")]
pub struct AcceptVersionsType {
    #[tjs(element = "Version", required)]
    version: Vec<VersionType>,
}

/// `DescribeFrameworks` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeFrameworksType")]
pub struct DescribeFrameworksType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "FrameworkURI")]
    framework_uri: Option<String>,
}

/// `DescribeDatasets` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeDatasetsType")]
pub struct DescribeDatasetsType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "FrameworkURI")]
    framework_uri: Option<String>,
    #[tjs(element = "DatasetURI")]
    dataset_uri: Option<String>,
}

/// `DescribeData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeDataType")]
pub struct DescribeDataType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "FrameworkURI")]
    framework_uri: Option<String>,
    #[tjs(element = "DatasetURI")]
    dataset_uri: Option<String>,
    #[tjs(element = "Attributes")]
    attributes: Option<String>,
}

/// `DescribeKey` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "DescribeKeyType")]
pub struct DescribeKeyType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
}

/// `GetData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "GetDataType")]
pub struct GetDataType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Attributes")]
    attributes: Option<String>,
    #[tjs(element = "LinkageKeys")]
    linkage_keys: Option<String>,
    #[tjs(element = "FilterColumn")]
    filter_column: Option<String>,
    #[tjs(element = "FilterValue")]
    filter_value: Option<String>,
    #[tjs(element = "XSL")]
    xsl: Option<String>,
    #[tjs(attribute = "aid", default = "false")]
    aid: Option<bool>,
}

impl GetDataType {
    /// Creates a request for a dataset joined to a framework.
    ///
    /// # Arguments
    /// * `framework_uri` - URI of the spatial framework
    /// * `dataset_uri` - URI of the attribute dataset
    #[must_use]
    pub fn new(framework_uri: impl Into<String>, dataset_uri: impl Into<String>) -> Self {
        Self::default()
            .with_framework_uri(framework_uri)
            .with_dataset_uri(dataset_uri)
    }
}

/// `JoinData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "JoinDataType")]
pub struct JoinDataType {
    #[tjs(attribute = "language")]
    language: Option<String>,
    #[tjs(attribute = "service", required, default = "TJS")]
    service: Option<String>,
    #[tjs(attribute = "version", default = "VersionType2::V1")]
    version: Option<VersionType2>,
    #[tjs(element = "AttributeData", required)]
    attribute_data: Option<AttributeDataType>,
    #[tjs(element = "MapStyling")]
    map_styling: Option<MapStylingType>,
    #[tjs(element = "ClassificationURL")]
    classification_url: Option<String>,
    #[tjs(attribute = "update", default = "UpdateType::True")]
    update: Option<UpdateType>,
}

/// Attribute data to join, given by URL or as an inline `GetData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "AttributeDataType")]
pub struct AttributeDataType {
    #[tjs(element = "GetDataURL")]
    get_data_url: Option<String>,
    #[tjs(element = "GetDataXML")]
    get_data_xml: Option<GetDataXMLType>,
}

/// Inline `GetData` request embedded in a `JoinData` request.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "GetDataXMLType")]
pub struct GetDataXMLType {
    #[tjs(element = "FrameworkURI", required)]
    framework_uri: Option<String>,
    #[tjs(element = "DatasetURI", required)]
    dataset_uri: Option<String>,
    #[tjs(element = "Attributes")]
    attributes: Option<String>,
    #[tjs(element = "LinkageKeys")]
    linkage_keys: Option<String>,
    #[tjs(attribute = "getDataHost")]
    get_data_host: Option<String>,
    #[tjs(attribute = "language")]
    language: Option<String>,
}

/// Styling to apply to joined map output.
#[derive(Debug, Clone, Default, PartialEq, TjsType)]
#[tjs(name = "MapStylingType")]
pub struct MapStylingType {
    #[tjs(element = "StylingIdentifier", required)]
    styling_identifier: Option<String>,
    #[tjs(element = "StylingURL", required)]
    styling_url: Option<String>,
}

macro_rules! request_base {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl RequestBase for $ty {
                fn language(&self) -> Option<&str> {
                    <$ty>::language(self)
                }

                fn service(&self) -> &str {
                    <$ty>::service(self)
                }

                fn version(&self) -> VersionType2 {
                    <$ty>::version(self)
                }

                fn set_language(&mut self, language: String) {
                    <$ty>::set_language(self, language);
                }

                fn set_version(&mut self, version: VersionType2) {
                    <$ty>::set_version(self, version);
                }

                fn to_base(&self) -> RequestBaseType {
                    RequestBaseType {
                        language: self.language.clone(),
                        service: self.service.clone(),
                        version: self.version,
                    }
                }
            }
        )+
    };
}

request_base!(
    RequestBaseType,
    DescribeFrameworksType,
    DescribeDatasetsType,
    DescribeDataType,
    DescribeKeyType,
    GetDataType,
    JoinDataType,
);

#[cfg(test)]
mod tests {
    use super::*;
    use tjs_core::{FeatureId, TypeInfo, Value};

    #[test]
    fn test_request_base_version_tri_state() {
        let mut request = RequestBaseType::default();
        assert_eq!(request.version(), VersionType2::V1);
        assert_eq!(request.version().literal(), "1");
        assert!(!request.is_set_version());

        request.set_version(VersionType2::V10);
        assert_eq!(request.version(), VersionType2::V10);
        assert!(request.is_set_version());

        request.unset_version();
        assert_eq!(request.version(), VersionType2::V1);
        assert!(!request.is_set_version());
    }

    #[test]
    fn test_setting_default_marks_explicit() {
        let mut request = GetDataType::new("http://example.org/frameworks/states", "urn:pop");
        assert!(!request.aid());
        assert!(!request.is_set_aid());

        request.set_aid(false);
        assert!(!request.aid());
        assert!(request.is_set_aid());
        assert_eq!(request.framework_uri(), Some("http://example.org/frameworks/states"));
    }

    #[test]
    fn test_service_default() {
        let mut request = DescribeKeyType::default();
        assert_eq!(request.service(), "TJS");
        assert!(!request.is_set_service());
        request.set_service("WPS");
        assert_eq!(request.service(), "WPS");

        let caps = GetCapabilitiesType::default();
        assert_eq!(caps.service(), RequestServiceType::Tjs);
    }

    #[test]
    fn test_join_data_update_default() {
        let request = JoinDataType::default();
        assert_eq!(request.update(), UpdateType::True);
        assert!(!request.is_set_update());
    }

    #[test]
    fn test_reflective_agrees_with_typed() {
        let mut request = DescribeDatasetsType::default();
        let version = DescribeDatasetsType::VERSION;

        assert_eq!(
            request.e_get(version).expect("Failed to get"),
            Some(Value::Enum {
                type_name: "versionType",
                literal: "1",
            })
        );
        assert!(!request.e_is_set(version).expect("Failed to get"));

        request
            .e_set(version, Value::from("1.0.0"))
            .expect("Failed to set");
        assert_eq!(request.version(), VersionType2::V100);
        assert!(request.is_set_version());

        request
            .e_set(DescribeDatasetsType::DATASET_URI, Value::from("urn:ds"))
            .expect("Failed to set");
        assert_eq!(request.dataset_uri(), Some("urn:ds"));

        request.e_unset(version).expect("Failed to unset");
        assert!(!request.is_set_version());
    }

    #[test]
    fn test_reflective_errors() {
        let mut request = DescribeKeyType::default();
        let err = request.e_get(FeatureId::new(42)).unwrap_err();
        assert_eq!(err, tjs_core::Error::invalid_field("DescribeKeyType", 42));

        let err = request
            .e_set(DescribeKeyType::VERSION, Value::Boolean(true))
            .unwrap_err();
        assert!(matches!(err, tjs_core::Error::TypeMismatch { feature: "version", .. }));
    }

    #[test]
    fn test_request_base_trait() {
        fn describe<T: RequestBase>(request: &T) -> String {
            format!("{} {}", request.service(), request.version())
        }

        let mut request = JoinDataType::default();
        assert_eq!(describe(&request), "TJS 1");

        RequestBase::set_version(&mut request, VersionType2::V10);
        RequestBase::set_language(&mut request, "en".to_string());
        let base = request.to_base();
        assert!(base.is_set_version());
        assert!(!base.is_set_service());
        assert_eq!(base.language(), Some("en"));
        assert_eq!(describe(&base), "TJS 1.0");
    }

    #[test]
    fn test_feature_table() {
        let names: Vec<&str> = GetDataType::FEATURES.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "language",
                "service",
                "version",
                "framework_uri",
                "dataset_uri",
                "attributes",
                "linkage_keys",
                "filter_column",
                "filter_value",
                "xsl",
                "aid",
            ]
        );
        let aid = &GetDataType::FEATURES[GetDataType::AID.index()];
        assert!(aid.unsettable);
        assert!(!aid.is_required());
    }
}
