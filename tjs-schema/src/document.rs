//! Root elements of TJS documents.
//!
//! A TJS exchange is a single request or response document whose root is one
//! of the global elements of the schema. [`Document`] wraps the typed payload
//! of each of them and dispatches decoding on the root's local name.

use crate::capabilities::TjsCapabilitiesType;
use crate::dataset::{DataDescriptionsType, DatasetDescriptionsType};
use crate::enums::RequestName;
use crate::error::{Result, SchemaError};
use crate::framework::{FrameworkDescriptionsType, FrameworkKeyDescriptionType};
use crate::join::{JoinAbilitiesType, JoinDataResponseType};
use crate::request::{
    DescribeDataType, DescribeDatasetsType, DescribeFrameworksType, DescribeKeyType,
    GetCapabilitiesType, GetDataType, JoinDataType, RequestBaseType,
};
use crate::rowset::GDASType;
use crate::validation::{self, Diagnostic};
use tjs_core::{DecodeOptions, EncodeOptions, QName, Reflective, XmlReader, XmlValue, XmlWriter};
use tracing::{debug, warn};

macro_rules! documents {
    ($($(#[$meta:meta])* $variant:ident($ty:ty) = $root:literal $(=> $request:ident)?),+ $(,)?) => {
        /// A decoded TJS request or response.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Document {
            $(
                $(#[$meta])*
                $variant($ty),
            )+
        }

        impl Document {
            /// Local names of all root elements.
            pub const ROOT_NAMES: &'static [&'static str] = &[$($root),+];

            /// Returns the local name of the root element.
            #[must_use]
            pub fn root_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $root,)+
                }
            }

            /// Returns the payload as a reflective object.
            #[must_use]
            pub fn as_reflective(&self) -> &dyn Reflective {
                match self {
                    $(Self::$variant(inner) => inner,)+
                }
            }

            /// Returns the payload as a mutable reflective object.
            pub fn as_reflective_mut(&mut self) -> &mut dyn Reflective {
                match self {
                    $(Self::$variant(inner) => inner,)+
                }
            }

            /// Returns the operation name if this document is a request.
            #[must_use]
            pub fn request_name(&self) -> Option<RequestName> {
                match self {
                    $(Self::$variant(_) => documents!(@request $($request)?),)+
                }
            }

            fn read_root(reader: &mut XmlReader<'_>, root: &tjs_core::StartTag) -> Result<Self> {
                let document = match root.name.as_str() {
                    $($root => Self::$variant(<$ty as XmlValue>::read_xml(reader, root)?),)+
                    other => {
                        return Err(SchemaError::UnknownRoot {
                            name: other.to_string(),
                        });
                    }
                };
                Ok(document)
            }

            fn write_root(&self, writer: &mut XmlWriter) -> Result<()> {
                match self {
                    $(Self::$variant(inner) => inner.write_xml(writer, QName::tjs($root))?,)+
                }
                Ok(())
            }
        }

        $(
            impl From<$ty> for Document {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
    (@request $request:ident) => {
        Some(RequestName::$request)
    };
    (@request) => {
        None
    };
}

documents! {
    /// `GetCapabilities` request.
    GetCapabilities(GetCapabilitiesType) = "GetCapabilities" => GetCapabilities,
    /// `GetCapabilities` response.
    Capabilities(TjsCapabilitiesType) = "Capabilities",
    /// `DescribeFrameworks` request.
    DescribeFrameworks(DescribeFrameworksType) = "DescribeFrameworks" => DescribeFrameworks,
    /// `DescribeFrameworks` response.
    FrameworkDescriptions(FrameworkDescriptionsType) = "FrameworkDescriptions",
    /// `DescribeDatasets` request.
    DescribeDatasets(DescribeDatasetsType) = "DescribeDatasets" => DescribeDatasets,
    /// `DescribeDatasets` response.
    DatasetDescriptions(DatasetDescriptionsType) = "DatasetDescriptions",
    /// `DescribeData` request.
    DescribeData(DescribeDataType) = "DescribeData" => DescribeData,
    /// `DescribeData` response.
    DataDescriptions(DataDescriptionsType) = "DataDescriptions",
    /// `DescribeJoinAbilities` request.
    DescribeJoinAbilities(RequestBaseType) = "DescribeJoinAbilities" => DescribeJoinAbilities,
    /// `DescribeJoinAbilities` response.
    JoinAbilities(JoinAbilitiesType) = "JoinAbilities",
    /// `DescribeKey` request.
    DescribeKey(DescribeKeyType) = "DescribeKey" => DescribeKey,
    /// `DescribeKey` response.
    FrameworkKeyDescription(FrameworkKeyDescriptionType) = "FrameworkKeyDescription",
    /// `GetData` request.
    GetData(GetDataType) = "GetData" => GetData,
    /// `GetData` response.
    Gdas(GDASType) = "GDAS",
    /// `JoinData` request.
    JoinData(JoinDataType) = "JoinData" => JoinData,
    /// `JoinData` response.
    JoinDataResponse(JoinDataResponseType) = "JoinDataResponse",
}

impl Document {
    /// Decodes a document with lenient options.
    ///
    /// # Errors
    /// Returns an error if the XML is malformed, has no root element, or the
    /// root is not a TJS global element.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::from_xml_with(xml, &DecodeOptions::default())
    }

    /// Decodes a document.
    ///
    /// # Arguments
    /// * `xml` - Document text
    /// * `options` - Decoding options
    ///
    /// # Errors
    /// Returns an error if the XML is malformed, has no root element, the
    /// root is not a TJS global element, or strict decoding meets unknown
    /// content.
    pub fn from_xml_with(xml: &str, options: &DecodeOptions) -> Result<Self> {
        let mut reader = XmlReader::new(xml, options.clone());
        let root = reader.root()?.ok_or(SchemaError::EmptyDocument)?;
        debug!(root = %root.name, strict = options.strict(), "decoding TJS document");
        Self::read_root(&mut reader, &root)
    }

    /// Encodes the document with default options.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&EncodeOptions::default())
    }

    /// Encodes the document.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn to_xml_with(&self, options: &EncodeOptions) -> Result<String> {
        let mut writer = XmlWriter::new(options.clone());
        writer.write_declaration()?;
        self.write_root(&mut writer)?;
        let xml = writer.finish()?;
        debug!(root = self.root_name(), bytes = xml.len(), "encoded TJS document");
        Ok(xml)
    }

    /// Returns true for request documents.
    #[must_use]
    pub fn is_request(&self) -> bool {
        self.request_name().is_some()
    }

    /// Checks the document against the schema constraints the types do not
    /// enforce by construction.
    #[must_use]
    pub fn validate(&self) -> Vec<Diagnostic> {
        let diagnostics = validation::validate_from(self.as_reflective(), self.root_name());
        if !diagnostics.is_empty() {
            warn!(
                root = self.root_name(),
                count = diagnostics.len(),
                first = %diagnostics[0],
                "document failed validation"
            );
        }
        diagnostics
    }
}
