//! Sample documents of configurable size.

use std::fmt::Write;
use tjs_schema::{Document, GDASType};

const GDAS_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tjs:GDAS xmlns:tjs="http://www.opengis.net/tjs/1.0"
    xmlns:xlink="http://www.w3.org/1999/xlink"
    capabilities="http://example.org/tjs?request=GetCapabilities"
    lang="en" service="TJS" version="1.0">
  <tjs:Framework>
    <tjs:FrameworkURI>http://example.org/frameworks/counties</tjs:FrameworkURI>
    <tjs:Organization>Example Census Bureau</tjs:Organization>
    <tjs:Title>Counties</tjs:Title>
    <tjs:Abstract>County boundaries</tjs:Abstract>
    <tjs:ReferenceDate>2020</tjs:ReferenceDate>
    <tjs:Version>1</tjs:Version>
    <tjs:FrameworkKey>
      <tjs:Column name="FIPS" type="http://www.w3.org/TR/xmlschema-2/#string" length="5"/>
    </tjs:FrameworkKey>
    <tjs:BoundingCoordinates>
      <tjs:North>71.5</tjs:North>
      <tjs:South>18.9</tjs:South>
      <tjs:East>-66.9</tjs:East>
      <tjs:West>-179.2</tjs:West>
    </tjs:BoundingCoordinates>
    <tjs:DescribeDatasetsRequest xlink:href="http://example.org/tjs?request=DescribeDatasets"/>
    <tjs:Dataset>
      <tjs:DatasetURI>http://example.org/datasets/households</tjs:DatasetURI>
      <tjs:Organization>Example Census Bureau</tjs:Organization>
      <tjs:Title>Households</tjs:Title>
      <tjs:Abstract>Households and median income</tjs:Abstract>
      <tjs:ReferenceDate>2020</tjs:ReferenceDate>
      <tjs:Version>1</tjs:Version>
      <tjs:DescribeDataRequest xlink:href="http://example.org/tjs?request=DescribeData"/>
      <tjs:Columnset>
        <tjs:FrameworkKey complete="true" relationship="one">
          <tjs:Column name="FIPS" type="http://www.w3.org/TR/xmlschema-2/#string" length="5"/>
        </tjs:FrameworkKey>
        <tjs:Attributes>
          <tjs:Column name="HH" type="http://www.w3.org/TR/xmlschema-2/#integer"
              length="9" purpose="Attribute">
            <tjs:Title>Households</tjs:Title>
            <tjs:Abstract>Occupied housing units</tjs:Abstract>
            <tjs:Values>
              <tjs:Count>
                <tjs:UOM>
                  <tjs:ShortForm>hh</tjs:ShortForm>
                  <tjs:LongForm>households</tjs:LongForm>
                </tjs:UOM>
              </tjs:Count>
            </tjs:Values>
          </tjs:Column>
          <tjs:Column name="INCOME" type="http://www.w3.org/TR/xmlschema-2/#decimal"
              length="10" decimals="2" purpose="Attribute">
            <tjs:Title>Median income</tjs:Title>
            <tjs:Abstract>Median household income</tjs:Abstract>
            <tjs:Values>
              <tjs:Measure>
                <tjs:UOM>
                  <tjs:ShortForm>USD</tjs:ShortForm>
                  <tjs:LongForm>US dollars</tjs:LongForm>
                </tjs:UOM>
                <tjs:Exceptions>
                  <tjs:Null>
                    <tjs:Identifier>-1</tjs:Identifier>
                    <tjs:Title>Suppressed</tjs:Title>
                    <tjs:Abstract>Withheld for disclosure protection</tjs:Abstract>
                  </tjs:Null>
                </tjs:Exceptions>
              </tjs:Measure>
            </tjs:Values>
          </tjs:Column>
        </tjs:Attributes>
      </tjs:Columnset>
      <tjs:Rowset>
"#;

const GDAS_TAIL: &str = r#"      </tjs:Rowset>
    </tjs:Dataset>
  </tjs:Framework>
</tjs:GDAS>
"#;

/// Returns a `GDAS` document with `rows` attribute rows.
///
/// Every tenth row carries a null income cell.
#[must_use]
pub fn gdas_xml(rows: usize) -> String {
    let mut xml = String::with_capacity(GDAS_HEAD.len() + GDAS_TAIL.len() + rows * 96);
    xml.push_str(GDAS_HEAD);
    for row in 0..rows {
        let households = 1_000 + row * 37;
        let _ = if row % 10 == 9 {
            writeln!(
                xml,
                "        <tjs:Row><tjs:K>{row:05}</tjs:K><tjs:V>{households}</tjs:V>\
                 <tjs:V null=\"true\">-1</tjs:V></tjs:Row>"
            )
        } else {
            writeln!(
                xml,
                "        <tjs:Row><tjs:K>{row:05}</tjs:K><tjs:V>{households}</tjs:V>\
                 <tjs:V>{}.{:02}</tjs:V></tjs:Row>",
                40_000 + row * 11,
                row % 100
            )
        };
    }
    xml.push_str(GDAS_TAIL);
    xml
}

/// Decodes the document produced by [`gdas_xml`].
///
/// # Panics
/// Panics if the generated document does not decode to a `GDAS` response.
#[must_use]
pub fn gdas(rows: usize) -> GDASType {
    match Document::from_xml(&gdas_xml(rows)) {
        Ok(Document::Gdas(gdas)) => gdas,
        Ok(other) => panic!("Expected GDAS, got {}", other.root_name()),
        Err(err) => panic!("Failed to decode sample GDAS: {err}"),
    }
}
