//! Dumpers XML : KML et GPX

use super::text::format_line;
use super::{require_point, Dumper};
use crate::types::Address;
use crate::GeocoderError;

/// Placemark KML
#[derive(Debug, Default, Clone, Copy)]
pub struct KmlDumper;

impl Dumper for KmlDumper {
    fn id(&self) -> &str {
        "kml"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        let point = require_point(address)?;
        let name = escape_xml(&format_line(address, ", "));

        Ok(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark><name>{name}</name><description>{name}</description><Point><coordinates>{lon:.7},{lat:.7},0</coordinates></Point></Placemark></Document></kml>"#,
            name = name,
            lon = point.x(),
            lat = point.y(),
        ))
    }
}

/// Document GPX 1.1 avec un waypoint
#[derive(Debug, Default, Clone, Copy)]
pub struct GpxDumper;

impl Dumper for GpxDumper {
    fn id(&self) -> &str {
        "gpx"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        let point = require_point(address)?;
        let name = escape_xml(&format_line(address, ", "));

        Ok(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><gpx version="1.1" creator="geocoder" xmlns="http://www.topografix.com/GPX/1/1"><wpt lat="{lat:.7}" lon="{lon:.7}"><name>{name}</name><src>{src}</src></wpt></gpx>"#,
            lat = point.y(),
            lon = point.x(),
            name = name,
            src = escape_xml(&address.provided_by),
        ))
    }
}

/// Échappe une chaîne pour XML
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}
