//! Dumpers WKT et WKB (hexadécimal) via geozero

use geo::Geometry;
use geozero::{CoordDimensions, ToWkb, ToWkt};

use super::{require_point, Dumper};
use crate::types::Address;
use crate::GeocoderError;

#[derive(Debug, Default, Clone, Copy)]
pub struct WktDumper;

impl Dumper for WktDumper {
    fn id(&self) -> &str {
        "wkt"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        let point = Geometry::Point(require_point(address)?);
        point
            .to_wkt()
            .map_err(|e| GeocoderError::dump(self.id(), e.to_string()))
    }
}

/// WKB little-endian, encodé en hexadécimal
#[derive(Debug, Default, Clone, Copy)]
pub struct WkbDumper;

impl Dumper for WkbDumper {
    fn id(&self) -> &str {
        "wkb"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        let point = Geometry::Point(require_point(address)?);
        let wkb = point
            .to_wkb(CoordDimensions::xy())
            .map_err(|e| GeocoderError::dump(self.id(), e.to_string()))?;
        Ok(hex::encode(wkb))
    }
}
