//! Lecture des valeurs de geofield (WKT ou GeoJSON) et centroïde

use geo::{Centroid, Geometry, Point};
use geozero::geojson::GeoJson;
use geozero::wkt::Wkt;
use geozero::ToGeo;

use crate::GeocoderError;

/// Charge une géométrie depuis du WKT ou du GeoJSON (détecté par un `{` initial)
pub fn load(value: &str) -> Result<Geometry, GeocoderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GeocoderError::InvalidGeometry("empty value".to_string()));
    }

    let geometry = if trimmed.starts_with('{') {
        GeoJson(trimmed).to_geo()
    } else {
        Wkt(trimmed).to_geo()
    };

    geometry.map_err(|e| GeocoderError::InvalidGeometry(e.to_string()))
}

/// Centroïde de la géométrie, `None` si elle est vide
pub fn centroid(geometry: &Geometry) -> Option<Point> {
    geometry.centroid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_wkt_point() {
        let geometry = load("POINT (5.7245 45.1885)").unwrap();
        let point = centroid(&geometry).unwrap();
        assert_eq!(point.x(), 5.7245);
        assert_eq!(point.y(), 45.1885);
    }

    #[test]
    fn test_load_wkt_polygon_centroid() {
        let geometry = load("POLYGON((0 0,2 0,2 2,0 2,0 0))").unwrap();
        let point = centroid(&geometry).unwrap();
        assert!((point.x() - 1.0).abs() < 1e-9);
        assert!((point.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_geojson() {
        let geometry = load(r#"{"type":"LineString","coordinates":[[0,0],[4,0]]}"#).unwrap();
        let point = centroid(&geometry).unwrap();
        assert!((point.x() - 2.0).abs() < 1e-9);
        assert!(point.y().abs() < 1e-9);
    }

    #[test]
    fn test_load_invalid() {
        assert!(matches!(load("POINT (abc)"), Err(GeocoderError::InvalidGeometry(_))));
        assert!(matches!(load("   "), Err(GeocoderError::InvalidGeometry(_))));
        assert!(matches!(load("{not json"), Err(GeocoderError::InvalidGeometry(_))));
    }
}
