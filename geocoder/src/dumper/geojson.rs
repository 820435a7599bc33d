//! Dumper GeoJSON (Feature Point + propriétés camelCase)

use geojson::{Feature, JsonObject, JsonValue, Value};

use super::Dumper;
use crate::types::Address;
use crate::GeocoderError;

#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonDumper;

impl Dumper for GeoJsonDumper {
    fn id(&self) -> &str {
        "geojson"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        serde_json::to_string(&to_feature(address))
            .map_err(|e| GeocoderError::dump(self.id(), e.to_string()))
    }
}

/// Convertit une adresse en Feature GeoJSON
///
/// Les clés de propriétés sont celles lues par
/// [`map_geojson_to_address`](crate::address::map_geojson_to_address).
pub fn to_feature(address: &Address) -> Feature {
    let geometry = address
        .coordinates
        .map(|p| geojson::Geometry::new(Value::Point(vec![p.x(), p.y()])));

    let mut properties = JsonObject::new();
    let fields = [
        ("streetNumber", &address.street_number),
        ("streetName", &address.street_name),
        ("postalCode", &address.postal_code),
        ("locality", &address.locality),
        ("subLocality", &address.sub_locality),
        ("country", &address.country),
        ("countryCode", &address.country_code),
    ];
    for (key, value) in fields {
        if let Some(v) = value {
            properties.insert(key.to_string(), JsonValue::String(v.clone()));
        }
    }
    properties.insert(
        "providedBy".to_string(),
        JsonValue::String(address.provided_by.clone()),
    );

    Feature {
        bbox: None,
        geometry,
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
