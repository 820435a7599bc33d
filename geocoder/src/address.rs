//! Conversion d'un fragment GeoJSON en valeur de champ adresse

use serde_json::Value;

use crate::types::AddressValue;
use crate::GeocoderError;

/// Construit la valeur d'un champ adresse depuis une feature GeoJSON.
///
/// Seul le sous-objet `properties` est lu (`countryCode`, `streetName`,
/// `postalCode`, `locality`). Une clé absente ou `null` donne une chaîne vide ;
/// le code pays est réduit à ses 2 premiers caractères.
///
/// # Errors
///
/// `GeocoderError::MalformedInput` si le texte n'est pas du JSON, ou si une clé
/// lue est présente avec une valeur qui n'est pas une chaîne.
pub fn map_geojson_to_address(geojson: &str) -> Result<AddressValue, GeocoderError> {
    let document: Value = serde_json::from_str(geojson)
        .map_err(|e| GeocoderError::malformed(format!("invalid JSON: {e}")))?;

    let properties = document.get("properties").and_then(Value::as_object);
    let property = |key: &str| -> Result<String, GeocoderError> {
        match properties.and_then(|p| p.get(key)) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(GeocoderError::malformed(format!(
                "properties.{key} must be a string, got {}",
                json_kind(other)
            ))),
        }
    };

    Ok(AddressValue {
        country_code: property("countryCode")?.chars().take(2).collect(),
        address_line1: property("streetName")?,
        postal_code: property("postalCode")?,
        locality: property("locality")?,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_properties() {
        let value = map_geojson_to_address(
            r#"{"properties":{"countryCode":"USA","streetName":"Main St","postalCode":"12345"}}"#,
        )
        .unwrap();
        assert_eq!(
            value,
            AddressValue {
                country_code: "US".into(),
                address_line1: "Main St".into(),
                postal_code: "12345".into(),
                locality: String::new(),
            }
        );
    }

    #[test]
    fn test_missing_properties_yields_empty_value() {
        for input in [
            r#"{}"#,
            r#"{"type":"Feature","geometry":null}"#,
            r#"{"properties":null}"#,
            r#"{"properties":"oops"}"#,
            r#"[1,2,3]"#,
            r#""just a string""#,
        ] {
            assert_eq!(
                map_geojson_to_address(input).unwrap(),
                AddressValue::default(),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_country_code_length() {
        let short = map_geojson_to_address(r#"{"properties":{"countryCode":"F"}}"#).unwrap();
        assert_eq!(short.country_code, "F");

        let exact = map_geojson_to_address(r#"{"properties":{"countryCode":"FR"}}"#).unwrap();
        assert_eq!(exact.country_code, "FR");

        let multibyte =
            map_geojson_to_address(r#"{"properties":{"countryCode":"ÉÜX"}}"#).unwrap();
        assert_eq!(multibyte.country_code, "ÉÜ");
    }

    #[test]
    fn test_null_leaf_is_empty() {
        let value =
            map_geojson_to_address(r#"{"properties":{"locality":null,"postalCode":"38000"}}"#)
                .unwrap();
        assert_eq!(value.locality, "");
        assert_eq!(value.postal_code, "38000");
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = map_geojson_to_address("not json {");
        assert!(matches!(result, Err(GeocoderError::MalformedInput(_))));

        let result = map_geojson_to_address("");
        assert!(matches!(result, Err(GeocoderError::MalformedInput(_))));
    }

    #[test]
    fn test_non_string_leaf_is_malformed() {
        match map_geojson_to_address(r#"{"properties":{"countryCode":33}}"#) {
            Err(GeocoderError::MalformedInput(msg)) => {
                assert!(msg.contains("countryCode"));
                assert!(msg.contains("number"));
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }

        let result = map_geojson_to_address(r#"{"properties":{"streetName":{"a":1}}}"#);
        assert!(matches!(result, Err(GeocoderError::MalformedInput(_))));
    }

    #[test]
    fn test_output_always_has_four_keys() {
        let value = map_geojson_to_address("{}").unwrap();
        let json = serde_json::to_value(&value).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["country_code", "address_line1", "postal_code", "locality"] {
            assert_eq!(object.get(key), Some(&Value::String(String::new())));
        }
    }
}
