//! Dumpers : sérialisation d'une adresse en chaîne affichable

pub mod geojson;
pub mod manager;
pub mod markup;
pub mod text;
pub mod wkt;

pub use manager::DumperManager;

use crate::registry::{PluginOptions, PluginRegistry};
use crate::types::Address;
use crate::GeocoderError;

/// Sérialise une adresse dans un format donné
pub trait Dumper: Send + Sync {
    /// Identifiant du plugin
    fn id(&self) -> &str;

    /// Produit la chaîne de sortie
    fn dump(&self, address: &Address) -> Result<String, GeocoderError>;
}

/// Registre des dumpers fournis par le crate
pub fn builtin_registry() -> PluginRegistry<dyn Dumper> {
    let mut registry: PluginRegistry<dyn Dumper> = PluginRegistry::new("dumper");
    registry.register("geojson", |_: &PluginOptions| {
        Ok(Box::new(geojson::GeoJsonDumper) as Box<dyn Dumper>)
    });
    registry.register("wkt", |_: &PluginOptions| {
        Ok(Box::new(wkt::WktDumper) as Box<dyn Dumper>)
    });
    registry.register("wkb", |_: &PluginOptions| {
        Ok(Box::new(wkt::WkbDumper) as Box<dyn Dumper>)
    });
    registry.register("kml", |_: &PluginOptions| {
        Ok(Box::new(markup::KmlDumper) as Box<dyn Dumper>)
    });
    registry.register("gpx", |_: &PluginOptions| {
        Ok(Box::new(markup::GpxDumper) as Box<dyn Dumper>)
    });
    registry.register("address_text", |options: &PluginOptions| {
        let separator = options.get_str("separator").unwrap_or(", ").to_string();
        Ok(Box::new(text::AddressTextDumper::new(separator)) as Box<dyn Dumper>)
    });
    registry
}

/// Point de l'adresse, ou erreur si absent
pub(crate) fn require_point(address: &Address) -> Result<geo::Point, GeocoderError> {
    address.coordinates.ok_or(GeocoderError::MissingCoordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids() {
        let registry = builtin_registry();
        assert_eq!(
            registry.ids(),
            vec!["address_text", "geojson", "gpx", "kml", "wkb", "wkt"]
        );
    }

    #[test]
    fn test_builtin_ids_match_plugin_ids() {
        let registry = builtin_registry();
        for id in registry.ids() {
            let dumper = registry.create(id, &PluginOptions::default()).unwrap();
            assert_eq!(dumper.id(), id);
        }
    }
}
