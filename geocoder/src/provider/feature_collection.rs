//! Provider sur jeu de données GeoJSON local
//!
//! Chaque feature de la FeatureCollection est une adresse candidate, positionnée
//! sur le centroïde de sa géométrie. Le géocodage inverse renvoie les plus
//! proches (distance haversine), dans la limite de `max_distance` mètres.

use std::path::Path;

use geo::{Centroid, HaversineDistance, Point};
use geojson::{FeatureCollection, GeoJson, JsonObject, JsonValue};
use tracing::{debug, warn};

use super::Provider;
use crate::registry::PluginOptions;
use crate::types::{Address, AddressCollection};
use crate::GeocoderError;

const ID: &str = "feature_collection";
const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct FeatureCollectionProvider {
    entries: Vec<Address>,
    max_distance: Option<f64>,
    limit: usize,
}

impl FeatureCollectionProvider {
    /// Construit le provider depuis un texte GeoJSON (FeatureCollection)
    pub fn from_geojson(geojson: &str) -> Result<Self, GeocoderError> {
        let parsed: GeoJson = geojson
            .parse()
            .map_err(|e: geojson::Error| GeocoderError::invalid_options(ID, e.to_string()))?;
        let collection = FeatureCollection::try_from(parsed)
            .map_err(|e| GeocoderError::invalid_options(ID, e.to_string()))?;

        let mut entries = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let Some(geometry) = feature.geometry else {
                debug!(index, "Feature without geometry skipped");
                continue;
            };
            let geometry: geo::Geometry<f64> = match geometry.value.try_into() {
                Ok(g) => g,
                Err(e) => {
                    warn!(index, "Unsupported geometry skipped: {}", e);
                    continue;
                }
            };
            let Some(centroid) = geometry.centroid() else {
                debug!(index, "Empty geometry skipped");
                continue;
            };
            let properties = feature.properties.unwrap_or_default();
            entries.push(address_from_properties(centroid, &properties));
        }

        Ok(Self {
            entries,
            max_distance: None,
            limit: DEFAULT_LIMIT,
        })
    }

    /// Charge un fichier GeoJSON
    pub fn from_path(path: &Path) -> Result<Self, GeocoderError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GeocoderError::io(path, e))?;
        Self::from_geojson(&content)
    }

    /// Options : `path` ou `data` (texte ou objet GeoJSON), `max_distance`, `limit`
    pub fn from_options(options: &PluginOptions) -> Result<Self, GeocoderError> {
        let mut provider = match (options.get_str("path"), options.get("data")) {
            (Some(path), _) => Self::from_path(Path::new(path))?,
            (None, Some(JsonValue::String(data))) => Self::from_geojson(data)?,
            (None, Some(data @ JsonValue::Object(_))) => Self::from_geojson(&data.to_string())?,
            _ => {
                return Err(GeocoderError::invalid_options(
                    ID,
                    "expected a 'path' or 'data' option",
                ))
            }
        };

        if let Some(max_distance) = options.get_f64("max_distance") {
            provider = provider.with_max_distance(max_distance);
        }
        if let Some(limit) = options.get_usize("limit") {
            provider = provider.with_limit(limit);
        }
        Ok(provider)
    }

    /// Distance maximale en mètres
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Nombre maximal de résultats
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for FeatureCollectionProvider {
    fn id(&self) -> &str {
        ID
    }

    fn reverse(&self, lat: f64, lon: f64) -> Result<AddressCollection, GeocoderError> {
        let origin = Point::new(lon, lat);

        let mut candidates: Vec<(f64, &Address)> = self
            .entries
            .iter()
            .filter_map(|address| {
                let distance = origin.haversine_distance(&address.coordinates?);
                match self.max_distance {
                    Some(max) if distance > max => None,
                    _ => Some((distance, address)),
                }
            })
            .collect();

        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(candidates
            .into_iter()
            .take(self.limit)
            .map(|(_, address)| address.clone())
            .collect::<Vec<_>>()
            .into())
    }
}

/// Lit les propriétés camelCase (format de sortie du dumper GeoJSON)
fn address_from_properties(centroid: Point, properties: &JsonObject) -> Address {
    let text = |key: &str| -> Option<String> {
        match properties.get(key)? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    };

    Address {
        coordinates: Some(centroid),
        street_number: text("streetNumber"),
        street_name: text("streetName"),
        postal_code: text("postalCode"),
        locality: text("locality"),
        sub_locality: text("subLocality"),
        country: text("country"),
        country_code: text("countryCode"),
        provided_by: ID.to_string(),
    }
}
