//! Façade de géocodage inverse sur une liste de providers

use tracing::{debug, warn};

use crate::provider::Provider;
use crate::types::AddressCollection;

/// Géocodage inverse de (`lat`, `lon`).
///
/// Les providers sont interrogés dans l'ordre ; le premier résultat non vide
/// est retourné. L'échec d'un provider est journalisé et le suivant est essayé.
pub fn reverse(providers: &[Box<dyn Provider>], lat: f64, lon: f64) -> Option<AddressCollection> {
    if !is_valid_coordinate(lat, lon) {
        warn!(lat, lon, "Reverse geocoding skipped: coordinates out of range");
        return None;
    }

    for provider in providers {
        match provider.reverse(lat, lon) {
            Ok(collection) if !collection.is_empty() => {
                debug!(provider = provider.id(), results = collection.len(), "Reverse geocoding succeeded");
                return Some(collection);
            }
            Ok(_) => {
                debug!(provider = provider.id(), "No result");
            }
            Err(e) => {
                warn!(provider = provider.id(), "Reverse geocoding failed: {}", e);
            }
        }
    }

    None
}

fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
