//! Provider écho : renvoie une adresse réduite aux coordonnées demandées

use super::Provider;
use crate::types::{Address, AddressCollection};
use crate::GeocoderError;

#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinatesProvider;

impl Provider for CoordinatesProvider {
    fn id(&self) -> &str {
        "coordinates"
    }

    fn reverse(&self, lat: f64, lon: f64) -> Result<AddressCollection, GeocoderError> {
        Ok(AddressCollection::new(vec![Address::from_coordinates(
            lat,
            lon,
            self.id(),
        )]))
    }
}
