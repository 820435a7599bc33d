//! Formatter « Reverse geocode » pour les valeurs de geofield
//!
//! Pour chaque valeur : géométrie → centroïde → géocodage inverse → premier
//! résultat sérialisé par le dumper configuré.

use tracing::{debug, warn};

use crate::dumper::{Dumper, DumperManager};
use crate::facade;
use crate::geometry;
use crate::provider::Provider;
use crate::reconcile::Reconciled;
use crate::types::FieldDescriptor;
use crate::GeocoderError;

/// Élément rendu pour une valeur du champ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Position de la valeur dans le champ
    pub delta: usize,
    /// Sortie du dumper
    pub markup: String,
}

pub struct ReverseGeocodeFormatter {
    dumper: Box<dyn Dumper>,
    providers: Vec<Box<dyn Provider>>,
}

impl ReverseGeocodeFormatter {
    pub fn new(dumper: Box<dyn Dumper>, providers: Vec<Box<dyn Provider>>) -> Self {
        Self { dumper, providers }
    }

    pub fn dumper_id(&self) -> &str {
        self.dumper.id()
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Formate une valeur de geofield.
    ///
    /// `Ok(None)` si la géométrie est vide ou si aucun provider ne répond.
    pub fn format_item(&self, value: &str) -> Result<Option<String>, GeocoderError> {
        let geom = geometry::load(value)?;
        let Some(centroid) = geometry::centroid(&geom) else {
            debug!("Empty geometry, nothing to reverse geocode");
            return Ok(None);
        };

        self.format_point(centroid.y(), centroid.x())
    }

    /// Géocodage inverse de (`lat`, `lon`) puis sérialisation du premier résultat
    pub fn format_point(&self, lat: f64, lon: f64) -> Result<Option<String>, GeocoderError> {
        let Some(addresses) = facade::reverse(&self.providers, lat, lon) else {
            return Ok(None);
        };

        match addresses.first() {
            Some(address) => self.dumper.dump(address).map(Some),
            None => Ok(None),
        }
    }

    /// Rend les valeurs du champ ; les valeurs sans résultat sont omises
    pub fn view_elements<S: AsRef<str>>(&self, items: &[S]) -> Vec<Element> {
        items
            .iter()
            .enumerate()
            .filter_map(|(delta, item)| match self.format_item(item.as_ref()) {
                Ok(Some(markup)) => Some(Element { delta, markup }),
                Ok(None) => None,
                Err(e) => {
                    warn!(delta, dumper = self.dumper.id(), "Item skipped: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Comme [`view_elements`](Self::view_elements), avec réconciliation de
    /// chaque sortie contre le champ cible
    pub fn view_elements_for_field<S: AsRef<str>>(
        &self,
        items: &[S],
        field: &FieldDescriptor,
        dumpers: &DumperManager,
    ) -> Vec<Element> {
        self.view_elements(items)
            .into_iter()
            .map(|element| {
                let Reconciled { value, .. } = dumpers.fix_dumper_field_incompatibility(
                    element.markup.as_bytes(),
                    self.dumper.id(),
                    field,
                );
                Element {
                    delta: element.delta,
                    markup: value,
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for ReverseGeocodeFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReverseGeocodeFormatter")
            .field("dumper", &self.dumper.id())
            .field("providers", &self.provider_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dumper::text::AddressTextDumper;
    use crate::dumper::wkt::WktDumper;
    use crate::provider::CoordinatesProvider;

    fn formatter() -> ReverseGeocodeFormatter {
        ReverseGeocodeFormatter::new(Box::new(WktDumper), vec![Box::new(CoordinatesProvider)])
    }

    #[test]
    fn test_format_centroid() {
        let markup = formatter()
            .format_item("POLYGON((0 0,2 0,2 2,0 2,0 0))")
            .unwrap()
            .unwrap();
        assert!(markup.starts_with("POINT"));
        let point = geometry::centroid(&geometry::load(&markup).unwrap()).unwrap();
        assert!((point.x() - 1.0).abs() < 1e-9);
        assert!((point.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_point() {
        let markup = formatter().format_point(45.5, 5.25).unwrap().unwrap();
        assert!(markup.contains("5.25 45.5"));

        assert_eq!(formatter().format_point(95.0, 5.25).unwrap(), None);
    }

    #[test]
    fn test_view_elements_skips_invalid_items() {
        let elements = formatter().view_elements(&["POINT(1 2)", "garbage", "POINT(3 4)"]);
        let deltas: Vec<usize> = elements.iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![0, 2]);
    }

    #[test]
    fn test_no_provider_result() {
        let formatter = ReverseGeocodeFormatter::new(Box::new(AddressTextDumper::default()), vec![]);
        assert_eq!(formatter.format_item("POINT(1 2)").unwrap(), None);
        assert!(formatter.view_elements(&["POINT(1 2)"]).is_empty());
    }

    #[test]
    fn test_debug_lists_plugins() {
        let debug = format!("{:?}", formatter());
        assert!(debug.contains("wkt"));
        assert!(debug.contains("coordinates"));
    }
}
