//! Dumper texte : adresse postale sur une ligne

use super::Dumper;
use crate::types::Address;
use crate::GeocoderError;

#[derive(Debug, Clone)]
pub struct AddressTextDumper {
    separator: String,
}

impl AddressTextDumper {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for AddressTextDumper {
    fn default() -> Self {
        Self::new(", ")
    }
}

impl Dumper for AddressTextDumper {
    fn id(&self) -> &str {
        "address_text"
    }

    fn dump(&self, address: &Address) -> Result<String, GeocoderError> {
        Ok(format_line(address, &self.separator))
    }
}

/// `<numéro> <voie><sep><code postal> <commune><sep><pays>`, parties vides omises
pub(crate) fn format_line(address: &Address, separator: &str) -> String {
    let street = join_non_empty(&[&address.street_number, &address.street_name]);
    let city = join_non_empty(&[&address.postal_code, &address.locality]);
    let country = address.country.clone().unwrap_or_default();

    [street, city, country]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_non_empty(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|p| p.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
