//! Types de données pour le crate geocoder

use geo::Point;
use serde::{Deserialize, Serialize};

/// Une adresse retournée par un provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    /// Coordonnées (x = longitude, y = latitude)
    pub coordinates: Option<Point>,

    /// Numéro dans la voie
    pub street_number: Option<String>,

    /// Nom de la voie
    pub street_name: Option<String>,

    /// Code postal
    pub postal_code: Option<String>,

    /// Commune
    pub locality: Option<String>,

    /// Quartier, lieu-dit
    pub sub_locality: Option<String>,

    /// Nom du pays
    pub country: Option<String>,

    /// Code pays (ISO 3166, 2 ou 3 lettres selon le provider)
    pub country_code: Option<String>,

    /// Identifiant du provider ayant produit l'adresse
    pub provided_by: String,
}

impl Address {
    /// Adresse réduite à des coordonnées
    pub fn from_coordinates(lat: f64, lon: f64, provided_by: impl Into<String>) -> Self {
        Self {
            coordinates: Some(Point::new(lon, lat)),
            provided_by: provided_by.into(),
            ..Default::default()
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.y())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.x())
    }
}

/// Résultats ordonnés d'un géocodage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressCollection {
    addresses: Vec<Address>,
}

impl AddressCollection {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }

    /// Première adresse (la plus pertinente)
    pub fn first(&self) -> Option<&Address> {
        self.addresses.first()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }
}

impl From<Vec<Address>> for AddressCollection {
    fn from(addresses: Vec<Address>) -> Self {
        Self::new(addresses)
    }
}

impl IntoIterator for AddressCollection {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

/// Valeur normalisée d'un champ adresse
///
/// Les quatre clés sont toujours présentes, éventuellement vides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressValue {
    pub country_code: String,
    pub address_line1: String,
    pub postal_code: String,
    pub locality: String,
}

/// Type de stockage d'un champ cible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Texte brut court (`string`)
    String,
    /// Texte formaté court (`text`)
    Text,
    /// Texte brut long (`string_long`)
    StringLong,
    /// Texte formaté long (`text_long`)
    TextLong,
    /// Texte formaté long avec résumé (`text_with_summary`)
    TextWithSummary,
    /// Tout autre type (adresse, geofield, ...)
    Other(String),
}

impl FieldType {
    /// Vrai si le stockage impose une longueur maximale
    pub fn is_length_constrained(&self) -> bool {
        matches!(self, Self::String | Self::Text)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::StringLong => "string_long",
            Self::TextLong => "text_long",
            Self::TextWithSummary => "text_with_summary",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "string" => Self::String,
            "text" => Self::Text,
            "string_long" => Self::StringLong,
            "text_long" => Self::TextLong,
            "text_with_summary" => Self::TextWithSummary,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description du champ cible d'un résultat de dumper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Libellé du champ (repris dans les avertissements)
    pub name: String,

    /// Type de stockage
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Longueur maximale en caractères, si le stockage en définit une
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType, max_length: Option<usize>) -> Self {
        Self {
            name: name.into(),
            field_type,
            max_length,
        }
    }

    /// Limite effectivement applicable (type contraint et longueur définie)
    pub fn effective_max_length(&self) -> Option<usize> {
        if self.field_type.is_length_constrained() {
            self.max_length
        } else {
            None
        }
    }
}
