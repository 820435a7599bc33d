//! # geocoder
//!
//! Géocodage inverse de valeurs de geofield, sérialisation des adresses et
//! adaptation des sorties aux champs de stockage.
//!
//! ## Features
//!
//! - Conversion d'une feature GeoJSON en valeur de champ adresse (4 clés)
//! - Réconciliation sortie de dumper / champ cible (UTF-8, `max_length`)
//! - Dumpers GeoJSON, WKT, WKB, KML, GPX, texte
//! - Providers hors ligne et registre explicite de plugins
//! - Formatter « reverse geocode » : géométrie → centroïde → adresse
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geocoder::{DumperManager, FieldDescriptor, FieldType, NullNotifier};
//!
//! let dumpers = DumperManager::new(Arc::new(NullNotifier));
//! let value = dumpers.set_address_field_from_geojson(geojson)?;
//!
//! let field = FieldDescriptor::new("Adresse", FieldType::String, Some(255));
//! let reconciled = dumpers.fix_dumper_field_incompatibility(output.as_bytes(), "geojson", &field);
//! if reconciled.truncated() {
//!     println!("tronqué à {} caractères", reconciled.value.chars().count());
//! }
//! ```

pub mod address;
pub mod dumper;
pub mod error;
pub mod facade;
pub mod formatter;
pub mod geometry;
pub mod provider;
pub mod reconcile;
pub mod registry;
pub mod types;

pub use address::map_geojson_to_address;
pub use dumper::{Dumper, DumperManager};
pub use error::GeocoderError;
pub use facade::reverse;
pub use formatter::{Element, ReverseGeocodeFormatter};
pub use provider::{Provider, ProviderManager};
pub use reconcile::{
    reconcile, repair_encoding, CollectingNotifier, Notifier, NullNotifier, Reconciled,
    Truncation, TruncationWarning,
};
pub use registry::{PluginOptions, PluginRegistry};
pub use types::{Address, AddressCollection, AddressValue, FieldDescriptor, FieldType};
