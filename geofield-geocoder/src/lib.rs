//! # geofield-geocoder
//!
//! Géocodage inverse de valeurs de geofield en ligne de commande.
//!
//! ## Usage CLI
//!
//! ```bash
//! # Coordonnée → adresse (preset par défaut)
//! geofield-geocoder reverse --lat 45.1885 --lon 5.7245
//!
//! # Une géométrie WKT/GeoJSON par ligne, formatage parallèle + rapport
//! geofield-geocoder format --input parcels.wkt --config offline --report report.json
//!
//! # Feature GeoJSON → valeur de champ adresse
//! geofield-geocoder address --input feature.geojson
//!
//! # Adapter une sortie à un champ texte de 255 caractères
//! geofield-geocoder reconcile --field-type string --max-length 255 --input output.txt
//! ```

pub mod config;
pub mod notifier;
pub mod report;

pub use config::Config;
pub use notifier::TracingNotifier;
pub use report::{FormatReport, SkippedItem};
