//! Providers : géocodage inverse délégué
//!
//! L'algorithme de géocodage reste opaque ; les providers intégrés répondent
//! hors ligne (jeu de données GeoJSON local, écho des coordonnées).

pub mod coordinates;
pub mod feature_collection;

use tracing::debug;

use crate::registry::{PluginOptions, PluginRegistry};
use crate::types::AddressCollection;
use crate::GeocoderError;

pub use coordinates::CoordinatesProvider;
pub use feature_collection::FeatureCollectionProvider;

/// Géocodage inverse : coordonnées → adresses
pub trait Provider: Send + Sync {
    /// Identifiant du plugin
    fn id(&self) -> &str;

    /// Adresses proches de (`lat`, `lon`), de la plus pertinente à la moins pertinente
    fn reverse(&self, lat: f64, lon: f64) -> Result<AddressCollection, GeocoderError>;
}

/// Registre des providers fournis par le crate
pub fn builtin_registry() -> PluginRegistry<dyn Provider> {
    let mut registry: PluginRegistry<dyn Provider> = PluginRegistry::new("provider");
    registry.register("feature_collection", |options: &PluginOptions| {
        Ok(Box::new(FeatureCollectionProvider::from_options(options)?) as Box<dyn Provider>)
    });
    registry.register("coordinates", |_: &PluginOptions| {
        Ok(Box::new(CoordinatesProvider) as Box<dyn Provider>)
    });
    registry
}

/// Gestionnaire des providers
pub struct ProviderManager {
    registry: PluginRegistry<dyn Provider>,
}

impl ProviderManager {
    pub fn new() -> Self {
        Self::with_registry(builtin_registry())
    }

    pub fn with_registry(registry: PluginRegistry<dyn Provider>) -> Self {
        Self { registry }
    }

    pub fn registry_mut(&mut self) -> &mut PluginRegistry<dyn Provider> {
        &mut self.registry
    }

    pub fn ids(&self) -> Vec<&str> {
        self.registry.ids()
    }

    pub fn create(
        &self,
        id: &str,
        options: &PluginOptions,
    ) -> Result<Box<dyn Provider>, GeocoderError> {
        self.registry.create(id, options)
    }

    /// Instancie les providers activés, dans l'ordre de la configuration
    pub fn enabled_plugins<'a, I>(&self, enabled: I) -> Result<Vec<Box<dyn Provider>>, GeocoderError>
    where
        I: IntoIterator<Item = (&'a str, &'a PluginOptions)>,
    {
        enabled
            .into_iter()
            .map(|(id, options)| {
                debug!(provider = id, "Instantiating provider");
                self.create(id, options)
            })
            .collect()
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProviderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderManager")
            .field("registry", &self.registry)
            .finish()
    }
}
