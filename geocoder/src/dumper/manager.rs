//! Gestionnaire des dumpers
//!
//! Regroupe le registre des dumpers, la conversion GeoJSON → champ adresse et
//! la réconciliation des sorties avec le champ cible.

use std::sync::Arc;

use tracing::debug;

use super::{builtin_registry, Dumper};
use crate::address::map_geojson_to_address;
use crate::reconcile::{reconcile, Notifier, Reconciled, TruncationWarning};
use crate::registry::{PluginOptions, PluginRegistry};
use crate::types::{AddressValue, FieldDescriptor};
use crate::GeocoderError;

pub struct DumperManager {
    registry: PluginRegistry<dyn Dumper>,
    notifier: Arc<dyn Notifier>,
}

impl DumperManager {
    /// Gestionnaire avec les dumpers intégrés
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_registry(builtin_registry(), notifier)
    }

    pub fn with_registry(registry: PluginRegistry<dyn Dumper>, notifier: Arc<dyn Notifier>) -> Self {
        Self { registry, notifier }
    }

    /// Accès au registre pour enregistrer des dumpers supplémentaires
    pub fn registry_mut(&mut self) -> &mut PluginRegistry<dyn Dumper> {
        &mut self.registry
    }

    pub fn ids(&self) -> Vec<&str> {
        self.registry.ids()
    }

    /// Instancie un dumper sans options
    pub fn create(&self, id: &str) -> Result<Box<dyn Dumper>, GeocoderError> {
        self.create_with_options(id, &PluginOptions::default())
    }

    pub fn create_with_options(
        &self,
        id: &str,
        options: &PluginOptions,
    ) -> Result<Box<dyn Dumper>, GeocoderError> {
        self.registry.create(id, options)
    }

    /// Valeur d'un champ adresse depuis une sortie GeoJSON
    pub fn set_address_field_from_geojson(
        &self,
        geojson: &str,
    ) -> Result<AddressValue, GeocoderError> {
        map_geojson_to_address(geojson)
    }

    /// Corrige l'encodage et la longueur d'une sortie de dumper pour `field`.
    ///
    /// Le notifier reçoit un avertissement si et seulement si la sortie a été tronquée.
    pub fn fix_dumper_field_incompatibility(
        &self,
        dumper_result: &[u8],
        dumper_id: &str,
        field: &FieldDescriptor,
    ) -> Reconciled {
        let reconciled = reconcile(dumper_result, field);

        match reconciled.truncation {
            Some(truncation) => {
                let warning = TruncationWarning::new(field, dumper_id, truncation);
                self.notifier.warn(&warning);
            }
            None => {
                debug!(field = %field.name, dumper = dumper_id, "Dumper output compatible with field");
            }
        }

        reconciled
    }
}

impl std::fmt::Debug for DumperManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumperManager")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
