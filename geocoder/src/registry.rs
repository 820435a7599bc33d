//! Registre explicite des plugins (providers, dumpers)
//!
//! Chaque plugin est enregistré au démarrage sous un identifiant, avec une
//! fabrique qui reçoit les options issues de la configuration.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::GeocoderError;

/// Options d'un plugin (objet JSON de la configuration)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginOptions(Map<String, Value>);

impl PluginOptions {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Ajoute une option (construction en chaîne)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for PluginOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

type Factory<T> = Box<dyn Fn(&PluginOptions) -> Result<Box<T>, GeocoderError> + Send + Sync>;

/// Registre identifiant → fabrique
pub struct PluginRegistry<T: ?Sized> {
    kind: &'static str,
    factories: BTreeMap<String, Factory<T>>,
}

impl<T: ?Sized> PluginRegistry<T> {
    /// Crée un registre vide ; `kind` nomme la famille dans les erreurs
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            factories: BTreeMap::new(),
        }
    }

    /// Enregistre une fabrique ; remplace une éventuelle entrée de même id
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn(&PluginOptions) -> Result<Box<T>, GeocoderError> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    /// Instancie le plugin `id`
    pub fn create(&self, id: &str, options: &PluginOptions) -> Result<Box<T>, GeocoderError> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| GeocoderError::UnknownPlugin {
                kind: self.kind,
                id: id.to_string(),
            })?;
        factory(options)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Identifiants triés
    pub fn ids(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<T: ?Sized> std::fmt::Debug for PluginRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("kind", &self.kind)
            .field("ids", &self.ids())
            .finish()
    }
}
