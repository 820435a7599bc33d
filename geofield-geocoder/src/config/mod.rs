//! Configuration du formatter
//!
//! Les options `path` relatives des providers sont résolues depuis le
//! répertoire du fichier de configuration. Pour les presets embarqués, elles
//! restent relatives au répertoire courant : le preset `offline` attend un
//! fichier `addresses.geojson` (FeatureCollection de points) à cet endroit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geocoder::{
    DumperManager, FieldDescriptor, PluginOptions, ProviderManager, ReverseGeocodeFormatter,
};

/// Variable d'environnement désignant la configuration par défaut
pub const CONFIG_ENV: &str = "GEOCODER_CONFIG";

/// Configuration principale
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Identifiant du dumper
    pub dumper: String,

    /// Options du dumper
    #[serde(default)]
    pub dumper_options: Map<String, Value>,

    /// Providers activés, par ordre de priorité
    pub providers: Vec<ProviderConfig>,

    /// Champ cible des sorties (réconciliation)
    #[serde(default)]
    pub field: Option<FieldDescriptor>,
}

/// Configuration d'un provider
#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Identifiant du provider
    pub id: String,

    /// Options passées à la fabrique
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl Config {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Rend absolues (par rapport à `base_dir`) les options `path` relatives
    fn resolve_paths(&mut self, base_dir: &Path) {
        for provider in &mut self.providers {
            let Some(Value::String(path)) = provider.options.get("path") else {
                continue;
            };
            let relative = PathBuf::from(path);
            if relative.is_relative() {
                let resolved = base_dir.join(relative).display().to_string();
                provider
                    .options
                    .insert("path".to_string(), Value::String(resolved));
            }
        }
    }

    /// Charge une configuration depuis un preset embarqué
    ///
    /// `offline` lit `addresses.geojson` dans le répertoire courant.
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "default" => Self::load_embedded(include_str!("presets/default.json")),
            "offline" => Self::load_embedded(include_str!("presets/offline.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: default, offline", preset),
        }
    }

    /// Nom de preset, chemin de fichier, ou à défaut `GEOCODER_CONFIG` puis le preset `default`
    pub fn resolve(spec: Option<&str>) -> Result<Self> {
        let spec = match spec {
            Some(s) => s.to_string(),
            None => std::env::var(CONFIG_ENV).unwrap_or_else(|_| "default".to_string()),
        };

        let path = Path::new(&spec);
        if path.extension().is_some_and(|ext| ext == "json") || path.exists() {
            Self::load(path)
        } else {
            Self::from_preset(&spec)
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }

    /// Instancie le formatter décrit par la configuration
    pub fn build_formatter(
        &self,
        dumpers: &DumperManager,
        providers: &ProviderManager,
    ) -> Result<ReverseGeocodeFormatter> {
        let dumper = dumpers
            .create_with_options(&self.dumper, &PluginOptions::new(self.dumper_options.clone()))
            .context(format!("Failed to create dumper '{}'", self.dumper))?;

        let options: Vec<(&str, PluginOptions)> = self
            .providers
            .iter()
            .map(|p| (p.id.as_str(), PluginOptions::new(p.options.clone())))
            .collect();
        let enabled = providers
            .enabled_plugins(options.iter().map(|(id, opts)| (*id, opts)))
            .context("Failed to create providers")?;

        Ok(ReverseGeocodeFormatter::new(dumper, enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocoder::{FieldType, NullNotifier};
    use std::sync::Arc;

    #[test]
    fn test_presets_parse() {
        let config = Config::from_preset("default").unwrap();
        assert_eq!(config.dumper, "address_text");
        assert_eq!(config.providers.len(), 1);
        assert!(config.field.is_none());

        let config = Config::from_preset("offline").unwrap();
        assert_eq!(config.dumper, "geojson");
        assert_eq!(config.providers[0].id, "feature_collection");
        let field = config.field.unwrap();
        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.max_length, Some(255));
    }

    #[test]
    fn test_offline_preset_without_dataset_names_file() {
        let config = Config::from_preset("offline").unwrap();
        let dumpers = DumperManager::new(Arc::new(NullNotifier));
        let err = config
            .build_formatter(&dumpers, &ProviderManager::new())
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("addresses.geojson"), "{message}");
        assert_eq!(message.matches("os error").count(), 1, "{message}");
    }

    #[test]
    fn test_load_resolves_relative_path() {
        let dir = std::env::temp_dir().join("geofield_geocoder_relative_path");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("addresses.geojson"),
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[5.7245,45.1885]},
                 "properties":{"locality":"Grenoble"}}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("config.json"),
            r#"{"dumper":"address_text","providers":[{"id":"feature_collection","options":{"path":"addresses.geojson"}}]}"#,
        )
        .unwrap();

        let config = Config::load(&dir.join("config.json")).unwrap();
        assert_eq!(
            config.providers[0].options["path"],
            dir.join("addresses.geojson").display().to_string()
        );

        let dumpers = DumperManager::new(Arc::new(NullNotifier));
        let formatter = config
            .build_formatter(&dumpers, &ProviderManager::new())
            .unwrap();
        assert_eq!(
            formatter.format_item("POINT(5.7245 45.1885)").unwrap().as_deref(),
            Some("Grenoble")
        );

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_unknown_preset() {
        assert!(Config::from_preset("nope").is_err());
    }

    #[test]
    fn test_build_formatter_from_default_preset() {
        let config = Config::from_preset("default").unwrap();
        let dumpers = DumperManager::new(Arc::new(NullNotifier));
        let formatter = config
            .build_formatter(&dumpers, &ProviderManager::new())
            .unwrap();
        assert_eq!(formatter.dumper_id(), "address_text");
        assert_eq!(formatter.provider_ids(), vec!["coordinates"]);
    }

    #[test]
    fn test_build_formatter_unknown_dumper() {
        let config: Config =
            serde_json::from_str(r#"{"dumper":"yaml","providers":[]}"#).unwrap();
        let dumpers = DumperManager::new(Arc::new(NullNotifier));
        let err = config
            .build_formatter(&dumpers, &ProviderManager::new())
            .unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
