//! Rapport de formatage par lot

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Valeur non formatée
#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    /// Position de la valeur dans l'entrée
    pub delta: usize,
    /// Raison (erreur ou absence de résultat)
    pub reason: String,
}

/// Rapport complet d'un formatage
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatReport {
    /// Dumper utilisé
    pub dumper: String,
    /// Providers utilisés, par ordre de priorité
    pub providers: Vec<String>,
    /// Durée du traitement
    pub duration_secs: f64,
    /// Nombre de valeurs lues
    pub items: usize,
    /// Nombre de valeurs formatées
    pub formatted: usize,
    /// Nombre de sorties tronquées
    pub truncated: usize,
    /// Valeurs sans sortie
    pub skipped: Vec<SkippedItem>,
}

impl FormatReport {
    pub fn new(dumper: &str, providers: Vec<String>) -> Self {
        Self {
            dumper: dumper.to_string(),
            providers,
            ..Default::default()
        }
    }

    /// Enregistre une valeur formatée
    pub fn record_formatted(&mut self, truncated: bool) {
        self.items += 1;
        self.formatted += 1;
        if truncated {
            self.truncated += 1;
        }
    }

    /// Enregistre une valeur sans sortie
    pub fn record_skipped(&mut self, delta: usize, reason: impl Into<String>) {
        self.items += 1;
        self.skipped.push(SkippedItem {
            delta,
            reason: reason.into(),
        });
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} items, {} formatted, {} truncated, {} skipped ({:.2}s)",
            self.dumper,
            self.items,
            self.formatted,
            self.truncated,
            self.skipped.len(),
            self.duration_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut report = FormatReport::new("wkt", vec!["coordinates".into()]);
        report.record_formatted(false);
        report.record_formatted(true);
        report.record_skipped(2, "Invalid geometry: empty value");

        assert_eq!(report.items, 3);
        assert_eq!(report.formatted, 2);
        assert_eq!(report.truncated, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.summary().starts_with("wkt: 3 items, 2 formatted, 1 truncated, 1 skipped"));
    }

    #[test]
    fn test_save_to_file() {
        let mut report = FormatReport::new("geojson", vec![]);
        report.record_skipped(0, "no result");

        let path = std::env::temp_dir().join("geofield_geocoder_report_test.json");
        report.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["dumper"], "geojson");
        assert_eq!(value["skipped"][0]["reason"], "no result");

        std::fs::remove_file(path).ok();
    }
}
