//! Tests d'intégration : configuration → formatter → réconciliation

use std::sync::Arc;

use geocoder::{CollectingNotifier, DumperManager, ProviderManager};
use geofield_geocoder::{Config, FormatReport};

const CONFIG: &str = r#"{
    "dumper": "address_text",
    "dumper_options": { "separator": " - " },
    "providers": [
        {
            "id": "feature_collection",
            "options": {
                "data": {
                    "type": "FeatureCollection",
                    "features": [
                        {"type":"Feature","geometry":{"type":"Point","coordinates":[5.7245,45.1885]},
                         "properties":{"streetNumber":"12","streetName":"Rue Félix Poulat","postalCode":"38000","locality":"Grenoble"}}
                    ]
                },
                "max_distance": 500
            }
        },
        { "id": "coordinates" }
    ],
    "field": { "name": "Adresse", "type": "string", "max_length": 20 }
}"#;

fn write_config(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, CONFIG).unwrap();
    path
}

#[test]
fn test_resolve_from_path() {
    let path = write_config("geofield_geocoder_resolve.json");
    let config = Config::resolve(path.to_str()).unwrap();
    assert_eq!(config.dumper, "address_text");
    assert_eq!(config.providers.len(), 2);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_resolve_preset_name() {
    let config = Config::resolve(Some("offline")).unwrap();
    assert_eq!(config.dumper, "geojson");
}

#[test]
fn test_resolve_missing_file() {
    assert!(Config::resolve(Some("/nonexistent/geofield.json")).is_err());
}

#[test]
fn test_formatter_from_config_with_fallback_provider() {
    let path = write_config("geofield_geocoder_formatter.json");
    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let notifier = Arc::new(CollectingNotifier::new());
    let dumpers = DumperManager::new(notifier.clone());
    let formatter = config
        .build_formatter(&dumpers, &ProviderManager::new())
        .unwrap();
    assert_eq!(formatter.provider_ids(), vec!["feature_collection", "coordinates"]);

    // Grenoble : trouvé par le jeu de données
    let near = formatter
        .format_item("POINT(5.7246 45.1886)")
        .unwrap()
        .unwrap();
    assert_eq!(near, "12 Rue Félix Poulat - 38000 Grenoble");

    // Paris : hors de portée, le provider écho ne fournit aucun texte
    let far = formatter
        .format_item("POINT(2.3522 48.8566)")
        .unwrap()
        .unwrap();
    assert_eq!(far, "");

    let field = config.field.as_ref().unwrap();
    let mut report = FormatReport::new(formatter.dumper_id(), vec![]);
    for markup in [&near, &far] {
        let reconciled =
            dumpers.fix_dumper_field_incompatibility(markup.as_bytes(), formatter.dumper_id(), field);
        assert!(reconciled.value.chars().count() <= 20);
        report.record_formatted(reconciled.truncated());
    }

    assert_eq!(report.truncated, 1);
    let warnings = notifier.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "Adresse");
    assert_eq!(warnings[0].dumper, "address_text");
}
