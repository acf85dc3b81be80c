use sconf_domain::config::{Appearance, Configuration, Locale};
use sconf_domain::settings::{IngestSettings, ValidationMode};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let config = Configuration::default();
    assert_eq!(config.appearance, Appearance::Light);
    assert_eq!(config.locale.as_str(), "en-US");
    assert!((config.version - 1.0).abs() < f64::EPSILON);

    let settings = IngestSettings::default();
    assert_eq!(settings.mode, ValidationMode::Lenient);
    assert_eq!(settings.max_depth, 32);
    assert_eq!(settings.defaults, config);
}

#[test]
fn configuration_serializes_as_plain_record() {
    let config = Configuration {
        appearance: Appearance::Dark,
        locale: Locale::parse("id-ID").unwrap(),
        version: 1.0,
    };

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value, json!({ "appearance": "dark", "locale": "id-ID", "version": 1.0 }));
}

#[test]
fn configuration_deserialization_validates_fields() {
    let ok: Configuration =
        serde_json::from_value(json!({ "appearance": "DARK", "locale": "pt-BR" })).unwrap();
    assert_eq!(ok.appearance, Appearance::Dark);
    assert_eq!(ok.locale.as_str(), "pt-BR");

    assert!(serde_json::from_value::<Configuration>(json!({ "appearance": "blue" })).is_err());
    assert!(serde_json::from_value::<Configuration>(json!({ "locale": "en_us" })).is_err());
    assert!(serde_json::from_value::<Configuration>(json!({ "polluted": true })).is_err());
}

#[test]
fn settings_deserialize_with_partial_input() {
    let raw = json!({
        "defaults": { "appearance": "dark" },
        "mode": "strict"
    });

    let settings: IngestSettings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.defaults.appearance, Appearance::Dark);
    assert_eq!(settings.defaults.locale.as_str(), "en-US");
    assert_eq!(settings.mode, ValidationMode::Strict);
    assert_eq!(settings.max_depth, 32);
}
