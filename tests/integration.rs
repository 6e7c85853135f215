// SPDX-License-Identifier: MPL-2.0
use art_space::application::GalleryController;
use art_space::config::{self, Config, DisplayConfig, GeneralConfig};
use art_space::domain::{ArtworkEntry, Gallery, ImageHandle, TextHandle};
use art_space::error::Error;
use art_space::i18n::fluent::I18n;
use art_space::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        display: DisplayConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        display: DisplayConfig::default(),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("previous"), "Précédent");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_browsing_the_gallery_shows_localized_captions() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let mut controller = GalleryController::default();

    let caption = |controller: &GalleryController| {
        let entry = controller.current_entry();
        (i18n.text(entry.title), i18n.text(entry.artist))
    };

    let first = caption(&controller);
    assert_eq!(first.0, "Rose in the Morning Light");

    controller.next();
    controller.next();
    assert_eq!(caption(&controller).0, "Lone Tree in the Valley");

    controller.previous();
    controller.previous();
    assert_eq!(caption(&controller), first);

    controller.previous();
    assert_eq!(caption(&controller).0, "Lake Below the Ridge");
}

#[test]
fn test_custom_gallery_wraps_both_ways() {
    let entries = ["one", "two", "three"]
        .into_iter()
        .map(|key| ArtworkEntry::new(ImageHandle::new(key), TextHandle::new(key), TextHandle::new(key)))
        .collect();
    let gallery = Gallery::new(entries).expect("non-empty gallery");
    let mut controller = GalleryController::new(gallery);

    controller.previous();
    assert_eq!(controller.current_entry().image.key(), "three");
    controller.next();
    assert_eq!(controller.current_entry().image.key(), "one");
}

#[test]
fn test_empty_gallery_fails_fast() {
    assert_eq!(Gallery::new(Vec::new()), Err(Error::EmptyGallery));
}
