// SPDX-License-Identifier: MPL-2.0
use iced::Point;
use neatrip_carousel::carousel::{Effect, Message, Options, State};
use neatrip_carousel::config::{self, Config};
use neatrip_carousel::error::Error;
use neatrip_carousel::i18n::I18n;
use neatrip_carousel::media::Gallery;
use neatrip_carousel::ui::notifications::{Manager, Severity};
use tempfile::tempdir;

const MANIFEST: &str = r#"
title = "Santorini trip"

[[items]]
id = "a1"
url = "/tmp/photos/sunset.jpg"
caption = "Sunset from Oia"

[[items]]
id = "a2"
url = "/tmp/photos/harbor.jpg"

[[items]]
id = "a3"
url = "/tmp/photos/alley.jpg"
alt = "Whitewashed alley"
"#;

fn carousel_from_manifest() -> State {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("gallery.toml");
    std::fs::write(&path, MANIFEST).expect("failed to write manifest");

    let gallery = Gallery::load_from_path(&path).expect("failed to load manifest");
    State::new(gallery.items, Options::default()).0
}

#[test]
fn manifest_order_drives_navigation_order() {
    let mut state = carousel_from_manifest();
    assert_eq!(state.items().len(), 3);
    assert_eq!(state.current_item().map(|i| i.id.as_str()), Some("a1"));

    let _ = state.update(Message::Next);
    assert_eq!(state.current_item().map(|i| i.id.as_str()), Some("a2"));

    let _ = state.update(Message::Next);
    let _ = state.update(Message::Next);
    assert_eq!(state.current_item().map(|i| i.id.as_str()), Some("a1"));

    let _ = state.update(Message::Previous);
    assert_eq!(state.current_item().map(|i| i.id.as_str()), Some("a3"));
}

#[test]
fn swipe_gesture_navigates_through_manifest() {
    let mut state = carousel_from_manifest();

    // Leftward drag past the dead zone advances.
    let _ = state.update(Message::PointerPressed(Some(Point::new(320.0, 200.0))));
    let _ = state.update(Message::PointerMoved(Point::new(240.0, 200.0)));
    let _ = state.update(Message::PointerReleased);
    assert_eq!(state.current_index(), 1);

    // A short drag stays put.
    let _ = state.update(Message::PointerPressed(Some(Point::new(320.0, 200.0))));
    let _ = state.update(Message::PointerMoved(Point::new(290.0, 200.0)));
    let _ = state.update(Message::PointerReleased);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn download_failure_flows_into_toast_manager() {
    let mut state = carousel_from_manifest();
    let mut notifications = Manager::new();

    let (effect, _) = state.update(Message::DownloadFinished(Err(Error::Http(
        "connection refused".to_string(),
    ))));

    match effect {
        Effect::Notify(notification) => {
            assert_eq!(notification.severity(), Severity::Error);
            notifications.push(notification);
        }
        other => panic!("expected Notify, got {other:?}"),
    }

    assert_eq!(notifications.visible_count(), 1);

    // Errors stay until dismissed.
    notifications.tick();
    assert_eq!(notifications.visible_count(), 1);
}

#[test]
fn toast_messages_resolve_in_every_bundled_locale() {
    let i18n_en = I18n::new(Some("en-US".to_string()), &Config::default());
    let i18n_fr = I18n::new(Some("fr".to_string()), &Config::default());

    for key in [
        "notification-download-failed",
        "notification-share-copied",
        "notification-like-registered",
        "carousel-empty-title",
    ] {
        assert!(!i18n_en.tr(key).starts_with("MISSING"), "en-US missing {key}");
        assert!(!i18n_fr.tr(key).starts_with("MISSING"), "fr missing {key}");
    }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial, &path).expect("failed to save config");
    let i18n_en = I18n::new(None, &config::load_from_path(&path).expect("load failed"));
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("failed to save config");
    let i18n_fr = I18n::new(None, &config::load_from_path(&path).expect("load failed"));
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn autoplay_settings_flow_from_config_to_options() {
    let config = Config {
        autoplay_interval_ms: Some(2000),
        autoplay: Some(true),
        ..Config::default()
    };

    let options = Options {
        auto_play: config.autoplay.unwrap_or(false),
        auto_play_interval: config.autoplay_interval(),
        ..Options::default()
    };
    let mut state = State::new(
        vec![
            neatrip_carousel::media::MediaItem::new("a1", "/tmp/a.jpg"),
            neatrip_carousel::media::MediaItem::new("a2", "/tmp/b.jpg"),
        ],
        options,
    )
    .0;

    assert!(state.is_playing());
    let _ = state.update(Message::AutoPlayTick);
    assert_eq!(state.current_index(), 1);
}
