use tempfile::TempDir;
use vidctl::config::Config;
use vidctl::engine::{ControlSession, Selection};
use vidctl::ui::filters::FilterToggles;

#[test]
fn test_config_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.defaults.codec = "VP9".to_string();
    config.defaults.quality = "High".to_string();
    config.defaults.pass = "1 Pass".to_string();
    config.logging.level = "debug".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_reports_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults\ncodec = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_configured_defaults_drive_a_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[defaults]\ncodec = \"x265\"\nquality = \"High\"\npass = \"1 Pass\"\nvbr = true\n",
    )
    .unwrap();
    let defaults = Config::load_from(&path).unwrap().defaults;

    let mut session = ControlSession::new(FilterToggles::default());
    session
        .select(&Selection {
            media_type: defaults.media_type,
            codec: defaults.codec,
            quality: defaults.quality,
            optimize: defaults.optimize,
            pass: defaults.pass,
            vbr: defaults.vbr,
        })
        .unwrap();

    let state = session.state();
    assert_eq!(state.codec_selected, "x265");
    assert_eq!(state.pass_selected, "1 Pass");
    assert!(state.vbr_checked);
    assert_eq!(state.bitrate_text, "1500K");
    assert_eq!(state.optimize_selected, "None");
}

#[test]
fn test_unknown_configured_codec_fails_selection() {
    let mut session = ControlSession::new(FilterToggles::default());
    let result = session.select(&Selection {
        codec: "Cinepak".to_string(),
        quality: "High".to_string(),
        ..Selection::default()
    });
    assert!(result.is_err());
    assert_eq!(session.codec(), None);
}
