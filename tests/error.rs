use std::io;
use std::path::PathBuf;

use pacman_display::error::{ConfigError, DisplayError, SaveError};

#[test]
fn test_display_error_from_save_error() {
    let save_error = SaveError::Write {
        path: PathBuf::from("game.save"),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    let error: DisplayError = save_error.into();
    assert!(matches!(error, DisplayError::Save(SaveError::Write { .. })));
}

#[test]
fn test_display_error_from_config_error() {
    let error: DisplayError = ConfigError::EmptySaveFilename.into();
    assert!(matches!(error, DisplayError::Config(ConfigError::EmptySaveFilename)));
}

#[test]
fn test_save_error_message_names_the_file() {
    let error = SaveError::Create {
        path: PathBuf::from("saves/level.save"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(error.to_string(), "Could not create save file saves/level.save: denied");
}

#[test]
fn test_config_error_from_figment_error() {
    let error: ConfigError = figment::Error::from("bad value".to_string()).into();
    assert!(matches!(error, ConfigError::Extract(_)));
}
