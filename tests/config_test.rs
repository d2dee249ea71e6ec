use std::{env, fs};

use plimport::config::*;
use tempfile::tempdir;

// Each test uses its own variable names; SPOTIFY_TOKEN is only touched by
// test_blank_spotify_token_is_absent.

#[test]
fn test_missing_env_file_is_not_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_env_from(&dir.path().join(".env")).is_ok());
}

#[test]
fn test_env_file_values_are_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "# comment\nPLIMPORT_TEST_LOADED=from-file\n").unwrap();

    load_env_from(&path).unwrap();

    assert_eq!(env::var("PLIMPORT_TEST_LOADED").unwrap(), "from-file");
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "THIS LINE IS NOT VALID\n").unwrap();

    let err = load_env_from(&path).unwrap_err();
    assert!(err.contains(".env"));
}

#[test]
fn test_environment_wins_over_env_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "PLIMPORT_TEST_PRECEDENCE=from-file\nPLIMPORT_TEST_FILE_ONLY=from-file\n",
    )
    .unwrap();
    unsafe { env::set_var("PLIMPORT_TEST_PRECEDENCE", "from-env") };

    load_env_from(&path).unwrap();

    assert_eq!(env::var("PLIMPORT_TEST_PRECEDENCE").unwrap(), "from-env");
    assert_eq!(env::var("PLIMPORT_TEST_FILE_ONLY").unwrap(), "from-file");
}

#[test]
fn test_blank_spotify_token_is_absent() {
    for blank in ["", "   ", "\t"] {
        unsafe { env::set_var("SPOTIFY_TOKEN", blank) };
        assert_eq!(spotify_token(), None);
        assert_eq!(Config::from_env().spotify_token, None);
    }

    unsafe { env::set_var("SPOTIFY_TOKEN", "  BQC-token  ") };
    assert_eq!(spotify_token(), Some("BQC-token".to_string()));

    // an empty value in the .env file is absent too
    unsafe { env::remove_var("SPOTIFY_TOKEN") };
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "SPOTIFY_TOKEN=\n").unwrap();
    load_env_from(&path).unwrap();
    assert_eq!(spotify_token(), None);

    unsafe { env::remove_var("SPOTIFY_TOKEN") };
}
