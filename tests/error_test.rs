use std::io;
use std::path::PathBuf;

use fast_setup::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::IoError(io::Error::new(io::ErrorKind::Other, "disk full"));
    assert_eq!(err.to_string(), "disk full");

    let err = Error::PromptError("not a terminal".to_string());
    assert_eq!(err.to_string(), "Prompt failed: not a terminal");

    let err = Error::InvalidManifestError { path: PathBuf::from("demo/package.json") };
    assert_eq!(
        err.to_string(),
        "Cannot set the package name in 'demo/package.json': manifest is not a JSON object"
    );
}
