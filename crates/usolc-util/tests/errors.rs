use usolc_util::errors::UsolcError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = UsolcError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = UsolcError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad syntax");
}

#[test]
fn test_toolchain_error_display() {
    let err = UsolcError::Toolchain {
        message: "list missing".to_string(),
    };
    assert_eq!(err.to_string(), "Toolchain error: list missing");
}

#[test]
fn test_spawn_error_names_program() {
    let err = UsolcError::Spawn {
        program: "/opt/solc-0.4.25".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/opt/solc-0.4.25"), "got: {msg}");
    assert!(msg.contains("denied"), "got: {msg}");
}

#[test]
fn test_generic_error_display() {
    let err = UsolcError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let usolc_err: UsolcError = io_err.into();
    assert!(matches!(usolc_err, UsolcError::Io(_)));
}
