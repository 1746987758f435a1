use std::path::PathBuf;

pub fn conformance_dir() -> PathBuf {
    std::env::var("FORMDEF_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/conformance"))
}

/// An error triple as written in a suite file.
#[derive(Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ExpectedError {
    pub scope: String,
    pub field: String,
    pub message: String,
}

impl From<&formdef::ValidationError> for ExpectedError {
    fn from(e: &formdef::ValidationError) -> Self {
        ExpectedError {
            scope: e.scope.clone(),
            field: e.field.clone(),
            message: e.message.clone(),
        }
    }
}

/// Reads and deserializes a YAML suite file relative to the conformance dir.
pub fn load_suite<T: serde::de::DeserializeOwned>(relative: &str) -> Vec<T> {
    let suite_path = conformance_dir().join(relative);
    assert!(
        suite_path.exists(),
        "Conformance fixture not found: {:?}",
        suite_path
    );
    let content = std::fs::read_to_string(&suite_path).unwrap();
    serde_saphyr::from_str(&content).unwrap()
}
