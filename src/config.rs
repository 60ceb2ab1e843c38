//! Loading invocations from YAML files.
//!
//! An invocation file mirrors the fields of [`MavenArgs`]; every key is
//! optional and unknown keys are rejected:
//!
//! ```yaml
//! goals: [clean, install]
//! batch_mode: true
//! activate_profiles: [ci]
//! system_properties:
//!   skipTests: "true"
//! ```

use std::fs::File;
use std::io::BufReader;

use camino::Utf8Path;
use tracing::debug;

use crate::args::MavenArgs;
use crate::error::MvnargsError;

/// Load an invocation from the YAML file at `path`.
pub fn load_invocation(path: &Utf8Path) -> Result<MavenArgs, MvnargsError> {
    let file = File::open(path).map_err(|e| MvnargsError::io(path.as_str(), e))?;
    let reader = BufReader::new(file);
    let args: MavenArgs = serde_yaml::from_reader(reader)
        .map_err(|e| MvnargsError::Config(format!("failed to parse yaml: {}: {}", path, e)))?;
    debug!("loaded invocation from {}", path);
    Ok(args)
}

/// Parse an invocation from YAML text.
pub fn parse_invocation(yaml: &str) -> Result<MavenArgs, MvnargsError> {
    serde_yaml::from_str(yaml)
        .map_err(|e| MvnargsError::Config(format!("failed to parse yaml: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let args = parse_invocation("{}").expect("empty mapping should parse");
        assert_eq!(args, MavenArgs::new());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = parse_invocation("ofline: true").unwrap_err();
        assert!(matches!(err, MvnargsError::Config(_)));
        assert!(err.to_string().contains("ofline"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_invocation(Utf8Path::new("/nonexistent/invocation.yml")).unwrap_err();
        match err {
            MvnargsError::Io { context, source, .. } => {
                assert_eq!(context, "/nonexistent/invocation.yml");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
