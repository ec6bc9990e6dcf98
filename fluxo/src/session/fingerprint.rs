use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::input::InputError;

/// identity token of an input file, used as part of the flow cache key.
/// path, byte length and modification time stand in for a content hash:
/// cheap to recompute on every check, and any rewrite of the file changes
/// the token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceFingerprint {
    pub path: PathBuf,
    pub len: u64,
    pub modified_ms: u128,
}

impl SourceFingerprint {
    pub fn of(path: &Path) -> Result<SourceFingerprint, InputError> {
        let metadata = std::fs::metadata(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let modified_ms = metadata
            .modified()
            .ok()
            .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Ok(SourceFingerprint {
            path: path.to_path_buf(),
            len: metadata.len(),
            modified_ms,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test").join(name)
    }

    #[test]
    fn test_fingerprint_is_stable_for_an_unchanged_file() {
        let a = SourceFingerprint::of(&fixture("viagens_coletivo.csv"))
            .expect("test invariant failed: fixture must have a fingerprint");
        let b = SourceFingerprint::of(&fixture("viagens_coletivo.csv"))
            .expect("test invariant failed: fixture must have a fingerprint");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_files_have_different_fingerprints() {
        let a = SourceFingerprint::of(&fixture("viagens_coletivo.csv"))
            .expect("test invariant failed: fixture must have a fingerprint");
        let b = SourceFingerprint::of(&fixture("viagens_individual.csv"))
            .expect("test invariant failed: fixture must have a fingerprint");
        assert_ne!(a, b);
    }

    #[test]
    fn test_missing_file_has_no_fingerprint() {
        assert!(SourceFingerprint::of(&fixture("nao_existe.csv")).is_err());
    }
}
