use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Load environment variables from a `.env` file found in the current
/// directory or any of its ancestors.
///
/// A missing file is not an error; variables already present in the
/// process environment are left untouched.
pub fn load_env_file() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded environment file.");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(Error::EnvFile(error)),
    }
}

/// Load environment variables from the file at `path`.
///
/// Unlike [`load_env_file`], a missing file is an error, since the
/// caller asked for that specific file.
pub fn load_env_file_from(path: impl AsRef<Path>) -> Result<()> {
    dotenvy::from_path(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "Loaded environment file.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, io::Write as _};

    use test_log::test;

    use super::*;

    #[test]
    fn test_load_env_file_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.env");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "SR_CONFIG_ENV_TEST=loaded").unwrap();

        load_env_file_from(&path).unwrap();
        assert_eq!(env::var("SR_CONFIG_ENV_TEST").as_deref(), Ok("loaded"));
    }

    #[test]
    fn test_load_env_file_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_env_file_from(dir.path().join("missing.env"));
        assert!(matches!(result, Err(Error::EnvFile(_))));
    }
}
