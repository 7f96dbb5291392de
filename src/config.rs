use std::path::{Path, PathBuf};

use crate::prelude::{ErrorsOracle, DEFAULT_SEED};

/// Where fixtures are written and which base seed their inputs are derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_root: PathBuf,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_root(mut self, output_root: impl AsRef<Path>) -> Self {
        self.output_root = output_root.as_ref().to_path_buf();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.output_root.join(relative)
    }

    /// The output root may be missing, it is created on the first write, but must not be a file.
    pub fn validate(&self) -> Result<(), ErrorsOracle> {
        if self.output_root.exists() && !self.output_root.is_dir() {
            return Err(ErrorsOracle::Misconfiguration(
                "output root exists but is not a directory",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, 1);
        assert_eq!(config.resolve("tests/a.lua"), PathBuf::from("./tests/a.lua"));
        let config = config.with_output_root("/tmp/out").with_seed(9);
        assert_eq!(config.seed, 9);
        assert_eq!(config.resolve("tests/a.lua"), PathBuf::from("/tmp/out/tests/a.lua"));
    }

    #[test]
    fn test_output_root_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = GeneratorConfig::default().with_output_root(dir.path().join("not_yet"));
        assert!(missing.validate().is_ok());
        assert!(GeneratorConfig::default().with_output_root(dir.path()).validate().is_ok());

        let file = dir.path().join("fixtures.lua");
        std::fs::write(&file, "").unwrap();
        let config = GeneratorConfig::default().with_output_root(&file);
        assert!(matches!(config.validate(), Err(ErrorsOracle::Misconfiguration(_))));
    }
}
