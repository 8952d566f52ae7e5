use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const BASE_MANIFEST: &str = "composer.json";
pub const MODIFIER_MANIFEST: &str = "haydn.json";
pub const CONFIG_ENV_VAR: &str = "COMPOSER";
pub const TEMP_PREFIX: &str = "haydn_";
pub const COMMAND_CANDIDATES: [&str; 2] = ["composer", "composer.phar"];

/// Everything the wrapper needs to locate its inputs and the package manager.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_manifest: PathBuf,
    pub modifier: PathBuf,
    pub env_var: String,
    pub candidates: Vec<String>,
    pub temp_prefix: String,
    /// Falls back to the system temp directory when unset.
    pub temp_dir: Option<PathBuf>,
    /// Restricts command lookup to these directories instead of `PATH`.
    pub search_path: Option<OsString>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_manifest: PathBuf::from(BASE_MANIFEST),
            modifier: PathBuf::from(MODIFIER_MANIFEST),
            env_var: CONFIG_ENV_VAR.to_string(),
            candidates: COMMAND_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            temp_prefix: TEMP_PREFIX.to_string(),
            temp_dir: None,
            search_path: None,
        }
    }
}

impl Config {
    /// Defaults, with both manifests looked up inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            base_manifest: dir.join(BASE_MANIFEST),
            modifier: dir.join(MODIFIER_MANIFEST),
            ..Self::default()
        }
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::path::Path;

    #[test]
    fn defaults_follow_composer_conventions() {
        let config = Config::default();
        assert_eq!(config.base_manifest, Path::new("composer.json"));
        assert_eq!(config.modifier, Path::new("haydn.json"));
        assert_eq!(config.env_var, "COMPOSER");
        assert_eq!(config.candidates, vec!["composer", "composer.phar"]);
        assert_eq!(config.temp_prefix, "haydn_");
        assert_eq!(config.temp_dir(), std::env::temp_dir());
    }

    #[test]
    fn in_dir_resolves_both_manifests() {
        let config = Config::in_dir(Path::new("/work/app")).with_temp_dir("/scratch");
        assert_eq!(config.base_manifest, Path::new("/work/app/composer.json"));
        assert_eq!(config.modifier, Path::new("/work/app/haydn.json"));
        assert_eq!(config.temp_dir(), Path::new("/scratch"));
    }
}
