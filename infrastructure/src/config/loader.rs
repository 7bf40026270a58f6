//! Configuration loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "petdesk";
const PROJECT_FILES: [&str; 2] = ["petdesk.toml", ".petdesk.toml"];
const ENV_PREFIX: &str = "PETDESK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy env vars: `EXPERIMENT_NAME`, `SUCCESS_THRESHOLD`
    /// 2. `PETDESK_*` env vars (`__` separates sections)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./petdesk.toml` or `./.petdesk.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/petdesk/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let figment = Self::file_layers(
            Self::global_config_path().filter(|p| p.exists()),
            Self::project_config_path(),
            config_path,
        );
        Self::with_env(figment).extract().map_err(|e| Box::new(e).into())
    }

    /// Defaults plus environment, skipping every config file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, ConfigError> {
        Self::with_env(Self::file_layers(None, None, None))
            .extract()
            .map_err(|e| Box::new(e).into())
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults merged with the given files, lowest priority first
    fn file_layers(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit.map(Path::to_path_buf)]
            .into_iter()
            .flatten()
        {
            figment = figment.merge(Toml::file(path));
        }
        figment
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["EXPERIMENT_NAME", "SUCCESS_THRESHOLD"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("EXPERIMENT_NAME") {
                            "experiment.name".into()
                        } else {
                            "experiment.success_threshold".into()
                        }
                    }),
            )
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/petdesk/config.toml if set,
    /// otherwise falls back to ~/.config/petdesk/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* and EXPERIMENT_NAME / SUCCESS_THRESHOLD", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./petdesk.toml or ./.petdesk.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.experiment.name, "test_reproducibility");
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("petdesk"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("petdesk.toml");
        let explicit = dir.path().join("ci.toml");
        fs::write(
            &global,
            "[experiment]\nname = \"global\"\nconcurrency = 2\n[models]\ncustomizer = \"gpt-4.1-mini\"\n",
        )
        .unwrap();
        fs::write(&project, "[experiment]\nname = \"project\"\nconcurrency = 3\n").unwrap();
        fs::write(&explicit, "[experiment]\nname = \"explicit\"\n").unwrap();

        let config: FileConfig =
            ConfigLoader::file_layers(Some(global), Some(project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.experiment.name, "explicit");
        assert_eq!(config.experiment.concurrency, 3);
        assert_eq!(config.models.customizer, "gpt-4.1-mini");
        // untouched keys keep defaults
        assert_eq!(config.experiment.dataset, "pet_food_known_answers");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[experiment]\nsuccess_threshold = \"high\"\n").unwrap();

        let result: Result<FileConfig, _> =
            ConfigLoader::file_layers(None, None, Some(&path)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_success_threshold_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("ci.toml", "[experiment]\nsuccess_threshold = 0.5\n")?;
            jail.set_env("SUCCESS_THRESHOLD", "0.95");

            let config: FileConfig = ConfigLoader::with_env(ConfigLoader::file_layers(
                None,
                None,
                Some(Path::new("ci.toml")),
            ))
            .extract()?;

            assert_eq!(config.experiment.success_threshold, 0.95);
            Ok(())
        });
    }

    #[test]
    fn test_legacy_experiment_name_beats_prefixed_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PETDESK_EXPERIMENT__NAME", "from_prefixed");
            jail.set_env("PETDESK_EXPERIMENT__CONCURRENCY", "4");
            jail.set_env("EXPERIMENT_NAME", "ci_run");

            let config = ConfigLoader::load_without_files().map_err(|e| e.to_string())?;

            assert_eq!(config.experiment.name, "ci_run");
            assert_eq!(config.experiment.concurrency, 4);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("ci.toml", "[models]\nclassifier = \"gpt-4.1\"\n")?;
            jail.set_env("PETDESK_MODELS__CLASSIFIER", "gpt-4o-2024-08-06");

            let config: FileConfig = ConfigLoader::with_env(ConfigLoader::file_layers(
                None,
                None,
                Some(Path::new("ci.toml")),
            ))
            .extract()?;

            assert_eq!(config.models.classifier, "gpt-4o-2024-08-06");
            Ok(())
        });
    }
}
