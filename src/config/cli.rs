use crate::config::toml_config::TomlConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "address-store")]
#[command(about = "CRUD store for address records")]
pub struct CliConfig {
    /// Storage backend: "memory" or "json" (default: json)
    #[arg(long)]
    pub backend: Option<String>,

    /// Base directory for the json backend (default: ./data)
    #[arg(long)]
    pub data_path: Option<String>,

    /// Optional TOML config file; fills in values not given as flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Effective settings: CLI flags win over file values, file values win over
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend: String,
    pub data_path: String,
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self, file: Option<TomlConfig>) -> ResolvedConfig {
        let (file_backend, file_data_path, file_verbose) = match file {
            Some(f) => (
                Some(f.store.backend),
                f.store.data_path,
                f.logging.and_then(|l| l.verbose),
            ),
            None => (None, None, None),
        };

        ResolvedConfig {
            backend: self
                .backend
                .clone()
                .or(file_backend)
                .unwrap_or_else(|| "json".to_string()),
            data_path: self
                .data_path
                .clone()
                .or(file_data_path)
                .unwrap_or_else(|| "./data".to_string()),
            verbose: self.verbose || file_verbose.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Save a new address
    Add {
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: String,
    },
    /// Look up an address by id
    Get { id: i64 },
    /// List every stored address
    List,
    /// Delete an address by id
    Delete { id: i64 },
    /// Report the number of stored addresses
    Count,
    /// Remove every stored address
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{LoggingSection, StoreSection};

    fn cli(backend: Option<&str>, data_path: Option<&str>, verbose: bool) -> CliConfig {
        CliConfig {
            backend: backend.map(str::to_string),
            data_path: data_path.map(str::to_string),
            config: None,
            verbose,
            command: Command::Count,
        }
    }

    fn file(backend: &str, data_path: Option<&str>, verbose: Option<bool>) -> TomlConfig {
        TomlConfig {
            store: StoreSection {
                backend: backend.to_string(),
                data_path: data_path.map(str::to_string),
            },
            logging: Some(LoggingSection { verbose }),
        }
    }

    #[test]
    fn test_flags_override_file_values() {
        let resolved = cli(Some("memory"), Some("./cli-data"), true)
            .resolve(Some(file("json", Some("./file-data"), Some(false))));
        assert_eq!(resolved.backend, "memory");
        assert_eq!(resolved.data_path, "./cli-data");
        assert!(resolved.verbose);
    }

    #[test]
    fn test_file_fills_in_missing_flags() {
        let resolved =
            cli(None, None, false).resolve(Some(file("memory", Some("./file-data"), Some(true))));
        assert_eq!(resolved.backend, "memory");
        assert_eq!(resolved.data_path, "./file-data");
        assert!(resolved.verbose);
    }

    #[test]
    fn test_defaults_apply_without_file() {
        let resolved = cli(None, None, false).resolve(None);
        assert_eq!(resolved.backend, "json");
        assert_eq!(resolved.data_path, "./data");
        assert!(!resolved.verbose);
    }
}
