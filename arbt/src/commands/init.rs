//! Init command implementation.
//!
//! This module writes a default `arbt.toml` into a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ArbtError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Execute the command. Returns the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self.get_target_path();

        self.validate_directory(&target_path)?;
        let config_path = self.create_config_file(&target_path)?;

        info!(path = %config_path.display(), "configuration written");
        println!("{} {}", output_messages::CREATED_FILE, config_path.display());

        Ok(config_path)
    }

    /// Get the target path for initialization.
    fn get_target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate that the target directory is suitable for initialization,
    /// creating it if missing.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            if self.args.verbose {
                eprintln!("{} {}", output_messages::CREATED_DIR, path.display());
            }
            return Ok(());
        }

        if !path.is_dir() {
            return Err(ArbtError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    /// Create the configuration file.
    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            return Err(ArbtError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default arbt.toml"
    }

    fn help() -> &'static str {
        "Creates arbt.toml with default settings in the specified or current \
         directory. Refuses to overwrite an existing file unless --force is given."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    debug!(command = <InitCommand as Command>::name(), "running");
    <InitCommand as Command>::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            verbose: false,
            force,
            path: Some(path.to_path_buf()),
        }
    }

    #[test]
    fn test_init_args_default() {
        let args = InitArgs::default();
        assert!(!args.verbose);
        assert!(!args.force);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_command_name() {
        assert_eq!(<InitCommand as Command>::name(), "init");
        assert_eq!(InitCommand::description(), "Write a default arbt.toml");
    }

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let written = run_init(args_for(temp_dir.path(), false)).unwrap();

        assert_eq!(written, temp_dir.path().join(CONFIG_FILE_NAME));
        let loaded = Config::load_from_path(&written).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a").join("b");

        InitCommand::new(args_for(&target, false)).run().unwrap();
        assert!(target.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let result = InitCommand::new(args_for(temp_dir.path(), false)).run();
        match result {
            Err(ArbtError::Validation(msg)) => assert!(msg.contains("already exists")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "verbose = true\n");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        InitCommand::new(args_for(temp_dir.path(), true)).run().unwrap();
        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_target_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();

        let result = InitCommand::new(args_for(&file, false)).run();
        assert!(matches!(result, Err(ArbtError::Validation(msg)) if msg.contains("not a directory")));
    }
}
