use crate::banner::CommentStyle;
use crate::emit::IndentStyle;
use crate::fs::{read_string, to_bpath, walk_for_file};
use crate::{BPath, BResult};
use anyhow::{Context, ensure};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub emit: EmitConfig,
}

/// Output conventions shared by every backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    pub indent: IndentStyle,
    pub comment: CommentStyle,
}

impl Config {
    pub const FILE_NAME: &'static str = "brace.toml";

    /// Loads the nearest `brace.toml` at or above `cwd`, if there is one.
    pub fn find_recursively(cwd: PathBuf) -> BResult<Option<Self>> {
        let Some(file) = walk_for_file(cwd, Self::FILE_NAME) else {
            debug!("no {} found, using defaults", Self::FILE_NAME);
            return Ok(None);
        };

        Self::load(&to_bpath(file)?).map(Some)
    }

    pub fn load(path: &BPath) -> BResult<Self> {
        let content = read_string(path)?;
        let config = Self::from_toml(&content).with_context(|| format!("Invalid config in {path}"))?;
        debug!("loaded config from {path}");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> BResult<Self> {
        let config = toml::from_str::<Config>(content)?;
        config.emit.validate()?;
        Ok(config)
    }
}

impl EmitConfig {
    /// Every indent level must add visible width.
    pub fn validate(&self) -> BResult<()> {
        ensure!(
            self.indent != IndentStyle::Spaces(0),
            "emit.indent: `spaces` must be at least 1, a zero-width indent cannot show nesting"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.emit.indent, IndentStyle::Spaces(2));
        assert_eq!(config.emit.comment, CommentStyle::Block);
    }

    #[test]
    fn spaces_and_hash() {
        let config = Config::from_toml(
            r#"
            [emit]
            indent = { spaces = 4 }
            comment = "hash"
            "#,
        )
        .unwrap();

        assert_eq!(config.emit.indent, IndentStyle::Spaces(4));
        assert_eq!(config.emit.comment, CommentStyle::Hash);
    }

    #[test]
    fn tabs() {
        let config = Config::from_toml("[emit]\nindent = \"tabs\"\n").unwrap();
        assert_eq!(config.emit.indent, IndentStyle::Tabs);
        assert_eq!(config.emit.comment, CommentStyle::Block);
    }

    #[test]
    fn zero_width_indent_is_rejected() {
        let err = Config::from_toml("[emit]\nindent = { spaces = 0 }\n").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert!(Config::from_toml("[emit]\nindent = { spaces = 1 }\n").is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("[emit]\nindnet = \"tabs\"\n").is_err());
        assert!(Config::from_toml("[emit]\ncomment = \"xml\"\n").is_err());
    }

    #[test]
    fn found_in_parent_directory() {
        let root = std::env::temp_dir().join(format!("brace-config-{}", std::process::id()));
        let nested = root.join("src/gen");
        fs_err::create_dir_all(&nested).unwrap();
        fs_err::write(root.join(Config::FILE_NAME), "[emit]\ncomment = \"slash\"\n").unwrap();

        let config = Config::find_recursively(nested).unwrap().unwrap();
        assert_eq!(config.emit.comment, CommentStyle::Slash);

        fs_err::remove_dir_all(&root).unwrap();
    }
}
