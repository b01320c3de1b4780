use crate::banner::CommentStyle;
use crate::config::Config;
use crate::emit::ScopeEmitter;
use crate::fs::to_bpath;
use crate::{BPath, BResult};
use std::path::PathBuf;

/// Settings for one generator run, resolved from the working directory.
#[derive(Debug)]
pub struct Context {
    config: Config,
    cwd: BPath,
}

impl Context {
    pub fn new(cwd: PathBuf) -> BResult<Self> {
        let config = Config::find_recursively(cwd.clone())?.unwrap_or_default();
        Ok(Self::with_config(to_bpath(cwd)?, config))
    }

    pub fn with_config(cwd: BPath, config: Config) -> Self {
        Context { config, cwd }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cwd(&self) -> &BPath {
        &self.cwd
    }

    pub fn comment_style(&self) -> CommentStyle {
        self.config.emit.comment
    }

    /// A fresh emitter for a single output file.
    pub fn emitter(&self) -> ScopeEmitter {
        ScopeEmitter::from_config(&self.config.emit)
    }
}
