use camino::Utf8PathBuf;

pub mod banner;
pub mod case;
pub mod config;
pub mod context;
pub mod emit;
pub mod error;
pub mod fs;
pub mod sink;

pub use banner::{CommentStyle, GENERATED_MARKER, autogen_banner};
pub use case::upcase;
pub use emit::{IndentStyle, ScopeEmitter};
pub use error::{EmitError, EmitResult};

pub type BResult<T> = anyhow::Result<T>;

pub type BPath = Utf8PathBuf;
