//! The "do not edit" banner placed at the top of every generated file.

use crate::error::EmitResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Token that diff suppressors and review tooling look for.
///
/// Kept split in source so this file is not itself flagged as generated.
pub const GENERATED_MARKER: &str = concat!("@", "generated");

const BANNER_LINES: [&str; 4] = [
    "Autogenerated by Thrift",
    "",
    "DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING",
    concat!(" @", "generated"),
];

const BLOCK_BANNER: &str = concat!(
    "/**\n",
    " * Autogenerated by Thrift\n",
    " *\n",
    " * DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING\n",
    " *  @",
    "generated\n",
    " */\n",
);

/// Block-comment banner, identical on every call.
pub fn autogen_banner() -> &'static str {
    BLOCK_BANNER
}

/// Comment syntax the banner is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// `/** ... */`, valid in C++, Java, PHP and friends.
    #[default]
    Block,
    /// `//` line comments.
    Slash,
    /// `#` line comments for scripting targets.
    Hash,
}

impl CommentStyle {
    pub fn render_banner(self) -> String {
        match self {
            CommentStyle::Block => BLOCK_BANNER.to_string(),
            CommentStyle::Slash => line_banner("//"),
            CommentStyle::Hash => line_banner("#"),
        }
    }
}

fn line_banner(prefix: &str) -> String {
    let mut banner = format!("{prefix}\n");
    for line in BANNER_LINES {
        if line.is_empty() {
            banner.push_str(prefix);
        } else {
            banner.push_str(&format!("{prefix} {line}"));
        }
        banner.push('\n');
    }
    banner.push_str(prefix);
    banner.push('\n');
    banner
}

pub fn emit_banner<W: Write + ?Sized>(out: &mut W, style: CommentStyle) -> EmitResult<()> {
    out.write_all(style.render_banner().as_bytes())?;
    Ok(())
}
