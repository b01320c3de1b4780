use ::clap::ArgMatches;
use anyhow::bail;
use brace_core::banner::{CommentStyle, emit_banner};
use brace_core::context::Context;
use brace_core::sink::OutputBuffer;
use brace_core::BResult;
use log::info;
use std::io::{Write, stdout};

pub fn banner_command(ctx: &Context, matches: &ArgMatches) -> BResult<()> {
    let style = match matches.get_one::<String>("style") {
        Some(name) => parse_style(name)?,
        None => ctx.comment_style(),
    };

    let mut out = OutputBuffer::new();
    emit_banner(&mut out, style)?;

    match matches.get_one::<String>("out") {
        Some(path) => {
            let path = ctx.cwd().join(path);
            out.write_to_file(&path)?;
            info!("wrote banner to {path}");
        }
        None => stdout().lock().write_all(&out.into_bytes())?,
    }

    Ok(())
}

fn parse_style(name: &str) -> BResult<CommentStyle> {
    Ok(match name {
        "block" => CommentStyle::Block,
        "slash" => CommentStyle::Slash,
        "hash" => CommentStyle::Hash,
        _ => bail!("Unknown comment style: {name}"),
    })
}
