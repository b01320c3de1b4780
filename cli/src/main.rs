use crate::clap::cli;
use crate::commands::banner::banner_command;
use crate::commands::upcase::upcase_command;
use crate::logger::init_logger;
use ::clap::ArgMatches;
use anyhow::bail;
use brace_core::BResult;
use brace_core::context::Context;
use std::env;
use std::process::exit;

mod clap;
mod commands;
mod logger;

fn main() -> BResult<()> {
    let args = cli().try_get_matches().unwrap_or_else(|err| {
        err.print().expect("Error printing error");
        exit(err.exit_code());
    });
    init_logger(args.get_flag("verbose"), args.get_flag("no-color"))?;

    let Some((cmd, matches)) = args.subcommand() else {
        cli().print_help()?;

        return Ok(());
    };
    let context = Context::new(env::current_dir()?)?;

    execute(&context, cmd, matches)
}

pub fn execute(ctx: &Context, name: &str, matches: &ArgMatches) -> BResult<()> {
    let cmd = match name {
        "banner" => banner_command,
        "upcase" => upcase_command,
        _ => bail!("Unknown command: {name}"),
    };

    cmd(ctx, matches)
}
