use ::clap::ArgMatches;
use brace_core::BResult;
use brace_core::case::upcase;
use brace_core::context::Context;
use std::io::{Write, stdout};

pub fn upcase_command(_ctx: &Context, matches: &ArgMatches) -> BResult<()> {
    let text = matches.get_one::<String>("TEXT").map_or("", String::as_str);
    writeln!(stdout().lock(), "{}", upcase(text))?;
    Ok(())
}
