use anstyle::{AnsiColor, Effects, Style};
use clap::{Arg, ArgAction, Command, builder::PossibleValuesParser, builder::Styles};

pub const HEADER: Style = AnsiColor::Magenta.on_default().effects(Effects::BOLD);
pub const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
pub const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
pub const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

pub fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::Set)
}

pub fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

pub fn positional(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).index(1)
}

pub fn cli() -> Command {
    let styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };

    Command::new("brace")
        .about("Text emission helpers for code generator backends")
        .styles(styles)
        .arg(flag("verbose", "Use verbose output").short('v').global(true))
        .arg(flag("no-color", "Disable colored output").global(true))
        .subcommand(
            Command::new("banner")
                .about("Print the autogenerated-file banner")
                .arg(
                    opt("style", "Comment syntax, defaults to the configured one")
                        .value_parser(PossibleValuesParser::new(["block", "slash", "hash"])),
                )
                .arg(opt("out", "Write the banner to this file instead of stdout")),
        )
        .subcommand(
            Command::new("upcase")
                .about("Upper-case ASCII letters in TEXT")
                .arg(positional("TEXT", "Text to fold").required(true)),
        )
}
