//! Clap adapter for argbind.
//!
//! This module is the **optional bridge** between [clap](https://docs.rs/clap)
//! and argbind's parser-agnostic core. It is compiled only when the `clap`
//! Cargo feature is enabled (on by default).
//!
//! [`from_clap`] turns a [`Command`] and the [`ArgMatches`] it produced into
//! an [`Arguments`] map whose keys follow docopt conventions:
//!
//! | Argument                   | Key         | Value                             |
//! |----------------------------|-------------|-----------------------------------|
//! | positional `name`          | `<name>`    | `Str`, or `List` if multi-valued  |
//! | option `--speed`           | `--speed`   | `Str`, or `List` if multi-valued  |
//! | short-only option `-v`     | `-v`        | as above                          |
//! | `SetTrue` / `SetFalse`     | option key  | `Bool`                            |
//! | `Count`                    | option key  | `Count`                           |
//! | subcommand `ship`          | `ship`      | `Bool` (was it chosen)            |
//!
//! Every argument of every subcommand appears in the map, so an options
//! struct can bind the whole grammar at once, exactly as with docopt.
//! Single-valued arguments that were not given map to `None`; multi-valued
//! ones map to an empty list. When several subcommands declare the same key,
//! the one on the chosen path decides its value.
//!
//! Pass the command as you defined it. A command that has already been
//! built by clap also carries the generated `--help` / `--version` flags and
//! `help` subcommand, which then show up as keys too.

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::value::{ArgValue, Arguments};

/// Build an argument map from clap's parse result.
///
/// ```
/// use argbind::{ArgValue, from_clap};
/// use clap::{Arg, ArgAction, Command};
///
/// let cmd = Command::new("naval_fate")
///     .arg(Arg::new("speed").long("speed").default_value("10"))
///     .arg(Arg::new("moored").long("moored").action(ArgAction::SetTrue));
/// let matches = cmd.clone().try_get_matches_from(["naval_fate", "--moored"]).unwrap();
///
/// let arguments = from_clap(&cmd, &matches);
/// assert_eq!(arguments["--speed"], Some(ArgValue::from("10")));
/// assert_eq!(arguments["--moored"], Some(ArgValue::Bool(true)));
/// ```
pub fn from_clap(command: &Command, matches: &ArgMatches) -> Arguments {
    let mut arguments = Arguments::new();
    collect(command, Some(matches), &mut arguments);
    arguments
}

fn collect(command: &Command, matches: Option<&ArgMatches>, out: &mut Arguments) {
    let chosen = matches.is_some();
    for arg in command.get_arguments() {
        insert(out, chosen, key_for(arg), value_for(arg, matches));
    }

    for sub in command.get_subcommands() {
        let name = sub.get_name();
        let sub_matches = matches.and_then(|m| m.subcommand_matches(name));
        insert(
            out,
            chosen,
            name.to_string(),
            Some(ArgValue::Bool(sub_matches.is_some())),
        );
        collect(sub, sub_matches, out);
    }
}

/// Siblings may declare the same key. Entries from a chosen command always
/// win; entries from a command that was not chosen only fill gaps.
fn insert(out: &mut Arguments, chosen: bool, key: String, value: Option<ArgValue>) {
    if chosen {
        out.insert(key, value);
    } else {
        out.entry(key).or_insert(value);
    }
}

fn key_for(arg: &Arg) -> String {
    let id = arg.get_id().as_str();
    if arg.is_positional() {
        format!("<{id}>")
    } else if let Some(long) = arg.get_long() {
        format!("--{long}")
    } else if let Some(short) = arg.get_short() {
        format!("-{short}")
    } else {
        id.to_string()
    }
}

fn value_for(arg: &Arg, matches: Option<&ArgMatches>) -> Option<ArgValue> {
    let id = arg.get_id().as_str();
    match arg.get_action() {
        ArgAction::SetTrue => Some(ArgValue::Bool(flag(matches, id).unwrap_or(false))),
        ArgAction::SetFalse => Some(ArgValue::Bool(flag(matches, id).unwrap_or(true))),
        ArgAction::Count => {
            let count = matches
                .and_then(|m| m.try_get_one::<u8>(id).ok().flatten())
                .copied()
                .unwrap_or(0);
            Some(ArgValue::Count(u64::from(count)))
        }
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version => {
            Some(ArgValue::Bool(false))
        }
        action => {
            let values: Vec<String> = matches
                .and_then(|m| m.try_get_raw(id).ok().flatten())
                .map(|raw| raw.map(|v| v.to_string_lossy().into_owned()).collect())
                .unwrap_or_default();
            if matches!(action, ArgAction::Append) || takes_many(arg) {
                Some(ArgValue::List(values))
            } else {
                values.into_iter().next().map(ArgValue::Str)
            }
        }
    }
}

fn flag(matches: Option<&ArgMatches>, id: &str) -> Option<bool> {
    matches
        .and_then(|m| m.try_get_one::<bool>(id).ok().flatten())
        .copied()
}

fn takes_many(arg: &Arg) -> bool {
    arg.get_num_args()
        .is_some_and(|range| range.max_values() > 1)
}
