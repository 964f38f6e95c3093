//! # naval_fate demo application
//!
//! The classic docopt example, parsed with clap and bound with argbind. This
//! is **not** a real app; it exists to demonstrate and manually verify
//! argbind's features end to end.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example naval_fate -- ship new Guardian Titanic
//! cargo run --example naval_fate -- ship move 10 20 Guardian --speed 30 --eta 1h30m
//! cargo run --example naval_fate -- ship shoot 3 4
//! cargo run --example naval_fate -- mine set 5 6 --moored --harbor 10.0.0.1
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                  | How to exercise it                                   |
//! |--------------------------|------------------------------------------------------|
//! | Integer coercion         | `<x>`, `<y>`, `--speed`                              |
//! | Parser default           | omit `--speed`: clap substitutes `10`                |
//! | Duration literal         | `--eta 90s`, `--eta 1h30m`                           |
//! | Hook on a custom type    | `--speed full` (the `Knots` hook)                    |
//! | Hook on `Option<IpAddr>` | `--harbor 10.0.0.1`                                  |
//! | Occurrence count         | `-v`, `-vv`                                          |
//! | Nested options           | `<x>` / `<y>` live in `Position`                     |
//! | Malformed input          | `ship shoot ten 4` prints a format error             |
//! | Binding trace            | `RUST_LOG=argbind=trace cargo run --example naval_fate -- ship shoot 3 4` |

use std::net::{AddrParseError, IpAddr};
use std::time::Duration;

use clap::{Arg, ArgAction, Command};

use argbind::{Binding, Hook, Options, Unmarshaller, from_clap};

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

fn positional(name: &'static str) -> Arg {
    Arg::new(name).required(true)
}

fn switch(name: &'static str) -> Arg {
    Arg::new(name).long(name).action(ArgAction::SetTrue)
}

fn mine_action(name: &'static str) -> Command {
    Command::new(name)
        .arg(positional("x"))
        .arg(positional("y"))
        .arg(switch("moored"))
        .arg(switch("drifting"))
        .arg(Arg::new("harbor").long("harbor"))
}

fn command() -> Command {
    Command::new("naval_fate")
        .version("2.0")
        .about("Naval Fate, bound with argbind")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("ship")
                .subcommand_required(true)
                .subcommand(Command::new("new").arg(positional("name").num_args(1..)))
                .subcommand(
                    Command::new("move")
                        .arg(positional("x"))
                        .arg(positional("y"))
                        .arg(positional("name").num_args(1..))
                        .arg(Arg::new("speed").long("speed").default_value("10"))
                        .arg(Arg::new("eta").long("eta")),
                )
                .subcommand(
                    Command::new("shoot")
                        .arg(positional("x"))
                        .arg(positional("y")),
                ),
        )
        .subcommand(
            Command::new("mine")
                .subcommand_required(true)
                .subcommand(mine_action("set"))
                .subcommand(mine_action("remove")),
        )
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

fn harbor_hook() -> Hook {
    Hook::new(|harbor: &mut Option<IpAddr>, raw: &str| {
        *harbor = Some(raw.parse()?);
        Ok::<_, AddrParseError>(())
    })
}

/// Ship speed. Accepts a number of knots or one of the engine telegraph
/// orders, which only a hook knows about.
#[derive(Debug, Default, Clone, Copy)]
struct Knots(u32);

fn knots_hook() -> Hook {
    Hook::new(|knots: &mut Knots, raw: &str| {
        knots.0 = match raw {
            "slow" => 5,
            "half" => 15,
            "full" => 30,
            other => other
                .parse()
                .map_err(|e| format!("'{other}' is neither knots nor an order ({e})"))?,
        };
        Ok::<_, String>(())
    })
}

#[derive(Debug, Default)]
struct Position {
    x: i64,
    y: i64,
}

impl Options for Position {
    fn bindings(&mut self) -> Vec<Binding<'_>> {
        vec![
            Binding::field("<x>", &mut self.x),
            Binding::field("<y>", &mut self.y),
        ]
    }
}

#[derive(Debug, Default)]
struct NavalFate {
    verbose: u8,
    ship: bool,
    new: bool,
    mv: bool,
    shoot: bool,
    name: Vec<String>,
    position: Position,
    speed: Knots,
    eta: Option<Duration>,
    mine: bool,
    set: bool,
    remove: bool,
    moored: bool,
    drifting: bool,
    harbor: Option<IpAddr>,
}

impl Options for NavalFate {
    fn bindings(&mut self) -> Vec<Binding<'_>> {
        vec![
            Binding::field("-v", &mut self.verbose),
            Binding::field("ship", &mut self.ship),
            Binding::field("new", &mut self.new),
            Binding::field("move", &mut self.mv),
            Binding::field("shoot", &mut self.shoot),
            Binding::field("<name>", &mut self.name),
            Binding::nested(&mut self.position),
            Binding::custom("--speed", &mut self.speed),
            Binding::field("--eta", &mut self.eta),
            Binding::field("mine", &mut self.mine),
            Binding::field("set", &mut self.set),
            Binding::field("remove", &mut self.remove),
            Binding::field("--moored", &mut self.moored),
            Binding::field("--drifting", &mut self.drifting),
            Binding::custom("--harbor", &mut self.harbor),
        ]
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn report(opts: &NavalFate) {
    if opts.verbose > 0 {
        println!("[verbose {}] {opts:#?}", opts.verbose);
    }

    let Position { x, y } = opts.position;
    if opts.ship && opts.new {
        for name in &opts.name {
            println!("Launched {name}");
        }
    } else if opts.ship && opts.mv {
        let eta = opts
            .eta
            .map(|eta| format!(", arriving in {}s", eta.as_secs()))
            .unwrap_or_default();
        println!(
            "Moving {} to ({x}, {y}) at {} knots{eta}",
            opts.name.join(", "),
            opts.speed.0
        );
    } else if opts.ship && opts.shoot {
        println!("Firing at ({x}, {y})");
    } else if opts.mine {
        let action = if opts.set { "Setting" } else { "Removing" };
        let kind = if opts.moored {
            "moored"
        } else if opts.drifting {
            "drifting"
        } else {
            "plain"
        };
        let harbor = opts
            .harbor
            .map(|ip| format!(" near harbor {ip}"))
            .unwrap_or_default();
        println!("{action} {kind} mine at ({x}, {y}){harbor}");
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = command();
    let matches = cmd.clone().get_matches();

    // `--help` and `--version` exit inside clap and are not part of `cmd`.
    let mut arguments = from_clap(&cmd, &matches);

    let unmarshaller = Unmarshaller::new().with_hooks([knots_hook(), harbor_hook()]);
    let mut opts = NavalFate::default();
    unmarshaller
        .unmarshal(&mut arguments, &mut opts)
        .unwrap_or_else(|e| {
            eprintln!("Failed to bind arguments:\n{e}");
            std::process::exit(1);
        });

    report(&opts);
}
