//! Command tree: base commands with routed subcommands

use super::{FailurePolicy, HandlerResult, Runner};
use crate::binding::{BindMode, Context};
use crate::error::{RunError, RunResult};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::sync::Arc;
use tracing::debug;

/// Id of the catch-all positional argument added to routed subcommands
pub const ARGS: &str = "args";

/// A base command that is not run directly, only used to group subcommands
pub trait Cmd {
    /// The clap definition of this command
    fn command(&self) -> Command;
}

/// A runnable subcommand of a [`Cmd`]
pub trait SubCmd: Cmd + Send + Sync {
    /// Run the subcommand with its invocation context
    fn run(&self, ctx: &mut Context<'_>) -> HandlerResult;
}

struct Route {
    command: Command,
    runner: Runner,
}

/// A root command and the subcommands it dispatches to
pub struct CommandTree {
    root: Command,
    routes: Vec<Route>,
    mode: Option<BindMode>,
}

impl CommandTree {
    /// Start a tree from a base command
    pub fn new(root: impl Cmd) -> Self {
        Self::from_command(root.command())
    }

    /// Start a tree from a clap command
    pub fn from_command(root: Command) -> Self {
        Self {
            root,
            routes: Vec::new(),
            mode: None,
        }
    }

    /// Route a [`SubCmd`]
    pub fn subcommand<S: SubCmd + 'static>(self, sub: S) -> Self {
        let command = sub.command();
        let sub = Arc::new(sub);
        self.route(command, Runner::new().handler(move |ctx| sub.run(ctx)))
    }

    /// Route a clap command to a runner.
    ///
    /// A positional [`ARGS`] argument is added unless the command defines one.
    pub fn route(mut self, command: Command, runner: Runner) -> Self {
        self.routes.push(Route {
            command: with_positional_args(command),
            runner,
        });
        self
    }

    /// Override the annotation mode of every routed runner
    pub fn with_mode(mut self, mode: BindMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Names of routed subcommands, in registration order
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.command.get_name()).collect()
    }

    /// The assembled clap command
    pub fn build(&self) -> Command {
        self.routes.iter().fold(self.root.clone(), |root, route| {
            root.subcommand(route.command.clone())
        })
    }

    /// Parse `argv` and dispatch to the matched subcommand
    pub fn try_run_from<I, T>(&self, argv: I) -> RunResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let root = self.build();
        let matches = root.clone().try_get_matches_from(argv)?;
        self.dispatch(&root, &matches)
    }

    /// Parse the process arguments and dispatch, applying `policy` on failure
    pub fn run<P: FailurePolicy>(&self, policy: P) {
        self.run_from(std::env::args_os(), policy)
    }

    /// Parse `argv` and dispatch, applying `policy` on failure.
    ///
    /// Help, version and parse errors are reported and exit through clap.
    /// The policy receives the matched subcommand, or the root when no
    /// subcommand was given.
    pub fn run_from<I, T, P>(&self, argv: I, policy: P)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        P: FailurePolicy,
    {
        let root = self.build();
        let matches = match root.clone().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(e) => e.exit(),
        };

        if let Err(e) = self.dispatch(&root, &matches) {
            let command = matches
                .subcommand_name()
                .and_then(|name| root.find_subcommand(name))
                .unwrap_or(&root);
            policy.on_failure(command, &e);
        }
    }

    fn dispatch(&self, root: &Command, matches: &ArgMatches) -> RunResult<()> {
        let (name, sub_matches) = matches.subcommand().ok_or(RunError::MissingSubcommand)?;
        let route = self
            .routes
            .iter()
            .find(|r| r.command.get_name() == name)
            .ok_or_else(|| RunError::UnknownSubcommand(name.to_string()))?;

        // the built subcommand carries the full `root sub` usage line
        let command = root.find_subcommand(name).unwrap_or(&route.command);
        let args = positional_args(command, sub_matches);
        debug!(target: "kaa::runner", "Routing to {} with {} arg(s)", name, args.len());

        let mode = self.mode.unwrap_or(route.runner.mode());
        route.runner.dispatch_in(mode, command, sub_matches, args)
    }
}

/// Positional values of `matches`, as given on the command line.
///
/// Every positional `command` declares contributes, in index order, so
/// declared positionals come before the catch-all [`ARGS`] values.
pub fn positional_args(command: &Command, matches: &ArgMatches) -> Vec<String> {
    let mut positionals: Vec<&Arg> = command.get_positionals().collect();
    positionals.sort_by_key(|a| a.get_index().unwrap_or(usize::MAX));

    let mut args = Vec::new();
    for arg in positionals {
        let id = arg.get_id().as_str();
        match matches.try_get_raw(id) {
            Ok(Some(values)) => {
                args.extend(values.map(|v| v.to_string_lossy().into_owned()));
            }
            Ok(None) => {}
            Err(e) => {
                debug!(target: "kaa::runner", "Positional {} not readable from {}: {}", id, command.get_name(), e);
            }
        }
    }
    args
}

fn with_positional_args(command: Command) -> Command {
    if command.get_arguments().any(|a| a.get_id().as_str() == ARGS) {
        return command;
    }
    command.arg(
        Arg::new(ARGS)
            .num_args(1..)
            .action(ArgAction::Append)
            .allow_negative_numbers(true)
            .value_name("ARGS"),
    )
}
