//! Handler composition for command invocations
//!
//! A [`Runner`] is an ordered list of handlers that share one [`Context`] per
//! invocation. Dispatch is a plain function returning [`RunResult`]; deciding
//! what a failure means for the process is left to a [`FailurePolicy`] at the
//! entry point.
//!
//! ```rust,no_run
//! use kaa::{handle, ExitWithUsage};
//!
//! let runner = handle![
//!     |ctx| {
//!         anyhow::ensure!(!ctx.args().is_empty(), "expected a name");
//!         Ok(())
//!     },
//!     |ctx| {
//!         println!("hello {}", ctx.args()[0]);
//!         Ok(())
//!     },
//! ];
//! let callback = runner.callback(ExitWithUsage::default());
//! ```

pub mod command;

use crate::binding::{BindMode, Context};
use crate::error::{RunError, RunResult};
use crate::flags::FlagSource;
use clap::{ArgMatches, Command};
use tracing::{debug, error};

pub use command::{Cmd, CommandTree, SubCmd, ARGS};

/// Result type handlers return
pub type HandlerResult = anyhow::Result<()>;

/// A boxed handler
pub type Handler = Box<dyn Fn(&mut Context<'_>) -> HandlerResult + Send + Sync>;

/// Host callback produced by [`Runner::callback`]
pub type Callback = Box<dyn Fn(&Command, &ArgMatches, Vec<String>) + Send + Sync>;

/// Box a closure as a [`Handler`]
pub fn boxed<F>(handler: F) -> Handler
where
    F: Fn(&mut Context<'_>) -> HandlerResult + Send + Sync + 'static,
{
    Box::new(handler)
}

/// Ordered handlers sharing one context per invocation
#[derive(Default)]
pub struct Runner {
    handlers: Vec<Handler>,
    mode: BindMode,
}

impl Runner {
    /// Create an empty runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner from already boxed handlers
    pub fn from_handlers(handlers: Vec<Handler>) -> Self {
        Self {
            handlers,
            mode: BindMode::default(),
        }
    }

    /// Append a handler
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.handlers.push(boxed(handler));
        self
    }

    /// Annotation mode for contexts this runner creates
    pub fn with_mode(mut self, mode: BindMode) -> Self {
        self.mode = mode;
        self
    }

    /// Annotation mode in effect
    pub fn mode(&self) -> BindMode {
        self.mode
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the runner has no handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler in order against one fresh context.
    ///
    /// Stops at the first failing handler and reports its position.
    pub fn dispatch(
        &self,
        command: &Command,
        flags: &dyn FlagSource,
        args: Vec<String>,
    ) -> RunResult<()> {
        self.dispatch_in(self.mode, command, flags, args)
    }

    pub(crate) fn dispatch_in(
        &self,
        mode: BindMode,
        command: &Command,
        flags: &dyn FlagSource,
        args: Vec<String>,
    ) -> RunResult<()> {
        debug!(
            target: "kaa::runner",
            "Dispatching {} handler(s) for {} with {} arg(s)",
            self.handlers.len(),
            command.get_name(),
            args.len()
        );
        let mut ctx = Context::new(command, flags, args).with_mode(mode);

        for (index, handler) in self.handlers.iter().enumerate() {
            if let Err(source) = handler(&mut ctx) {
                debug!(target: "kaa::runner", "Handler {} failed, skipping the rest", index);
                return Err(RunError::Handler { index, source });
            }
        }

        Ok(())
    }

    /// Turn the runner into a host callback that applies `policy` on failure
    pub fn callback<P>(self, policy: P) -> Callback
    where
        P: FailurePolicy + Send + Sync + 'static,
    {
        Box::new(move |command: &Command, matches: &ArgMatches, args: Vec<String>| {
            if let Err(e) = self.dispatch(command, matches, args) {
                policy.on_failure(command, &e);
            }
        })
    }
}

/// Compose handlers into a [`Runner`].
///
/// Equivalent to [`handle!`](crate::handle) for handlers already boxed.
pub fn handle<I>(handlers: I) -> Runner
where
    I: IntoIterator<Item = Handler>,
{
    Runner::from_handlers(handlers.into_iter().collect())
}

/// Compose closures into a [`Runner`]
#[macro_export]
macro_rules! handle {
    ($($handler:expr),* $(,)?) => {
        $crate::runner::Runner::from_handlers(vec![$($crate::runner::boxed($handler)),*])
    };
}

/// What to do when dispatch fails at the process boundary
pub trait FailurePolicy {
    /// Called with the command whose handlers failed
    fn on_failure(&self, command: &Command, error: &RunError);
}

impl<F> FailurePolicy for F
where
    F: Fn(&Command, &RunError),
{
    fn on_failure(&self, command: &Command, error: &RunError) {
        self(command, error)
    }
}

/// Print the command's usage to stderr and exit the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitWithUsage {
    /// Process exit status
    pub code: i32,
    /// Print usage before exiting
    pub print_usage: bool,
}

impl ExitWithUsage {
    /// Exit with a specific status
    pub fn with_code(code: i32) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    /// Build from loaded runner settings
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::RunnerConfig) -> Self {
        Self {
            code: config.exit_code,
            print_usage: config.print_usage,
        }
    }
}

impl Default for ExitWithUsage {
    fn default() -> Self {
        Self {
            code: 1,
            print_usage: true,
        }
    }
}

impl FailurePolicy for ExitWithUsage {
    fn on_failure(&self, command: &Command, err: &RunError) {
        error!(target: "kaa::runner", "{}: {}", command.get_name(), err);
        if self.print_usage {
            eprintln!("{}", command.clone().render_help());
        }
        std::process::exit(self.code);
    }
}
