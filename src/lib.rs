//! Kaa - declarative binding of command-line input into plain structs
//!
//! Kaa sits between a `clap` command and the handler functions a command
//! author writes:
//!
//! - **`binding`** - per-invocation [`Context`] that populates structures from
//!   positional arguments and flags, driven by per-field descriptors
//! - **`flags`** - the [`FlagSource`] trait over the host's typed flag store
//! - **`runner`** - composition of handlers into a [`Runner`], a
//!   [`CommandTree`] for subcommand dispatch, and the [`FailurePolicy`]
//!   applied at the process entry point
//! - **`config`** - runner settings loaded from TOML (enabled with the
//!   `config` feature, on by default)
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::{Arg, Command};
//! use kaa::{bind_fields, Bindable, Cmd, CommandTree, Context, ExitWithUsage, Field, SubCmd};
//!
//! #[derive(Default)]
//! struct Payload {
//!     username: String,
//!     id: u32,
//!     height: Option<i32>,
//!     env: String,
//! }
//!
//! impl Bindable for Payload {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         bind_fields!(self {
//!             username => arg_tag("0"),
//!             id => arg_tag("1"),
//!             height => arg_tag("2,optional"),
//!             env => flag_tag("env"),
//!         })
//!     }
//! }
//!
//! struct Root;
//!
//! impl Cmd for Root {
//!     fn command(&self) -> Command {
//!         Command::new("users")
//!     }
//! }
//!
//! struct Add;
//!
//! impl Cmd for Add {
//!     fn command(&self) -> Command {
//!         Command::new("add").arg(Arg::new("env").long("env"))
//!     }
//! }
//!
//! impl SubCmd for Add {
//!     fn run(&self, ctx: &mut Context<'_>) -> anyhow::Result<()> {
//!         let mut payload = Payload::default();
//!         ctx.bind(&mut payload)?;
//!         println!("adding {} ({}) to {}", payload.username, payload.id, payload.env);
//!         Ok(())
//!     }
//! }
//!
//! fn main() {
//!     CommandTree::new(Root)
//!         .subcommand(Add)
//!         .run(ExitWithUsage::default());
//! }
//! ```

#![warn(missing_docs)]

/// Error types
pub mod error;

/// Typed flag store access
pub mod flags;

/// Binding context and field descriptors
pub mod binding;

/// Handler composition and dispatch
pub mod runner;

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

#[cfg(test)]
mod test_utils;

pub use binding::{
    parse_bool, BindMode, Bindable, Context, Field, FieldValue, Positional, SliceElement, Slot,
    Source,
};
pub use error::{BindError, BindResult, FlagError, FlagResult, RunError, RunResult};
pub use flags::FlagSource;
pub use runner::command::positional_args;
pub use runner::{
    boxed, handle, Callback, Cmd, CommandTree, ExitWithUsage, FailurePolicy, Handler,
    HandlerResult, Runner, SubCmd, ARGS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        bind_fields, handle, BindError, Bindable, Cmd, CommandTree, Context, ExitWithUsage,
        FailurePolicy, Field, FlagSource, Runner, SubCmd,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{ConfigurationLoader, RunnerConfig};
}
