//! Per-invocation binding context

use super::field::{ArgSpec, Bindable};
use crate::error::{BindError, BindResult};
use crate::flags::FlagSource;
use clap::Command;
use tracing::{debug, warn};

/// How binding treats malformed annotations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum BindMode {
    /// Ignore malformed annotations and leave the field unchanged
    #[default]
    Lenient,
    /// Fail the bind on a malformed annotation
    Strict,
}

/// The context for one run of a command.
///
/// Holds the positional arguments and the flag store the host resolved for
/// this invocation. Handlers share one context and call [`bind`](Self::bind)
/// against their own targets.
pub struct Context<'a> {
    command: &'a Command,
    args: Vec<String>,
    flags: &'a dyn FlagSource,
    mode: BindMode,
    error: Option<BindError>,
}

impl<'a> Context<'a> {
    /// Create a context for one invocation
    pub fn new(command: &'a Command, flags: &'a dyn FlagSource, args: Vec<String>) -> Self {
        Self {
            command,
            args,
            flags,
            mode: BindMode::default(),
            error: None,
        }
    }

    /// Set the annotation mode
    pub fn with_mode(mut self, mode: BindMode) -> Self {
        self.mode = mode;
        self
    }

    /// Positional arguments exactly as received
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The host command
    pub fn command(&self) -> &Command {
        self.command
    }

    /// The flag store for this invocation
    pub fn flags(&self) -> &dyn FlagSource {
        self.flags
    }

    /// Annotation mode in effect
    pub fn mode(&self) -> BindMode {
        self.mode
    }

    /// Rendered help text of the host command
    pub fn usage(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// The most recent bind failure, if any
    pub fn error(&self) -> Option<&BindError> {
        self.error.as_ref()
    }

    /// Populate `target` from the positional arguments and flags.
    ///
    /// Fields are visited in declaration order. A missing required argument
    /// stops the walk; fields already assigned keep their values. Unsupported
    /// types and flag lookup failures leave the field unchanged.
    pub fn bind<T: Bindable + ?Sized>(&mut self, target: &mut T) -> BindResult<()> {
        let result = self.bind_fields(target);
        if let Err(e) = &result {
            self.error = Some(e.clone());
        }
        result
    }

    fn bind_fields<T: Bindable + ?Sized>(&self, target: &mut T) -> BindResult<()> {
        for field in target.fields() {
            let name = field.name;

            match field.arg {
                Some(ArgSpec::Valid(pos)) => {
                    match self.args.get(pos.index) {
                        Some(raw) => {
                            if !field.slot.assign_arg(raw) {
                                debug!(target: "kaa::bind", "Field {} does not take positional values, skipping", name);
                            }
                        }
                        None if pos.optional => {
                            debug!(target: "kaa::bind", "Optional arg {} for {} not given", pos.index, name);
                        }
                        None => return Err(BindError::missing(name, pos.index)),
                    }
                    continue;
                }
                Some(ArgSpec::Malformed(tag)) => {
                    if self.mode == BindMode::Strict {
                        return Err(BindError::invalid_tag(name, tag));
                    }
                    warn!(target: "kaa::bind", "Ignoring malformed arg tag {:?} on {}", tag, name);
                }
                None => {}
            }

            if let Some(flag) = &field.flag {
                match field.slot.assign_flag(self.flags, flag) {
                    Ok(true) => {}
                    Ok(false) => {
                        debug!(target: "kaa::bind", "Field {} does not take flag values, skipping", name);
                    }
                    Err(e) => {
                        debug!(target: "kaa::bind", "Flag {} left {} unchanged: {}", flag, name, e);
                    }
                }
            }
        }

        Ok(())
    }
}
