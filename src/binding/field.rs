//! Per-field binding descriptors and the annotation surface

use super::value::{FieldValue, Slot};
use crate::error::{BindError, BindResult};
use std::fmt;
use std::str::FromStr;

/// Where a positional field reads its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positional {
    /// Zero-based index into the positional arguments
    pub index: usize,
    /// Leave the field unchanged instead of failing when the argument is missing
    pub optional: bool,
}

impl Positional {
    /// A required positional argument
    pub fn required(index: usize) -> Self {
        Self {
            index,
            optional: false,
        }
    }

    /// An optional positional argument
    pub fn optional(index: usize) -> Self {
        Self {
            index,
            optional: true,
        }
    }
}

/// Parses `"<index>"` or `"<index>,optional"`.
///
/// The parameter after the comma is compared case-insensitively; any other
/// parameter leaves the argument required.
impl FromStr for Positional {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut parts = tag.split(',');
        let index = parts
            .next()
            .unwrap_or_default()
            .parse::<usize>()
            .map_err(|e| format!("bad index in {:?}: {}", tag, e))?;
        let optional = parts
            .next()
            .map(|param| param.eq_ignore_ascii_case("optional"))
            .unwrap_or(false);
        Ok(Self { index, optional })
    }
}

impl fmt::Display for Positional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{},optional", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// The resolved data source of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read from a positional argument
    Positional(Positional),
    /// Read from a named flag
    Flag {
        /// Flag name as registered with the command
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArgSpec {
    Valid(Positional),
    Malformed(String),
}

/// One bindable field of a target structure.
///
/// A field may carry both an argument and a flag descriptor; the argument
/// wins. A field with neither is skipped.
pub struct Field<'a> {
    pub(crate) name: &'a str,
    pub(crate) arg: Option<ArgSpec>,
    pub(crate) flag: Option<String>,
    pub(crate) slot: &'a mut dyn Slot,
}

impl<'a> Field<'a> {
    /// Wrap a field with no descriptor yet
    pub fn new<T: FieldValue>(name: &'a str, slot: &'a mut T) -> Self {
        Self {
            name,
            arg: None,
            flag: None,
            slot,
        }
    }

    /// Bind from a required positional argument
    pub fn arg(mut self, index: usize) -> Self {
        self.arg = Some(ArgSpec::Valid(Positional::required(index)));
        self
    }

    /// Bind from an optional positional argument
    pub fn optional_arg(mut self, index: usize) -> Self {
        self.arg = Some(ArgSpec::Valid(Positional::optional(index)));
        self
    }

    /// Bind from a named flag
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flag = Some(name.into());
        self
    }

    /// Attach a typed source
    pub fn source(self, source: Source) -> Self {
        match source {
            Source::Positional(pos) => {
                if pos.optional {
                    self.optional_arg(pos.index)
                } else {
                    self.arg(pos.index)
                }
            }
            Source::Flag { name } => self.flag(name),
        }
    }

    /// Attach a positional annotation in its text form (`"0"`, `"2,optional"`).
    ///
    /// Empty text means no annotation. Malformed text is kept and reported at
    /// bind time in strict mode, ignored otherwise.
    pub fn arg_tag(mut self, tag: &str) -> Self {
        if tag.is_empty() {
            return self;
        }
        self.arg = Some(match tag.parse() {
            Ok(pos) => ArgSpec::Valid(pos),
            Err(_) => ArgSpec::Malformed(tag.to_string()),
        });
        self
    }

    /// Like [`arg_tag`](Self::arg_tag) but rejects malformed text immediately
    pub fn try_arg_tag(self, tag: &str) -> BindResult<Self> {
        if !tag.is_empty() && tag.parse::<Positional>().is_err() {
            return Err(BindError::invalid_tag(self.name, tag));
        }
        Ok(self.arg_tag(tag))
    }

    /// Attach a flag annotation in its text form. Empty text means no annotation.
    pub fn flag_tag(self, tag: &str) -> Self {
        if tag.is_empty() {
            self
        } else {
            self.flag(tag)
        }
    }

    /// Field name used in diagnostics
    pub fn name(&self) -> &str {
        self.name
    }

    /// The source binding will use, after precedence and leniency rules
    pub fn resolved_source(&self) -> Option<Source> {
        match (&self.arg, &self.flag) {
            (Some(ArgSpec::Valid(pos)), _) => Some(Source::Positional(*pos)),
            (_, Some(name)) => Some(Source::Flag { name: name.clone() }),
            _ => None,
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("arg", &self.arg)
            .field("flag", &self.flag)
            .finish_non_exhaustive()
    }
}

/// A structure that can be populated by [`Context::bind`](super::Context::bind).
///
/// Return the participating fields in declaration order. Fields left out of
/// the list are never touched.
///
/// ```
/// use kaa::{bind_fields, Bindable, Field};
///
/// #[derive(Default)]
/// struct Deploy {
///     service: String,
///     replicas: Option<u32>,
///     env: String,
/// }
///
/// impl Bindable for Deploy {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         bind_fields!(self {
///             service => arg(0),
///             replicas => optional_arg(1),
///             env => flag("env"),
///         })
///     }
/// }
/// ```
pub trait Bindable {
    /// Fields taking part in binding, in declaration order
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A missing target binds nothing
impl<T: Bindable> Bindable for Option<T> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        match self {
            Some(target) => target.fields(),
            None => Vec::new(),
        }
    }
}

impl<T: Bindable + ?Sized> Bindable for Box<T> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// Build a field list from `field => descriptor(...)` pairs.
///
/// ```ignore
/// bind_fields!(self {
///     username => arg(0),
///     height => arg_tag("2,optional"),
///     env => flag("env"),
/// })
/// ```
#[macro_export]
macro_rules! bind_fields {
    ($target:ident { $($field:ident => $($method:ident($($param:expr),* $(,)?)).+),* $(,)? }) => {
        vec![
            $(
                $crate::Field::new(stringify!($field), &mut $target.$field)
                    $(.$method($($param),*))+
            ),*
        ]
    };
}
