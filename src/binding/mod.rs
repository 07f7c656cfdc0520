//! Declarative binding of command-line input into structures
//!
//! A target type lists its fields with [`Bindable::fields`], each tagged with
//! where its value comes from. [`Context::bind`] walks that list once per call:
//!
//! - a positional descriptor reads `args[index]` and coerces the text into the
//!   field's type; a missing required argument fails the bind
//! - a flag descriptor asks the [`FlagSource`](crate::FlagSource) for a value
//!   of the field's type; any lookup failure leaves the field unchanged
//! - a field with both uses the positional descriptor
//!
//! ## Example
//!
//! ```rust
//! use clap::{Arg, Command};
//! use kaa::{bind_fields, Bindable, Context, Field};
//!
//! #[derive(Default)]
//! struct Greet {
//!     name: String,
//!     times: Option<u8>,
//!     greeting: String,
//! }
//!
//! impl Bindable for Greet {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         bind_fields!(self {
//!             name => arg(0),
//!             times => arg_tag("1,optional"),
//!             greeting => flag("greeting"),
//!         })
//!     }
//! }
//!
//! let cmd = Command::new("greet").arg(Arg::new("greeting").long("greeting"));
//! let matches = cmd.clone().try_get_matches_from(["greet", "--greeting", "hi"]).unwrap();
//! let mut ctx = Context::new(&cmd, &matches, vec!["ada".to_string()]);
//!
//! let mut greet = Greet::default();
//! ctx.bind(&mut greet).unwrap();
//! assert_eq!(greet.name, "ada");
//! assert_eq!(greet.times, None);
//! assert_eq!(greet.greeting, "hi");
//! ```

pub mod context;
pub mod field;
pub mod value;

pub use context::{BindMode, Context};
pub use field::{Bindable, Field, Positional, Source};
pub use value::{parse_bool, FieldValue, SliceElement, Slot};
