//! Coercion of raw arguments and flag values into field types

use crate::error::FlagResult;
use crate::flags::FlagSource;

/// A type that a bound field may hold.
///
/// Both sources default to "unsupported", which leaves the field unchanged.
/// Implement only the source a type can actually be read from.
pub trait FieldValue: Sized {
    /// Coerce a positional argument. `None` means the type is not supported.
    fn from_arg(raw: &str) -> Option<Self> {
        let _ = raw;
        None
    }

    /// Read a flag. `Ok(None)` means the type is not supported.
    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        let _ = (flags, name);
        Ok(None)
    }
}

/// Element types of sequence-valued flags
pub trait SliceElement: Sized {
    /// Read a sequence flag. `Ok(None)` means the element type is not supported.
    fn from_slice_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Vec<Self>>> {
        let _ = (flags, name);
        Ok(None)
    }
}

/// Parse a boolean token the way command lines spell them.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl FieldValue for String {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        flags.get_string(name).map(Some)
    }
}

impl FieldValue for bool {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(parse_bool(raw).unwrap_or(false))
    }

    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        flags.get_bool(name).map(Some)
    }
}

// Decimal parse into the exact width; anything unparseable binds zero.
// Out-of-range values bind zero too rather than wrapping ("300" as u8 is 0).
macro_rules! integer_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn from_arg(raw: &str) -> Option<Self> {
                    Some(raw.parse().unwrap_or(0))
                }
            }
        )*
    };
}

integer_arg!(i8, i16, i32, isize, i128, u8, u16, u32, u64, usize, u128);

impl FieldValue for i64 {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(raw.parse().unwrap_or(0))
    }

    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        flags.get_int(name).map(Some)
    }
}

impl FieldValue for f32 {
    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        flags.get_f32(name).map(Some)
    }
}

impl FieldValue for f64 {
    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        flags.get_f64(name).map(Some)
    }
}

impl<T: SliceElement> FieldValue for Vec<T> {
    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        T::from_slice_flag(flags, name)
    }
}

impl SliceElement for String {
    fn from_slice_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Vec<Self>>> {
        flags.get_string_slice(name).map(Some)
    }
}

impl SliceElement for i64 {
    fn from_slice_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Vec<Self>>> {
        flags.get_int_slice(name).map(Some)
    }
}

impl SliceElement for bool {
    fn from_slice_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Vec<Self>>> {
        flags.get_bool_slice(name).map(Some)
    }
}

macro_rules! unsupported_element {
    ($($ty:ty),* $(,)?) => {
        $( impl SliceElement for $ty {} )*
    };
}

unsupported_element!(i8, i16, i32, isize, i128, u8, u16, u32, u64, usize, u128, f32, f64);

impl<T: FieldValue> FieldValue for Option<T> {
    fn from_arg(raw: &str) -> Option<Self> {
        T::from_arg(raw).map(Some)
    }

    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        Ok(T::from_flag(flags, name)?.map(Some))
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn from_arg(raw: &str) -> Option<Self> {
        T::from_arg(raw).map(Box::new)
    }

    fn from_flag(flags: &dyn FlagSource, name: &str) -> FlagResult<Option<Self>> {
        Ok(T::from_flag(flags, name)?.map(Box::new))
    }
}

/// Type-erased, writable view of a field.
///
/// Every [`FieldValue`] is a slot; [`Field`](super::Field) stores one as
/// `&mut dyn Slot` so a single structure can mix field types.
pub trait Slot {
    /// Coerce and assign a positional argument. Returns whether a value was written.
    fn assign_arg(&mut self, raw: &str) -> bool;

    /// Read and assign a flag. Returns whether a value was written.
    fn assign_flag(&mut self, flags: &dyn FlagSource, name: &str) -> FlagResult<bool>;
}

impl<T: FieldValue> Slot for T {
    fn assign_arg(&mut self, raw: &str) -> bool {
        match T::from_arg(raw) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }

    fn assign_flag(&mut self, flags: &dyn FlagSource, name: &str) -> FlagResult<bool> {
        match T::from_flag(flags, name)? {
            Some(value) => {
                *self = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
