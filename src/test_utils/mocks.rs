//! Mock flag store and target structures for testing

use crate::error::{FlagError, FlagResult};
use crate::flags::FlagSource;
use crate::{bind_fields, Bindable, Field};
use clap::{Arg, ArgAction, Command};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum MockValue {
    String(String),
    Int(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Bools(Vec<bool>),
}

/// In-memory flag store. Unregistered names report `FlagError::Unknown`.
#[derive(Debug, Clone, Default)]
pub struct MockFlags {
    values: HashMap<String, MockValue>,
}

impl MockFlags {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(mut self, name: &str, value: MockValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn string(self, name: &str, value: &str) -> Self {
        self.with(name, MockValue::String(value.to_string()))
    }

    pub fn int(self, name: &str, value: i64) -> Self {
        self.with(name, MockValue::Int(value))
    }

    pub fn boolean(self, name: &str, value: bool) -> Self {
        self.with(name, MockValue::Bool(value))
    }

    pub fn float32(self, name: &str, value: f32) -> Self {
        self.with(name, MockValue::F32(value))
    }

    pub fn float64(self, name: &str, value: f64) -> Self {
        self.with(name, MockValue::F64(value))
    }

    pub fn strings(self, name: &str, values: &[&str]) -> Self {
        self.with(
            name,
            MockValue::Strings(values.iter().map(|s| s.to_string()).collect()),
        )
    }

    pub fn ints(self, name: &str, values: &[i64]) -> Self {
        self.with(name, MockValue::Ints(values.to_vec()))
    }

    pub fn bools(self, name: &str, values: &[bool]) -> Self {
        self.with(name, MockValue::Bools(values.to_vec()))
    }

    fn lookup(&self, name: &str) -> FlagResult<&MockValue> {
        self.values
            .get(name)
            .ok_or_else(|| FlagError::Unknown(name.to_string()))
    }

    fn mismatch(name: &str, value: &MockValue) -> FlagError {
        FlagError::TypeMismatch {
            name: name.to_string(),
            detail: format!("{:?}", value),
        }
    }
}

impl FlagSource for MockFlags {
    fn get_string(&self, name: &str) -> FlagResult<String> {
        match self.lookup(name)? {
            MockValue::String(v) => Ok(v.clone()),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_int(&self, name: &str) -> FlagResult<i64> {
        match self.lookup(name)? {
            MockValue::Int(v) => Ok(*v),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_bool(&self, name: &str) -> FlagResult<bool> {
        match self.lookup(name)? {
            MockValue::Bool(v) => Ok(*v),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_f32(&self, name: &str) -> FlagResult<f32> {
        match self.lookup(name)? {
            MockValue::F32(v) => Ok(*v),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_f64(&self, name: &str) -> FlagResult<f64> {
        match self.lookup(name)? {
            MockValue::F64(v) => Ok(*v),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_string_slice(&self, name: &str) -> FlagResult<Vec<String>> {
        match self.lookup(name)? {
            MockValue::Strings(v) => Ok(v.clone()),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_int_slice(&self, name: &str) -> FlagResult<Vec<i64>> {
        match self.lookup(name)? {
            MockValue::Ints(v) => Ok(v.clone()),
            other => Err(Self::mismatch(name, other)),
        }
    }

    fn get_bool_slice(&self, name: &str) -> FlagResult<Vec<bool>> {
        match self.lookup(name)? {
            MockValue::Bools(v) => Ok(v.clone()),
            other => Err(Self::mismatch(name, other)),
        }
    }
}

/// Command whose flags match [`Payload`]
pub fn base_command() -> Command {
    Command::new("payload")
        .arg(Arg::new("env").long("env"))
        .arg(Arg::new("boolean").long("boolean").action(ArgAction::SetTrue))
        .arg(
            Arg::new("string_slice")
                .long("string_slice")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
}

/// `env=dev`, `boolean=true`, `string_slice=[1,2,3]`
pub fn payload_flags() -> MockFlags {
    MockFlags::new()
        .string("env", "dev")
        .boolean("boolean", true)
        .strings("string_slice", &["1", "2", "3"])
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub username: String,
    pub id: u32,
    pub height: Option<i32>,
    pub env: String,
    pub string_slice: Vec<String>,
    pub boolean: bool,
}

impl Bindable for Payload {
    fn fields(&mut self) -> Vec<Field<'_>> {
        bind_fields!(self {
            username => arg_tag("0"),
            id => arg_tag("1"),
            height => arg_tag("2,optional"),
            env => flag_tag("env"),
            string_slice => flag_tag("string_slice"),
            boolean => flag_tag("boolean"),
        })
    }
}

/// Same shape as [`Payload`] but `height` is required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrictPayload {
    pub username: String,
    pub id: u32,
    pub height: Option<i32>,
    pub env: String,
}

impl Bindable for StrictPayload {
    fn fields(&mut self) -> Vec<Field<'_>> {
        bind_fields!(self {
            username => arg(0),
            id => arg(1),
            height => arg(2),
            env => flag("env"),
        })
    }
}
