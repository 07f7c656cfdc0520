//! Test utilities: an in-memory flag store and shared fixtures

pub mod mocks;

pub use mocks::{base_command, payload_flags, MockFlags, Payload, StrictPayload};
