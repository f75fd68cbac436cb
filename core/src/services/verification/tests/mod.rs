
pub(crate) use mocks::{InterleavingStore, MockMailer, MockTtlStore, ScriptedGenerator};
