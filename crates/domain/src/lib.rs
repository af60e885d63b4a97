//! stub-dns domain layer: DNS wire codec and configuration types
pub mod config;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, ResponsePolicy};
pub use errors::WireError;
pub use wire::{compose, DomainName, Header, Opcode, Question, ResponseCode, HEADER_LEN};
