// Shared utilities

pub mod constants;
pub mod format;
pub mod jwt;
pub mod storage;

pub use constants::*;
pub use format::{format_date_time, now_secs};
pub use storage::{default_store, CredentialStore, LocalCredentialStore, MemoryCredentialStore};
