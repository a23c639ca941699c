//! relbot closes the `v<version> Bug Report` issue of a release once a
//! `release/<major>.<minor>.<patch>` branch opens its pull request.

pub mod closer;
pub mod error;
pub mod integrations;
pub mod release;
pub mod settings;

pub use error::{RelbotError, Result};
