//! Kembara catalog kernel library.
//!
//! In-memory record stores and the query logic behind the club site's
//! annual plan, photo gallery and activities pages. The `kembara` binary
//! is a command-line front end over the same views.

pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod gather;
pub mod models;
pub mod views;
