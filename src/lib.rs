pub mod aggregate;
pub mod args;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod index;
pub mod logging;
pub mod parser;
pub mod replay;
pub mod session;
pub mod ui;
