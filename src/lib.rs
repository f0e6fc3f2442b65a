//! popviz - country population viewer
//!
//! Loads the restcountries dataset, aggregates population by continent, and
//! shows it as a bar chart filtered by a dual-handle range selector, with
//! drill-down into the countries of a continent.

pub mod app;
pub mod config;
pub mod data;
pub mod message;
pub mod script;

pub use app::{PopvizApp, View};
pub use config::{AppConfig, ConfigError, LogLevel};
pub use data::{Country, DataError, DataSource, Series};
pub use message::Message;
pub use script::{ScriptError, ScriptEvent, load_script, parse_script, run_script};
