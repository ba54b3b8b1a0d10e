pub mod cli;
pub mod config;
pub mod display;
pub mod logging;
pub mod plugins;
pub mod prompt;
pub mod state;
pub mod storage;
pub mod util;
