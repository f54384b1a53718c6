pub mod cli;
pub mod controller;
pub mod logging;
pub mod prompt;
pub mod publisher;
