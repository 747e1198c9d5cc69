mod commands;
mod demo;
mod print;
mod setup;

pub use commands::run;
