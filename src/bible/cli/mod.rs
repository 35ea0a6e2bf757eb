mod commands;
mod print;
mod repl;
mod setup;

pub use commands::run;
