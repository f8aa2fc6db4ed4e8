// main.rs

mod builtins;
mod dispatch;
mod error;
mod history;
mod parser;
mod reader;
mod repl;
mod signal;
mod spawn;
mod util;

fn main() -> anyhow::Result<()> {
    repl::run()
}
