// crates/rm_tags/src/main.rs

use std::env;
use std::process;

use anyhow::Result;

use rm_tags::config::RunConfig;
use rm_tags::run;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let code = run(&args, &RunConfig::default())?;
    process::exit(code);
}
