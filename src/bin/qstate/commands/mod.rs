mod dist;
mod elements;
mod summary;

use dist::run_dist;
use elements::run_elements;
use summary::run_summary;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Dist(args) => run_dist(args, ctx),
        Command::Summary(args) => run_summary(args, ctx),
        Command::Elements(args) => run_elements(args, ctx),
    }
}
