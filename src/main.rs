use anyhow::Result;
use human_panic::setup_panic;

use false_color::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches()?;

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    plan_from_arguments(&matches)?;

    check_for_stdout_stream();

    Ok(())
}
