mod cli;
mod employee;
mod input;
mod plural;
mod report;
mod tenure;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Local system date, no timezone conversion.
    let today = chrono::Local::now().date_naive();

    let employee = input::collect_employee(today)?;
    let tenure = employee.tenure(today)?;

    if args.json {
        println!("{}", report::render_json(&employee, &tenure)?);
    } else {
        println!("{}", report::render(&employee, &tenure));
        input::wait_for_enter()?;
    }

    Ok(())
}
