use clap::Parser;
use pathviz_crossterm::CrosstermDriver;
use pathviz_lib::{Args, Demo, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(&args.log_file)?;

    let mut demo = Demo::new(&args.demo_config())?;
    pathviz_lib::run(&mut demo, CrosstermDriver::new())?;
    Ok(())
}
