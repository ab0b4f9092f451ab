use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process;

use log::error;
use structopt::StructOpt;

use mcheck::cliopt::{CliOpt, Encoding};
use mcheck::grabber::DumpGrabber;
use mcheck::output::{Encoder, HumanReadableEncoder, JsonEncoder, LineWriter, Output};
use mcheck::runner::Runner;
use mcheck::schema::SchemaRegistry;
use mcheck::suite::{Cluster, Suite};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if opt.verbose { "debug" } else { "info" },
    ))
    .init();

    let registry = SchemaRegistry::from_path(&opt.schemas)?;

    let input: Box<dyn Read> = match &opt.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let encoder: Box<dyn Encoder> = match opt.encode {
        Encoding::HumanReadable => Box::new(HumanReadableEncoder::new()),
        Encoding::Json => Box::new(JsonEncoder::new()),
    };

    let mut runner = Runner::new(
        opt.component,
        Box::new(DumpGrabber::new(input, &registry, opt.component)),
        Suite::new(&registry, Cluster::new(opt.nodes.clone()))
            .with_missing_labels(opt.missing_labels),
        Output::new(Box::new(LineWriter::new(io::stdout())), encoder),
    );

    if runner.run()?.is_failed() {
        error!("{} metrics check failed", opt.component);
        process::exit(1);
    }

    Ok(())
}
