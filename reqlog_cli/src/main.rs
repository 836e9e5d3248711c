#![forbid(unsafe_code)]
use reqlog_cli::{opts::Opt, CliError};
use structopt::StructOpt;

fn run_subcommand(opt: Opt) -> Result<(), CliError> {
    match opt {
        Opt::Run(opts) => reqlog_cli::run(&opts),
        Opt::Emit(opts) => reqlog_cli::emit(&opts),
    }
}

fn main() {
    let opt = Opt::from_args();
    reqlog_cli::init_logging(opt.verbose());
    if let Err(err) = run_subcommand(opt) {
        println!("{}", err);
        std::process::exit(1);
    }
}
