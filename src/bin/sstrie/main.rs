use structopt::StructOpt;

use std::ffi;

mod cmd_perf;
mod cmd_query;
mod perf;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Options for cmd
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(subcommand)]
    subcmd: SubCommand,
}

#[derive(Clone, StructOpt)]
pub enum SubCommand {
    /// Measure load and lookup performance of index types.
    Perf {
        #[structopt(long = "seed", default_value = "0")]
        seed: u64,

        #[structopt(long = "profile", default_value = "")]
        profile: String,

        #[structopt(short = "m", long = "module", default_value = "ukkonen")]
        module: String,
    },
    /// Index every line in a text file and lookup sub-strings.
    Query {
        #[structopt(long = "config")]
        config: Option<ffi::OsString>,

        #[structopt(long = "validate")]
        validate: bool,

        file: ffi::OsString,

        queries: Vec<String>,
    },
}

fn main() {
    let opts = Opt::from_iter(std::env::args_os());

    let res = match opts.subcmd.clone() {
        c @ SubCommand::Perf { .. } => cmd_perf::perf(cmd_perf::Opt::from(c)),
        c @ SubCommand::Query { .. } => cmd_query::handle(cmd_query::Opt::from(c)),
    };

    res.map_err(|e| println!("Error: {}", e)).ok();
}
