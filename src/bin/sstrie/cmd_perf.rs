use rand::prelude::random;

use sstrie::{err_at, util::files, Error, Result};

use crate::{perf, SubCommand};

/// Options for `perf` subcommand.
#[derive(Clone)]
pub struct Opt {
    pub seed: u64,
    pub profile: String,
    pub module: String,
}

impl From<SubCommand> for Opt {
    fn from(subcmd: SubCommand) -> Opt {
        match subcmd {
            SubCommand::Perf {
                seed,
                profile,
                module,
            } => Opt {
                seed,
                profile,
                module,
            },
            _ => unreachable!(),
        }
    }
}

pub fn perf(mut opts: Opt) -> Result<()> {
    if opts.seed == 0 {
        opts.seed = random();
    }

    let profile: perf::Profile = match opts.profile.as_str() {
        "" => perf::Profile::default(),
        loc => files::load_toml(loc)?,
    };

    println!("sstrie: perf seed:{} module:{}", opts.seed, opts.module);

    let modules: Vec<&str> = match opts.module.as_str() {
        "all" => vec!["scan", "trie", "patricia", "ukkonen"],
        module => vec![module],
    };

    let mut reports = vec![];
    for module in modules.into_iter() {
        let report = match module {
            "scan" | "list" | "linear" => perf::perf_scan(opts.seed, &profile)?,
            "trie" | "simple" => perf::perf_trie(opts.seed, &profile)?,
            "patricia" => perf::perf_patricia(opts.seed, &profile)?,
            "ukkonen" => perf::perf_ukkonen(opts.seed, &profile)?,
            module => err_at!(InvalidInput, msg: "invalid module {}", module)?,
        };
        reports.push(report);
    }

    perf::make_table(&reports).printstd();

    Ok(())
}
