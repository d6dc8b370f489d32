use prettytable::{cell, row};

use std::{collections::BTreeSet, ffi, fs, time};

use sstrie::{db::ToJson, err_at, ukkonen::SuffixTree, Config, Error, Result};

use crate::SubCommand;

/// Options for `query` subcommand.
#[derive(Clone)]
pub struct Opt {
    pub config: Option<ffi::OsString>,
    pub validate: bool,
    pub file: ffi::OsString,
    pub queries: Vec<String>,
}

impl From<SubCommand> for Opt {
    fn from(subcmd: SubCommand) -> Opt {
        match subcmd {
            SubCommand::Query {
                config,
                validate,
                file,
                queries,
            } => Opt {
                config,
                validate,
                file,
                queries,
            },
            _ => unreachable!(),
        }
    }
}

pub fn handle(opts: Opt) -> Result<()> {
    let config = Config::find(opts.config.clone())?;
    let text = err_at!(IOError, fs::read_to_string(&opts.file), "{:?}", opts.file)?;
    let lines: Vec<&str> = text.lines().collect();

    let start = time::Instant::now();
    let mut index = SuffixTree::<usize>::from_config(&config);
    for (lineno, line) in lines.iter().enumerate() {
        index.add(line, lineno);
    }
    println!(
        "sstrie: indexed {} lines from {:?} in {:?}",
        lines.len(),
        opts.file,
        start.elapsed()
    );

    if opts.validate {
        let stats = index.validate()?;
        println!("sstrie: stats {}", stats.to_json());
    }

    let mut table = prettytable::Table::new();
    table.set_titles(row![Fy => "Query", "Line", "Text"]);
    for query in opts.queries.iter() {
        let linenos: BTreeSet<usize> = index.retrieve(query).cloned().collect();
        if linenos.is_empty() {
            table.add_row(row![query, "-", "-"]);
        }
        for lineno in linenos.into_iter() {
            let line = lines.get(lineno).copied().unwrap_or_default();
            table.add_row(row![query, lineno + 1, line]);
        }
    }
    table.set_format(*prettytable::format::consts::FORMAT_CLEAN);
    table.printstd();

    Ok(())
}
