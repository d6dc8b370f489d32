use lazy_static::lazy_static;
use prettytable::{cell, row};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Deserialize;

use std::{sync::Arc, thread, time};

use sstrie::{
    db::{self, Footprint, ToJson},
    err_at,
    patricia::PatriciaSuffixTrie,
    scan::LinearScan,
    trie::SuffixTrie,
    ukkonen::SuffixTree,
    Config, Error, Result,
};

const SYLLABLES: [&str; 24] = [
    "ka", "ro", "mi", "tan", "se", "lo", "vur", "qi", "an", "ban", "de", "na", "ix", "ul",
    "pra", "tap", "zo", "he", "gre", "ot", "wy", "fen", "ish", "mo",
];

lazy_static! {
    // nonsense vocabulary, syllables combined in pairs and triples.
    static ref VOCABULARY: Vec<String> = {
        let mut words = vec![];
        for a in SYLLABLES.iter() {
            for b in SYLLABLES.iter() {
                words.push(format!("{}{}", a, b));
                for c in SYLLABLES.iter().step_by(5) {
                    words.push(format!("{}{}{}", a, b, c));
                }
            }
        }
        words
    };
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    words: usize,
    loads: usize,
    queries: usize,
    query_len: usize,
    readers: usize,
    min_query_len: usize,
    min_suffix_len: usize,
    validate: bool,
}

impl Default for Profile {
    fn default() -> Profile {
        Profile {
            words: 4,
            loads: 10_000,
            queries: 10_000,
            query_len: 4,
            readers: 0,
            min_query_len: 0,
            min_suffix_len: 3,
            validate: true,
        }
    }
}

impl Profile {
    fn to_config(&self, name: &str) -> Config {
        let mut config = Config::new(name);
        config
            .set_min_query_len(self.min_query_len)
            .set_min_suffix_len(self.min_suffix_len);
        config
    }

    fn to_readers(&self) -> usize {
        match self.readers {
            0 => num_cpus::get(),
            n => n,
        }
    }

    fn gen_key(&self, rng: &mut SmallRng) -> String {
        let n = 1 + (rng.gen::<usize>() % self.words.max(1));
        let words: Vec<&str> = (0..n)
            .map(|_| VOCABULARY[rng.gen::<usize>() % VOCABULARY.len()].as_str())
            .collect();
        words.join(" ")
    }

    // sub-string of a random word, queries shall mostly hit.
    fn gen_query(&self, rng: &mut SmallRng) -> String {
        let word: Vec<char> = VOCABULARY[rng.gen::<usize>() % VOCABULARY.len()]
            .chars()
            .collect();
        let n = self.query_len.min(word.len());
        let start = rng.gen::<usize>() % (word.len() - n + 1);
        word[start..(start + n)].iter().collect()
    }
}

/// Measurements from a single perf run.
pub struct Report {
    module: String,
    loads: usize,
    load_elapsed: time::Duration,
    queries: usize,
    query_elapsed: time::Duration,
    matches: usize,
    footprint: Option<isize>,
}

pub fn perf_scan(seed: u64, p: &Profile) -> Result<Report> {
    let mut index = LinearScan::<u64>::new();
    let report = load_and_query("scan", seed, p, &mut index);
    Ok(report)
}

pub fn perf_trie(seed: u64, p: &Profile) -> Result<Report> {
    let mut index = SuffixTrie::<u64>::from_config(&p.to_config("sstrie-trie-perf"));
    let report = load_and_query("trie", seed, p, &mut index);
    Ok(report)
}

pub fn perf_patricia(seed: u64, p: &Profile) -> Result<Report> {
    let config = p.to_config("sstrie-patricia-perf");
    let mut index = PatriciaSuffixTrie::<u64>::from_config(&config);
    let report = load_and_query("patricia", seed, p, &mut index);
    Ok(report)
}

pub fn perf_ukkonen(seed: u64, p: &Profile) -> Result<Report> {
    let mut index = SuffixTree::<u64>::from_config(&p.to_config("sstrie-ukkonen-perf"));
    let mut report = load_and_query("ukkonen", seed, p, &mut index);
    report.footprint = Some(index.footprint()?);

    if p.validate {
        print!("sstrie: validating {} items in ukkonen ... ", index.len());
        let stats = index.validate()?;
        println!("ok");
        println!("sstrie: stats {}", stats.to_json());
    }

    let index = Arc::new(index);
    let readers = p.to_readers();

    let start = time::Instant::now();
    let mut handles = vec![];
    for j in 0..readers {
        let (p, index) = (p.clone(), Arc::clone(&index));
        let seed = seed + ((j as u64) * 100);
        handles.push(thread::spawn(move || reader(j, seed, p, index)));
    }

    let mut matches = 0;
    for (j, handle) in handles.into_iter().enumerate() {
        matches += match handle.join() {
            Ok(n) => n,
            Err(_) => err_at!(ThreadFail, msg: "reader {} panicked", j)?,
        };
    }
    println!(
        "sstrie: {} readers, {} queries each, {} matches in {:?}",
        readers,
        p.queries,
        matches,
        start.elapsed()
    );

    Ok(report)
}

fn load_and_query<I>(module: &str, seed: u64, p: &Profile, index: &mut I) -> Report
where
    I: db::Index<u64>,
{
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = time::Instant::now();
    for i in 0..p.loads {
        index.add(&p.gen_key(&mut rng), i as u64);
    }
    let load_elapsed = start.elapsed();
    println!("sstrie: {} loaded {} items in {:?}", module, p.loads, load_elapsed);

    let start = time::Instant::now();
    let mut matches = 0;
    for _i in 0..p.queries {
        matches += index.retrieve(&p.gen_query(&mut rng)).count();
    }
    let query_elapsed = start.elapsed();
    println!("sstrie: {} {} queries took {:?}", module, p.queries, query_elapsed);

    Report {
        module: module.to_string(),
        loads: p.loads,
        load_elapsed,
        queries: p.queries,
        query_elapsed,
        matches,
        footprint: None,
    }
}

fn reader(j: usize, seed: u64, p: Profile, index: Arc<SuffixTree<u64>>) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = time::Instant::now();
    let mut matches = 0;
    for _i in 0..p.queries {
        matches += index.retrieve(&p.gen_query(&mut rng)).count();
    }
    println!("sstrie: reader-{} {} queries took {:?}", j, p.queries, start.elapsed());

    matches
}

pub fn make_table(reports: &[Report]) -> prettytable::Table {
    let mut table = prettytable::Table::new();
    table.set_titles(row![Fy => "Module", "Loads", "Load", "Queries", "Query", "Matches", "Footprint"]);

    for r in reports.iter() {
        let footprint = r
            .footprint
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            r.module,
            r.loads,
            format!("{:?}", r.load_elapsed),
            r.queries,
            format!("{:?}", r.query_elapsed),
            r.matches,
            footprint
        ]);
    }

    table.set_format(*prettytable::format::consts::FORMAT_CLEAN);
    table
}
