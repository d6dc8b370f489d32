use serde::de::DeserializeOwned;

use std::{ffi, fs, path};

use crate::{err_at, Error, Result};

/// Load toml file and parse it into type `T`.
pub fn load_toml<P, T>(loc: P) -> Result<T>
where
    P: AsRef<path::Path>,
    T: DeserializeOwned,
{
    let loc = loc.as_ref();
    let text = {
        let data = err_at!(IOError, fs::read(loc), "loading {:?}", loc)?;
        err_at!(FailConvert, String::from_utf8(data), "utf8 {:?}", loc)?
    };
    let value = err_at!(FailConvert, toml::from_str(&text), "toml {:?}", loc)?;

    log::debug!(target: "sstrie", "loaded config from {:?}", loc);

    Ok(value)
}

/// Locate a configuration file. If `loc` is supplied, it must point to an
/// existing file. Otherwise each of `names` is looked up, first in the current
/// working directory and then in the user's home directory.
pub fn find_config(
    loc: Option<ffi::OsString>,
    names: &[&str],
) -> Result<Option<path::PathBuf>> {
    match loc {
        Some(loc) => {
            let loc = path::PathBuf::from(loc);
            if loc.is_file() {
                Ok(Some(loc))
            } else {
                err_at!(InvalidFile, msg: "config {:?} not a file", loc)
            }
        }
        None => {
            let mut dirs = vec![];
            if let Ok(cwd) = std::env::current_dir() {
                dirs.push(cwd);
            }
            if let Some(home) = dirs::home_dir() {
                dirs.push(home);
            }

            for dir in dirs.into_iter() {
                for name in names.iter() {
                    let loc = dir.join(name);
                    if loc.is_file() {
                        return Ok(Some(loc));
                    }
                }
            }

            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
