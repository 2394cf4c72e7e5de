use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::ConfigError;
use crate::input::{LineSource, Tokenizer};

/// An opened startup file, read line by line like interactive input.
pub struct StartupScript {
    path: PathBuf,
    source: LineSource<BufReader<File>>,
}

impl StartupScript {
    /// `Ok(None)` when the file does not exist.
    pub fn open(path: &Path, tokenizer: Tokenizer) -> Result<Option<Self>, ConfigError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(StartupScript {
            path: path.to_path_buf(),
            source: LineSource::new(BufReader::new(file), tokenizer),
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&mut self) -> &mut LineSource<BufReader<File>> {
        &mut self.source
    }
}
