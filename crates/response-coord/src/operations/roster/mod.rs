//! CSV ingestion of resource rosters. Upstream systems hand the registry its
//! inventory through `registerResources`-style bulk loads; this module turns
//! an exported roster file into validated [`Resource`] records for exactly
//! that call.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::operations::resources::Resource;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster csv data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster record {record}: resource id is blank")]
    BlankId { record: usize },
    #[error("roster record {record}: unknown resource status '{value}'")]
    UnknownStatus { record: usize, value: String },
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Resource>, RosterImportError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|source| RosterImportError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Resource>, RosterImportError> {
        parser::parse_roster(reader)
    }
}
