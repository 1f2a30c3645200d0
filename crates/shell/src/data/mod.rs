//! Data formats supported in the CLI.

use std::path::Path;

pub mod npy;
mod record;
pub mod text;

pub use record::PairsRecord;

/// Output formats supported in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Npy array format.
    Npy,
    /// Tab-separated text.
    Tsv,
    /// Bitcode encoding of labels and condensed distances.
    Bin,
}

impl Format {
    /// Determines the format from the extension of the path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("npy") => Ok(Self::Npy),
            Some("tsv") => Ok(Self::Tsv),
            Some("bin") => Ok(Self::Bin),
            Some(ext) => Err(format!("Unknown data format {ext} for path: {}", path.display())),
            None => Err(format!(
                "Could not determine data format without extension for path: {}",
                path.display()
            )),
        }
    }
}
