//! CSV-file-backed [`SeriesStore`].
//!
//! Persists one `<SYMBOL>.csv` per tracked asset under a base directory,
//! with a header row and one bar per line. Reads normalize rows through
//! [`Series::from_bars`], so a hand-edited or out-of-order file still yields
//! a valid series.
#![warn(missing_docs)]

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use marea_core::{Bar, MareaError, Series, SeriesStore, Symbol};

/// Stores each symbol's series as `<dir>/<SYMBOL>.csv`.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Create a store rooted at `dir`.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the CSV file backing `symbol`.
    ///
    /// Path separators in the symbol (e.g. `BRK/B`) are replaced so the file
    /// cannot escape the store directory; everything else (`^`, `=`, `.`) is
    /// kept verbatim, matching filenames like `GC=F.csv` and `DX-Y.NYB.csv`.
    #[must_use]
    pub fn path_for(&self, symbol: &Symbol) -> PathBuf {
        let name: String = symbol
            .as_str()
            .chars()
            .map(|c| if std::path::is_separator(c) { '_' } else { c })
            .collect();
        self.dir.join(format!("{name}.csv"))
    }

    fn store_err(e: impl fmt::Display) -> MareaError {
        MareaError::store(e.to_string())
    }
}

#[async_trait]
impl SeriesStore for CsvStore {
    async fn read(&self, symbol: &Symbol) -> Result<Option<Series>, MareaError> {
        let path = self.path_for(symbol);
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::store_err(e)),
        };
        let mut reader = csv::Reader::from_reader(file);
        let mut bars: Vec<Bar> = Vec::new();
        for row in reader.deserialize() {
            bars.push(row.map_err(Self::store_err)?);
        }
        Ok(Some(Series::from_bars(bars)))
    }

    async fn write(&self, symbol: &Symbol, series: &Series) -> Result<(), MareaError> {
        fs::create_dir_all(&self.dir).map_err(Self::store_err)?;
        let path = self.path_for(symbol);
        // Write a sibling temp file and rename it into place so a failed
        // write cannot truncate the previously persisted series.
        let tmp = path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp).map_err(Self::store_err)?;
            for b in series.bars() {
                writer.serialize(b).map_err(Self::store_err)?;
            }
            writer.flush().map_err(Self::store_err)?;
        }
        fs::rename(&tmp, &path).map_err(Self::store_err)
    }
}
