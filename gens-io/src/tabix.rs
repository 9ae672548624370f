//! Range queries on block-compressed, tabix-indexed track files.
//!
//! Every track file stores all zoom levels of all chromosomes. Records of one
//! zoom level and chromosome live under their own sequence name, the bucket
//! key `{res}_{chrom}` (`a_1`, `d_X`, `o_MT`, ...), so a window query is a
//! plain tabix query on that bucket.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{error, info};
use noodles::core::{Position, Region};
use noodles::{csi, tabix};

use gens_core::models::{Chromosome, DataRecord, ZoomLevel};
use gens_core::{GensError, Result};

use crate::source::{INDEX_SUFFIX, SampleFiles, Track, TrackSource, parse_track_line};

///
/// One bgzipped track file together with its parsed tabix index.
///
#[derive(Debug, Clone)]
pub struct IndexedTrackFile {
    path: PathBuf,
    index: tabix::Index,
}

impl IndexedTrackFile {
    ///
    /// Open a track file, reading the index from `<path>.tbi`.
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut index_path = path.as_os_str().to_owned();
        index_path.push(INDEX_SUFFIX);
        Self::open_with_index(path, PathBuf::from(index_path))
    }

    ///
    /// Open a track file with an explicitly specified index path.
    ///
    pub fn open_with_index<P: AsRef<Path>, Q: AsRef<Path>>(path: P, index_path: Q) -> Result<Self> {
        let path = path.as_ref();
        let index_path = index_path.as_ref();
        for required in [path, index_path] {
            if !required.is_file() {
                error!("File not found: {:?}", required);
                return Err(GensError::SourceFileMissing(required.to_path_buf()));
            }
        }

        let index = tabix::read(index_path)?;
        Ok(IndexedTrackFile {
            path: path.to_path_buf(),
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    ///
    /// Get all records of bucket `key` overlapping `[start, end)`. A bucket
    /// missing from the index yields no records.
    ///
    pub fn query(&self, key: &str, start: u32, end: u32) -> Result<Vec<DataRecord>> {
        if end <= start {
            return Ok(Vec::new());
        }

        // tabix regions are 1-based and closed
        let (Ok(region_start), Ok(region_end)) = (
            Position::try_from(start as usize + 1),
            Position::try_from(end as usize),
        ) else {
            return Ok(Vec::new());
        };
        let region = Region::new(key, region_start..=region_end);

        let file = File::open(&self.path)?;
        let mut reader = csi::io::IndexedReader::new(file, self.index.clone());
        let query = match reader.query(&region) {
            Ok(query) => query,
            Err(err) => {
                error!("Query {:?}; {}: {}", self.path, key, err);
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::new();
        for result in query {
            let record = result?;
            let line: &str = record.as_ref();
            records.push(parse_track_line(line)?);
        }
        Ok(records)
    }
}

///
/// Reads the coverage and BAF tracks of one sample from their tabix files.
///
/// Each query opens its own read-only handle, so one source can serve
/// concurrent requests.
///
#[derive(Debug, Clone)]
pub struct TabixDataSource {
    coverage: IndexedTrackFile,
    baf: IndexedTrackFile,
}

impl TabixDataSource {
    pub fn open(files: &SampleFiles) -> Result<Self> {
        info!(
            "Opening tabix files {:?} and {:?}",
            files.coverage, files.baf
        );
        Ok(TabixDataSource {
            coverage: IndexedTrackFile::open(&files.coverage)?,
            baf: IndexedTrackFile::open(&files.baf)?,
        })
    }

    pub fn track_file(&self, track: Track) -> &IndexedTrackFile {
        match track {
            Track::Coverage => &self.coverage,
            Track::Baf => &self.baf,
        }
    }
}

impl TrackSource for TabixDataSource {
    fn fetch(
        &self,
        track: Track,
        res: ZoomLevel,
        chrom: Chromosome,
        start: u32,
        end: u32,
    ) -> Result<Vec<DataRecord>> {
        let file = self.track_file(track);
        let key = res.bucket_key(chrom);
        info!("Query {:?}; {} {} {}", file.path(), key, start, end);
        file.query(&key, start, end)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;

    use noodles::bgzf;
    use noodles::core::Position;
    use noodles::csi::binning_index::index::header;
    use noodles::csi::binning_index::index::reference_sequence::bin::Chunk;
    use noodles::tabix;

    ///
    /// Write a bgzipped track file and its `.tbi` index. Rows must be grouped
    /// by bucket key and sorted by start within each bucket.
    ///
    pub fn write_indexed_track(path: &Path, rows: &[(&str, u32, u32, f64)]) {
        let mut writer = bgzf::Writer::new(File::create(path).unwrap());
        let mut indexer = tabix::index::Indexer::default();
        indexer.set_header(header::Builder::bed().build());

        for (key, start, end, value) in rows {
            let chunk_start = writer.virtual_position();
            writeln!(writer, "{}\t{}\t{}\t{}", key, start, end, value).unwrap();
            let chunk_end = writer.virtual_position();

            indexer
                .add_record(
                    key,
                    Position::try_from(*start as usize + 1).unwrap(),
                    Position::try_from(*end as usize).unwrap(),
                    Chunk::new(chunk_start, chunk_end),
                )
                .unwrap();
        }
        writer.try_finish().unwrap();

        let index = indexer.build();
        let mut index_path = path.as_os_str().to_owned();
        index_path.push(".tbi");
        tabix::write(index_path, &index).unwrap();
    }
}
