use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use fxhash::FxHashSet;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use gens_core::models::GenomeBuild;
use gens_core::{ChromSizes, FeatureIndex, GensError};
use gens_graph::PlotParams;
use gens_io::SampleFiles;

#[derive(Deserialize, Debug, PartialEq)]
pub struct BuildConfig {
    pub genome_build: GenomeBuild,
    pub chrom_sizes: PathBuf,
    pub features: Option<PathBuf>,
}

#[derive(Deserialize, Debug, PartialEq, Default)]
pub struct PlotConfig {
    #[serde(flatten)]
    pub params: PlotParams,
    pub reduce_data: Option<f64>,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct GensConfig {
    pub data_dir: PathBuf,
    #[serde(default)]
    pub builds: Vec<BuildConfig>,
    #[serde(default)]
    pub plot: PlotConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Genome build {0} is not configured")]
    MissingBuild(GenomeBuild),
    #[error("Genome build {0} is configured more than once")]
    DuplicateBuild(GenomeBuild),
    #[error(transparent)]
    Reference(#[from] GensError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

///
/// Chromosome sizes and features of one genome build, ready for queries.
///
#[derive(Debug)]
pub struct ReferenceData {
    pub build: GenomeBuild,
    pub catalog: ChromSizes,
    pub genes: FeatureIndex,
}

impl TryFrom<&Path> for GensConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let mut config: GensConfig = toml::from_str(&toml_str)?;

        let mut seen = FxHashSet::default();
        for build in &config.builds {
            if !seen.insert(build.genome_build) {
                return Err(ConfigError::DuplicateBuild(build.genome_build));
            }
        }

        // relative paths are relative to the config file
        if let Some(base) = path.parent() {
            config.data_dir = base.join(&config.data_dir);
            for build in config.builds.iter_mut() {
                build.chrom_sizes = base.join(&build.chrom_sizes);
                build.features = build.features.as_ref().map(|f| base.join(f));
            }
        }
        Ok(config)
    }
}

impl GensConfig {
    pub fn build(&self, build: GenomeBuild) -> ConfigResult<&BuildConfig> {
        self.builds
            .iter()
            .find(|b| b.genome_build == build)
            .ok_or(ConfigError::MissingBuild(build))
    }

    ///
    /// Load the reference data of one genome build.
    ///
    /// # Arguments
    /// - build: the genome build to load
    ///
    pub fn load_reference(&self, build: GenomeBuild) -> ConfigResult<ReferenceData> {
        let build_config = self.build(build)?;

        let mut catalog = ChromSizes::new();
        catalog.load_build(build, &build_config.chrom_sizes)?;

        let mut genes = FeatureIndex::new();
        if let Some(features) = &build_config.features {
            genes.load_build(build, features)?;
            if genes.is_empty() {
                warn!("No features loaded from {:?}; gene name lookups will fail", features);
            }
        }
        info!("Loaded reference data for genome build {} ({} features)", build, genes.len());

        Ok(ReferenceData {
            build,
            catalog,
            genes,
        })
    }

    pub fn sample_files(&self, sample_id: &str) -> ConfigResult<SampleFiles> {
        Ok(SampleFiles::locate(&self.data_dir, sample_id)?)
    }
}
