use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::graph::export::{AdjacencyReport, Dot, Export, Svg};
use crate::graph::generate::{GeneralizedPetersen, Weighting};
use crate::graph::{parse_integer, GpParams, GraphError, InvalidReason};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid ron config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unsupported config format: {}, expected .yaml, .yml or .ron", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid config pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("could not read config path: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Output produced for a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `vertex: [neighbors]` lines.
    #[default]
    Report,
    /// Graphviz dot.
    Dot,
    /// SVG drawing.
    Svg,
}

/// A parameter as written in a config file.
/// Config formats can't be trusted to hold integers, so anything else is kept
/// and rejected during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawParameter {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawParameter {
    pub fn as_integer(&self) -> Result<i64, GraphError> {
        match self {
            RawParameter::Integer(value) => Ok(*value),
            RawParameter::Float(value) => Err(InvalidReason::NotInteger(value.to_string()).into()),
            RawParameter::Text(value) => parse_integer(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub vertex_count: RawParameter,
    pub skip: RawParameter,
    #[serde(default)]
    pub weighting: Weighting,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub svg: Svg,
}

impl GenerationConfig {
    pub fn new(vertex_count: RawParameter, skip: RawParameter) -> Self {
        GenerationConfig {
            name: None,
            vertex_count,
            skip,
            weighting: Weighting::default(),
            format: OutputFormat::default(),
            svg: Svg::default(),
        }
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_ron_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(raw)?)
    }

    /// Loads a config file, choosing the format by extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw)?,
            Some("ron") => Self::from_ron_str(&raw)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_owned())),
        };
        debug!(path = %path.display(), "loaded generation config");
        Ok(config)
    }

    /// Loads every config matching the glob `pattern`, ordered by path.
    pub fn load_matching(pattern: &str) -> Result<Vec<(PathBuf, Self)>, ConfigError> {
        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        paths
            .into_iter()
            .map(|path| Self::from_path(&path).map(|config| (path, config)))
            .collect()
    }

    pub fn params(&self) -> Result<GpParams, GraphError> {
        GpParams::new(self.vertex_count.as_integer()?, self.skip.as_integer()?)
    }

    pub fn generator(&self) -> Result<GeneralizedPetersen, GraphError> {
        Ok(GeneralizedPetersen::new(self.params()?, self.weighting))
    }

    pub fn exporter(&self) -> Box<dyn Export> {
        match self.format {
            OutputFormat::Report => Box::new(AdjacencyReport),
            OutputFormat::Dot => Box::new(Dot),
            OutputFormat::Svg => Box::new(self.svg),
        }
    }

    /// The configured name, or `GP(n, k)` when none is set.
    pub fn display_name(&self, params: GpParams) -> String {
        self.name.clone().unwrap_or_else(|| params.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = "
name: petersen
vertex_count: 5
skip: 2
weighting: graceful
format: svg
svg:
  width: 300
";

    #[test]
    fn yaml_config_works() {
        let config = GenerationConfig::from_yaml_str(YAML).unwrap();

        assert_eq!(config.name.as_deref(), Some("petersen"));
        assert_eq!(config.params(), GpParams::new(5, 2));
        assert_eq!(config.weighting, Weighting::Graceful);
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(
            config.svg,
            Svg {
                width: 300,
                ..Svg::default()
            }
        );
    }

    #[test]
    fn ron_config_works() {
        let config =
            GenerationConfig::from_ron_str("(vertex_count: 8, skip: 3, format: dot)").unwrap();

        assert_eq!(config.name, None);
        assert_eq!(config.params(), GpParams::new(8, 3));
        assert_eq!(config.weighting, Weighting::Plain);
        assert_eq!(config.format, OutputFormat::Dot);
        assert_eq!(config.display_name(config.params().unwrap()), "GP(8, 3)");
    }

    #[test]
    fn float_parameters_are_rejected() {
        let config = GenerationConfig::from_yaml_str("vertex_count: 10.5\nskip: 2\n").unwrap();

        assert_eq!(config.vertex_count, RawParameter::Float(10.5));
        assert_eq!(
            config.params(),
            Err(GraphError::InvalidParameter(InvalidReason::NotInteger(
                "10.5".to_owned()
            )))
        );
    }

    #[test]
    fn text_parameters_are_parsed() {
        let config = GenerationConfig::from_yaml_str("vertex_count: \"10\"\nskip: two\n").unwrap();

        assert_eq!(config.vertex_count.as_integer(), Ok(10));
        assert!(matches!(
            config.params(),
            Err(GraphError::InvalidParameter(InvalidReason::NotInteger(_)))
        ));
    }

    #[test]
    fn out_of_range_config_is_rejected() {
        let config = GenerationConfig::new(RawParameter::Integer(10), RawParameter::Integer(6));

        assert!(matches!(
            config.generator(),
            Err(GraphError::InvalidParameter(
                InvalidReason::SkipOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn missing_fields_are_reported() {
        let err = GenerationConfig::from_yaml_str("vertex_count: 5\n").unwrap_err();

        assert!(matches!(err, ConfigError::Yaml(_)), "{:?}", err);
    }

    #[test]
    fn load_matching_rejects_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let mut yaml = std::fs::File::create(dir.path().join("a.yaml")).unwrap();
        yaml.write_all(YAML.as_bytes()).unwrap();
        std::fs::write(dir.path().join("c.txt"), "ignored").unwrap();

        let yaml_configs =
            GenerationConfig::load_matching(&format!("{}/*.yaml", dir.path().display())).unwrap();
        let all = GenerationConfig::load_matching(&format!("{}/?.*", dir.path().display()));

        assert_eq!(yaml_configs.len(), 1);
        assert_eq!(yaml_configs[0].1.name.as_deref(), Some("petersen"));
        assert!(matches!(all, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let err = GenerationConfig::load_matching("[").unwrap_err();

        assert!(matches!(err, ConfigError::Pattern(_)), "{:?}", err);
    }

    #[test]
    fn ron_and_yaml_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yml"), YAML).unwrap();
        std::fs::write(dir.path().join("b.ron"), "(vertex_count: 7, skip: 1)").unwrap();

        let configs =
            GenerationConfig::load_matching(&format!("{}/*", dir.path().display())).unwrap();

        assert_eq!(configs.len(), 2);
        assert!(configs[0].0.ends_with("a.yml"));
        assert_eq!(configs[1].1.params(), GpParams::new(7, 1));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = GenerationConfig::from_path(Path::new("does/not/exist.yaml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }), "{:?}", err);
    }

    #[test]
    fn exporter_matches_format() {
        let mut config = GenerationConfig::new(RawParameter::Integer(5), RawParameter::Integer(2));
        let graph = crate::graph::generate::generate(5, 2).unwrap();

        config.format = OutputFormat::Dot;
        let dot = config.exporter().export(&graph, "x").unwrap();
        assert!(dot.starts_with("graph"));

        config.format = OutputFormat::Report;
        let report = config.exporter().export(&graph, "x").unwrap();
        assert!(report.starts_with("1: [6, 2, 5]"));
    }
}
