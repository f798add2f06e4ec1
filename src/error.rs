use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("Malformed config file")]
    Parse(#[from] toml::de::Error),
    #[error("Config value `{name}` = {value} is out of range, expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: f32,
        expected: &'static str
    },
    #[error("Asteroid vertex count range {min}..={max} is invalid, expected 3 <= min <= max")]
    InvalidVertexRange {
        min: usize,
        max: usize
    }
}
