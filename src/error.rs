use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("table length must be at least 1")]
    InvalidLength,
    #[error("thread count must be at least 1")]
    InvalidThreads,
    #[error("could not allocate output buffer")]
    ResourceExhausted,
}

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("could not parse JSON parameter file\n{0}")]
    Json(#[from] serde_json::Error),
    #[error("could not parse RON parameter file\n{0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("could not parse YAML parameter file\n{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to read parameter file\n{0}")]
    FileRead(#[from] std::io::Error),
    #[error("parameter file does not have valid extension (must be .json, .ron or .yaml)")]
    Extension,
}
