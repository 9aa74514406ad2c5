use std::path::Path;
use serde::{Serialize, Deserialize};

use super::{
    color::*,
    error::*
};

/// Cubehelix scheme parameters.
///
/// Values outside the usual ranges are accepted as-is and only lead to more
/// clipping in the resulting colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub start: f64,
    #[serde(alias = "rot")]
    pub rotations: f64,
    pub hue: f64,
    pub gamma: f64,
}

impl Params {
    pub fn new(start: f64, rotations: f64, hue: f64, gamma: f64) -> Self {
        Params { start, rotations, hue, gamma }
    }

    pub fn eval(&self, position: f64) -> Sample {
        evaluate(position, self.start, self.rotations, self.hue, self.gamma)
    }

    pub fn from_json(src: &str) -> serde_json::Result<Params> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<Params> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<Params, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Params, ParamsError> {
        let path = path.as_ref();
        let ext = path.extension().ok_or(ParamsError::Extension)?;
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading cubehelix parameters from '{}'", path.display());
        Ok(match ext.to_str() {
            Some("json") => Params::from_json(&contents)?,
            Some("ron") => Params::from_ron(&contents)?,
            Some("yaml" | "yml") => Params::from_yaml(&contents)?,
            _ => return Err(ParamsError::Extension)
        })
    }
}

impl Default for Params {
    fn default() -> Params {
        Params {
            start: 0.5,
            rotations: -1.5,
            hue: 1.0,
            gamma: 1.0,
        }
    }
}
