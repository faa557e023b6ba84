/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while generating a shape
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ShapeError {
    /// The egg formula is undefined for the requested parameters (zero height, a non-positive skew denominator or a non-finite value)
    InvalidShapeParameters,

    /// A contour was too short to sample the requested index windows from
    DegenerateContour,
}

///
/// Errors that can occur while loading an avatar configuration
///
#[derive(Clone, PartialEq, Debug)]
pub enum ConfigError {
    /// The configuration could not be parsed
    Parse(String),

    /// A setting was outside the range the generators can work with
    OutOfRange(&'static str),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::InvalidShapeParameters => write!(f, "invalid shape parameters"),
            ShapeError::DegenerateContour => write!(f, "contour has too few points"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "could not parse configuration: {}", message),
            ConfigError::OutOfRange(setting) => write!(f, "configuration setting '{}' is out of range", setting),
        }
    }
}

impl Error for ShapeError {}

impl Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> ConfigError {
        ConfigError::Parse(error.to_string())
    }
}
