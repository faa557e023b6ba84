/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::error::*;

use serde_derive::{Deserialize, Serialize};

///
/// How often a hair strategy is used, and how many strands it draws when it is
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HairStrategyConfig {
    /// Chance that this strategy contributes strands to an avatar
    pub probability: f64,

    /// The base count is multiplied by this value to get the number of strands
    pub multiplier: f64,
}

///
/// Settings for choosing hair strategies and strand counts
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HairConfig {
    /// Base counts are drawn from `[0, max_base_count)`
    pub max_base_count: f64,

    /// Added to every strategy's strand count
    pub extra_lines: f64,

    /// Settings for strategies 0 to 3, in order
    pub strategies: [HairStrategyConfig; 4],
}

///
/// Settings for composing a whole avatar
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Egg samples per half of the face contour (the contour has `2 * face_points + 2` points)
    pub face_points: usize,

    /// Hair strategy selection
    pub hair: HairConfig,

    /// Relative weights of the smile, compressed and open mouth variants
    pub mouth_weights: [f64; 3],
}

impl HairStrategyConfig {
    ///
    /// Number of strands to draw for a particular base count
    ///
    pub fn line_count(&self, base_count: f64, extra_lines: f64) -> usize {
        (base_count * self.multiplier + extra_lines).ceil().max(0.0) as usize
    }
}

impl Default for HairConfig {
    fn default() -> HairConfig {
        HairConfig {
            max_base_count: 50.0,
            extra_lines: 10.0,
            strategies: [
                HairStrategyConfig { probability: 0.7, multiplier: 1.0 },
                HairStrategyConfig { probability: 0.7, multiplier: 1.0 / 1.5 },
                HairStrategyConfig { probability: 0.5, multiplier: 3.0 },
                HairStrategyConfig { probability: 0.5, multiplier: 3.0 },
            ],
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> AvatarConfig {
        AvatarConfig {
            face_points: FACE_SEGMENT_POINTS,
            hair: HairConfig::default(),
            mouth_weights: [1.0, 1.0, 1.0],
        }
    }
}

impl AvatarConfig {
    ///
    /// Reads a configuration from a JSON document (missing settings take their default values)
    ///
    pub fn from_json(json: &str) -> Result<AvatarConfig, ConfigError> {
        let config: AvatarConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    ///
    /// Writes this configuration as a JSON document
    ///
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// Checks that every setting is one the generators can work with
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.face_points < 4 {
            return Err(ConfigError::OutOfRange("face_points"));
        }

        if !is_finite_non_negative(self.hair.max_base_count) {
            return Err(ConfigError::OutOfRange("hair.max_base_count"));
        }

        if !is_finite_non_negative(self.hair.extra_lines) {
            return Err(ConfigError::OutOfRange("hair.extra_lines"));
        }

        for strategy in self.hair.strategies.iter() {
            if !(0.0..=1.0).contains(&strategy.probability) {
                return Err(ConfigError::OutOfRange("hair.strategies.probability"));
            }

            if !is_finite_non_negative(strategy.multiplier) {
                return Err(ConfigError::OutOfRange("hair.strategies.multiplier"));
            }
        }

        let total_weight = self.mouth_weights.iter().sum::<f64>();
        if !self.mouth_weights.iter().all(|weight| is_finite_non_negative(*weight)) || total_weight <= 0.0 {
            return Err(ConfigError::OutOfRange("mouth_weights"));
        }

        Ok(())
    }
}

#[inline]
fn is_finite_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
