// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, UvGridError},
    ops::{SamplerConfig, sampler::check_range},
    raster::DEFAULT_RESOLUTION,
};

/// Uniform ranges for a parametric part's dimensions, in millimetres.
/// `height` is the box height or the plate thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRanges {
    pub length: (f64, f64),
    pub width: (f64, f64),
    pub height: (f64, f64),
}

impl DimensionRanges {
    fn validate(&self, prefix: &str) -> Result<()> {
        for (name, range) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            let field = format!("{prefix}.{name}");
            check_range(&field, range, f64::MIN_POSITIVE, f64::MAX)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub resolution: usize,
    /// Base seed; every sample stream is derived from it.
    pub seed: u64,
    /// Chance of drawing a box instead of a plate.
    pub box_probability: f64,
    pub box_dims: DimensionRanges,
    pub plate_dims: DimensionRanges,
    pub sampler: SamplerConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            seed: 0,
            box_probability: 0.5,
            box_dims: DimensionRanges {
                length: (50.0, 200.0),
                width: (50.0, 200.0),
                height: (10.0, 50.0),
            },
            plate_dims: DimensionRanges {
                length: (100.0, 300.0),
                width: (100.0, 300.0),
                height: (2.0, 10.0),
            },
            sampler: SamplerConfig::default(),
        }
    }
}

impl SynthesisConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SynthesisConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(UvGridError::invalid_config("resolution", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.box_probability) {
            return Err(UvGridError::invalid_config(
                "box_probability",
                format!("{} is not a probability", self.box_probability),
            ));
        }
        self.box_dims.validate("box_dims")?;
        self.plate_dims.validate("plate_dims")?;
        self.sampler.validate()
    }
}
