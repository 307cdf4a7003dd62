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

//! Heuristic confidence for a prediction.
//!
//! This is a monotone proxy for "the mask is crisp and the parameters agree",
//! not a calibrated probability.

use crate::{ops::ParamVector, raster::Grid};

/// Mean entropy (in nats) that maps to zero mask confidence.
pub const ENTROPY_SCALE: f64 = 10.0;
/// Parameter standard deviation that maps to zero parameter confidence.
pub const PARAM_SPREAD_SCALE: f64 = 2.0;

/// Mean of `−(p·ln p + (1−p)·ln(1−p))` over all pixels, with `0·ln 0 = 0`.
pub fn mean_binary_entropy(soft: &Grid) -> f64 {
    if soft.is_empty() {
        return 0.0;
    }
    let total: f64 = soft
        .as_slice()
        .iter()
        .map(|&v| binary_entropy(f64::from(v)))
        .sum();
    total / soft.len() as f64
}

fn binary_entropy(p: f64) -> f64 {
    let p = if p.is_nan() { 0.5 } else { p.clamp(0.0, 1.0) };
    let term = |x: f64| if x > 0.0 { x * x.ln() } else { 0.0 };
    -(term(p) + term(1.0 - p))
}

pub fn mask_confidence(soft: &Grid) -> f64 {
    1.0 - (mean_binary_entropy(soft) / ENTROPY_SCALE).clamp(0.0, 1.0)
}

pub fn param_confidence(params: &ParamVector) -> f64 {
    let spread = params.std_dev() / PARAM_SPREAD_SCALE;
    if spread.is_nan() {
        return 0.0;
    }
    1.0 - spread.clamp(0.0, 1.0)
}

/// Mean of the mask and parameter terms, in `[0, 1]`.
pub fn confidence(soft: &Grid, params: &ParamVector) -> f64 {
    (mask_confidence(soft) + param_confidence(params)) / 2.0
}
