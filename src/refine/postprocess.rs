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

use crate::raster::Grid;

pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Threshold `soft` and keep only its largest 4-connected component.
///
/// An all-background mask comes back all zero. Equal-sized components are
/// resolved in favour of the one found first in row-major order.
pub fn postprocess(soft: &Grid, threshold_value: f32) -> Grid {
    largest_component(&threshold(soft, threshold_value))
}

/// `1` where `soft > threshold_value`, else `0`.
pub fn threshold(soft: &Grid, threshold_value: f32) -> Grid {
    soft.map(|v| if v > threshold_value { 1.0 } else { 0.0 })
}

/// Connected-component labelling of a binary mask.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLabels {
    resolution: usize,
    /// 0 is background; components are numbered from 1 in discovery order.
    labels: Vec<u32>,
    /// `sizes[k]` is the pixel count of label `k + 1`.
    sizes: Vec<usize>,
}

impl ComponentLabels {
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Panics when `(row, col)` is outside the grid.
    pub fn label(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < self.resolution && col < self.resolution,
            "pixel ({row}, {col}) out of range for {0}x{0} labels",
            self.resolution
        );
        self.labels[row * self.resolution + col]
    }

    pub fn size(&self, label: u32) -> Option<usize> {
        (label as usize)
            .checked_sub(1)
            .and_then(|k| self.sizes.get(k).copied())
    }

    /// Label of the biggest component; the lowest label wins ties.
    pub fn largest(&self) -> Option<u32> {
        let mut best: Option<(u32, usize)> = None;
        for (k, &size) in self.sizes.iter().enumerate() {
            if best.is_none_or(|(_, s)| size > s) {
                best = Some((k as u32 + 1, size));
            }
        }
        best.map(|(label, _)| label)
    }

    pub fn mask_of(&self, label: u32) -> Grid {
        let r = self.resolution;
        Grid::from_fn(r, |row, col| {
            if self.labels[row * r + col] == label {
                1.0
            } else {
                0.0
            }
        })
    }
}

/// Label the 4-connected components of the pixels of `binary` above 0.5.
pub fn label_components(binary: &Grid) -> ComponentLabels {
    let r = binary.resolution();
    let mut labels = vec![0u32; r * r];
    let mut sizes = Vec::new();
    let mut stack = Vec::new();
    let on = |i: usize| binary.as_slice()[i] > 0.5;

    for seed in 0..r * r {
        if labels[seed] != 0 || !on(seed) {
            continue;
        }
        let label = sizes.len() as u32 + 1;
        labels[seed] = label;
        stack.push(seed);
        let mut size = 0usize;

        while let Some(i) = stack.pop() {
            size += 1;
            let (row, col) = (i / r, i % r);
            let mut visit = |j: usize| {
                if labels[j] == 0 && on(j) {
                    labels[j] = label;
                    stack.push(j);
                }
            };
            if row > 0 {
                visit(i - r);
            }
            if row + 1 < r {
                visit(i + r);
            }
            if col > 0 {
                visit(i - 1);
            }
            if col + 1 < r {
                visit(i + 1);
            }
        }
        sizes.push(size);
    }

    ComponentLabels {
        resolution: r,
        labels,
        sizes,
    }
}

/// Keep only the largest component of `binary`.
pub fn largest_component(binary: &Grid) -> Grid {
    let components = label_components(binary);
    match components.largest() {
        Some(label) => components.mask_of(label),
        None => Grid::zeros(binary.resolution()),
    }
}
