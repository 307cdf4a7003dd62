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

use uvgrid::raster::Grid;
use uvgrid::refine::{label_components, largest_component, postprocess, threshold};

fn soft_blocks(resolution: usize, blocks: &[(usize, usize, usize, usize)], value: f32) -> Grid {
    Grid::from_fn(resolution, |row, col| {
        let hit = blocks
            .iter()
            .any(|&(r0, r1, c0, c1)| (r0..r1).contains(&row) && (c0..c1).contains(&col));
        if hit { value } else { 0.1 }
    })
}

fn binary_blocks(resolution: usize, blocks: &[(usize, usize, usize, usize)]) -> Grid {
    threshold(&soft_blocks(resolution, blocks, 1.0), 0.5)
}

#[test]
fn test_keeps_only_largest_component() {
    // 10 pixels in row 1, 30 pixels in a 3x10 block
    let soft = soft_blocks(16, &[(1, 2, 0, 10), (5, 8, 2, 12)], 0.9);
    let mask = postprocess(&soft, 0.5);

    assert_eq!(mask, binary_blocks(16, &[(5, 8, 2, 12)]));
    assert_eq!(mask.count_above(0.5), 30);
    assert!(mask.is_binary());
}

#[test]
fn test_all_background_stays_empty() {
    let mask = postprocess(&Grid::filled(8, 0.2), 0.5);
    assert_eq!(mask, Grid::zeros(8));
}

#[test]
fn test_threshold_is_strict() {
    let soft = Grid::from_vec(2, vec![0.5, 0.51, 0.49, 1.0]).unwrap();
    let binary = threshold(&soft, 0.5);
    assert_eq!(binary.as_slice(), &[0.0, 1.0, 0.0, 1.0]);

    assert_eq!(postprocess(&Grid::filled(4, 0.5), 0.5), Grid::zeros(4));
}

#[test]
fn test_diagonal_pixels_are_not_connected() {
    let mut binary = Grid::zeros(4);
    binary[(0, 0)] = 1.0;
    binary[(1, 1)] = 1.0;

    let labels = label_components(&binary);
    assert_eq!(labels.count(), 2);
    assert_ne!(labels.label(0, 0), labels.label(1, 1));
    assert_eq!(labels.size(1), Some(1));
    assert_eq!(labels.size(0), None);
}

#[test]
fn test_ties_keep_first_component_in_row_major_order() {
    let binary = binary_blocks(8, &[(0, 2, 6, 8), (5, 7, 0, 2)]);
    let labels = label_components(&binary);
    assert_eq!(labels.count(), 2);
    assert_eq!(labels.largest(), Some(1));

    let kept = largest_component(&binary);
    assert_eq!(kept[(0, 6)], 1.0);
    assert_eq!(kept[(5, 0)], 0.0);
    assert_eq!(kept.count_above(0.5), 4);
}

#[test]
fn test_winding_component_is_one_piece() {
    // an S-shaped path touching every row
    let mut binary = Grid::zeros(5);
    for col in 0..5 {
        binary[(0, col)] = 1.0;
        binary[(2, col)] = 1.0;
        binary[(4, col)] = 1.0;
    }
    binary[(1, 4)] = 1.0;
    binary[(3, 0)] = 1.0;

    let labels = label_components(&binary);
    assert_eq!(labels.count(), 1);
    assert_eq!(labels.size(1), Some(17));
    assert_eq!(largest_component(&binary), binary);
}

#[test]
fn test_postprocess_is_idempotent() {
    let soft = soft_blocks(12, &[(0, 3, 0, 3), (6, 12, 6, 9), (10, 12, 0, 2)], 0.8);
    let once = postprocess(&soft, 0.5);
    assert_eq!(postprocess(&once, 0.5), once);
}
