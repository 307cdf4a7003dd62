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

use thiserror::Error;

use crate::ops::OpType;

/// Errors surfaced by the engine.
///
/// Geometric edge cases (degenerate triangles, empty sampling regions) are
/// absorbed where they happen and never show up here.
#[derive(Debug, Error)]
pub enum UvGridError {
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("mesh has {uv} UV coordinates for {vertices} vertices")]
    UvCountMismatch { uv: usize, vertices: usize },

    #[error("unsupported operation type `{0}`")]
    UnsupportedOperationType(String),

    #[error("grid shape mismatch: expected {expected} values, found {found}")]
    GridShapeMismatch { expected: usize, found: usize },

    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("unsupported envelope schema version {found}, expected {expected}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    #[error("operation `{op_id}` is `{declared}` but carries `{params}` parameters")]
    ParamsTypeMismatch {
        op_id: String,
        declared: OpType,
        params: OpType,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("vertex {vertex} has no texture coordinate")]
    MissingTextureCoordinate { vertex: usize },

    #[error("model inference failed: {0}")]
    Model(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl UvGridError {
    pub(crate) fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        UvGridError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        UvGridError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UvGridError>;
