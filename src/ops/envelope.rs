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

//! JSON container exchanged with the rest of the system for one or more
//! operations.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, UvGridError},
    geometry::Aabb2,
    ops::{OpParams, OpType, OperationGroundTruth},
};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub schema_version: u32,
    pub operations: Vec<OperationDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub op_id: String,
    #[serde(rename = "type")]
    pub op_type: OpType,
    pub description: String,
    pub target: Target,
    pub params: OpParams,
    pub priority: u32,
    pub depends_on: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    UvRegion {
        #[serde(rename = "uvBox")]
        uv_box: UvBoxRecord,
    },
}

/// Wire form of a UV box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UvBoxRecord {
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl UvBoxRecord {
    pub fn to_aabb(&self) -> Aabb2<f64> {
        Aabb2::from_bounds(self.u_min, self.u_max, self.v_min, self.v_max)
    }
}

impl From<&Aabb2<f64>> for UvBoxRecord {
    fn from(b: &Aabb2<f64>) -> Self {
        let (u_min, u_max, v_min, v_max) = b.bounds();
        UvBoxRecord {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

impl OperationDescriptor {
    /// `params` must match `op_type`. The untagged params encoding cannot
    /// enforce this on its own.
    pub fn validate(&self) -> Result<()> {
        let params = self.params.op_type();
        if params != self.op_type {
            return Err(UvGridError::ParamsTypeMismatch {
                op_id: self.op_id.clone(),
                declared: self.op_type,
                params,
            });
        }
        Ok(())
    }

    pub fn from_ground_truth(op_id: impl Into<String>, gt: &OperationGroundTruth) -> Self {
        OperationDescriptor {
            op_id: op_id.into(),
            op_type: gt.op_type,
            description: format!("Generated {}", gt.op_type),
            target: Target::UvRegion {
                uv_box: UvBoxRecord::from(&gt.uv_box),
            },
            params: gt.params.clone(),
            priority: 1,
            depends_on: Vec::new(),
            notes: String::new(),
        }
    }
}

impl Envelope {
    pub fn new(operations: Vec<OperationDescriptor>) -> Self {
        Envelope {
            schema_version: SCHEMA_VERSION,
            operations,
        }
    }

    /// Envelope holding exactly one sampled operation.
    pub fn single(op_id: impl Into<String>, gt: &OperationGroundTruth) -> Self {
        Self::new(vec![OperationDescriptor::from_ground_truth(op_id, gt)])
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and check an envelope. The schema version must match and every
    /// operation's parameters must belong to its declared type.
    pub fn from_json(s: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(s)?;
        envelope.validate()?;
        Ok(envelope)
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(UvGridError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        self.operations.iter().try_for_each(OperationDescriptor::validate)
    }
}
