//! Transformations place a light primitive in world space. The host
//! scene graph reports a full 4 x 4 world matrix per node; the
//! renderer receives it as a single Transform statement inside the
//! light's attribute block.

// pbrt_export
use crate::core::pbrt::{float_token, Float};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
}

/// Encode a node's world matrix as the renderer's Transform
/// statement. The host hands out row-vector matrices; their
/// row-by-row flattening is exactly the column-major element order
/// the renderer reads, no transposition involved.
pub fn transform_statement(m: &Matrix4x4) -> String {
    let mut entries: Vec<String> = Vec::with_capacity(16);
    for row in &m.m {
        for value in row {
            entries.push(float_token(*value));
        }
    }
    format!("\tTransform [{}]", entries.join(" "))
}
