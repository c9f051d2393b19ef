//! Keyframe payload values.
//!
//! Every algorithm in this crate treats keyframe data as opaque: values are
//! carried, cloned, and re-targeted, never interpolated or inspected.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vec3,
    Quat,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Scalar(f32),
    /// Translation or scale sample (x, y, z).
    Vec3([f32; 3]),
    /// Quaternion rotation sample (x, y, z, w).
    Quat([f32; 4]),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Quat(_) => ValueKind::Quat,
        }
    }
}
