//! Clip and skeleton data model.
//!
//! Clips arrive from the asset layer already decoded; this crate only needs
//! their track targets (joint + channel) and treats the sampled payload as
//! opaque. Skeletons are ordered joint-name lists; hierarchy is irrelevant
//! to compatibility scoring and retargeting.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Transform channel a track drives.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrackChannel {
    Position,
    Rotation,
    Scale,
}

impl TrackChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackChannel::Position => "position",
            TrackChannel::Rotation => "rotation",
            TrackChannel::Scale => "scale",
        }
    }
}

/// A single keyframe sample.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keypoint {
    /// Normalized time in [0,1] within the clip duration.
    pub stamp: f32,
    pub value: Value,
}

/// One channel of one joint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Joint the track drives; the part of a combined "Hips.position" target
    /// path before the channel suffix.
    pub joint: String,
    pub channel: TrackChannel,
    #[serde(default)]
    pub keys: Vec<Keypoint>,
}

impl Track {
    /// Combined "joint.channel" path as playback layers address tracks.
    pub fn target_path(&self) -> String {
        format!("{}.{}", self.joint, self.channel.as_str())
    }
}

/// A named, time-sampled set of per-joint transform tracks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Duration in seconds.
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Validate basic invariants (finite non-negative duration, monotonic
    /// stamps in [0,1]).
    pub fn validate_basic(&self) -> Result<(), String> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err("AnimationClip.duration must be finite and >= 0".into());
        }
        for track in &self.tracks {
            let mut last = -f32::INFINITY;
            for key in &track.keys {
                if !key.stamp.is_finite() || key.stamp < 0.0 || key.stamp > 1.0 {
                    return Err(format!(
                        "Keypoint stamp must be in [0,1] and finite for '{}'",
                        track.target_path()
                    ));
                }
                if key.stamp < last {
                    return Err(format!(
                        "Keypoint stamps must be non-decreasing for '{}'",
                        track.target_path()
                    ));
                }
                last = key.stamp;
            }
        }
        Ok(())
    }

    /// Distinct joints referenced by this clip's tracks, in first-appearance
    /// order.
    pub fn referenced_joints(&self) -> Vec<&str> {
        let mut joints: Vec<&str> = Vec::new();
        for track in &self.tracks {
            if !joints.iter().any(|j| *j == track.joint.as_str()) {
                joints.push(&track.joint);
            }
        }
        joints
    }
}

/// Ordered joint names of a rig.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    #[serde(default)]
    pub name: String,
    pub joints: Vec<String>,
}

impl Skeleton {
    pub fn new(
        name: impl Into<String>,
        joints: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            joints: joints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}
