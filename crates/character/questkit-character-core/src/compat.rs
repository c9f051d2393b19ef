//! Bone-name normalization and clip/skeleton compatibility scoring.
//!
//! Rigs from different vendors name the same joints differently
//! ("mixamorigHips" vs "Hips" vs "pelvis"). Matching runs in three ascending
//! tiers — exact, case-insensitive, normalized — and the share of clip joints
//! that resolve decides whether a clip is playable on a skeleton at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::{AnimationClip, Skeleton};

/// Minimum share of a clip's joints that must resolve against the skeleton.
/// Fixed on purpose: scores are only comparable across rigs if every caller
/// uses the same cutoff.
pub const COMPATIBILITY_THRESHOLD: f32 = 0.3;

static DOT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+").expect("valid pattern"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Diagnostic result of scoring one clip against one skeleton.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub matching_bones: usize,
    pub total_bones: usize,
    pub missing_bones: Vec<String>,
    pub score: f32,
}

/// Canonical bone-name form shared by the match tiers and the mapper:
/// lowercase, vendor prefix removed, underscores trimmed, dot and whitespace
/// runs collapsed to single underscores. Order matters — trimming runs before
/// the dot/whitespace rewrite.
pub fn normalize_bone_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace("mixamorig", "");
    let trimmed = lowered.trim_matches('_');
    let dotted = DOT_RUNS.replace_all(trimmed, "_");
    WHITESPACE_RUNS.replace_all(&dotted, "_").into_owned()
}

fn skeleton_has_joint(skeleton: &Skeleton, joint: &str) -> bool {
    skeleton.joints.iter().any(|bone| {
        bone == joint
            || bone.eq_ignore_ascii_case(joint)
            || normalize_bone_name(bone) == normalize_bone_name(joint)
    })
}

/// Score how well `clip`'s referenced joints resolve against `skeleton`.
/// Never errors: an empty clip or empty skeleton scores 0 / incompatible.
pub fn analyze_clip_compatibility(skeleton: &Skeleton, clip: &AnimationClip) -> CompatibilityReport {
    let clip_joints = clip.referenced_joints();
    let mut matching = 0usize;
    let mut missing = Vec::new();
    for joint in &clip_joints {
        if skeleton_has_joint(skeleton, joint) {
            matching += 1;
        } else {
            missing.push((*joint).to_string());
        }
    }
    let total = clip_joints.len();
    let score = matching as f32 / total.max(1) as f32;
    CompatibilityReport {
        compatible: score > COMPATIBILITY_THRESHOLD,
        matching_bones: matching,
        total_bones: total,
        missing_bones: missing,
        score,
    }
}
