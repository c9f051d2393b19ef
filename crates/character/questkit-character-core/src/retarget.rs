//! Clip retargeting: rewrite track joints through a bone mapping.

use crate::data::{AnimationClip, Track};
use crate::mapping::BoneMapping;

/// Produce a copy of `clip` whose track joints are rewritten through
/// `mapping`. Lossless for keyframe data: name, duration, track count,
/// channels and every sample are preserved bit-for-bit. Tracks whose joint is
/// absent from the mapping pass through with their original target — an
/// identity fallback, not an error.
pub fn retarget_clip(clip: &AnimationClip, mapping: &BoneMapping) -> AnimationClip {
    let tracks = clip
        .tracks
        .iter()
        .map(|track| match mapping.get(&track.joint) {
            Some(mapped) => Track {
                joint: mapped.clone(),
                channel: track.channel,
                keys: track.keys.clone(),
            },
            None => track.clone(),
        })
        .collect();
    AnimationClip {
        name: clip.name.clone(),
        duration: clip.duration,
        tracks,
    }
}
