//! Name-based bone mapping between two skeletons.
//!
//! Direct normalized-name matches win; what remains goes through a fixed,
//! ordered list of semantic rules (hips/pelvis/root and spine progressions,
//! limbs). The rule list and its order are part of the observable behavior:
//! mappings must be reproducible across runs and machines, so the heuristic
//! is deliberately frozen rather than tunable.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::compat::normalize_bone_name;
use crate::data::Skeleton;

/// Partial source-joint to target-joint correspondence. Source joints with no
/// plausible target are omitted, never an error.
pub type BoneMapping = IndexMap<String, String>;

struct MappingRule {
    pattern: Regex,
    candidates: &'static [&'static str],
}

static MAPPING_RULES: Lazy<Vec<MappingRule>> = Lazy::new(|| {
    let rule = |pattern: &str, candidates: &'static [&'static str]| MappingRule {
        pattern: Regex::new(pattern).expect("valid pattern"),
        candidates,
    };
    vec![
        rule("(?i)hips?", &["Hips", "hips", "pelvis", "Pelvis", "root", "Root"]),
        rule("(?i)spine", &["Spine", "spine", "spine1", "Spine1"]),
        rule("(?i)spine1", &["Spine1", "spine1", "spine2", "Spine2"]),
        rule("(?i)spine2", &["Spine2", "spine2", "chest", "Chest"]),
        rule("(?i)neck", &["Neck", "neck"]),
        rule("(?i)head", &["Head", "head"]),
        rule("(?i)left.*shoulder", &["LeftShoulder", "left_shoulder", "shoulder_l"]),
        rule("(?i)right.*shoulder", &["RightShoulder", "right_shoulder", "shoulder_r"]),
        rule("(?i)left.*arm", &["LeftArm", "left_arm", "arm_l"]),
        rule("(?i)right.*arm", &["RightArm", "right_arm", "arm_r"]),
    ]
});

/// First target joint whose normalized form equals `wanted`'s.
fn find_normalized(target: &Skeleton, wanted: &str) -> Option<String> {
    let wanted = normalize_bone_name(wanted);
    target
        .joints
        .iter()
        .find(|bone| normalize_bone_name(bone) == wanted)
        .cloned()
}

/// Build a best-effort mapping from `source` joint names to `target` joint
/// names. Pure and deterministic; safe to recompute or cache per skeleton
/// pair.
pub fn build_bone_mapping(source: &Skeleton, target: &Skeleton) -> BoneMapping {
    let mut mapping = BoneMapping::new();
    for source_joint in &source.joints {
        if let Some(direct) = find_normalized(target, source_joint) {
            mapping.insert(source_joint.clone(), direct);
            continue;
        }
        for rule in MAPPING_RULES.iter() {
            if !rule.pattern.is_match(source_joint) {
                continue;
            }
            if let Some(resolved) = rule
                .candidates
                .iter()
                .find_map(|candidate| find_normalized(target, candidate))
            {
                mapping.insert(source_joint.clone(), resolved);
                break;
            }
            // A matching rule with no candidate present in the target does
            // not stop the scan; later rules may still resolve this joint.
        }
    }
    mapping
}
