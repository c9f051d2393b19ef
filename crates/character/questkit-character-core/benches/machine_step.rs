use criterion::{black_box, criterion_group, criterion_main, Criterion};
use questkit_character_core::{
    build_bone_mapping, AnimationStateMachine, Config, InputSnapshot, Skeleton,
};

fn machine_update(c: &mut Criterion) {
    let mut machine = AnimationStateMachine::new(&Config::default());
    let input = InputSnapshot {
        is_moving: true,
        is_on_ground: true,
        ..Default::default()
    };
    c.bench_function("machine_update", |b| {
        b.iter(|| machine.update(black_box(input)))
    });
}

fn bone_mapping(c: &mut Criterion) {
    let source = Skeleton::new(
        "mixamo",
        [
            "mixamorigHips",
            "mixamorigSpine",
            "mixamorigSpine1",
            "mixamorigSpine2",
            "mixamorigNeck",
            "mixamorigHead",
            "mixamorigLeftShoulder",
            "mixamorigLeftArm",
            "mixamorigRightShoulder",
            "mixamorigRightArm",
        ],
    );
    let target = Skeleton::new(
        "generic",
        [
            "Pelvis",
            "spine",
            "chest",
            "neck",
            "head",
            "shoulder_l",
            "arm_l",
            "shoulder_r",
            "arm_r",
        ],
    );
    c.bench_function("build_bone_mapping", |b| {
        b.iter(|| build_bone_mapping(black_box(&source), black_box(&target)))
    });
}

criterion_group!(benches, machine_update, bone_mapping);
criterion_main!(benches);
