use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use retarget::{CanonicalBone, FormatSelection, HumanoidRig, RawTrack, RetargetSettings, Retargeter, SourceFormat};

/// Ten seconds of 60 fps mocopi-style data for every canonical bone.
fn mocopi_tracks() -> Vec<RawTrack> {
    let frames = 600;
    let times: Vec<f32> = (0..frames).map(|i| i as f32 / 60.0).collect();
    let mut tracks = Vec::new();
    for bone in CanonicalBone::ALL {
        let alias = retarget::aliases_for(bone, SourceFormat::Mocopi)[0];
        let rotations: Vec<f32> = (0..frames)
            .flat_map(|i| {
                let q = glam::Quat::from_rotation_y(i as f32 * 0.01);
                q.to_array()
            })
            .collect();
        tracks.push(RawTrack::quaternion(format!("{alias}.quaternion"), times.clone(), rotations));
        tracks.push(RawTrack::vector3(format!("{alias}.position"), times.clone(), vec![1.0; frames * 3]));
    }
    tracks
}

fn bench_retarget(c: &mut Criterion) {
    let tracks = mocopi_tracks();
    let rig = HumanoidRig::from_bone_names(CanonicalBone::ALL.map(|bone| (bone, bone.name())));

    let fixed = Retargeter::new(RetargetSettings {
        source: FormatSelection::Fixed(SourceFormat::Mocopi),
        ..Default::default()
    });
    c.bench_function("retarget_mocopi_fixed", |b| {
        b.iter(|| fixed.retarget(black_box(&tracks), black_box(&rig)));
    });

    let probe = Retargeter::new(RetargetSettings::default());
    c.bench_function("retarget_mocopi_probe", |b| {
        b.iter(|| probe.retarget(black_box(&tracks), black_box(&rig)));
    });
}

criterion_group!(benches, bench_retarget);
criterion_main!(benches);
