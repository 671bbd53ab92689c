//! Retarget Inspector
//!
//! Loads a JSON dump of already-parsed source tracks plus a rig description,
//! runs the retargeting engine and prints what ended up in the clip.
//!
//! ```text
//! retarget_inspect <input.json> [settings.json]
//! ```
//!
//! Input layout:
//!
//! ```json
//! {
//!   "tracks": [ { "name": "root.quaternion", "times": [0.0], "values": [0, 0, 0, 1], "components": 4 } ],
//!   "rig": { "hips": "J_Bip_C_Hips", "head": "J_Bip_C_Head" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use retarget::{CanonicalBone, HumanoidRig, RawTrack, RetargetSettings, Retargeter, TrackData};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct InspectInput {
    tracks: Vec<RawTrack>,
    rig: BTreeMap<CanonicalBone, String>,
}

fn load_settings(path: Option<&Path>) -> Result<RetargetSettings> {
    let Some(path) = path else {
        return Ok(RetargetSettings::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(RetargetSettings::from_json(&text)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input_path) = args.first().map(Path::new) else {
        bail!("usage: retarget_inspect <input.json> [settings.json]");
    };

    let text =
        std::fs::read_to_string(input_path).with_context(|| format!("reading {}", input_path.display()))?;
    let input: InspectInput = serde_json::from_str(&text).context("parsing track dump")?;
    let settings = load_settings(args.get(1).map(Path::new))?;

    log::info!(
        "{} source tracks, {} rig bones, {} convention",
        input.tracks.len(),
        input.rig.len(),
        settings.spec_version
    );

    let rig = HumanoidRig::from_bone_names(input.rig);
    let clip = Retargeter::new(settings).retarget(&input.tracks, &rig)?;

    println!("clip '{}' ({:.3}s)", clip.name, clip.duration);
    for channel in &clip.channels {
        println!(
            "  {:<14} -> {:<24} {:>5} keys{}",
            channel.bone.name(),
            channel.node.path,
            channel.keyframes.len(),
            if channel.has_translation() { " +translation" } else { "" }
        );
    }
    for track in &clip.tracks {
        let kind = match track.data {
            TrackData::Vector3(_) => "vec3",
            TrackData::Quaternion(_) => "quat",
        };
        println!("  track {:<32} {kind} x{}", track.name, track.data.len());
    }

    let missing: Vec<_> = CanonicalBone::ALL
        .iter()
        .filter(|&&bone| clip.channel(bone).is_none())
        .map(|bone| bone.name())
        .collect();
    if !missing.is_empty() {
        println!("  unanimated: {}", missing.join(", "));
    }

    Ok(())
}
