//! Track Resolver
//!
//! Finds the position/rotation tracks of a bone from an ordered list of alias
//! candidates. Names are compared case-insensitively.
//!
//! The first candidate for which *either* `"{alias}.position"` or
//! `"{alias}.quaternion"` exists wins, and later candidates are never tried,
//! even when the winner only has one of the two tracks and a later alias has
//! both.

use rustc_hash::FxHashMap;

use crate::input::RawTrack;

/// Case-insensitive name index over a track list.
///
/// When several tracks share a name (ignoring case) the first one wins.
#[derive(Debug)]
pub struct TrackIndex<'a> {
    by_name: FxHashMap<String, &'a RawTrack>,
}

impl<'a> TrackIndex<'a> {
    #[must_use]
    pub fn new(tracks: &'a [RawTrack]) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(tracks.len());
        for track in tracks {
            by_name.entry(track.name.to_lowercase()).or_insert(track);
        }
        Self { by_name }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a RawTrack> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Looks up `"{alias}.position"`.
    #[must_use]
    pub fn position(&self, alias: &str) -> Option<&'a RawTrack> {
        self.get(&format!("{alias}.position"))
    }

    /// Looks up `"{alias}.quaternion"`.
    #[must_use]
    pub fn rotation(&self, alias: &str) -> Option<&'a RawTrack> {
        self.get(&format!("{alias}.quaternion"))
    }
}

/// Tracks found for one bone. At least one of the two is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTracks<'a> {
    /// The alias candidate that matched.
    pub alias: &'a str,
    pub position: Option<&'a RawTrack>,
    pub rotation: Option<&'a RawTrack>,
}

/// Resolves `candidates` against an existing index.
#[must_use]
pub fn resolve_in<'a>(candidates: &[&'a str], index: &TrackIndex<'a>) -> Option<ResolvedTracks<'a>> {
    for &alias in candidates {
        let position = index.position(alias);
        let rotation = index.rotation(alias);
        if position.is_some() || rotation.is_some() {
            log::trace!(
                "alias '{alias}' matched (position: {}, rotation: {})",
                position.is_some(),
                rotation.is_some()
            );
            return Some(ResolvedTracks {
                alias,
                position,
                rotation,
            });
        }
        log::trace!("alias '{alias}' has no tracks");
    }
    None
}

/// Resolves `candidates` against a plain track list.
#[must_use]
pub fn resolve<'a>(candidates: &[&'a str], tracks: &'a [RawTrack]) -> Option<ResolvedTracks<'a>> {
    resolve_in(candidates, &TrackIndex::new(tracks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot(name: &str) -> RawTrack {
        RawTrack::quaternion(name, vec![0.0], vec![0.0, 0.0, 0.0, 1.0])
    }

    fn pos(name: &str) -> RawTrack {
        RawTrack::vector3(name, vec![0.0], vec![0.0, 0.0, 0.0])
    }

    #[test]
    fn test_case_insensitive_match() {
        let tracks = vec![rot("Hips.Quaternion"), pos("HIPS.position")];
        let found = resolve(&["hips"], &tracks).unwrap();
        assert_eq!(found.alias, "hips");
        assert_eq!(found.rotation.map(|t| t.name.as_str()), Some("Hips.Quaternion"));
        assert_eq!(found.position.map(|t| t.name.as_str()), Some("HIPS.position"));
    }

    #[test]
    fn test_no_match() {
        let tracks = vec![rot("spine.quaternion")];
        assert!(resolve(&["hips", "hip"], &tracks).is_none());
        assert!(resolve(&[], &tracks).is_none());
    }

    #[test]
    fn test_skips_candidates_without_tracks() {
        let tracks = vec![rot("b.quaternion")];
        let found = resolve(&["a", "b"], &tracks).unwrap();
        assert_eq!(found.alias, "b");
        assert!(found.position.is_none());
    }

    #[test]
    fn test_partial_first_match_shadows_later_complete_pair() {
        let tracks = vec![pos("a.position"), rot("b.quaternion"), pos("b.position")];
        let found = resolve(&["a", "b"], &tracks).unwrap();
        assert_eq!(found.alias, "a");
        assert!(found.position.is_some());
        assert!(found.rotation.is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let mut second = rot("hips.quaternion");
        second.times = vec![5.0];
        let tracks = vec![rot("HIPS.quaternion"), second];
        let found = resolve(&["hips"], &tracks).unwrap();
        assert_eq!(found.rotation.unwrap().times, vec![0.0]);
    }

    #[test]
    fn test_exact_match_only() {
        let tracks = vec![rot("hips_1.quaternion")];
        assert!(resolve(&["hips"], &tracks).is_none());
    }
}
