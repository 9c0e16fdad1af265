use ring_tessellation::MeshSettings;
use ring_types::RingPair;

use crate::engine::{PreviewEngine, PreviewFrame};

/// Preview engines for both rings of a pair.
#[derive(Debug, Default)]
pub struct PairPreview {
    pub ring1: PreviewEngine,
    pub ring2: PreviewEngine,
}

impl PairPreview {
    pub fn new(settings: MeshSettings) -> Self {
        Self {
            ring1: PreviewEngine::new(settings),
            ring2: PreviewEngine::new(settings),
        }
    }

    pub fn engine(&self, id: u32) -> Option<&PreviewEngine> {
        match id {
            1 => Some(&self.ring1),
            2 => Some(&self.ring2),
            _ => None,
        }
    }

    /// Bring both previews up to date with `pair`.
    pub fn update(&mut self, pair: &RingPair) -> (PreviewFrame, PreviewFrame) {
        (self.ring1.update(&pair.ring1), self.ring2.update(&pair.ring2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_types::EditTarget;

    #[test]
    fn test_single_ring_edit_leaves_partner_cached() {
        let mut pair = RingPair::new();
        let mut preview = PairPreview::new(MeshSettings::draft());
        preview.update(&pair);

        pair.apply_edit(EditTarget::Ring2, false, |ring| ring.width = 3.0);
        preview.update(&pair);

        assert_eq!(preview.ring1.stats().mesh_builds, 1);
        assert_eq!(preview.ring2.stats().mesh_builds, 2);
    }

    #[test]
    fn test_shared_edit_rebuilds_both() {
        let mut pair = RingPair::new();
        let mut preview = PairPreview::new(MeshSettings::draft());
        preview.update(&pair);

        pair.apply_edit(EditTarget::Ring1, true, |ring| ring.height = 2.2);
        preview.update(&pair);

        assert_eq!(preview.ring1.stats().mesh_builds, 2);
        assert_eq!(preview.ring2.stats().mesh_builds, 2);
    }

    #[test]
    fn test_engine_lookup() {
        let preview = PairPreview::default();
        assert!(preview.engine(1).is_some());
        assert!(preview.engine(2).is_some());
        assert!(preview.engine(3).is_none());
    }
}
