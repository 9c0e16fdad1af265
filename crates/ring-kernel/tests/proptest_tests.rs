//! Property-based tests for profile, groove, partition and layout invariants.

use proptest::prelude::*;

use ring_kernel::groove::{BandSection, GrooveModulator, GROOVE_FLOOR_RATIO};
use ring_kernel::partition::classify;
use ring_kernel::profile::{generate, PROFILE_LEN};
use ring_kernel::stones::{plan, PAVE_ROW_SPACING};
use ring_kernel::BandGeometry;
use ring_types::{
    EdgeStyle, Groove, GrooveType, PartitionConfig, PartitionShape, ProfileType, StoneConfig, StoneSetting,
    StoneType,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_profile() -> impl Strategy<Value = ProfileType> {
    (0usize..15).prop_map(|i| ProfileType::ALL[i])
}

fn arb_edge() -> impl Strategy<Value = EdgeStyle> {
    prop_oneof![
        Just(EdgeStyle::Rounded),
        Just(EdgeStyle::Flat),
        Just(EdgeStyle::Beveled),
        Just(EdgeStyle::Comfort),
    ]
}

fn arb_groove() -> impl Strategy<Value = Groove> {
    (
        prop_oneof![
            Just(GrooveType::None),
            Just(GrooveType::U),
            Just(GrooveType::V),
            Just(GrooveType::Shadow),
            Just(GrooveType::Wave),
        ],
        0.0f64..=1.0,
        0.0f64..5.0,
        0.0f64..5.0,
    )
        .prop_map(|(kind, position, width, depth)| Groove {
            kind,
            position,
            width,
            depth,
        })
}

/// Band width/height in model units (1.5 mm .. 12 mm wide, 1 mm .. 3 mm high).
fn arb_section() -> impl Strategy<Value = (f64, f64)> {
    (0.15f64..1.2, 0.1f64..0.3)
}

// ---------------------------------------------------------------------------
// Profile length and determinism
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profile_length_is_fixed(
        profile in arb_profile(),
        edge in arb_edge(),
        groove in arb_groove(),
        (width, height) in arb_section(),
        lateral in -0.3f64..0.3,
    ) {
        let pts = generate(profile, width, height, edge, &groove, lateral);
        prop_assert_eq!(pts.len(), PROFILE_LEN);
    }

    #[test]
    fn profile_is_bitwise_reproducible(
        profile in arb_profile(),
        edge in arb_edge(),
        groove in arb_groove(),
        (width, height) in arb_section(),
    ) {
        let a = generate(profile, width, height, edge, &groove, 0.0);
        let b = generate(profile, width, height, edge, &groove, 0.0);
        for (p, q) in a.iter().zip(&b) {
            prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
            prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }
}

// ---------------------------------------------------------------------------
// Groove floor: carving never goes below hh * 0.2
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn groove_respects_floor(
        groove in arb_groove(),
        (width, height) in arb_section(),
        t in 0.0f64..=1.0,
        lift in 0.0f64..2.0,
        lateral in -0.3f64..0.3,
    ) {
        let section = BandSection::new(width, height);
        let floor = section.half_height() * GROOVE_FLOOR_RATIO;
        let x = -section.half_width() + t * width;
        let y = floor + lift * section.half_height();
        let m = GrooveModulator::new(&groove, section, lateral);
        let carved = m.apply(x, y);
        prop_assert!(carved >= floor, "carved {} below floor {}", carved, floor);
        prop_assert!(carved <= y);
    }
}

// ---------------------------------------------------------------------------
// Partition and stone layout
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_partition_is_region_zero(
        u in -1.0f64..2.0,
        v in -1.0f64..2.0,
        shape in prop_oneof![
            Just(PartitionShape::Straight),
            Just(PartitionShape::Diagonal),
            Just(PartitionShape::Wave),
        ],
    ) {
        let p = PartitionConfig { count: 1, ratio: "1".to_string(), shape };
        prop_assert_eq!(classify(u, v, &p), 0);
    }

    #[test]
    fn classify_stays_in_range(
        u in 0.0f64..=1.0,
        v in 0.0f64..=1.0,
        a in 1u32..5, b in 1u32..5, c in 1u32..5,
    ) {
        let p = PartitionConfig {
            count: 3,
            ratio: format!("{a}:{b}:{c}"),
            shape: PartitionShape::Wave,
        };
        prop_assert!(classify(u, v, &p) < 3);
    }

    #[test]
    fn plan_returns_requested_count(
        count in 0u32..40,
        setting in prop_oneof![
            Just(StoneSetting::Smooth),
            Just(StoneSetting::Rail),
            Just(StoneSetting::Pave),
            Just(StoneSetting::Free),
            Just(StoneSetting::Unknown),
        ],
        size in 40.0f64..80.0,
    ) {
        let stones = StoneConfig { enabled: true, kind: StoneType::Diamond, setting, count, size: 0.05 };
        let band = BandGeometry::from_mm(size, 5.0, 2.0);
        let placed = plan(&stones, &band);
        prop_assert_eq!(placed.len(), count as usize);
        for p in &placed {
            prop_assert!((p.position.radial_distance() - band.surface_radius()).abs() < 1e-9);
        }
    }

    #[test]
    fn pave_rows_never_exceed_ceiling(count in 1u32..60) {
        let stones = StoneConfig {
            enabled: true,
            kind: StoneType::Ruby,
            setting: StoneSetting::Pave,
            count,
            size: 0.05,
        };
        let band = BandGeometry::from_mm(56.0, 6.0, 2.0);
        let spacing = band.width * PAVE_ROW_SPACING;
        let mut rows = [0usize; 3];
        for p in plan(&stones, &band) {
            rows[((p.position.y / spacing).round() + 1.0) as usize] += 1;
        }
        let ceiling = (count as usize).div_ceil(3);
        prop_assert!(rows.iter().all(|&n| n <= ceiling));
        prop_assert_eq!(rows.iter().sum::<usize>(), count as usize);
    }

    #[test]
    fn disabled_settings_plan_nothing(count in 0u32..40, enabled in any::<bool>()) {
        let stones = StoneConfig {
            enabled,
            kind: StoneType::Emerald,
            setting: StoneSetting::None,
            count,
            size: 0.05,
        };
        prop_assert!(plan(&stones, &BandGeometry::from_mm(54.0, 4.0, 1.8)).is_empty());
    }
}
