use activity_cards::core::pack::{PackedCircle, enclose, pack_siblings};
use proptest::prelude::*;

const EPSILON: f64 = 1e-4;

proptest! {
    #[test]
    fn packed_circles_never_overlap(
        radii in prop::collection::vec(0.5f64..120.0, 1..12),
        padding in 0.0f64..8.0
    ) {
        let packed = pack_siblings(&radii, padding);
        prop_assert_eq!(packed.len(), radii.len());
        for i in 0..packed.len() {
            for j in i + 1..packed.len() {
                let dx = packed[i].x - packed[j].x;
                let dy = packed[i].y - packed[j].y;
                let dist = dx.hypot(dy);
                let min_dist = packed[i].r + packed[j].r + padding;
                prop_assert!(
                    dist >= min_dist - EPSILON,
                    "circles {} and {} overlap: dist {} < {}",
                    i, j, dist, min_dist
                );
            }
        }
    }

    #[test]
    fn packed_radii_are_preserved(
        radii in prop::collection::vec(0.5f64..120.0, 1..12),
        padding in 0.0f64..8.0
    ) {
        let packed = pack_siblings(&radii, padding);
        for (circle, &r) in packed.iter().zip(&radii) {
            prop_assert!((circle.r - r).abs() <= EPSILON);
        }
    }

    #[test]
    fn enclosure_covers_every_circle(
        radii in prop::collection::vec(0.5f64..120.0, 1..12)
    ) {
        let packed = pack_siblings(&radii, 0.0);
        let enclosure = enclose(&packed).expect("non-empty input");
        for circle in &packed {
            let dx = circle.x - enclosure.x;
            let dy = circle.y - enclosure.y;
            prop_assert!(dx.hypot(dy) + circle.r <= enclosure.r + EPSILON);
        }
    }
}

#[test]
fn empty_input_has_no_enclosure() {
    assert!(enclose(&[]).is_none());
    assert!(pack_siblings(&[], 0.0).is_empty());
}

#[test]
fn single_circle_encloses_itself() {
    let circle = PackedCircle::new(0.0, 0.0, 10.0);
    let enclosure = enclose(std::slice::from_ref(&circle)).expect("one circle");
    assert_eq!(enclosure.r, 10.0);
}
