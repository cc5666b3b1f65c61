//! # Layout Quality Tests
//!
//! Verifies the generated formations are shaped like a tree and a cloud,
//! and that the category partition is exact.

use yuletide_procedural::{
    CategoryCounts, LayoutGenerator, LayoutParams, LayoutSeed, ParticleCategory,
};

fn generate(seed: u64) -> yuletide_procedural::TreeLayout {
    LayoutGenerator::new(LayoutParams::default(), LayoutSeed::new(seed)).generate()
}

/// Test: 3000 particles split exactly as requested, foliage takes the rest.
#[test]
fn test_default_partition_end_to_end() {
    let layout = generate(42);
    let p = layout.partition();

    let expected = [
        (ParticleCategory::Star, 1),
        (ParticleCategory::FairyLight, 1200),
        (ParticleCategory::SphereOrnament, 280),
        (ParticleCategory::HeartOrnament, 100),
        (ParticleCategory::RibbonBow, 25),
        (ParticleCategory::GarlandBead, 900),
        (ParticleCategory::Foliage, 494),
    ];
    for (category, count) in expected {
        assert_eq!(p.count(category), count, "{category:?}");
        let tagged = layout
            .attributes()
            .iter()
            .filter(|a| a.category == category)
            .count();
        assert_eq!(tagged, count, "{category:?} attributes");
    }

    let sum: usize = p.iter().map(|(_, r)| r.len()).sum();
    assert_eq!(sum, 3000);
    assert_eq!(layout.tree().len(), 3000);
    assert_eq!(layout.scatter().len(), 3000);
}

/// Test: Custom counts that exceed the total are clamped without gaps.
#[test]
fn test_oversubscribed_counts_never_overflow() {
    let params = LayoutParams {
        particle_count: 500,
        counts: CategoryCounts {
            star: 1,
            fairy_light: 300,
            sphere_ornament: 300,
            heart_ornament: 300,
            ribbon_bow: 0,
            garland_bead: 10,
        },
        ..LayoutParams::default()
    };
    let layout = LayoutGenerator::new(params, LayoutSeed::new(1)).generate();
    let p = layout.partition();

    assert_eq!(p.count(ParticleCategory::FairyLight), 300);
    assert_eq!(p.count(ParticleCategory::SphereOrnament), 199);
    assert_eq!(p.count(ParticleCategory::HeartOrnament), 0);
    assert_eq!(p.count(ParticleCategory::Foliage), 0);
    assert_eq!(layout.tree().len(), 500);
}

/// Test: SCATTER is uniform over the solid volume, not the surface.
///
/// The fraction of points inside radius `r·R` must approach `r³`.
#[test]
fn test_scatter_is_volumetrically_uniform() {
    let params = LayoutParams {
        particle_count: 60_000,
        ..LayoutParams::default()
    };
    let layout = LayoutGenerator::new(params, LayoutSeed::new(7)).generate();
    let radius = params.scatter_radius;

    // Skip the star, which is pinned.
    let points = &layout.scatter().positions()[1..];
    let n = points.len() as f64;

    for r in [0.25f32, 0.5, 0.75, 0.9] {
        let inside = points.iter().filter(|p| p.length() < r * radius).count() as f64;
        let fraction = inside / n;
        let expected = f64::from(r).powi(3);
        println!("r = {r}: fraction {fraction:.4}, expected {expected:.4}");
        assert!(
            (fraction - expected).abs() < 0.01,
            "r = {r}: fraction {fraction:.4} vs expected {expected:.4}"
        );
    }

    assert!(points.iter().all(|p| p.length() <= radius + 1e-3));
}

/// Test: TREE stays inside a slightly inflated cone.
#[test]
fn test_tree_fits_inside_cone() {
    let layout = generate(3);
    let cone = LayoutParams::default().cone;

    for (i, p) in layout.tree().positions().iter().enumerate() {
        // Lowest point: base minus the largest droop (0.45 for hearts).
        assert!(p.y >= -cone.height / 2.0 - 0.5, "particle {i} below base: {p:?}");
        assert!(p.y <= cone.height / 2.0 + cone.star_lift + 1e-4, "particle {i} above star");

        // Ribbons and garland beads reach 1.07 of the local radius.
        let horizontal = (p.x * p.x + p.z * p.z).sqrt();
        assert!(
            horizontal <= cone.base_radius * 1.1 + 1e-3,
            "particle {i} outside cone: r = {horizontal}"
        );
    }
}

/// Test: Ornaments sit on the outer shell while foliage fills the inside.
#[test]
fn test_ornaments_outside_foliage_inside() {
    let layout = generate(5);
    let positions = layout.tree().positions();
    let mean_radius = |category: ParticleCategory| {
        let range = layout.partition().range(category);
        let len = range.len() as f32;
        range
            .map(|i| (positions[i].x.powi(2) + positions[i].z.powi(2)).sqrt())
            .sum::<f32>()
            / len
    };

    let foliage = mean_radius(ParticleCategory::Foliage);
    let ornaments = mean_radius(ParticleCategory::SphereOrnament);
    println!("mean radius: foliage {foliage:.3}, ornaments {ornaments:.3}");
    assert!(ornaments > foliage);
}

/// Test: Same seed, same tree. Different seed, different tree.
#[test]
fn test_generation_is_deterministic() {
    let a = generate(1234);
    let b = generate(1234);
    let c = generate(4321);

    assert_eq!(a.tree().positions(), b.tree().positions());
    assert_eq!(a.scatter().positions(), b.scatter().positions());
    assert_eq!(a.attributes(), b.attributes());
    assert_ne!(a.scatter().positions(), c.scatter().positions());
}
