//! Unit tests for boids-core primitives.

#[cfg(test)]
mod vector {
    use crate::{Vec2, Vec3, Vector};

    #[test]
    fn length_and_distance() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec3::new(2.0, -2.0, 1.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn normalize_zero_is_noop() {
        assert_eq!(Vec3::zero().normalize(), Vec3::zero());
        assert_eq!(Vec2::zero().set_length(5.0), Vec2::zero());
    }

    #[test]
    fn tiny_vectors_are_still_rescaled() {
        // Only exact zero is degenerate: a sub-milli direction still
        // carries meaning and must rescale, not collapse.
        let v = Vec3::new(5.0e-4, 0.0, 0.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert_eq!(n.y, 0.0);

        let s = v.set_length(2.0);
        assert!((s.x - 2.0).abs() < 1e-4);

        let raised = Vec2::new(5.0e-4, 0.0).clamp_length(1.0, 2.0);
        assert!((raised.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn set_length_exact_magnitude() {
        let v = Vec3::new(0.0, 3.0, 4.0).set_length(10.0);
        assert!((v.length() - 10.0).abs() < 1e-4);
        // direction preserved
        assert!(v.y > 0.0 && v.z > 0.0 && v.x.abs() < 1e-6);
    }

    #[test]
    fn clamp_length_caps_only_above_max() {
        let long = Vec3::new(10.0, 0.0, 0.0).clamp_length(0.0, 2.0);
        assert!((long.length() - 2.0).abs() < 1e-5);

        let short = Vec3::new(0.5, 0.0, 0.0).clamp_length(0.0, 2.0);
        assert_eq!(short, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn clamp_length_raises_below_min() {
        let v = Vec2::new(0.1, 0.0).clamp_length(1.0, 2.0);
        assert!((v.length() - 1.0).abs() < 1e-5);
        // zero vectors are never raised
        assert_eq!(Vec2::zero().clamp_length(1.0, 2.0), Vec2::zero());
    }

    #[test]
    fn div_by_zero_is_zero() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).div(0.0), Vec3::zero());
        let halved = Vec3::new(2.0, 4.0, 6.0).div(2.0);
        assert_eq!(halved, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_fn_and_component_roundtrip() {
        let v = Vec3::from_fn(|axis| axis as f32 * 10.0);
        assert_eq!(v.component(0), 0.0);
        assert_eq!(v.component(1), 10.0);
        assert_eq!(v.component(2), 20.0);
        assert_eq!(Vec2::DIM, 2);
        assert_eq!(Vec3::DIM, 3);
    }
}

#[cfg(test)]
mod params {
    use crate::{ParamUpdate, SteeringParams};

    #[test]
    fn presets_differ_where_expected() {
        let fine = SteeringParams::fine_3d();
        let coarse = SteeringParams::coarse_2d();
        assert!((fine.max_force - 0.03).abs() < 1e-6);
        assert!((fine.max_speed - 0.4).abs() < 1e-6);
        assert!((coarse.max_force - 0.2).abs() < 1e-6);
        assert!((coarse.max_speed - 1.6).abs() < 1e-6);
        assert_eq!(SteeringParams::default(), fine);
    }

    #[test]
    fn sparse_update_touches_only_set_fields() {
        let mut p = SteeringParams::fine_3d();
        let before = p;
        ParamUpdate::new().max_speed(0.5).apply_to(&mut p);

        assert!((p.max_speed - 0.5).abs() < 1e-6);
        assert_eq!(p.max_force, before.max_force);
        assert_eq!(p.separation_dist, before.separation_dist);
        assert_eq!(p.align_dist, before.align_dist);
        assert_eq!(p.cohesion_dist, before.cohesion_dist);
        assert_eq!(p.home_dist, before.home_dist);
        assert_eq!(p.separation_weight, before.separation_weight);
        assert_eq!(p.alignment_weight, before.alignment_weight);
        assert_eq!(p.cohesion_weight, before.cohesion_weight);
        assert_eq!(p.home_weight, before.home_weight);
    }

    #[test]
    fn set_ignores_unknown_keys() {
        let mut update = ParamUpdate::new();
        assert!(!update.set("unknown_field", 1.0));
        assert!(update.is_empty());

        assert!(update.set("max_speed", 0.5));
        let mut p = SteeringParams::fine_3d();
        update.apply_to(&mut p);
        assert!((p.max_speed - 0.5).abs() < 1e-6);
    }

    #[test]
    fn every_allowlisted_key_is_settable() {
        let mut update = ParamUpdate::new();
        for (i, key) in ParamUpdate::FIELDS.iter().enumerate() {
            assert!(update.set(key, i as f32), "key {key} rejected");
        }
        let mut p = SteeringParams::fine_3d();
        update.apply_to(&mut p);
        assert_eq!(p.max_force, 0.0);
        assert_eq!(p.home_weight, 9.0);
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut p = SteeringParams::coarse_2d();
        ParamUpdate::new().apply_to(&mut p);
        assert_eq!(p, SteeringParams::coarse_2d());
    }
}

#[cfg(test)]
mod bounds {
    use crate::{Bounds, BoidsError, FlockRng, Vec3};

    #[test]
    fn rejects_inverted_axis() {
        let r = Bounds::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        match r {
            Err(BoidsError::InvalidBounds { axis, .. }) => assert_eq!(axis, 1),
            other => panic!("expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_axis() {
        let r = Bounds::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(r.is_err());
    }

    #[test]
    fn samples_stay_inside() {
        let bounds = Bounds::<Vec3>::centered(10.0);
        assert_eq!(bounds.min(), Vec3::new(-10.0, -10.0, -10.0));
        assert_eq!(bounds.max(), Vec3::new(10.0, 10.0, 10.0));
        let mut rng = FlockRng::new(7);
        for _ in 0..100 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn zero_extent_axis_pins_coordinate() {
        let bounds =
            Bounds::new(Vec3::new(-1.0, 2.0, -1.0), Vec3::new(1.0, 2.0, 1.0)).unwrap();
        let mut rng = FlockRng::new(0);
        for _ in 0..10 {
            assert_eq!(bounds.sample(&mut rng).y, 2.0);
        }
    }

    #[test]
    fn same_seed_same_scatter() {
        let bounds = Bounds::<Vec3>::centered(5.0);
        let mut a = FlockRng::new(42);
        let mut b = FlockRng::new(42);
        for _ in 0..10 {
            assert_eq!(bounds.sample(&mut a), bounds.sample(&mut b));
        }
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn arithmetic_and_display() {
        assert_eq!(Tick::ZERO + 5, Tick(5));
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(7).to_string(), "T7");
    }
}
