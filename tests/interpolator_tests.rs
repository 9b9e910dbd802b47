use glam::Vec3;
use scene_sketches::anim::{InterpolatorConfig, Phase, PositionalInterpolator};
use scene_sketches::math::{pivot, Spherical};
use scene_sketches::scene::{Node, NodeId, NodeKind, Scene};
use scene_sketches::SketchError;

fn setup(sources: &[Vec3], targets: &[Vec3], unit: u32, progress_step: f32) -> (Scene, PositionalInterpolator) {
    let mut scene = Scene::new();
    let handles: Vec<NodeId> = sources
        .iter()
        .enumerate()
        .map(|(i, p)| scene.add(Node::new(format!("p{i}"), NodeKind::Tile { uv: Default::default() }, *p)))
        .collect();
    let interp = PositionalInterpolator::new(handles, sources, targets, InterpolatorConfig { unit, progress_step }).unwrap();
    (scene, interp)
}

fn position(scene: &Scene, interp: &PositionalInterpolator, i: usize) -> Vec3 {
    scene.get(interp.handles()[i]).unwrap().position
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn mismatched_lengths_fail() {
        let mut scene = Scene::new();
        let handles = vec![
            scene.add(Node::new("a", NodeKind::Cube, Vec3::ZERO)),
            scene.add(Node::new("b", NodeKind::Cube, Vec3::ZERO)),
        ];
        let result = PositionalInterpolator::new(
            handles,
            &[Vec3::ZERO, Vec3::X],
            &[Vec3::Y, Vec3::Z, Vec3::ONE],
            InterpolatorConfig::default(),
        );
        assert_eq!(result.err(), Some(SketchError::LengthMismatch { sources: 2, targets: 3 }));
    }

    #[test]
    fn mismatched_handles_fail() {
        let mut scene = Scene::new();
        let handles = vec![scene.add(Node::new("a", NodeKind::Cube, Vec3::ZERO))];
        let result = PositionalInterpolator::new(
            handles,
            &[Vec3::ZERO, Vec3::X],
            &[Vec3::Y, Vec3::Z],
            InterpolatorConfig::default(),
        );
        assert_eq!(result.err(), Some(SketchError::HandleMismatch { handles: 1, points: 2 }));
    }

    #[test]
    fn pivots_are_midpoints() {
        let sources = [Vec3::new(0.0, 0.0, 200.0), Vec3::new(-10.0, 4.0, 2.0)];
        let targets = [Vec3::new(200.0, 0.0, 0.0), Vec3::new(10.0, -4.0, 6.0)];
        let (_, interp) = setup(&sources, &targets, 10, 1.0);
        assert_eq!(interp.pivot(0), Some(Vec3::new(100.0, 0.0, 100.0)));
        assert_eq!(interp.pivot(1), Some(Vec3::new(0.0, 0.0, 4.0)));
        assert_eq!(interp.pivot(2), None);
    }
}

#[cfg(test)]
mod morph_tests {
    use super::*;

    const SOURCE: Vec3 = Vec3::new(0.0, 0.0, 200.0);
    const TARGET: Vec3 = Vec3::new(120.0, 160.0, 0.0);

    #[test]
    fn reaches_target_after_one_unit() {
        let (mut scene, mut interp) = setup(&[SOURCE], &[TARGET], 500, 1.0);
        for _ in 0..500 {
            interp.tick(&mut scene);
        }

        let distance = position(&scene, &interp, 0).distance(TARGET);
        assert!(distance < 200.0 * 1e-3, "ended {distance} from target");
        assert_eq!(interp.phase(0), Phase::HoldingFar);
    }

    #[test]
    fn keeps_radius_around_pivot() {
        let (mut scene, mut interp) = setup(&[SOURCE], &[TARGET], 100, 1.0);
        let center = pivot(SOURCE, TARGET);
        let radius = SOURCE.distance(center);

        for _ in 0..100 {
            interp.tick(&mut scene);
            let r = position(&scene, &interp, 0).distance(center);
            assert!((r - radius).abs() < 1e-2);
        }
    }

    #[test]
    fn holds_between_morphs() {
        let (mut scene, mut interp) = setup(&[SOURCE], &[TARGET], 20, 1.0);
        for _ in 0..20 {
            interp.tick(&mut scene);
        }
        let far = position(&scene, &interp, 0);
        for _ in 0..60 {
            interp.tick(&mut scene);
        }
        assert_eq!(position(&scene, &interp, 0), far);
        assert_eq!(interp.phase(0), Phase::MorphingBack);
    }

    #[test]
    fn returns_to_source_after_full_cycle() {
        let unit = 50;
        let (mut scene, mut interp) = setup(&[SOURCE], &[TARGET], unit, 1.0);

        for _ in 0..5 * unit {
            interp.tick(&mut scene);
        }
        assert!(position(&scene, &interp, 0).distance(SOURCE) < 1e-2);

        for _ in 5 * unit..13 * unit {
            interp.tick(&mut scene);
        }
        assert!(position(&scene, &interp, 0).distance(SOURCE) < 1e-2);
        assert_eq!(interp.phase(0), Phase::MorphingOut);

        // a second cycle behaves like the first
        for _ in 0..unit {
            interp.tick(&mut scene);
        }
        assert!(position(&scene, &interp, 0).distance(TARGET) < 1e-1);
    }

    #[test]
    fn delta_is_fixed_once_computed() {
        let (mut scene, mut interp) = setup(&[SOURCE], &[TARGET], 30, 1.0);
        assert!(interp.delta(0).is_none());

        interp.tick(&mut scene);
        let first = interp.delta(0).unwrap();
        for _ in 0..13 * 30 * 2 {
            interp.tick(&mut scene);
            assert_eq!(interp.delta(0), Some(first));
        }
    }

    #[test]
    fn delta_uses_position_at_activation() {
        let sources = [Vec3::new(0.0, 0.0, 50.0), Vec3::new(0.0, 0.0, -50.0)];
        let targets = [Vec3::new(50.0, 0.0, 0.0), Vec3::new(-50.0, 0.0, 0.0)];
        let (mut scene, mut interp) = setup(&sources, &targets, 10, 1.0);

        interp.tick(&mut scene);
        assert!(interp.delta(1).is_none());

        // move the second point before it starts animating
        let moved = Vec3::new(0.0, 30.0, -40.0);
        let id = interp.handles()[1];
        scene.get_mut(id).unwrap().position = moved;
        interp.tick(&mut scene);

        let center = interp.pivot(1).unwrap();
        let from = Spherical::from_vec3(moved - center);
        let to = Spherical::from_vec3(targets[1] - center);
        let delta = interp.delta(1).unwrap();
        assert!((delta.theta - (from.theta - to.theta) / 10.0).abs() < 1e-6);
        assert!((delta.phi - (from.phi - to.phi) / 10.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod stagger_tests {
    use super::*;

    #[test]
    fn index_waits_for_progress() {
        let sources = [Vec3::X * 10.0, Vec3::Y * 10.0, Vec3::Z * 10.0];
        let targets = [Vec3::X * -10.0, Vec3::Y * -10.0, Vec3::Z * -10.0];
        let (mut scene, mut interp) = setup(&sources, &targets, 10, 0.5);

        interp.tick(&mut scene);
        interp.tick(&mut scene);
        assert_eq!(interp.active_count(), 1);
        assert_eq!(interp.phase(1), Phase::Dormant);
        assert_eq!(position(&scene, &interp, 1), sources[1]);

        interp.tick(&mut scene);
        assert_eq!(interp.active_count(), 2);
        assert_eq!(interp.phase(1), Phase::MorphingOut);

        for _ in 0..10 {
            interp.tick(&mut scene);
        }
        assert_eq!(interp.active_count(), 3);
        assert!((interp.progress() - 6.5).abs() < 1e-6);
    }
}

#[cfg(test)]
mod numeric_tests {
    use super::*;
    use scene_sketches::math::POLE_EPSILON;
    use std::f32::consts::PI;

    #[test]
    fn pole_to_pole_never_produces_nan() {
        let source = Vec3::ZERO;
        let target = Vec3::new(0.0, 200.0, 0.0);
        let (mut scene, mut interp) = setup(&[source], &[target], 40, 1.0);
        let center = pivot(source, target);

        for _ in 0..13 * 40 * 2 {
            interp.tick(&mut scene);
            let p = position(&scene, &interp, 0);
            assert!(p.is_finite());
            assert!((p.distance(center) - 100.0).abs() < 1e-2);

            let phi = Spherical::from_vec3(p - center).phi;
            assert!(phi >= POLE_EPSILON - 1e-5, "phi {phi} below the clamp");
            assert!(phi <= PI - POLE_EPSILON + 1e-5, "phi {phi} above the clamp");
        }
    }

    #[test]
    fn pole_morph_still_lands_near_target() {
        let source = Vec3::ZERO;
        let target = Vec3::new(0.0, 200.0, 0.0);
        let (mut scene, mut interp) = setup(&[source], &[target], 40, 1.0);

        for _ in 0..40 {
            interp.tick(&mut scene);
        }
        assert!(position(&scene, &interp, 0).distance(target) < 1e-2);

        for _ in 40..200 {
            interp.tick(&mut scene);
        }
        assert!(position(&scene, &interp, 0).distance(source) < 1e-2);
    }
}
