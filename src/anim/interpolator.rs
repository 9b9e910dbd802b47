//! Back-and-forth morph of a point set between two layouts.
//!
//! Each point orbits the midpoint of its (source, target) pair. Once active,
//! its spherical offset from that pivot is stepped by a fixed angular delta
//! every tick, following a repeating four-band cycle:
//!
//! | local counter        | action                   |
//! |----------------------|--------------------------|
//! | `0 .. unit`          | subtract delta (outward) |
//! | `unit .. 4*unit`     | hold at target           |
//! | `4*unit .. 5*unit`   | add delta (back)         |
//! | `5*unit .. 13*unit`  | hold at source           |
//!
//! The counter wraps to zero at `13*unit`.

use glam::Vec3;
use log::debug;

use crate::error::{Result, SketchError};
use crate::math::{pivot, Spherical};
use crate::scene::{NodeId, Scene};

/// Tick boundaries of one morph cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseBands {
    pub morph_out_end: u32,
    pub hold_far_end: u32,
    pub morph_back_end: u32,
    pub cycle_len: u32,
}

impl PhaseBands {
    pub fn from_unit(unit: u32) -> Self {
        Self {
            morph_out_end: unit,
            hold_far_end: 4 * unit,
            morph_back_end: 5 * unit,
            cycle_len: 13 * unit,
        }
    }

    pub fn phase_at(&self, counter: u32) -> Phase {
        if counter < self.morph_out_end {
            Phase::MorphingOut
        } else if counter < self.hold_far_end {
            Phase::HoldingFar
        } else if counter < self.morph_back_end {
            Phase::MorphingBack
        } else {
            Phase::HoldingNear
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Dormant,
    MorphingOut,
    HoldingFar,
    MorphingBack,
    HoldingNear,
}

/// Per-tick change in azimuth (`theta`) and polar angle (`phi`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularDelta {
    pub theta: f32,
    pub phi: f32,
}

#[derive(Copy, Clone, Debug, Default)]
struct AnimationState {
    counter: u32,
    delta: Option<AngularDelta>,
}

#[derive(Copy, Clone, Debug)]
struct PointPair {
    target: Vec3,
    pivot: Vec3,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InterpolatorConfig {
    /// Ticks spent morphing in either direction
    pub unit: u32,
    /// Global progress added per tick; index `i` starts once progress exceeds `i`
    pub progress_step: f32,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            unit: 500,
            progress_step: 1.0,
        }
    }
}

pub struct PositionalInterpolator {
    handles: Vec<NodeId>,
    pairs: Vec<PointPair>,
    states: Vec<AnimationState>,
    bands: PhaseBands,
    unit: u32,
    progress: f32,
    progress_step: f32,
}

impl PositionalInterpolator {
    /// Pairs `sources[i]` with `targets[i]` and binds both to `handles[i]`.
    ///
    /// Fails on any length mismatch, non-finite coordinate, zero `unit` or a
    /// progress step that is not a positive finite number.
    pub fn new(
        handles: Vec<NodeId>,
        sources: &[Vec3],
        targets: &[Vec3],
        config: InterpolatorConfig,
    ) -> Result<Self> {
        if sources.len() != targets.len() {
            return Err(SketchError::LengthMismatch {
                sources: sources.len(),
                targets: targets.len(),
            });
        }
        if handles.len() != sources.len() {
            return Err(SketchError::HandleMismatch {
                handles: handles.len(),
                points: sources.len(),
            });
        }
        if config.unit == 0 {
            return Err(SketchError::InvalidUnit);
        }
        if !(config.progress_step.is_finite() && config.progress_step > 0.0) {
            return Err(SketchError::InvalidStep(config.progress_step));
        }

        let pairs = sources
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(index, (&source, &target))| {
                if !(source.is_finite() && target.is_finite()) {
                    return Err(SketchError::NonFinitePoint { index });
                }
                Ok(PointPair {
                    target,
                    pivot: pivot(source, target),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            states: vec![AnimationState::default(); pairs.len()],
            handles,
            pairs,
            bands: PhaseBands::from_unit(config.unit),
            unit: config.unit,
            progress: 0.0,
            progress_step: config.progress_step,
        })
    }

    /// Advances global progress and steps every active node in `scene`.
    /// Handles that do not resolve in `scene` are skipped.
    pub fn tick(&mut self, scene: &mut Scene) {
        self.progress += self.progress_step;

        let active = self.active_count();
        for i in 0..active {
            if let Some(node) = scene.get_mut(self.handles[i]) {
                let mut position = node.position;
                self.animate(i, &mut position);
                node.position = position;
            }
        }
    }

    /// Steps pair `i` once, moving `position` around its pivot.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid pair index.
    pub fn animate(&mut self, i: usize, position: &mut Vec3) {
        let pair = self.pairs[i];
        let unit = self.unit as f32;
        let bands = self.bands;
        let state = &mut self.states[i];

        let delta = *state.delta.get_or_insert_with(|| {
            let from = Spherical::from_vec3(*position - pair.pivot);
            let to = Spherical::from_vec3(pair.target - pair.pivot);
            let delta = AngularDelta {
                theta: (from.theta - to.theta) / unit,
                phi: (from.phi - to.phi) / unit,
            };
            debug!("pair {i} activated with delta {delta:?}");
            delta
        });

        let sign = match bands.phase_at(state.counter) {
            Phase::MorphingOut => -1.0,
            Phase::MorphingBack => 1.0,
            _ => 0.0,
        };

        if sign != 0.0 {
            let mut sph = Spherical::from_vec3(*position - pair.pivot);
            sph.theta += sign * delta.theta;
            sph.phi += sign * delta.phi;
            sph.make_safe();
            *position = pair.pivot + sph.to_vec3();
        }

        state.counter += 1;
        if state.counter >= bands.cycle_len {
            state.counter = 0;
        }
    }

    /// Number of leading indices that have started animating.
    pub fn active_count(&self) -> usize {
        // index i is active when progress > i
        let started = self.progress.ceil().max(0.0) as usize;
        started.min(self.pairs.len())
    }

    pub fn phase(&self, i: usize) -> Phase {
        match self.states.get(i) {
            Some(state) if state.delta.is_some() => self.bands.phase_at(state.counter),
            _ => Phase::Dormant,
        }
    }

    pub fn delta(&self, i: usize) -> Option<AngularDelta> {
        self.states.get(i).and_then(|s| s.delta)
    }

    pub fn pivot(&self, i: usize) -> Option<Vec3> {
        self.pairs.get(i).map(|p| p.pivot)
    }

    pub fn target(&self, i: usize) -> Option<Vec3> {
        self.pairs.get(i).map(|p| p.target)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn bands(&self) -> PhaseBands {
        self.bands
    }

    pub fn handles(&self) -> &[NodeId] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, NodeKind};

    fn single(source: Vec3, target: Vec3, unit: u32) -> (Scene, PositionalInterpolator) {
        let mut scene = Scene::new();
        let id = scene.add(Node::new("p", NodeKind::Cube, source));
        let config = InterpolatorConfig {
            unit,
            progress_step: 1.0,
        };
        let interp = PositionalInterpolator::new(vec![id], &[source], &[target], config).unwrap();
        (scene, interp)
    }

    #[test]
    fn bands_follow_unit() {
        let bands = PhaseBands::from_unit(10);
        assert_eq!(bands.phase_at(0), Phase::MorphingOut);
        assert_eq!(bands.phase_at(9), Phase::MorphingOut);
        assert_eq!(bands.phase_at(10), Phase::HoldingFar);
        assert_eq!(bands.phase_at(39), Phase::HoldingFar);
        assert_eq!(bands.phase_at(40), Phase::MorphingBack);
        assert_eq!(bands.phase_at(50), Phase::HoldingNear);
        assert_eq!(bands.cycle_len, 130);
    }

    #[test]
    fn rejects_bad_config() {
        let id = Scene::new().add(Node::new("p", NodeKind::Cube, Vec3::ZERO));
        let zero_unit = InterpolatorConfig {
            unit: 0,
            progress_step: 1.0,
        };
        assert_eq!(
            PositionalInterpolator::new(vec![id], &[Vec3::ZERO], &[Vec3::X], zero_unit).err(),
            Some(SketchError::InvalidUnit)
        );

        let nan_step = InterpolatorConfig {
            unit: 5,
            progress_step: f32::NAN,
        };
        assert!(matches!(
            PositionalInterpolator::new(vec![id], &[Vec3::ZERO], &[Vec3::X], nan_step),
            Err(SketchError::InvalidStep(_))
        ));
    }

    #[test]
    fn rejects_non_finite_points() {
        let id = Scene::new().add(Node::new("p", NodeKind::Cube, Vec3::ZERO));
        let err = PositionalInterpolator::new(
            vec![id],
            &[Vec3::ZERO],
            &[Vec3::new(f32::INFINITY, 0.0, 0.0)],
            InterpolatorConfig::default(),
        )
        .err();
        assert_eq!(err, Some(SketchError::NonFinitePoint { index: 0 }));
    }

    #[test]
    fn phase_walks_through_cycle() {
        let (mut scene, mut interp) = single(Vec3::new(0.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 0.0), 2);
        assert_eq!(interp.phase(0), Phase::Dormant);

        let mut seen = Vec::new();
        for _ in 0..26 {
            interp.tick(&mut scene);
            seen.push(interp.phase(0));
        }
        // counter after 2 ticks is 2 -> holding far, after 8 -> morphing back
        assert_eq!(seen[0], Phase::MorphingOut);
        assert_eq!(seen[1], Phase::HoldingFar);
        assert_eq!(seen[7], Phase::MorphingBack);
        assert_eq!(seen[9], Phase::HoldingNear);
        assert_eq!(seen[25], Phase::MorphingOut);
    }

    #[test]
    fn coincident_pair_stays_put() {
        let p = Vec3::new(3.0, 4.0, 5.0);
        let (mut scene, mut interp) = single(p, p, 4);
        for _ in 0..60 {
            interp.tick(&mut scene);
        }
        let pos = scene.get(interp.handles()[0]).unwrap().position;
        assert!(pos.is_finite());
        assert!((pos - p).length() < 1e-5);
    }
}
