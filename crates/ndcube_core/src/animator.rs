//! Per-frame driver for the hypercube view
//!
//! Owns the canonical hypercube for the current dimension and recomputes
//! the projected geometry every frame from it. Rotations are always built
//! from the elapsed time and applied to the base vertices; rotated
//! coordinates are never fed back in.

use std::ops::Range;
use rand::{rngs::StdRng, SeedableRng};
use ndcube_math::{DisplayMatrix, MathError, Rotation};
use crate::error::CoreError;
use crate::hypercube::{Facet, Hypercube};
use crate::morph::DimensionMorph;
use crate::params::{ProjectionKind, SpinAxis, ViewParams};
use crate::polytope::Polytope;
use crate::projector::{ProjectedGeometry, Projector};

/// Default length of a dimension morph in seconds
pub const DEFAULT_MORPH_DURATION: f64 = 2.0;

/// A UI-level change to the view, applied between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamChange {
    SetDimension(i64),
    /// Add to the current dimension (clamped to the valid range)
    StepDimension(i64),
    /// Step up one dimension; only honoured in static mode
    NextDimension,
    /// Animate into the given dimension
    MorphTo(i64),
    SetSize(f64),
    /// Multiply the current size
    ScaleSize(f64),
    /// Add to the current speed
    AdjustSpeed(f64),
    SetRecursionDepth(usize),
    ToggleAnimation,
    ToggleStaticMode,
    CycleProjection,
    ToggleFacets,
    /// Step the spin direction about one display axis
    CycleSpin(SpinAxis),
}

/// A run of points in the frame geometry that shares one color source
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub points: Range<usize>,
    /// Facet hue, `None` for the main cube
    pub hue: Option<f64>,
}

/// Frame-driven hypercube animation
pub struct Animator {
    params: ViewParams,
    cube: Hypercube,
    facets: Vec<Facet>,
    morph: Option<DimensionMorph>,
    morph_duration: f64,
    /// Animation time in seconds; advances only while rotating
    elapsed: f64,
    rng: StdRng,
    /// Matrix for [`ProjectionKind::Random`], drawn once per dimension
    random_display: Option<DisplayMatrix>,
    /// Display-space spin angles about x, y and z in radians
    spin_angles: [f64; 3],
    geometry: ProjectedGeometry,
    segments: Vec<Segment>,
    /// Bumped whenever vertex or edge counts may change
    topology_generation: u64,
}

impl Animator {
    /// Create an animator and generate the initial hypercube
    pub fn new(params: ViewParams) -> Result<Self, CoreError> {
        Self::with_seed(params, 0)
    }

    /// Create an animator whose projection jitter uses `seed`
    pub fn with_seed(params: ViewParams, seed: u64) -> Result<Self, CoreError> {
        let cube = Hypercube::new(params.dimension(), params.size())?;
        let mut animator = Self {
            params,
            cube,
            facets: Vec::new(),
            morph: None,
            morph_duration: DEFAULT_MORPH_DURATION,
            elapsed: 0.0,
            rng: StdRng::seed_from_u64(seed),
            random_display: None,
            spin_angles: [0.0; 3],
            geometry: ProjectedGeometry::new(),
            segments: Vec::new(),
            topology_generation: 0,
        };
        animator.rebuild_facets()?;
        animator.reproject()?;
        Ok(animator)
    }

    /// Set how long dimension morphs take
    pub fn with_morph_duration(mut self, seconds: f64) -> Self {
        self.morph_duration = seconds.max(0.0);
        self
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn cube(&self) -> &Hypercube {
        &self.cube
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    /// The running dimension morph, if any
    pub fn morph(&self) -> Option<&DimensionMorph> {
        self.morph.as_ref()
    }

    /// Geometry of the last computed frame
    pub fn geometry(&self) -> &ProjectedGeometry {
        &self.geometry
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn topology_generation(&self) -> u64 {
        self.topology_generation
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.elapsed * self.params.speed()
    }

    /// Spin of the projected object about the display x, y and z axes
    pub fn spin_angles(&self) -> [f64; 3] {
        self.spin_angles
    }

    /// Matrix currently used by the random projection, if one has been drawn
    pub fn random_display(&self) -> Option<&DisplayMatrix> {
        self.random_display.as_ref()
    }

    /// Breathing scale factor `1 + amplitude · sin(t)`
    pub fn pulse_scale(&self, amplitude: f64) -> f64 {
        1.0 + amplitude * self.elapsed.sin()
    }

    /// Hue cycling through [0, 1) once every ten seconds
    pub fn hue(&self) -> f64 {
        (self.elapsed * 0.1).rem_euclid(1.0)
    }

    /// Advance by `dt` seconds and recompute the geometry.
    ///
    /// When animation is stopped the previous frame is returned untouched.
    pub fn frame(&mut self, dt: f64) -> Result<&ProjectedGeometry, CoreError> {
        if !self.params.animating {
            return Ok(&self.geometry);
        }
        let dt = dt.max(0.0);

        if !self.params.static_mode {
            self.elapsed += dt;
        }
        for (angle, direction) in self.spin_angles.iter_mut().zip(self.params.spin) {
            *angle = (*angle + self.params.spin_speed() * direction * dt)
                .rem_euclid(std::f64::consts::TAU);
        }
        self.params.drift_distortion(dt);
        if let Some(morph) = &mut self.morph {
            morph.advance(dt);
        }

        if self.morph.as_ref().is_some_and(|m| m.is_finished()) {
            if let Some(morph) = self.morph.take() {
                self.cube = morph.finish();
                self.rebuild_facets()?;
                self.topology_generation += 1;
                log::info!("Morph complete: now {}D", self.cube.dimension());
            }
        }

        self.reproject()?;
        Ok(&self.geometry)
    }

    /// Apply a UI change. Invalid values are rejected and leave the view as it was.
    pub fn apply(&mut self, change: ParamChange) -> Result<(), CoreError> {
        match change {
            ParamChange::SetDimension(n) => {
                let n = self.params.validate_dimension(n)?;
                self.regenerate(n, self.params.size())?;
            }
            ParamChange::StepDimension(delta) => {
                let target = (self.params.dimension() as i64 + delta)
                    .clamp(1, self.params.max_dimension() as i64);
                self.regenerate(target as usize, self.params.size())?;
            }
            ParamChange::NextDimension => {
                if !self.params.static_mode {
                    log::debug!("Next dimension ignored outside static mode");
                    return Ok(());
                }
                if self.params.dimension() >= self.params.max_dimension() {
                    log::debug!("Already at maximum dimension {}", self.params.max_dimension());
                    return Ok(());
                }
                self.regenerate(self.params.dimension() + 1, self.params.size())?;
            }
            ParamChange::MorphTo(n) => {
                let n = self.params.validate_dimension(n)?;
                self.start_morph(n)?;
            }
            ParamChange::SetSize(size) => {
                self.resize(size)?;
            }
            ParamChange::ScaleSize(factor) => {
                self.resize(self.params.size() * factor)?;
            }
            ParamChange::AdjustSpeed(delta) => {
                self.params.set_speed(self.params.speed() + delta)?;
                log::info!("Speed: {:.2} rad/s", self.params.speed());
            }
            ParamChange::SetRecursionDepth(depth) => {
                self.params.set_recursion_depth(depth)?;
                log::info!("Recursion depth: {}", depth);
            }
            ParamChange::ToggleAnimation => {
                let on = self.params.toggle_animation();
                log::info!("Animation {}", if on { "started" } else { "stopped" });
            }
            ParamChange::ToggleStaticMode => {
                let on = self.params.toggle_static_mode();
                log::info!("Static mode: {}", if on { "ON" } else { "OFF" });
                self.regenerate(self.params.dimension(), self.params.size())?;
            }
            ParamChange::CycleProjection => {
                let kind = self.params.cycle_projection();
                log::info!("Projection: {:?}", kind);
            }
            ParamChange::ToggleFacets => {
                self.params.show_facets = !self.params.show_facets;
                self.rebuild_facets()?;
                self.topology_generation += 1;
            }
            ParamChange::CycleSpin(axis) => {
                let direction = self.params.cycle_spin(axis);
                log::info!("Spin {:?}: {}", axis, direction);
            }
        }

        // Stopped views still reflect the change
        self.reproject()?;
        Ok(())
    }

    /// Replace the base hypercube. Any running morph is dropped.
    fn regenerate(&mut self, dimension: usize, size: f64) -> Result<(), CoreError> {
        let cube = Hypercube::new(dimension, size)?;
        if dimension != self.cube.dimension() {
            self.random_display = None;
        }
        self.params.set_dimension(dimension as i64)?;
        self.params.set_size(size)?;
        self.cube = cube;
        self.morph = None;
        self.rebuild_facets()?;
        self.topology_generation += 1;
        log::info!(
            "Generated {}D hypercube: {} vertices, {} edges",
            dimension,
            self.cube.vertex_count(),
            self.cube.edge_count()
        );
        Ok(())
    }

    fn resize(&mut self, size: f64) -> Result<(), CoreError> {
        let mut checked = self.params.clone();
        checked.set_size(size)?;
        self.regenerate(self.params.dimension(), size)
    }

    fn start_morph(&mut self, dimension: usize) -> Result<(), CoreError> {
        // Morph from whatever is on screen: finish a running morph first
        if let Some(morph) = self.morph.take() {
            self.cube = morph.finish();
        }
        let target = Hypercube::new(dimension, self.params.size())?;
        self.params.set_dimension(dimension as i64)?;
        log::info!("Morphing {}D -> {}D", self.cube.dimension(), dimension);
        self.morph = Some(DimensionMorph::new(&self.cube, target, self.morph_duration));
        self.facets.clear();
        self.topology_generation += 1;
        Ok(())
    }

    fn rebuild_facets(&mut self) -> Result<(), CoreError> {
        self.facets = if self.params.show_facets && self.cube.dimension() > 3 {
            self.cube.facets()?
        } else {
            Vec::new()
        };
        Ok(())
    }

    /// Draw a fresh random display matrix when the shown dimension differs
    fn refresh_random_display(&mut self, dimension: usize) {
        if self.params.projection != ProjectionKind::Random
            || self.random_display.as_ref().is_some_and(|d| d.dim() == dimension)
        {
            return;
        }
        self.random_display = Some(DisplayMatrix::random(dimension, &mut self.rng));
        log::debug!("Drew random {}D display matrix", dimension);
    }

    fn reproject(&mut self) -> Result<(), CoreError> {
        let angle = self.angle();
        let dimension = match &self.morph {
            Some(morph) => morph.dimension(),
            None => self.cube.dimension(),
        };
        self.refresh_random_display(dimension);
        self.segments.clear();

        let projector = build_projector(
            &self.params,
            dimension,
            angle,
            self.random_display.as_ref(),
            &mut self.rng,
        )?;
        let geometry = if let Some(morph) = &self.morph {
            let geometry = projector.project(morph.shape())?;
            self.segments.push(Segment { points: 0..geometry.point_count(), hue: None });
            geometry
        } else {
            let mut geometry = projector.project(&self.cube)?;
            self.segments.push(Segment { points: 0..geometry.point_count(), hue: None });
            for facet in &self.facets {
                let start = geometry.point_count();
                geometry.append(projector.project(facet)?);
                self.segments.push(Segment {
                    points: start..geometry.point_count(),
                    hue: Some(facet.hue),
                });
            }
            geometry
        };

        self.geometry = geometry;
        Ok(())
    }
}

/// Build the projector for one frame from the current parameters
fn build_projector(
    params: &ViewParams,
    dimension: usize,
    angle: f64,
    random: Option<&DisplayMatrix>,
    rng: &mut StdRng,
) -> Result<Projector, MathError> {
    let rotation = if params.static_mode {
        Rotation::identity(dimension)
    } else {
        Rotation::uniform(dimension, params.schedule, angle)
    };
    let projector = Projector::new(&rotation).with_recursion_depth(params.recursion_depth());

    match params.projection {
        ProjectionKind::Truncate => Ok(projector),
        ProjectionKind::Oblique => {
            let display = DisplayMatrix::oblique(dimension, params.oblique_angle);
            projector.with_display(jittered(display, params.distortion, rng))
        }
        ProjectionKind::Random => {
            let display = match random {
                Some(display) if display.dim() == dimension => display.clone(),
                _ => DisplayMatrix::random(dimension, rng),
            };
            projector.with_display(jittered(display, params.distortion, rng))
        }
        // Distance is in units of the half edge so the view is independent of size
        ProjectionKind::Perspective => {
            Ok(projector.with_perspective(params.perspective_distance * params.size()))
        }
    }
}

fn jittered(display: DisplayMatrix, distortion: f64, rng: &mut StdRng) -> DisplayMatrix {
    if distortion > 0.0 {
        display.distorted(distortion, rng)
    } else {
        display
    }
}
