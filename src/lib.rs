//! In-memory model of a COF (composite object) animation: the layers that
//! make up a character, the per-direction and per-frame render order, and the
//! state a viewer keeps while browsing and editing it.

use log::*;
use thiserror::Error;

pub mod edit;
pub mod kind;
pub mod nav;
pub mod viewer;

pub use edit::EditError;
pub use kind::{layer_name, DrawEffect, LayerType, WeaponClass};
pub use nav::Navigation;
pub use viewer::Viewer;

/// Frames per second of an animation played at full speed.
pub const BASE_FRAME_RATE: f64 = 25.;
/// Fixed-point unit of [`Cof::speed`]; a speed of 256 plays at [`BASE_FRAME_RATE`].
pub const SPEED_UNIT: f64 = 256.;
/// A COF has one layer per [`LayerType`] at most.
pub const MAX_LAYERS: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerType,
    pub shadow: u8,
    pub selectable: bool,
    pub transparent: bool,
    pub draw_effect: DrawEffect,
    pub weapon_class: WeaponClass,
}

impl Layer {
    pub fn new(kind: LayerType) -> Self {
        Self {
            kind,
            shadow: 0,
            selectable: true,
            transparent: false,
            draw_effect: DrawEffect::Normal,
            weapon_class: WeaponClass::HandToHand,
        }
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow > 0
    }

    /// Replaces `Unknown` codes that have a named variant with that variant.
    pub fn canonical(self) -> Self {
        Self {
            kind: LayerType::from(u8::from(self.kind)),
            draw_effect: DrawEffect::from(u8::from(self.draw_effect)),
            weapon_class: WeaponClass::from(u8::from(self.weapon_class)),
            ..self
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CofError {
    #[error("a composite object needs at least one direction")]
    NoDirections,
    #[error("priority table has {found} direction(s), expected {expected}")]
    PriorityDirections { expected: usize, found: usize },
    #[error("direction {0} has no priority frames")]
    EmptyDirection(usize),
}

/// Render order of the layers for one frame, first to last, as layer indices.
pub type FrameOrder = Vec<usize>;

/// A loaded composite object.
///
/// Layers are addressed by position; the priority table refers to them by that
/// position too, so every structural edit goes through [`Cof::delete_layer`]
/// and [`Cof::add_layer`] which keep both in step.
#[derive(Debug, Clone, PartialEq)]
pub struct Cof {
    pub(crate) layers: Vec<Layer>,
    pub frames_per_direction: usize,
    pub speed: u16,
    pub(crate) priority: Vec<Vec<FrameOrder>>,
    pub(crate) revision: u64,
}

impl Cof {
    pub fn new(
        layers: Vec<Layer>,
        directions: usize,
        frames_per_direction: usize,
        speed: u16,
        priority: Vec<Vec<FrameOrder>>,
    ) -> Result<Self, CofError> {
        if directions == 0 {
            return Err(CofError::NoDirections);
        }
        if priority.len() != directions {
            return Err(CofError::PriorityDirections {
                expected: directions,
                found: priority.len(),
            });
        }
        if let Some(dir) = priority.iter().position(Vec::is_empty) {
            return Err(CofError::EmptyDirection(dir));
        }
        if priority.iter().any(|frames| frames.len() != frames_per_direction) {
            debug!(
                "priority table length differs from {} frames per direction, frames will wrap",
                frames_per_direction
            );
        }
        Ok(Self {
            layers: layers.into_iter().map(Layer::canonical).collect(),
            frames_per_direction,
            speed,
            priority,
            revision: 0,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of directions, one per entry of the priority table.
    pub fn directions(&self) -> usize {
        self.priority.len()
    }

    pub fn priority(&self) -> &[Vec<FrameOrder>] {
        &self.priority
    }

    /// Number of priority frames stored for `direction`.
    pub fn frame_count(&self, direction: usize) -> usize {
        self.priority.get(direction).map(Vec::len).unwrap_or(0)
    }

    /// Bumped on every change to the layer sequence.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Playback rate in frames per second. A zero speed plays at the default rate.
    pub fn frame_rate(&self) -> f64 {
        let fps = BASE_FRAME_RATE * (self.speed as f64 / SPEED_UNIT);
        if fps == 0. {
            BASE_FRAME_RATE
        } else {
            fps
        }
    }

    /// Length of one direction's cycle in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.frames_per_direction as f64 * (1. / self.frame_rate()) * 1000.
    }

    /// Layers of `direction` at `frame`, first to last.
    ///
    /// Frames past the end of the direction's table wrap around.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is not below [`Cof::directions`].
    pub fn render_order(&self, direction: usize, frame: usize) -> &[usize] {
        let frames = &self.priority[direction];
        &frames[frame % frames.len()]
    }
}
