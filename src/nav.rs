//! Selection cursors of one viewer over a [`Cof`].

use super::*;

/// Detached copy of the selected layer, tagged with the revision it was taken at.
#[derive(Debug, Clone)]
struct Snapshot {
    layer: Layer,
    revision: u64,
}

/// Selected layer, direction and frame.
///
/// Cursors are clamped against the object on every change, so any value the
/// host hands over lands on a valid index. The selected layer is kept as a
/// copy; it starts out unbound and is bound by the first [`set_layer`] or
/// [`refresh`].
///
/// [`set_layer`]: Navigation::set_layer
/// [`refresh`]: Navigation::refresh
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    layer: usize,
    direction: usize,
    frame: usize,
    snapshot: Option<Snapshot>,
}

fn clamp(index: isize, len: usize) -> usize {
    if index < 0 || len == 0 {
        0
    } else {
        (index as usize).min(len - 1)
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer_index(&self) -> usize {
        self.layer
    }

    pub fn direction_index(&self) -> usize {
        self.direction
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn set_layer(&mut self, cof: &Cof, index: isize) {
        self.layer = clamp(index, cof.layer_count());
        if self.layer as isize != index {
            trace!("layer {} clamped to {}", index, self.layer);
        }
        self.bind(cof);
    }

    /// Also pulls the frame cursor into the new direction's frame range.
    pub fn set_direction(&mut self, cof: &Cof, index: isize) {
        self.direction = clamp(index, cof.directions());
        self.frame = clamp(self.frame as isize, cof.frame_count(self.direction));
    }

    pub fn set_frame(&mut self, cof: &Cof, index: isize) {
        self.frame = clamp(index, cof.frame_count(self.direction));
    }

    /// Re-clamps every cursor and copies the selected layer again.
    ///
    /// Needed after the layer sequence changed under this navigation.
    pub fn refresh(&mut self, cof: &Cof) {
        self.layer = clamp(self.layer as isize, cof.layer_count());
        self.direction = clamp(self.direction as isize, cof.directions());
        self.frame = clamp(self.frame as isize, cof.frame_count(self.direction));
        self.bind(cof);
    }

    fn bind(&mut self, cof: &Cof) {
        self.snapshot = cof.layer(self.layer).map(|layer| Snapshot {
            layer: layer.clone(),
            revision: cof.revision(),
        });
        trace!("bound layer {} at revision {}", self.layer, cof.revision());
    }

    /// The selected layer, unless the copy predates the last layer edit.
    pub fn selected_layer(&self, cof: &Cof) -> Option<&Layer> {
        self.snapshot
            .as_ref()
            .filter(|x| x.revision == cof.revision())
            .map(|x| &x.layer)
    }

    pub fn is_bound(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn is_stale(&self, cof: &Cof) -> bool {
        self.selected_layer(cof).is_none()
    }

    pub fn current_render_order<'a>(&self, cof: &'a Cof) -> &'a [usize] {
        let direction = self.direction.min(cof.directions() - 1);
        cof.render_order(direction, self.frame)
    }

    pub fn dispose(&mut self) {
        self.snapshot = None;
    }
}
