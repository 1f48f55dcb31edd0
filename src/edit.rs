use super::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("no layer at index {index}, the object has {count}")]
    NoSuchLayer { index: usize, count: usize },
    #[error("a {} layer already exists", .0.name())]
    DuplicateLayer(LayerType),
    #[error("a composite object holds at most {} layers", MAX_LAYERS)]
    TooManyLayers,
}

impl Cof {
    /// Removes the layer at `index` and returns it.
    ///
    /// The remaining layers keep their relative order. Priority entries that
    /// referred to the removed layer are dropped and entries past it are
    /// shifted down so every frame still names the same layers.
    pub fn delete_layer(&mut self, index: usize) -> Result<Layer, EditError> {
        let count = self.layers.len();
        if index >= count {
            return Err(EditError::NoSuchLayer { index, count });
        }

        let layer = self.layers.remove(index);
        for order in self.priority.iter_mut().flatten() {
            order.retain(|&i| i != index);
            for i in order.iter_mut().filter(|i| **i > index) {
                *i -= 1;
            }
        }
        self.revision += 1;
        debug!(
            "deleted layer {} ({}), {} left",
            index,
            layer.kind.name(),
            self.layers.len()
        );
        Ok(layer)
    }

    /// Appends `layer` and returns its index.
    ///
    /// The new layer is drawn last in every frame of every direction.
    pub fn add_layer(&mut self, layer: Layer) -> Result<usize, EditError> {
        let layer = layer.canonical();
        if self.layers.iter().any(|x| x.kind == layer.kind) {
            return Err(EditError::DuplicateLayer(layer.kind));
        }
        if self.layers.len() >= MAX_LAYERS {
            return Err(EditError::TooManyLayers);
        }

        let index = self.layers.len();
        debug!("adding layer {} ({})", index, layer.kind.name());
        self.layers.push(layer);
        for order in self.priority.iter_mut().flatten() {
            order.push(index);
        }
        self.revision += 1;
        Ok(index)
    }
}
