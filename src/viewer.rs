//! A viewer over one composite object: the commands a host UI sends and the
//! text it shows.

use super::*;


use std::fmt;

/// The four lines of the animation overview.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSummary {
    pub directions: String,
    pub frames: String,
    pub fps: String,
    pub duration: String,
}

impl AnimationSummary {
    pub fn lines(&self) -> [&str; 4] {
        [&self.directions, &self.frames, &self.fps, &self.duration]
    }
}

/// Descriptive lines of the selected layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDetails {
    pub kind: String,
    pub shadow: String,
    pub selectable: String,
    pub transparent: String,
    pub draw_effect: String,
    pub weapon_class: String,
}

impl LayerDetails {
    pub fn new(layer: &Layer) -> Self {
        Self {
            kind: format!("Type: {} ({})", layer.kind.token(), layer.kind.name()),
            shadow: format!("Shadow: {}", layer.has_shadow()),
            selectable: format!("Selectable: {}", layer.selectable),
            transparent: format!("Transparent: {}", layer.transparent),
            draw_effect: format!("Draw Effect: {}", layer.draw_effect.name()),
            weapon_class: format!(
                "Weapon Class: ({}) {}",
                layer.weapon_class.token(),
                layer.weapon_class.name()
            ),
        }
    }

    pub fn lines(&self) -> [&str; 6] {
        [
            &self.kind,
            &self.shadow,
            &self.selectable,
            &self.transparent,
            &self.draw_effect,
            &self.weapon_class,
        ]
    }
}

/// One row of the render order list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEntry {
    pub position: usize,
    pub layer: usize,
    pub name: &'static str,
}

impl fmt::Display for RenderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.name)
    }
}

/// Owns the object being edited and the navigation of the viewer showing it.
///
/// The navigation is created on first use and rebound after every structural
/// edit made through the viewer.
#[derive(Debug)]
pub struct Viewer {
    id: String,
    cof: Cof,
    nav: Option<Navigation>,
}

impl Viewer {
    pub fn new<S: Into<String>>(id: S, cof: Cof) -> Self {
        Self {
            id: id.into(),
            cof,
            nav: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cof(&self) -> &Cof {
        &self.cof
    }

    pub fn into_cof(self) -> Cof {
        self.cof
    }

    /// Navigation state, bound to the first layer on first access.
    pub fn navigation(&mut self) -> &Navigation {
        self.parts().1
    }

    fn parts(&mut self) -> (&Cof, &mut Navigation) {
        let Self { id, cof, nav } = self;
        let nav = nav.get_or_insert_with(|| {
            debug!("{}: creating navigation", id);
            let mut nav = Navigation::new();
            nav.refresh(cof);
            nav
        });
        (&*cof, nav)
    }

    pub fn select_layer(&mut self, index: isize) {
        let (cof, nav) = self.parts();
        nav.set_layer(cof, index);
    }

    pub fn select_direction(&mut self, index: isize) {
        let (cof, nav) = self.parts();
        nav.set_direction(cof, index);
    }

    pub fn select_frame(&mut self, index: isize) {
        let (cof, nav) = self.parts();
        nav.set_frame(cof, index);
    }

    pub fn delete_layer(&mut self, index: usize) -> Result<Layer, EditError> {
        let layer = self.cof.delete_layer(index)?;
        info!("{}: deleted {} layer", self.id, layer.kind.name());
        self.rebind();
        Ok(layer)
    }

    pub fn delete_current_layer(&mut self) -> Result<Layer, EditError> {
        let index = self.parts().1.layer_index();
        self.delete_layer(index)
    }

    /// Adds `layer` and selects it.
    pub fn add_layer(&mut self, layer: Layer) -> Result<usize, EditError> {
        let index = self.cof.add_layer(layer)?;
        info!("{}: added layer {}", self.id, index);
        self.rebind();
        self.select_layer(index as isize);
        Ok(index)
    }

    fn rebind(&mut self) {
        if let Some(nav) = self.nav.as_mut() {
            nav.refresh(&self.cof);
        }
    }

    pub fn summary(&self) -> AnimationSummary {
        let cof = &self.cof;
        let frames = if cof.directions() > 1 {
            format!("Frames (x{}): {}", cof.directions(), cof.frames_per_direction)
        } else {
            format!("Frames: {}", cof.frames_per_direction)
        };
        AnimationSummary {
            directions: format!("Directions: {}", cof.directions()),
            frames,
            fps: format!("FPS: {:.1}", cof.frame_rate()),
            duration: format!("Duration: {:.2}ms", cof.duration_ms()),
        }
    }

    pub fn layer_details(&mut self) -> Option<LayerDetails> {
        let (cof, nav) = self.parts();
        nav.selected_layer(cof).map(LayerDetails::new)
    }

    pub fn render_order(&mut self) -> Vec<RenderEntry> {
        let (cof, nav) = self.parts();
        nav.current_render_order(cof)
            .iter()
            .enumerate()
            .map(|(position, &layer)| RenderEntry {
                position,
                layer,
                name: cof.layer(layer).map(|x| x.kind.name()).unwrap_or(""),
            })
            .collect()
    }

    /// Raw type codes of the layers, as listed by the layer selector.
    pub fn layer_choices(&self) -> Vec<String> {
        self.cof
            .layers()
            .iter()
            .map(|x| u8::from(x.kind).to_string())
            .collect()
    }

    pub fn direction_choices(&self) -> Vec<String> {
        (0..self.cof.directions()).map(|x| x.to_string()).collect()
    }

    /// Frame numbers of the selected direction.
    pub fn frame_choices(&mut self) -> Vec<String> {
        let direction = self.parts().1.direction_index();
        (0..self.cof.frame_count(direction))
            .map(|x| x.to_string())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::sample;

    #[test]
    fn summary_lines() {
        let viewer = Viewer::new("a", sample(8, 16, 256));
        assert_eq!(
            viewer.summary().lines(),
            ["Directions: 8", "Frames (x8): 16", "FPS: 25.0", "Duration: 640.00ms"]
        );

        let viewer = Viewer::new("b", sample(1, 10, 0));
        let summary = viewer.summary();
        assert_eq!(summary.frames, "Frames: 10");
        assert_eq!(summary.fps, "FPS: 25.0");
        assert_eq!(summary.duration, "Duration: 400.00ms");

        let viewer = Viewer::new("c", sample(1, 1, 128));
        assert_eq!(viewer.summary().fps, "FPS: 12.5");
    }

    #[test]
    fn first_layer_is_selected() {
        let mut viewer = Viewer::new("a", sample(1, 1, 256));
        let details = viewer.layer_details().unwrap();
        assert_eq!(
            details.lines(),
            [
                "Type: HD (Head)",
                "Shadow: false",
                "Selectable: true",
                "Transparent: false",
                "Draw Effect: Normal",
                "Weapon Class: (hth) Hand To Hand",
            ]
        );
        assert!(viewer.navigation().is_bound());
    }

    #[test]
    fn unknown_codes_render_empty() {
        let layer = Layer {
            kind: LayerType::from(42),
            shadow: 3,
            selectable: false,
            transparent: true,
            draw_effect: DrawEffect::from(200),
            weapon_class: WeaponClass::from(99),
        };
        let details = LayerDetails::new(&layer);
        assert_eq!(details.kind, "Type:  ()");
        assert_eq!(details.shadow, "Shadow: true");
        assert_eq!(details.draw_effect, "Draw Effect: ");
        assert_eq!(details.weapon_class, "Weapon Class: () ");
    }

    #[test]
    fn render_order_names() {
        let layers = vec![
            Layer::new(LayerType::Head),
            Layer::new(LayerType::Torso),
            Layer::new(LayerType::RightHand),
        ];
        let priority = vec![vec![vec![1, 2, 0], vec![2, 1, 0]]];
        let cof = Cof::new(layers, 1, 2, 256, priority).unwrap();
        let mut viewer = Viewer::new("a", cof);

        let rows: Vec<String> = viewer.render_order().iter().map(|x| x.to_string()).collect();
        assert_eq!(rows, ["0: Torso", "1: Right Hand", "2: Head"]);

        viewer.select_frame(3);
        let order = viewer.render_order();
        assert_eq!(order[0].layer, 2);
        assert_eq!(order[0].name, "Right Hand");
    }

    #[test]
    fn summary_counts_selectable_directions() {
        let mut viewer = Viewer::new("a", sample(8, 16, 256));
        assert_eq!(viewer.summary().directions, "Directions: 8");
        assert_eq!(viewer.direction_choices().len(), viewer.cof().directions());
        viewer.select_direction(7);
        assert_eq!(viewer.navigation().direction_index(), 7);
        viewer.select_direction(8);
        assert_eq!(viewer.navigation().direction_index(), 7);
    }

    #[test]
    fn choices() {
        let mut viewer = Viewer::new("a", sample(2, 3, 256));
        assert_eq!(viewer.layer_choices(), ["0", "1", "2"]);
        assert_eq!(viewer.direction_choices(), ["0", "1"]);
        assert_eq!(viewer.frame_choices(), ["0", "1", "2"]);
    }

    #[test]
    fn delete_selected_last_layer() {
        let mut viewer = Viewer::new("a", sample(1, 1, 256));
        viewer.select_layer(2);
        let removed = viewer.delete_current_layer().unwrap();
        assert_eq!(removed.kind, LayerType::Legs);

        assert_eq!(viewer.navigation().layer_index(), 1);
        let details = viewer.layer_details().unwrap();
        assert_eq!(details.kind, "Type: TR (Torso)");
        let rows: Vec<String> = viewer.render_order().iter().map(|x| x.to_string()).collect();
        assert_eq!(rows, ["0: Head", "1: Torso"]);
        assert_eq!(viewer.cof().layer_count(), 2);
    }

    #[test]
    fn delete_errors_leave_selection() {
        let mut viewer = Viewer::new("a", sample(1, 1, 256));
        viewer.select_layer(1);
        assert_eq!(
            viewer.delete_layer(9),
            Err(EditError::NoSuchLayer { index: 9, count: 3 })
        );
        assert_eq!(viewer.navigation().layer_index(), 1);
        assert!(viewer.layer_details().is_some());
    }

    #[test]
    fn add_layer_selects_it() {
        let mut viewer = Viewer::new("a", sample(1, 1, 256));
        let mut shield = Layer::new(LayerType::Shield);
        shield.weapon_class = WeaponClass::OneHandSwing;
        assert_eq!(viewer.add_layer(shield).unwrap(), 3);
        assert_eq!(viewer.navigation().layer_index(), 3);
        let details = viewer.layer_details().unwrap();
        assert_eq!(details.weapon_class, "Weapon Class: (1hs) One Hand Swing");
        assert_eq!(viewer.render_order().last().unwrap().name, "Shield");

        let cof = viewer.into_cof();
        assert_eq!(cof.layer_count(), 4);
    }
}
