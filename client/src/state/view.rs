use canvas::engine::Action;

/// Live canvas telemetry consumed by chrome (status bar, cursor styling).
#[derive(Clone, Debug)]
pub struct CanvasViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// World-space pointer position while it is over the canvas.
    pub cursor_world: Option<(f64, f64)>,
    /// CSS cursor requested by the engine.
    pub cursor: String,
    /// Duration of the most recent scene render, in milliseconds.
    pub last_render_ms: Option<f64>,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            cursor_world: None,
            cursor: "default".to_owned(),
            last_render_ms: None,
        }
    }
}

impl CanvasViewState {
    /// Fold one engine action into the telemetry. Only viewport and cursor
    /// actions matter here.
    pub fn apply_action(&mut self, action: &Action) {
        match action {
            Action::ViewportChanged { zoom, pan } => {
                self.zoom = *zoom;
                self.pan_x = pan.x;
                self.pan_y = pan.y;
            }
            Action::SetCursor(cursor) => self.cursor.clone_from(cursor),
            Action::SelectionChanged(_)
            | Action::ElementsChanged(_)
            | Action::ToolChanged(_)
            | Action::RenderNeeded => {}
        }
    }

    /// Zoom as a whole percentage for the status readout.
    #[must_use]
    pub fn zoom_percent(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }
}
