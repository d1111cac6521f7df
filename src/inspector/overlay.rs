/// Mobile bottom sheet closes when dragged down further than this.
pub const SHEET_DISMISS_DRAG: f32 = 150.0;

/// The single enlarged-snapshot overlay shared by every inspector section.
#[derive(Debug, Default)]
pub struct ImageOverlay {
    current: Option<String>,
}

impl ImageOverlay {
    pub fn open(&mut self, uri: &str) {
        self.current = Some(uri.to_string());
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Backdrop clicks close; clicks on the image itself do not.
    pub fn click(&mut self, on_image: bool) {
        if !on_image {
            self.current = None;
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}

pub fn sheet_should_dismiss(compact: bool, drag_offset_y: f32) -> bool {
    compact && drag_offset_y > SHEET_DISMISS_DRAG
}
