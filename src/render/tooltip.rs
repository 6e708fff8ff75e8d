use super::store::EventDetailsStore;
use super::summary::tooltip_text;
use tracing::debug;

/// Single hover tooltip for the whole page, moved and refilled on every hover
#[derive(Debug, Default)]
pub struct Tooltip {
    content: String,
    position: (i32, i32),
    visible: bool,
}

impl Tooltip {
    pub fn show(&mut self, content: String, x: i32, y: i32) {
        self.content = content;
        self.position = (x, y);
        self.visible = true;
    }

    /// Shows the stored details of `link`. Returns false if nothing was stored for it.
    pub fn show_event(&mut self, store: &EventDetailsStore, link: &str, x: i32, y: i32) -> bool {
        match store.get(link) {
            Some(fields) => {
                self.show(tooltip_text(fields), x, y);
                true
            }
            None => {
                debug!("No details stored for {}", link);
                false
            }
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }
}
