use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the resize-guide overlay state.
///
/// The overlay is owned by a parent coordinator; the row header writes a
/// single guide line per resize preview and clears it when the gesture ends.
/// `None` means no guide is shown.
#[derive(Debug, Default)]
pub struct ResizeGuide {
    lines: Rc<RefCell<Option<Vec<f32>>>>,
}

impl ResizeGuide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the guide lines (offsets in table pixels).
    pub fn set(&self, lines: Option<Vec<f32>>) {
        *self.lines.borrow_mut() = lines;
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// Snapshot of the current guide lines.
    pub fn lines(&self) -> Option<Vec<f32>> {
        self.lines.borrow().clone()
    }

    /// True when no guide line is shown.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().as_ref().map_or(true, Vec::is_empty)
    }

    /// Another handle to the same overlay state.
    pub fn share(&self) -> Self {
        Self {
            lines: Rc::clone(&self.lines),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn shared_handles_see_writes() {
        let guide = ResizeGuide::new();
        let other = guide.share();
        assert!(other.is_empty());
        guide.set(Some(vec![42.0]));
        assert_eq!(other.lines(), Some(vec![42.0]));
        other.clear();
        assert!(guide.is_empty());
        assert_eq!(guide.lines(), None);
    }
}
