//! Click regions recorded while rendering.
//!
//! Each frame clears the map and the views register the rectangles they draw
//! together with the [`Action`] a click there means. Mouse events are then
//! resolved against the regions of the last drawn frame.

use crate::tui::action::Action;
use ratatui::layout::{Position, Rect};

/// Clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
    /// Overlay content area and the index of the first region drawn on it
    overlay: Option<(Rect, usize)>,
}

/// What a click at a position means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A registered region
    Region(Action),
    /// Overlay is open and the click landed outside its content
    OutsideOverlay,
    /// Nothing clickable there
    Nothing,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.overlay = None;
    }

    pub fn register(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// Mark the overlay content area. Regions registered afterwards belong to
    /// the overlay; everything drawn before it is covered.
    pub fn set_overlay(&mut self, area: Rect) {
        self.overlay = Some((area, self.regions.len()));
    }

    pub fn overlay_area(&self) -> Option<Rect> {
        self.overlay.map(|(area, _)| area)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Resolve a click at terminal cell (`column`, `row`).
    pub fn resolve(&self, column: u16, row: u16) -> ClickTarget {
        let position = Position::new(column, row);
        let (candidates, overlay_area) = match self.overlay {
            Some((area, first)) => (&self.regions[first..], Some(area)),
            None => (&self.regions[..], None),
        };

        if let Some(area) = overlay_area {
            if !area.contains(position) {
                return ClickTarget::OutsideOverlay;
            }
        }

        // Topmost first
        candidates
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map_or(ClickTarget::Nothing, |(_, action)| {
                ClickTarget::Region(action.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_resolve_region() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 10, 5), Action::OpenProduct(ProductId(1)));
        hits.register(Rect::new(10, 0, 10, 5), Action::OpenProduct(ProductId(2)));

        assert_eq!(
            hits.resolve(12, 3),
            ClickTarget::Region(Action::OpenProduct(ProductId(2)))
        );
        assert_eq!(hits.resolve(30, 3), ClickTarget::Nothing);
    }

    #[test]
    fn test_empty_regions_ignored() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 0, 5), Action::NextPage);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_overlay_covers_regions_below() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 80, 24), Action::OpenProduct(ProductId(1)));
        hits.set_overlay(Rect::new(10, 5, 40, 10));
        hits.register(Rect::new(12, 6, 5, 1), Action::CloseOverlay);

        // Outside the overlay content
        assert_eq!(hits.resolve(2, 2), ClickTarget::OutsideOverlay);
        // Inside the overlay, on its close button
        assert_eq!(hits.resolve(13, 6), ClickTarget::Region(Action::CloseOverlay));
        // Inside the overlay but not on a button; the card below is covered
        assert_eq!(hits.resolve(30, 10), ClickTarget::Nothing);
    }

    #[test]
    fn test_clear() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 5, 5), Action::Quit);
        hits.set_overlay(Rect::new(0, 0, 5, 5));
        hits.clear();
        assert_eq!(hits.len(), 0);
        assert!(hits.overlay_area().is_none());
    }
}
