use uuid::Uuid;

use super::Medium;

/// The single selected clip, if any. Selection drives the inspector
/// panel and keyboard delete/split, so it carries the medium along with
/// the id to avoid a three-array search on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<(Uuid, Medium)>,
}

impl Selection {
    pub fn select(&mut self, id: Uuid, medium: Medium) {
        self.selected = Some((id, medium));
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if it points at `id`. Called after removals
    /// so the inspector never shows a dead clip.
    pub fn forget(&mut self, id: Uuid) {
        if self.selected.map(|(sel, _)| sel) == Some(id) {
            self.selected = None;
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.selected.map(|(id, _)| id)
    }

    pub fn medium(&self) -> Option<Medium> {
        self.selected.map(|(_, medium)| medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forget_only_clears_matching_id() {
        let mut selection = Selection::default();
        let kept = Uuid::new_v4();
        selection.select(kept, Medium::Video);
        selection.forget(Uuid::new_v4());
        assert_eq!(selection.id(), Some(kept));
        assert_eq!(selection.medium(), Some(Medium::Video));
        selection.forget(kept);
        assert_eq!(selection.id(), None);
    }
}
