//! Non-timeline UI panels: the preview player, the clip inspector, the
//! asset library, and the export modal.

mod assets_panel;
mod export_modal;
mod player_panel;
mod properties_panel;

pub use assets_panel::AssetsPanel;
pub use export_modal::ExportModal;
pub use player_panel::PlayerPanel;
pub use properties_panel::PropertiesPanel;
