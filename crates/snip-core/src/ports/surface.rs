use async_trait::async_trait;

use crate::ids::SurfaceId;
use crate::ports::errors::SurfaceError;

/// Text-insertion surfaces owned by the host (editor panes, documents).
#[async_trait]
pub trait EditorSurfacePort: Send + Sync {
    /// The surface that currently has focus, if it accepts text.
    fn active_surface(&self) -> Option<SurfaceId>;

    /// Whether a previously seen surface is still open.
    fn is_open(&self, surface: &SurfaceId) -> bool;

    /// Replace the current selection (or insert at the cursor) with `text`.
    async fn replace_selection(&self, surface: &SurfaceId, text: &str)
        -> Result<(), SurfaceError>;

    fn focus(&self, surface: &SurfaceId);
}
