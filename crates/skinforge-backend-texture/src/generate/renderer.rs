//! Stateful renderer keeping the last good output.

use skinforge_spec::{RenderBudget, SkinDocument};

use super::{render_document_with_budget, RenderError, TextureSet};

/// Re-renders documents and keeps the most recent successful result.
///
/// A failed render returns its error and leaves the previous result in
/// place, so callers never see a partially written set.
#[derive(Debug, Default)]
pub struct SkinRenderer {
    budget: RenderBudget,
    last: Option<TextureSet>,
}

impl SkinRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: RenderBudget) -> Self {
        Self { budget, last: None }
    }

    /// Render `doc`, replacing the stored set only on success.
    pub fn render(&mut self, doc: &SkinDocument) -> Result<&TextureSet, RenderError> {
        let set = render_document_with_budget(doc, &self.budget)?;
        Ok(&*self.last.insert(set))
    }

    pub fn last(&self) -> Option<&TextureSet> {
        self.last.as_ref()
    }

    pub fn take(&mut self) -> Option<TextureSet> {
        self.last.take()
    }
}
