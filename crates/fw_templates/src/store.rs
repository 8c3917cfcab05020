//! Template store populated once at startup.
//!
//! The store owns the raw text of every widget template, keyed by a
//! path-like identifier such as `"recentposts.tpl"` or `"admin/html.tpl"`.
//! A store value only exists fully loaded: `load` either reads every
//! requested identifier or fails, so a renderer can never observe a
//! half-initialized store. There is no reload operation.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};

/// Immutable catalog of raw template text, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Load the given template identifiers from `root`.
    ///
    /// Identifiers are resolved as paths relative to `root`. All reads run
    /// concurrently; the first failure aborts the load and names the
    /// identifier that could not be read.
    pub async fn load(
        root: impl Into<PathBuf>,
        identifiers: &[&str],
    ) -> TemplateResult<Self> {
        let root = root.into();
        let mut reads = JoinSet::new();

        for id in identifiers {
            let id = id.to_string();
            let path = root.join(&id);
            reads.spawn(async move {
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| TemplateError::Read {
                        id: id.clone(),
                        source,
                    })?;
                debug!("Loaded template: {}", id);
                Ok::<(String, String), TemplateError>((id, text))
            });
        }

        let mut templates = HashMap::with_capacity(identifiers.len());
        while let Some(joined) = reads.join_next().await {
            let (id, text) = joined.map_err(|e| TemplateError::LoadTask(e.to_string()))??;
            templates.insert(id, text);
        }

        info!("Loaded {} templates from {:?}", templates.len(), root);
        Ok(Self { templates })
    }

    /// Build a store from already-resolved entries.
    ///
    /// Intended for test harnesses and embedded template sets.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            templates: entries
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }

    /// Get the raw text of a template by identifier.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.templates.get(id).map(|s| s.as_str())
    }

    /// Get a template, returning an error if it was never loaded.
    pub fn get_required(&self, id: &str) -> TemplateResult<&str> {
        self.get(id)
            .ok_or_else(|| TemplateError::Missing(id.to_string()))
    }

    /// Check whether a template was loaded.
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// All loaded identifiers.
    pub fn ids(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }

    /// Number of loaded templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
