use std::path::Path;
use tempfile::TempDir;

use portfoliobase::prefs::PreferenceStore;

/// Shared scratch workspace for tests that touch the preference file.
pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn preference_store(&self) -> PreferenceStore {
        PreferenceStore::open_at(self.workspace_path())
            .expect("failed to open preference store for tests")
    }
}

mod assistant_routing;
mod assistant_session;
mod contact_form_flow;
