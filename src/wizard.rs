//! Wizard Steps
//!
//! Linear flow: upload, describe, backend notes, app flow, screen docs,
//! artifacts.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Upload,
    DescribeScreens,
    BackendLogic,
    AppFlow,
    ScreenDocs,
    Artifacts,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Upload,
        WizardStep::DescribeScreens,
        WizardStep::BackendLogic,
        WizardStep::AppFlow,
        WizardStep::ScreenDocs,
        WizardStep::Artifacts,
    ];

    /// 1-based position in the wizard
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(1, |i| i + 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload screens",
            WizardStep::DescribeScreens => "Describe screens",
            WizardStep::BackendLogic => "Backend logic",
            WizardStep::AppFlow => "App flow",
            WizardStep::ScreenDocs => "Screen docs",
            WizardStep::Artifacts => "Artifacts",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn prev(&self) -> Option<WizardStep> {
        self.number().checked_sub(2).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Nothing past the upload step makes sense without screens
    pub fn can_advance(&self, screen_count: usize) -> bool {
        match self {
            WizardStep::Upload => screen_count > 0,
            WizardStep::Artifacts => false,
            _ => true,
        }
    }
}
