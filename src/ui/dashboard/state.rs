use crate::site::content::Icon;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Licenses,
    Plugins,
    Support,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Licenses,
        DashboardTab::Plugins,
        DashboardTab::Support,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Licenses => "Licenses",
            DashboardTab::Plugins => "My Plugins",
            DashboardTab::Support => "Support",
        }
    }

    /// Content heading; the capitalized tab id.
    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Licenses => "Licenses",
            DashboardTab::Plugins => "Plugins",
            DashboardTab::Support => "Support",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            DashboardTab::Overview => Icon::Window,
            DashboardTab::Licenses => Icon::Shield,
            DashboardTab::Plugins => Icon::Zap,
            DashboardTab::Support => Icon::LifeBuoy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub tab: DashboardTab,
}

impl UiState for DashboardState {}
