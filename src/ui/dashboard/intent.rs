use crate::ui::dashboard::state::DashboardTab;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardIntent {
    SelectTab(DashboardTab),
}

impl Intent for DashboardIntent {}
