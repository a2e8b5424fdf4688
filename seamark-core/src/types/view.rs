//! View identifiers and the registry of mounted panels

use std::fmt;

/// Identifier of one mutually-exclusive content panel.
///
/// Exactly one view is visible at a time; revealing one hides all
/// others. The string names double as stable ids for logging and
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Real-time data tiles.
    RealTime,
    /// Historical plan comparison, the app's default landing panel.
    Comparison,
    /// Market research report.
    MarketReport,
    /// Market size bar chart.
    MarketSizeChart,
    /// Marketing plan walkthrough.
    MarketingPlan,
    /// Consultant search. The only view that locks page-level scrolling
    /// and scrolls its two columns independently.
    FindConsultant,
    /// Consultant chat.
    MyConsultant,
    /// Case study library.
    CaseReport,
    /// Overseas case gallery.
    OverseasCases,
    /// File hash verification.
    HashValue,
    /// Cultural adaptation check.
    CulturalAdaptation,
    /// FAQ and support contacts.
    HelpCenter,
    /// Application settings.
    Settings,
}

impl ViewId {
    /// The view shown at startup and whenever navigation falls back.
    pub const DEFAULT: ViewId = ViewId::Comparison;

    /// Every view in declaration order.
    #[must_use]
    pub const fn all() -> &'static [ViewId] {
        &[
            ViewId::RealTime,
            ViewId::Comparison,
            ViewId::MarketReport,
            ViewId::MarketSizeChart,
            ViewId::MarketingPlan,
            ViewId::FindConsultant,
            ViewId::MyConsultant,
            ViewId::CaseReport,
            ViewId::OverseasCases,
            ViewId::HashValue,
            ViewId::CulturalAdaptation,
            ViewId::HelpCenter,
            ViewId::Settings,
        ]
    }

    /// Stable string id.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ViewId::RealTime => "real-time",
            ViewId::Comparison => "comparison",
            ViewId::MarketReport => "market-report",
            ViewId::MarketSizeChart => "market-size-chart",
            ViewId::MarketingPlan => "marketing-plan",
            ViewId::FindConsultant => "find-consultant",
            ViewId::MyConsultant => "my-consultant",
            ViewId::CaseReport => "case-report",
            ViewId::OverseasCases => "overseas-cases",
            ViewId::HashValue => "hash-value",
            ViewId::CulturalAdaptation => "cultural-adaptation",
            ViewId::HelpCenter => "help-center",
            ViewId::Settings => "settings",
        }
    }

    /// Reverse of [`ViewId::name`]; unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ViewId> {
        ViewId::all().iter().copied().find(|id| id.name() == name)
    }

    /// Whether this view suppresses page-level scrolling.
    #[must_use]
    pub const fn is_scroll_locked(self) -> bool {
        matches!(self, ViewId::FindConsultant)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of views that actually have a mounted panel.
///
/// Fixed at startup. Navigation may be asked to show a view that is not
/// in here (a menu wired to a panel nobody built); that request hides
/// everything and leaves no current view, but never fails.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    mounted: Vec<ViewId>,
}

impl ViewRegistry {
    /// Registry containing every known view.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mounted: ViewId::all().to_vec(),
        }
    }

    /// Registry limited to the given views.
    #[must_use]
    pub fn with_views(views: Vec<ViewId>) -> Self {
        Self { mounted: views }
    }

    /// Whether a panel exists for `id`.
    #[must_use]
    pub fn contains(&self, id: ViewId) -> bool {
        self.mounted.contains(&id)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_names_round_trip() {
        for &id in ViewId::all() {
            assert_eq!(ViewId::from_name(id.name()), Some(id));
        }
        assert_eq!(ViewId::from_name("not-a-view"), None);
    }

    #[test]
    fn only_consultant_search_locks_scrolling() {
        let locked: Vec<_> = ViewId::all()
            .iter()
            .copied()
            .filter(|id| id.is_scroll_locked())
            .collect();
        assert_eq!(locked, vec![ViewId::FindConsultant]);
    }

    #[test]
    fn partial_registry_reports_membership() {
        let registry = ViewRegistry::with_views(vec![ViewId::Comparison, ViewId::HelpCenter]);
        assert!(registry.contains(ViewId::Comparison));
        assert!(!registry.contains(ViewId::HashValue));
    }
}
