//! Dashboard widget layout
//!
//! Order and visibility of the dashboard cards. The layout always lists
//! every widget kind exactly once; hidden widgets keep their position.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::store::StoreState;
use crate::error::{CashlyError, CashlyResult};

/// Dashboard card types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    NetWorth,
    CashFlow,
    Budgets,
    Goals,
    Debts,
    RecentTransactions,
}

impl WidgetKind {
    /// All kinds in their default order
    pub const ALL: [WidgetKind; 6] = [
        WidgetKind::NetWorth,
        WidgetKind::CashFlow,
        WidgetKind::Budgets,
        WidgetKind::Goals,
        WidgetKind::Debts,
        WidgetKind::RecentTransactions,
    ];

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::NetWorth => "Net Worth",
            Self::CashFlow => "Cash Flow",
            Self::Budgets => "Budgets",
            Self::Goals => "Goals",
            Self::Debts => "Debts",
            Self::RecentTransactions => "Recent Transactions",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One position on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSlot {
    pub kind: WidgetKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// The persisted dashboard layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardLayout {
    #[serde(default)]
    pub widgets: Vec<WidgetSlot>,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            widgets: WidgetKind::ALL
                .iter()
                .map(|&kind| WidgetSlot {
                    kind,
                    visible: true,
                })
                .collect(),
        }
    }
}

impl DashboardLayout {
    /// Widgets to draw, in order
    pub fn visible_widgets(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        self.widgets.iter().filter(|s| s.visible).map(|s| s.kind)
    }

    fn position(&self, kind: WidgetKind) -> CashlyResult<usize> {
        self.widgets
            .iter()
            .position(|s| s.kind == kind)
            .ok_or_else(|| CashlyError::widget_not_found(kind.title()))
    }

    /// Move a widget to a new index, shifting the others
    pub fn move_widget(&mut self, kind: WidgetKind, to: usize) -> CashlyResult<()> {
        if to >= self.widgets.len() {
            return Err(CashlyError::Validation(format!(
                "Position {} is out of range (0-{})",
                to,
                self.widgets.len().saturating_sub(1)
            )));
        }

        let from = self.position(kind)?;
        let slot = self.widgets.remove(from);
        self.widgets.insert(to, slot);
        Ok(())
    }

    /// Show or hide a widget
    pub fn set_visible(&mut self, kind: WidgetKind, visible: bool) -> CashlyResult<()> {
        let index = self.position(kind)?;
        self.widgets[index].visible = visible;
        Ok(())
    }

    /// Drop duplicates and append kinds the saved layout does not know yet
    pub fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(self.widgets.len());
        self.widgets.retain(|slot| {
            if seen.contains(&slot.kind) {
                false
            } else {
                seen.push(slot.kind);
                true
            }
        });

        for kind in WidgetKind::ALL {
            if !seen.contains(&kind) {
                self.widgets.push(WidgetSlot {
                    kind,
                    visible: true,
                });
            }
        }
    }
}

impl StoreState for DashboardLayout {
    const NAME: &'static str = "layout";

    fn after_load(&mut self) {
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let layout = DashboardLayout::default();
        let kinds: Vec<_> = layout.visible_widgets().collect();
        assert_eq!(kinds, WidgetKind::ALL.to_vec());
    }

    #[test]
    fn test_move_widget() {
        let mut layout = DashboardLayout::default();
        layout.move_widget(WidgetKind::Goals, 0).unwrap();
        assert_eq!(layout.widgets[0].kind, WidgetKind::Goals);
        assert_eq!(layout.widgets[1].kind, WidgetKind::NetWorth);

        layout.move_widget(WidgetKind::Goals, 5).unwrap();
        assert_eq!(layout.widgets[5].kind, WidgetKind::Goals);
        assert_eq!(layout.widgets.len(), 6);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut layout = DashboardLayout::default();
        let err = layout.move_widget(WidgetKind::Debts, 6).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_hide_keeps_position() {
        let mut layout = DashboardLayout::default();
        layout.set_visible(WidgetKind::CashFlow, false).unwrap();
        assert!(!layout.visible_widgets().any(|k| k == WidgetKind::CashFlow));
        assert_eq!(layout.widgets[1].kind, WidgetKind::CashFlow);

        layout.set_visible(WidgetKind::CashFlow, true).unwrap();
        assert_eq!(layout.visible_widgets().nth(1), Some(WidgetKind::CashFlow));
    }

    #[test]
    fn test_missing_widget_is_not_found() {
        let mut layout = DashboardLayout { widgets: vec![] };
        let err = layout.set_visible(WidgetKind::Goals, false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_normalize_repairs_saved_layout() {
        let json = r#"{"widgets":[
            {"kind":"goals","visible":false},
            {"kind":"budgets"},
            {"kind":"goals","visible":true}
        ]}"#;
        let mut layout: DashboardLayout = serde_json::from_str(json).unwrap();
        layout.after_load();

        assert_eq!(layout.widgets.len(), 6);
        assert_eq!(layout.widgets[0].kind, WidgetKind::Goals);
        assert!(!layout.widgets[0].visible);
        assert_eq!(layout.widgets[1].kind, WidgetKind::Budgets);
        assert!(layout.widgets[1].visible);
        assert_eq!(layout.widgets[2].kind, WidgetKind::NetWorth);
    }
}
