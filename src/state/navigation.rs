//! Navigation-related state types.

/// Specifying the two task-list tabs.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tab {
    Mine,
    Unassigned,
}

impl Tab {
    /// Whether this tab shows tasks assigned to the current user. This is
    /// the `assigned` flag of the derived server request.
    ///
    pub fn assigned(&self) -> bool {
        matches!(self, Tab::Mine)
    }

    /// Return the other tab.
    ///
    pub fn toggled(&self) -> Tab {
        match self {
            Tab::Mine => Tab::Unassigned,
            Tab::Unassigned => Tab::Mine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab() {
        assert_eq!(Tab::Mine, Tab::Mine);
        assert_eq!(Tab::Unassigned, Tab::Unassigned);
        assert_ne!(Tab::Mine, Tab::Unassigned);
    }

    #[test]
    fn test_tab_assigned() {
        assert!(Tab::Mine.assigned());
        assert!(!Tab::Unassigned.assigned());
    }

    #[test]
    fn test_tab_toggled() {
        assert_eq!(Tab::Mine.toggled(), Tab::Unassigned);
        assert_eq!(Tab::Unassigned.toggled(), Tab::Mine);
    }
}
