//! Client-side state stores
//!
//! Session, theme and dashboard layout. Each is an explicit object backed by
//! its own file under the state directory: loaded when opened, saved on every
//! mutation.

pub mod layout;
pub mod session;
pub mod store;
pub mod theme;

pub use layout::{DashboardLayout, WidgetKind, WidgetSlot};
pub use session::{SecretToken, SessionState};
pub use store::{Store, StoreState};
pub use theme::{ThemeMode, ThemePreference};

use crate::config::paths::CashlyPaths;
use crate::error::CashlyResult;

fn open_store<T: StoreState>(paths: &CashlyPaths) -> CashlyResult<Store<T>> {
    Store::open(paths.store_file(T::NAME))
}

/// All persisted client state, opened together
#[derive(Debug)]
pub struct ClientStores {
    pub session: Store<SessionState>,
    pub theme: Store<ThemePreference>,
    pub layout: Store<DashboardLayout>,
}

impl ClientStores {
    /// Open every store under the configured state directory
    pub fn open(paths: &CashlyPaths) -> CashlyResult<Self> {
        Ok(Self {
            session: open_store(paths)?,
            theme: open_store(paths)?,
            layout: open_store(paths)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stores_are_independent_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut stores = ClientStores::open(&paths).unwrap();
        stores.theme.update(|t| t.set(ThemeMode::Dark)).unwrap();
        stores
            .layout
            .try_update(|l| l.set_visible(WidgetKind::Debts, false))
            .unwrap();

        assert!(paths.store_file("theme").exists());
        assert!(paths.store_file("layout").exists());
        assert!(!paths.store_file("session").exists());

        let reopened = ClientStores::open(&paths).unwrap();
        assert_eq!(reopened.theme.get().mode, ThemeMode::Dark);
        assert!(!reopened
            .layout
            .get()
            .visible_widgets()
            .any(|k| k == WidgetKind::Debts));
    }
}
