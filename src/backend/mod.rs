//! Typed access to the catalog store.
//!
//! The UI talks to the store only through [`CatalogBackend`]. Reads are
//! open to everyone; every mutation takes the session's [`AuthContext`]
//! and checks its role before touching data.

pub mod auth;
pub mod json_file;
pub mod loader;

use crate::core::category::NavigationCategory;
use crate::core::event_record::CulturalEvent;
use crate::util::error::Result;

pub use auth::{AuthContext, Role};
pub use json_file::{CatalogDocument, JsonFileBackend};

/// Operations a catalog store provides.
pub trait CatalogBackend: Send + std::fmt::Debug {
    /// Every event, in store order.
    fn list_events(&self) -> Result<Vec<CulturalEvent>>;

    /// Events whose navigation category has the given id.
    fn list_events_by_category(&self, category_id: u64) -> Result<Vec<CulturalEvent>> {
        Ok(self
            .list_events()?
            .into_iter()
            .filter(|e| e.category_id() == Some(category_id))
            .collect())
    }

    /// Published events flagged for the home page.
    fn list_home_events(&self) -> Result<Vec<CulturalEvent>> {
        Ok(self
            .list_events()?
            .into_iter()
            .filter(|e| e.show_in_home && e.publish)
            .collect())
    }

    fn get_event(&self, id: u64) -> Result<CulturalEvent>;

    /// Store a new event and return it with its assigned id.
    fn create_event(&mut self, auth: &AuthContext, event: CulturalEvent) -> Result<CulturalEvent>;

    /// Replace the event with the same id.
    fn update_event(&mut self, auth: &AuthContext, event: CulturalEvent) -> Result<CulturalEvent>;

    fn delete_event(&mut self, auth: &AuthContext, id: u64) -> Result<()>;

    fn list_categories(&self) -> Result<Vec<NavigationCategory>>;

    fn create_category(
        &mut self,
        auth: &AuthContext,
        category: NavigationCategory,
    ) -> Result<NavigationCategory>;

    fn update_category(
        &mut self,
        auth: &AuthContext,
        category: NavigationCategory,
    ) -> Result<NavigationCategory>;

    fn delete_category(&mut self, auth: &AuthContext, id: u64) -> Result<()>;
}
