//! Business logic services

pub mod authors;
pub mod catalog;
pub mod notices;
pub mod validation;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let notices = notices::NoticeService::new();
        Self {
            authors: authors::AuthorsService::new(repository.clone(), notices),
            catalog: catalog::CatalogService::new(repository),
        }
    }
}
