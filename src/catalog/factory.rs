use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::lookup::factory::create_book_lookup;

pub(crate) fn create_catalog_service(config: &Configuration) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config);
    let book_lookup = create_book_lookup(config)?;
    Ok(Box::new(CatalogServiceImpl::new(book_repo, book_lookup)))
}

#[cfg(test)]
pub(crate) fn create_test_catalog_service(lookup: crate::lookup::stub::StubLookup) -> std::sync::Arc<dyn CatalogService> {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    std::sync::Arc::new(CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()), Box::new(lookup)))
}
