use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::lookup::BookLookup;
use crate::lookup::google_books::GoogleBooksLookup;

pub(crate) fn create_book_lookup(config: &Configuration) -> LibraryResult<Box<dyn BookLookup>> {
    let lookup = GoogleBooksLookup::new(config.lookup_url.as_str(), config.lookup_timeout)?;
    Ok(Box::new(lookup))
}
