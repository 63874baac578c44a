#![no_main]
use catalog_browser::{parse_catalog_str, CatalogFormat, CatalogView};
use libfuzzer_sys::fuzz_target;

/// Fuzz catalog parsing in both formats.
///
/// Anything that parses is also filtered and paged once, so malformed but
/// accepted documents exercise the view model too.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let format = CatalogFormat::detect(None, s);
        if let Ok(catalog) = parse_catalog_str(s, format) {
            let mut view = CatalogView::new(&catalog);
            view.apply_search(&catalog, s.get(..4).unwrap_or(""));
            view.last_page();
            let _ = view.visible_products(&catalog).count();
            let _ = view.controls();
        }
    }
});
