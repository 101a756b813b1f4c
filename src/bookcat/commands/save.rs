use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, SaveDirective};
use crate::error::Result;
use crate::format;
use crate::store::DataStore;
use std::path::Path;

/// An existing target is never replaced unless the directive says `Overwrite`.
pub fn run<S: DataStore>(
    catalog: &Catalog,
    store: &mut S,
    path: &Path,
    directive: SaveDirective,
) -> Result<CmdResult> {
    match directive {
        SaveDirective::Cancel => {
            return Ok(CmdResult::default().with_message(CmdMessage::info("Save cancelled.")));
        }
        SaveDirective::Ask if store.exists(path) => {
            tracing::debug!(path = %path.display(), "save target exists, awaiting decision");
            let mut result = CmdResult::default();
            result.pending_overwrite = Some(path.to_path_buf());
            result.add_message(CmdMessage::warning(format!(
                "File already exists: {}",
                path.display()
            )));
            return Ok(result);
        }
        SaveDirective::Ask | SaveDirective::Overwrite => {}
    }

    let lines: Vec<String> = catalog.books().iter().map(format::encode).collect();
    store.write_lines(path, &lines)?;
    tracing::info!(path = %path.display(), books = lines.len(), "catalog saved");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved to file: {}",
        path.display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn scenario() -> StoreFixture {
        StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Sci-Fi")
            .with_book("1984", "George Orwell", 1949, "Dystopian")
    }

    #[test]
    fn writes_one_line_per_book() {
        let mut fx = scenario();
        let result = run(&fx.catalog, &mut fx.store, Path::new("lib.txt"), SaveDirective::Ask).unwrap();

        assert_eq!(
            fx.store.contents("lib.txt"),
            Some("1;Dune;Frank Herbert;1965;Sci-Fi\n2;1984;George Orwell;1949;Dystopian\n")
        );
        assert_eq!(result.messages[0].content, "Saved to file: lib.txt");
        assert!(result.pending_overwrite.is_none());
    }

    #[test]
    fn empty_catalog_writes_empty_file() {
        let mut fx = StoreFixture::new();
        run(&fx.catalog, &mut fx.store, Path::new("lib.txt"), SaveDirective::Ask).unwrap();
        assert_eq!(fx.store.contents("lib.txt"), Some(""));
    }

    #[test]
    fn existing_target_waits_for_decision() {
        let mut fx = scenario().with_file("lib.txt", &["keep me"]);
        let result = run(&fx.catalog, &mut fx.store, Path::new("lib.txt"), SaveDirective::Ask).unwrap();

        assert_eq!(result.pending_overwrite.as_deref(), Some(Path::new("lib.txt")));
        assert_eq!(fx.store.contents("lib.txt"), Some("keep me\n"));
    }

    #[test]
    fn overwrite_replaces_whole_file() {
        let mut fx = scenario().with_file("lib.txt", &["a", "b", "c", "d"]);
        run(&fx.catalog, &mut fx.store, Path::new("lib.txt"), SaveDirective::Overwrite).unwrap();
        assert_eq!(
            fx.store.contents("lib.txt"),
            Some("1;Dune;Frank Herbert;1965;Sci-Fi\n2;1984;George Orwell;1949;Dystopian\n")
        );
    }

    #[test]
    fn cancel_writes_nothing() {
        let mut fx = scenario();
        let result = run(&fx.catalog, &mut fx.store, Path::new("lib.txt"), SaveDirective::Cancel).unwrap();
        assert!(fx.store.contents("lib.txt").is_none());
        assert_eq!(result.messages[0].content, "Save cancelled.");
    }
}
