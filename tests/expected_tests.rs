//! Compares composition output against .expected.php fixture files.
//!
//! Each `tests/fixtures/<recipe>/<name>.php` is a model source; the
//! `.expected.php` file next to it is the recipe's output for companion
//! classes named after the file stem.
//!
//! Run with: cargo test --test expected_tests

use model_composer::compose;
use model_composer::naming::studly;
use model_composer::stubs::Stub;
use model_composer::ComposeError;
use std::fs;
use std::path::{Path, PathBuf};

fn collect_fixtures(recipe: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(recipe);

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "php"))
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| !path.to_string_lossy().ends_with(".expected.php"))
        .collect();
    files.sort();
    files
}

fn check_recipe(recipe: &str, apply: impl Fn(&str, &str) -> Result<String, ComposeError>) {
    let fixtures = collect_fixtures(recipe);
    assert!(!fixtures.is_empty(), "no fixtures found for {}", recipe);

    let mut failures = Vec::new();
    for path in fixtures {
        let expected_path = path.with_extension("expected.php");
        let source = fs::read_to_string(&path).unwrap();
        let expected = fs::read_to_string(&expected_path).unwrap();
        let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap();

        match apply(&source, &studly(stem)) {
            Ok(output) if output == expected => {}
            Ok(output) => failures.push(format!(
                "Output mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
                path.display(),
                expected,
                output
            )),
            Err(err) => failures.push(format!("Compose error for {}: {}", path.display(), err)),
        }
    }

    if !failures.is_empty() {
        panic!("\n{} fixture(s) failed:\n\n{}", failures.len(), failures.join("\n\n"));
    }
}

#[test]
fn collection_fixtures_match_expected_output() {
    check_recipe("collection", |source, class| {
        compose::compose_collection(
            source,
            &format!("App\\Collections\\{}Collection", class),
            Stub::CollectionComposition.default_content(),
        )
    });
}

#[test]
fn query_builder_fixtures_match_expected_output() {
    check_recipe("query-builder", |source, class| {
        compose::compose_query_builder(
            source,
            &format!("App\\QueryBuilders\\{}QueryBuilder", class),
            Stub::QueryBuilderComposition.default_content(),
        )
    });
}
