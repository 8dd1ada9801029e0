use model_composer::{FileAction, GenerateError, Generator, Project};
use std::fs;
use std::path::Path;

fn project_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("app/Models")).unwrap();
    fs::create_dir_all(dir.path().join("app/Collections")).unwrap();
    fs::create_dir_all(dir.path().join("app/QueryBuilders")).unwrap();
    dir
}

fn read(base: &Path, relative: &str) -> String {
    fs::read_to_string(base.join(relative)).unwrap()
}

#[test]
fn make_model_generates_the_full_companion_set() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    let files = Generator::new(&project, false).make_model("Post", true).unwrap();

    // model, collection, model update, query builder, model update
    assert_eq!(files.len(), 5);
    assert_eq!(files[0].action, FileAction::Created);
    assert_eq!(files[0].class, "App\\Models\\Post");

    let model = read(dir.path(), "app/Models/Post.php");
    assert!(model.contains("use App\\Collections\\PostCollection;"));
    assert!(model.contains("use App\\QueryBuilders\\PostQueryBuilder;"));
    assert!(model.contains("public function newCollection(array $models = []): PostCollection"));
    assert!(model.contains("public function newEloquentBuilder($query): PostQueryBuilder"));
    assert!(model.contains(" * @method static PostQueryBuilder query()"));
    assert!(model.ends_with("}\n"));

    let collection = read(dir.path(), "app/Collections/PostCollection.php");
    assert!(collection.contains("namespace App\\Collections;"));
    assert!(collection.contains("use App\\Models\\Post;"));
    assert!(collection.contains(" * @method null|Post first()"));
    assert!(collection.contains("class PostCollection extends Collection"));

    let builder = read(dir.path(), "app/QueryBuilders/PostQueryBuilder.php");
    assert!(builder.contains("use App\\Models\\Post;"));
    assert!(builder.contains("use App\\Collections\\PostCollection;"));
    assert!(builder.contains(" * @method null|Post first()"));
    assert!(builder.contains(" * @method PostCollection get()"));
}

#[test]
fn without_composition_generates_only_the_model() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    let files = Generator::new(&project, false).make_model("Post", false).unwrap();

    assert_eq!(files.len(), 1);
    let model = read(dir.path(), "app/Models/Post.php");
    assert!(!model.contains("newCollection"));
    assert!(!model.contains("@method"));
}

#[test]
fn a_collection_without_a_model_gets_no_annotation() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    let files = Generator::new(&project, false)
        .make_collection("TagCollection", None)
        .unwrap();

    assert_eq!(files.len(), 1);
    let collection = read(dir.path(), "app/Collections/TagCollection.php");
    assert!(!collection.contains("@method"));
    assert!(collection.contains("class TagCollection extends Collection"));
}

#[test]
fn a_missing_model_is_reported_with_known_names() {
    let dir = project_dir();
    fs::write(
        dir.path().join("app/Models/User.php"),
        "<?php\n\nnamespace App\\Models;\n\nclass User\n{\n}\n",
    )
    .unwrap();
    let project = Project::new(dir.path(), "App");

    let err = Generator::new(&project, false)
        .make_collection("PostCollection", Some("Post"))
        .unwrap_err();
    match err {
        GenerateError::ModelNotFound { class, known } => {
            assert_eq!(class, "App\\Models\\Post");
            assert_eq!(known, vec!["User"]);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn an_existing_class_is_not_overwritten_without_force() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    let generator = Generator::new(&project, false);

    generator.make_collection("PostCollection", None).unwrap();
    let err = generator.make_collection("PostCollection", None).unwrap_err();
    assert!(matches!(err, GenerateError::ClassExists { .. }));

    Generator::new(&project, true)
        .make_collection("PostCollection", None)
        .unwrap();
}

#[test]
fn recomposing_a_model_fails_before_any_write() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    Generator::new(&project, false).make_model("Post", true).unwrap();

    let model_before = read(dir.path(), "app/Models/Post.php");
    let err = Generator::new(&project, true)
        .make_collection("PostCollection", Some("Post"))
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Compose { source: model_composer::ComposeError::DuplicateComposition { .. }, .. }
    ));
    assert_eq!(read(dir.path(), "app/Models/Post.php"), model_before);
}

#[test]
fn a_missing_collection_is_rejected() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    Generator::new(&project, false).make_model("Post", false).unwrap();

    let err = Generator::new(&project, false)
        .make_query_builder("PostQueryBuilder", Some("Post"), Some("PostCollection"))
        .unwrap_err();
    match err {
        GenerateError::CollectionNotFound { class } => {
            assert_eq!(class, "App\\Collections\\PostCollection");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn the_sub_namespace_falls_back_when_the_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("app")).unwrap();
    let project = Project::new(dir.path(), "App");

    let files = Generator::new(&project, false)
        .make_collection("PostCollection", None)
        .unwrap();
    assert_eq!(files[0].path, dir.path().join("app/PostCollection.php"));
    let content = read(dir.path(), "app/PostCollection.php");
    assert!(content.contains("namespace App;"));
}

#[test]
fn stub_overrides_take_precedence_over_the_embedded_defaults() {
    let dir = project_dir();
    fs::create_dir_all(dir.path().join("stubs")).unwrap();
    fs::write(
        dir.path().join("stubs/collection.stub"),
        "<?php\n\nnamespace {{ namespace }};\n\nclass {{ class }}\n{\n}\n",
    )
    .unwrap();
    let project = Project::new(dir.path(), "App");

    Generator::new(&project, false)
        .make_collection("PostCollection", None)
        .unwrap();
    let collection = read(dir.path(), "app/Collections/PostCollection.php");
    assert!(!collection.contains("extends Collection"));
    assert!(collection.contains("class PostCollection"));
}

#[test]
fn generated_files_serialize_for_the_json_report() {
    let dir = project_dir();
    let project = Project::new(dir.path(), "App");
    let files = Generator::new(&project, false)
        .make_collection("TagCollection", None)
        .unwrap();

    let json = serde_json::to_string(&files).unwrap();
    assert!(json.contains("\"created\""));
    assert!(json.contains("TagCollection"));
}
