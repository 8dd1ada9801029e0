//! Composition recipes: the edit sequences behind the generator commands.

use crate::edit;
use crate::error::ComposeError;
use crate::naming::class_basename;
use crate::stubs;

/// Method signature marking a collection composition already in place.
pub const COLLECTION_MARKER: &str = "function newCollection";

/// Method signature marking a query builder composition already in place.
pub const QUERY_BUILDER_MARKER: &str = "function newEloquentBuilder";

/// Fail with `DuplicateComposition` when `marker` is already present in the
/// source, before any mutation is attempted.
pub fn ensure_not_composed(text: &str, marker: &'static str) -> Result<(), ComposeError> {
    if text.contains(marker) {
        Err(ComposeError::DuplicateComposition { marker })
    } else {
        Ok(())
    }
}

/// Splice `block` into the class body: the file's last `}` is replaced by the
/// block and the closing brace re-appended on its own line.
pub fn append_to_class_body(text: &str, block: &str) -> Result<String, ComposeError> {
    let position = match text.rfind('}') {
        Some(position) => position,
        None => {
            return Err(ComposeError::MalformedSource {
                reason: "no class body to extend",
            })
        }
    };

    let mut output = String::with_capacity(text.len() + block.len() + 2);
    output.push_str(&text[..position]);
    output.push_str(block);
    output.push_str(&text[position + 1..]);
    output.push_str("}\n");
    Ok(output)
}

/// Inject a collection composition into a model source: an import plus a
/// `newCollection` override returning the collection class.
pub fn compose_collection(
    model_text: &str,
    collection: &str,
    composition_stub: &str,
) -> Result<String, ComposeError> {
    ensure_not_composed(model_text, COLLECTION_MARKER)?;
    let with_import = edit::add_imports(model_text, &[collection.to_string()])?;
    let body = stubs::fill_class(composition_stub, class_basename(collection));
    append_to_class_body(&with_import, &body)
}

/// Inject a query builder composition into a model source: an import, a
/// `newEloquentBuilder` override, and a `query()` line in the class doc block.
pub fn compose_query_builder(
    model_text: &str,
    builder: &str,
    composition_stub: &str,
) -> Result<String, ComposeError> {
    ensure_not_composed(model_text, QUERY_BUILDER_MARKER)?;
    let with_import = edit::add_imports(model_text, &[builder.to_string()])?;
    let body = stubs::fill_class(composition_stub, class_basename(builder));
    let with_body = append_to_class_body(&with_import, &body)?;
    edit::append_or_create_annotation(&with_body, &model_annotation_props(builder))
}

/// Build a companion class from its stub: placeholders first, then imports,
/// then a doc-block annotation above the class declaration.
pub fn build_class(
    stub: &str,
    namespace: &str,
    class: &str,
    imports: &[String],
    annotation_props: &[String],
) -> Result<String, ComposeError> {
    let mut text = stubs::substitute(stub, namespace, class);
    if !imports.is_empty() {
        text = edit::add_imports(&text, imports)?;
    }
    if !annotation_props.is_empty() {
        text = edit::insert_before(&text, "class", &[edit::create_annotation(annotation_props)])?;
    }
    Ok(text)
}

/// `@method` lines for a generated collection class.
pub fn collection_annotation_props(model: &str) -> Vec<String> {
    vec![format!("@method null|{} first()", class_basename(model))]
}

/// `@method` lines for a generated query builder class.
pub fn query_builder_annotation_props(model: &str, collection: Option<&str>) -> Vec<String> {
    let mut props = vec![format!("@method null|{} first()", class_basename(model))];
    if let Some(collection) = collection {
        props.push(format!("@method {} get()", class_basename(collection)));
    }
    props
}

/// `@method` line merged into the model when a query builder is composed.
pub fn model_annotation_props(builder: &str) -> Vec<String> {
    vec![format!("@method static {} query()", class_basename(builder))]
}
