//! Generator commands: scaffold companion classes and compose them into
//! models. Each command mirrors one console command of the generator surface:
//! `model`, `collection`, `query-builder`.

use std::path::PathBuf;

use serde::Serialize;

use crate::compose;
use crate::error::GenerateError;
use crate::naming::{class_basename, namespace_of, studly, ClassKind};
use crate::project::Project;
use crate::stubs::Stub;

/// How a generated file reached disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Created,
    Updated,
}

/// One file written by a command.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub class: String,
    pub action: FileAction,
}

/// Runs the generator commands against one project.
///
/// All preconditions (model existence, duplicate-composition markers, target
/// collisions) are checked before the first file of a command is written.
pub struct Generator<'p> {
    project: &'p Project,
    force: bool,
}

impl<'p> Generator<'p> {
    pub fn new(project: &'p Project, force: bool) -> Self {
        Self { project, force }
    }

    /// `model <name>`: write the model class, then chain the collection and
    /// query builder commands unless composition is disabled.
    pub fn make_model(
        &self,
        name: &str,
        with_composition: bool,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let qualifier = self.project.qualifier();
        let q_model = qualifier.qualify(name, ClassKind::Model);

        let stub = self.stub(Stub::Model)?;
        let content = compose::build_class(
            &stub,
            namespace_of(&q_model),
            class_basename(&q_model),
            &[],
            &[],
        )
        .map_err(|source| GenerateError::Compose {
            class: q_model.clone(),
            source,
        })?;
        let mut written = vec![self.write_new(&q_model, &content)?];

        if with_composition {
            let base = studly(class_basename(name));
            written.extend(self.make_collection(&format!("{}Collection", base), Some(name))?);
            written.extend(self.make_query_builder(
                &format!("{}QueryBuilder", base),
                Some(name),
                Some(&format!("{}Collection", base)),
            )?);
        }

        Ok(written)
    }

    /// `collection <name> [-m model]`: write the collection class and, when a
    /// model is named, compose it into that model.
    pub fn make_collection(
        &self,
        name: &str,
        model: Option<&str>,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let qualifier = self.project.qualifier();
        let q_collection = qualifier.qualify(name, ClassKind::Collection);

        let composition = match normalize_name(model).as_deref() {
            Some(model) => {
                let q_model = qualifier.qualify(model, ClassKind::Model);
                let text = self.model_content(&q_model)?;
                ensure_marker_absent(&text, compose::COLLECTION_MARKER, &q_model)?;
                Some((q_model, text))
            }
            None => None,
        };

        let mut written = Vec::new();

        let imports: Vec<String> = composition.iter().map(|(q_model, _)| q_model.clone()).collect();
        let props = match &composition {
            Some((q_model, _)) => compose::collection_annotation_props(q_model),
            None => Vec::new(),
        };
        let stub = self.stub(Stub::Collection)?;
        let content = compose::build_class(
            &stub,
            namespace_of(&q_collection),
            class_basename(&q_collection),
            &imports,
            &props,
        )
        .map_err(|source| GenerateError::Compose {
            class: q_collection.clone(),
            source,
        })?;
        written.push(self.write_new(&q_collection, &content)?);

        if let Some((q_model, text)) = composition {
            let stub = self.stub(Stub::CollectionComposition)?;
            let composed = compose::compose_collection(&text, &q_collection, &stub).map_err(
                |source| GenerateError::Compose {
                    class: q_model.clone(),
                    source,
                },
            )?;
            written.push(self.write_updated(&q_model, &composed)?);
        }

        Ok(written)
    }

    /// `query-builder <name> [-m model] [-c collection]`: write the builder
    /// class and, when a model is named, compose it into that model.
    pub fn make_query_builder(
        &self,
        name: &str,
        model: Option<&str>,
        collection: Option<&str>,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let qualifier = self.project.qualifier();
        let q_builder = qualifier.qualify(name, ClassKind::QueryBuilder);

        let composition = match normalize_name(model).as_deref() {
            Some(model) => {
                let q_model = qualifier.qualify(model, ClassKind::Model);
                let text = self.model_content(&q_model)?;
                ensure_marker_absent(&text, compose::QUERY_BUILDER_MARKER, &q_model)?;
                Some((q_model, text))
            }
            None => None,
        };

        let q_collection = match normalize_name(collection).as_deref() {
            Some(collection) => {
                let q_collection = qualifier.qualify(collection, ClassKind::Collection);
                if !self.project.class_path(&q_collection).is_file() {
                    return Err(GenerateError::CollectionNotFound { class: q_collection });
                }
                Some(q_collection)
            }
            None => None,
        };

        let mut written = Vec::new();

        let mut imports = Vec::new();
        let mut props = Vec::new();
        if let Some((q_model, _)) = &composition {
            imports.push(q_model.clone());
            if let Some(q_collection) = &q_collection {
                imports.push(q_collection.clone());
            }
            props = compose::query_builder_annotation_props(q_model, q_collection.as_deref());
        }
        let stub = self.stub(Stub::QueryBuilder)?;
        let content = compose::build_class(
            &stub,
            namespace_of(&q_builder),
            class_basename(&q_builder),
            &imports,
            &props,
        )
        .map_err(|source| GenerateError::Compose {
            class: q_builder.clone(),
            source,
        })?;
        written.push(self.write_new(&q_builder, &content)?);

        if let Some((q_model, text)) = composition {
            let stub = self.stub(Stub::QueryBuilderComposition)?;
            let composed = compose::compose_query_builder(&text, &q_builder, &stub).map_err(
                |source| GenerateError::Compose {
                    class: q_model.clone(),
                    source,
                },
            )?;
            written.push(self.write_updated(&q_model, &composed)?);
        }

        Ok(written)
    }

    fn stub(&self, stub: Stub) -> Result<String, GenerateError> {
        self.project.stub(stub).map_err(|source| GenerateError::Io {
            path: self.project.stub_path(stub),
            source,
        })
    }

    fn model_content(&self, q_model: &str) -> Result<String, GenerateError> {
        let path = self.project.class_path(q_model);
        if !path.is_file() {
            return Err(GenerateError::ModelNotFound {
                class: q_model.to_string(),
                known: self.project.model_names(),
            });
        }
        self.project
            .read_class(q_model)
            .map_err(|source| GenerateError::Io { path, source })
    }

    fn write_new(&self, qualified: &str, content: &str) -> Result<GeneratedFile, GenerateError> {
        let path = self.project.class_path(qualified);
        if path.exists() && !self.force {
            return Err(GenerateError::ClassExists { path });
        }
        self.write(qualified, content, FileAction::Created)
    }

    fn write_updated(
        &self,
        qualified: &str,
        content: &str,
    ) -> Result<GeneratedFile, GenerateError> {
        self.write(qualified, content, FileAction::Updated)
    }

    fn write(
        &self,
        qualified: &str,
        content: &str,
        action: FileAction,
    ) -> Result<GeneratedFile, GenerateError> {
        let path = self
            .project
            .write_class(qualified, content)
            .map_err(|source| GenerateError::Io {
                path: self.project.class_path(qualified),
                source,
            })?;
        Ok(GeneratedFile {
            path,
            class: qualified.to_string(),
            action,
        })
    }
}

fn ensure_marker_absent(
    text: &str,
    marker: &'static str,
    class: &str,
) -> Result<(), GenerateError> {
    compose::ensure_not_composed(text, marker).map_err(|source| GenerateError::Compose {
        class: class.to_string(),
        source,
    })
}

fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
}
