//! Stub templates for generated classes.
//!
//! Templates carry `{{ namespace }}` and `{{ class }}` placeholders (spaced
//! and unspaced forms); the composition stubs start with a blank line and end
//! at the method's closing brace so the class-body splice seams cleanly.

/// The stub files a project may override under `stubs/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stub {
    Model,
    Collection,
    CollectionComposition,
    QueryBuilder,
    QueryBuilderComposition,
}

impl Stub {
    /// File name looked up under the project's `stubs/` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Stub::Model => "model.stub",
            Stub::Collection => "collection.stub",
            Stub::CollectionComposition => "collection.composition.stub",
            Stub::QueryBuilder => "query-builder.stub",
            Stub::QueryBuilderComposition => "query-builder.composition.stub",
        }
    }

    /// Embedded default template.
    pub fn default_content(self) -> &'static str {
        match self {
            Stub::Model => MODEL,
            Stub::Collection => COLLECTION,
            Stub::CollectionComposition => COLLECTION_COMPOSITION,
            Stub::QueryBuilder => QUERY_BUILDER,
            Stub::QueryBuilderComposition => QUERY_BUILDER_COMPOSITION,
        }
    }
}

/// Replace the class placeholders in `stub`.
pub fn fill_class(stub: &str, class: &str) -> String {
    stub.replace("{{ class }}", class).replace("{{class}}", class)
}

/// Replace the namespace and class placeholders in `stub`.
pub fn substitute(stub: &str, namespace: &str, class: &str) -> String {
    let stub = stub
        .replace("{{ namespace }}", namespace)
        .replace("{{namespace}}", namespace);
    fill_class(&stub, class)
}

const MODEL: &str = r"<?php

namespace {{ namespace }};

use Illuminate\Database\Eloquent\Model;

class {{ class }} extends Model
{
  //
}
";

const COLLECTION: &str = r"<?php

namespace {{ namespace }};

use Illuminate\Database\Eloquent\Collection;

class {{ class }} extends Collection
{
  //
}
";

const QUERY_BUILDER: &str = r"<?php

namespace {{ namespace }};

use Illuminate\Database\Eloquent\Builder;

class {{ class }} extends Builder
{
  //
}
";

const COLLECTION_COMPOSITION: &str = r"
  /**
   * Create a new Eloquent Collection instance.
   *
   * @param  array<int, static>  $models
   * @return {{ class }}<int, static>
   */
  public function newCollection(array $models = []): {{ class }}
  {
    return new {{ class }}($models);
  }";

const QUERY_BUILDER_COMPOSITION: &str = r"
  /**
   * Create a new Eloquent query builder for the model.
   *
   * @param  \Illuminate\Database\Query\Builder  $query
   * @return {{ class }}
   */
  public function newEloquentBuilder($query): {{ class }}
  {
    return new {{ class }}($query);
  }";
