//! Template registry

use crate::error::{PagecraftError, Result};
use crate::schema::validate_schema;
use crate::site::builtin;
use crate::site::template::SiteTemplate;
use crate::theme::model::is_slug;
use serde::Serialize;

/// Public description of a template for selection UIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub default_theme_id: String,
    pub description: String,
    pub field_count: usize,
}

/// Insertion-ordered set of templates, immutable once built
#[derive(Default)]
pub struct TemplateRegistry {
    templates: Vec<Box<dyn SiteTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the builtin templates
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for template in builtin::all()? {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Add a template after validating its metadata and schema
    pub fn register(&mut self, template: Box<dyn SiteTemplate>) -> Result<()> {
        let meta = template.meta();
        if !is_slug(&meta.id) {
            return Err(PagecraftError::SchemaInvalid {
                template: meta.id.clone(),
                field: String::new(),
                reason: "template id may only contain a-z, 0-9 and '-'".to_string(),
            });
        }
        if self.get(&meta.id).is_ok() {
            return Err(PagecraftError::DuplicateTemplate(meta.id.clone()));
        }
        if let Some(title_field) = &meta.title_field {
            if template.schema().field(title_field).is_none() {
                return Err(PagecraftError::SchemaInvalid {
                    template: meta.id.clone(),
                    field: title_field.clone(),
                    reason: "title_field is not a declared field".to_string(),
                });
            }
        }
        validate_schema(&meta.id, template.schema())?;

        tracing::trace!(template = %meta.id, "registering template");
        self.templates.push(template);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&dyn SiteTemplate> {
        self.templates
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.as_ref())
            .ok_or_else(|| PagecraftError::UnknownTemplate(id.to_string()))
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates
            .iter()
            .map(|t| {
                let meta = t.meta();
                TemplateSummary {
                    id: meta.id.clone(),
                    display_name: meta.display_name.clone(),
                    category: meta.category.clone(),
                    default_theme_id: meta.default_theme_id.clone(),
                    description: meta.description.clone(),
                    field_count: t.schema().fields.len(),
                }
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SiteTemplate> {
        self.templates.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.templates.iter().map(|t| t.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::schema::{Field, FieldType, Schema};
    use crate::site::template::{Body, ComposeContext, Composition, TemplateMeta};

    struct Stub {
        meta: TemplateMeta,
        schema: Schema,
    }

    impl Stub {
        fn boxed(id: &str, fields: Vec<Field>) -> Box<dyn SiteTemplate> {
            Box::new(Stub {
                meta: TemplateMeta {
                    id: id.to_string(),
                    display_name: "Stub".to_string(),
                    category: "test".to_string(),
                    default_theme_id: "minimal".to_string(),
                    description: String::new(),
                    title_field: None,
                },
                schema: Schema::new(fields),
            })
        }
    }

    impl SiteTemplate for Stub {
        fn meta(&self) -> &TemplateMeta {
            &self.meta
        }

        fn schema(&self) -> &Schema {
            &self.schema
        }

        fn compose(&self, _cx: &ComposeContext<'_>) -> Result<Composition> {
            Ok(Composition {
                body: Body::Single("<main></main>".to_string()),
                styles: String::new(),
            })
        }
    }

    #[test]
    fn test_builtin_templates() {
        let registry = TemplateRegistry::builtin().unwrap();
        let ids: Vec<String> = registry.list().into_iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["business-card", "portfolio", "restaurant-menu", "saas-landing"]
        );
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::builtin().unwrap();
        match registry.get("does-not-exist") {
            Err(PagecraftError::UnknownTemplate(id)) => assert_eq!(id, "does-not-exist"),
            other => panic!("Expected UnknownTemplate, got {:?}", other.map(|t| t.id().to_string())),
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = TemplateRegistry::new();
        registry.register(Stub::boxed("stub", vec![])).unwrap();
        assert!(matches!(
            registry.register(Stub::boxed("stub", vec![])),
            Err(PagecraftError::DuplicateTemplate(_))
        ));
    }

    #[test]
    fn test_invalid_schema_rejected_at_registration() {
        let nested = Field::new("outer", FieldType::Group, "Outer").with_fields(vec![Field::new(
            "inner",
            FieldType::Group,
            "Inner",
        )
        .with_fields(vec![Field::new("x", FieldType::Text, "X")])]);

        let mut registry = TemplateRegistry::new();
        assert!(matches!(
            registry.register(Stub::boxed("stub", vec![nested])),
            Err(PagecraftError::NestedGroup { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_id_rejected() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.register(Stub::boxed("Bad Id", vec![])).is_err());
    }
}
