//! Create/edit form behavior.
//!
//! A form page binds a payload to inputs, submits it through the entity
//! gateway, and maps the backend's field-level error array onto per-field
//! UI state. Errors with an unknown or missing field name go to the
//! page-level banner instead.

use std::collections::{BTreeMap, BTreeSet};

use models::{ListRow, MutationOutcome};
use serde_json::Value;
use services::{EntityGateway, error::GENERIC_ERROR_MESSAGE};

/// What the page does after a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Navigate away, carrying a one-shot flash message.
    Saved { flash: String },
    /// Stay on the form; errors were recorded.
    Rejected,
}

pub struct FormPage {
    known_fields: BTreeSet<&'static str>,
    field_errors: BTreeMap<String, String>,
    banner: Option<String>,
    saving: bool,
}

impl FormPage {
    pub fn new(fields: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            known_fields: fields.into_iter().collect(),
            field_errors: BTreeMap::new(),
            banner: None,
            saving: false,
        }
    }

    /// Submit the payload: create when new, update when editing.
    pub async fn submit<T, G>(
        &mut self,
        gateway: &G,
        payload: Value,
        editing: bool,
        flash: &str,
    ) -> SubmitOutcome
    where
        T: ListRow,
        G: EntityGateway<T>,
    {
        self.saving = true;
        let outcome = if editing {
            gateway.update(payload).await
        } else {
            gateway.create(payload).await
        };
        self.saving = false;

        if outcome.ok {
            self.field_errors.clear();
            self.banner = None;
            SubmitOutcome::Saved {
                flash: flash.to_string(),
            }
        } else {
            self.apply_errors(&outcome);
            SubmitOutcome::Rejected
        }
    }

    /// Partition backend errors into field-targeted and global ones.
    pub fn apply_errors(&mut self, outcome: &MutationOutcome) {
        self.field_errors.clear();
        let mut globals: Vec<String> = Vec::new();
        for err in &outcome.field_errors {
            let description = err
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            match err.field_name.as_deref().filter(|n| !n.is_empty()) {
                Some(name) if self.known_fields.contains(name) => {
                    self.field_errors.insert(name.to_string(), description);
                }
                _ => globals.push(description),
            }
        }
        self.banner = if let Some(first) = globals.into_iter().next() {
            Some(first)
        } else if self.field_errors.is_empty() {
            Some(
                outcome
                    .message
                    .clone()
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            )
        } else {
            // Every error landed next to its field; no banner needed.
            None
        };
    }

    /// A field's error clears as soon as the user edits it again.
    pub fn touch_field(&mut self, name: &str) {
        self.field_errors.remove(name);
    }

    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn has_errors(&self) -> bool {
        self.banner.is_some() || !self.field_errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use models::FieldError;
    use services::SearchPage;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
    }

    impl ListRow for Row {
        fn id(&self) -> i64 {
            self.id
        }

        fn haystack(&self) -> Vec<&str> {
            Vec::new()
        }
    }

    struct FakeGateway {
        outcome: MutationOutcome,
        created: Mutex<Vec<Value>>,
        updated: Mutex<Vec<Value>>,
    }

    impl FakeGateway {
        fn returning(outcome: MutationOutcome) -> Self {
            Self {
                outcome,
                created: Mutex::new(Vec::new()),
                updated: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EntityGateway<Row> for FakeGateway {
        async fn list(&self, _page: Option<u32>, _size: Option<u32>) -> Vec<Row> {
            Vec::new()
        }

        async fn search(&self, _query: &str, _page: u32, _size: u32) -> SearchPage<Row> {
            SearchPage::empty()
        }

        async fn get(&self, _id: i64) -> Option<Row> {
            None
        }

        async fn create(&self, payload: Value) -> MutationOutcome {
            self.created.lock().unwrap().push(payload);
            self.outcome.clone()
        }

        async fn update(&self, payload: Value) -> MutationOutcome {
            self.updated.lock().unwrap().push(payload);
            self.outcome.clone()
        }

        async fn remove(&self, _id: i64) -> MutationOutcome {
            MutationOutcome::success(None, None)
        }
    }

    fn field_error(field: Option<&str>, description: &str) -> FieldError {
        FieldError {
            code: Some("V01".to_string()),
            description: Some(description.to_string()),
            field_name: field.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn successful_submit_yields_flash_and_routes_create_vs_update() {
        let gateway = FakeGateway::returning(MutationOutcome::success(None, Some(9)));
        let mut form = FormPage::new(["nombre"]);

        let outcome = form
            .submit::<Row, _>(&gateway, serde_json::json!({"nombre": "x"}), false, "Creado")
            .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                flash: "Creado".to_string()
            }
        );
        assert_eq!(gateway.created.lock().unwrap().len(), 1);

        form.submit::<Row, _>(&gateway, serde_json::json!({"id": 9}), true, "Guardado")
            .await;
        assert_eq!(gateway.updated.lock().unwrap().len(), 1);
        assert!(!form.has_errors());
    }

    #[tokio::test]
    async fn errors_partition_into_field_and_banner() {
        let mut outcome = MutationOutcome::failure("validation failed");
        outcome.field_errors = vec![
            field_error(Some("nombre"), "nombre requerido"),
            field_error(Some("campoDesconocido"), "dato inválido"),
            field_error(None, "registro duplicado"),
        ];
        let gateway = FakeGateway::returning(outcome);
        let mut form = FormPage::new(["nombre", "descripcion"]);

        let result = form
            .submit::<Row, _>(&gateway, serde_json::json!({}), false, "Creado")
            .await;
        assert_eq!(result, SubmitOutcome::Rejected);
        assert_eq!(form.field_error("nombre"), Some("nombre requerido"));
        // Unknown field and missing field name both go to the banner;
        // the first one wins.
        assert_eq!(form.banner(), Some("dato inválido"));
    }

    #[test]
    fn banner_only_when_no_field_took_the_error() {
        let mut form = FormPage::new(["nombre"]);
        let mut outcome = MutationOutcome::failure("fallo general");
        outcome.field_errors = vec![field_error(Some("nombre"), "nombre requerido")];
        form.apply_errors(&outcome);
        assert_eq!(form.banner(), None);

        let outcome = MutationOutcome::failure("fallo general");
        form.apply_errors(&outcome);
        assert_eq!(form.banner(), Some("fallo general"));
    }

    #[test]
    fn touching_a_field_clears_only_its_error() {
        let mut form = FormPage::new(["nombre", "codigo"]);
        let mut outcome = MutationOutcome::failure("validation failed");
        outcome.field_errors = vec![
            field_error(Some("nombre"), "nombre requerido"),
            field_error(Some("codigo"), "codigo duplicado"),
        ];
        form.apply_errors(&outcome);

        form.touch_field("nombre");
        assert_eq!(form.field_error("nombre"), None);
        assert_eq!(form.field_error("codigo"), Some("codigo duplicado"));
    }
}
