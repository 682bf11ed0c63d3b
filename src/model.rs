//! Catalog entities and their wire mapping.
//!
//! The `Serialize` derives define the response shape: a flat object with
//! exactly the table's columns. Inbound bodies arrive as untyped JSON
//! maps; extraction never fails, absent or mistyped fields stay `None`.

use crate::config::UpdatePolicy;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Fields accepted when creating a product. `name` is optional here so a
/// missing value reaches the store and fails its NOT NULL constraint
/// instead of being pre-checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

impl ProductDraft {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        ProductDraft {
            name: string_field(body, "name"),
            description: string_field(body, "description"),
            price: f64_field(body, "price"),
            stock: i32_field(body, "stock"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryDraft {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        CategoryDraft {
            name: string_field(body, "name"),
            description: string_field(body, "description"),
        }
    }
}

impl Product {
    /// Merges a request body into the current record.
    ///
    /// Under `Truthy`, a field changes only when the body value is present
    /// and truthy: `0`, `""`, `null` and `false` leave it as-is. Under
    /// `Presence`, any present key wins and `null` clears an optional
    /// field; `name` is NOT NULL in the store and only takes string values.
    pub fn apply_patch(&mut self, body: &Map<String, Value>, policy: UpdatePolicy) {
        match policy {
            UpdatePolicy::Truthy => {
                if let Some(name) = string_field(body, "name").filter(|s| !s.is_empty()) {
                    self.name = name;
                }
                if let Some(d) = string_field(body, "description").filter(|s| !s.is_empty()) {
                    self.description = Some(d);
                }
                if let Some(p) = f64_field(body, "price").filter(|p| *p != 0.0) {
                    self.price = Some(p);
                }
                if let Some(s) = i32_field(body, "stock").filter(|s| *s != 0) {
                    self.stock = Some(s);
                }
            }
            UpdatePolicy::Presence => {
                if let Some(name) = string_field(body, "name") {
                    self.name = name;
                }
                if body.contains_key("description") {
                    self.description = string_field(body, "description");
                }
                if body.contains_key("price") {
                    self.price = f64_field(body, "price");
                }
                if body.contains_key("stock") {
                    self.stock = i32_field(body, "stock");
                }
            }
        }
    }
}

fn string_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn f64_field(body: &Map<String, Value>, key: &str) -> Option<f64> {
    body.get(key).and_then(Value::as_f64)
}

fn i32_field(body: &Map<String, Value>, key: &str) -> Option<i32> {
    body.get(key)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            description: Some("A widget".into()),
            price: Some(9.99),
            stock: Some(3),
        }
    }

    #[test]
    fn product_serializes_exact_field_subset() {
        let value = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Widget", "description": "A widget", "price": 9.99, "stock": 3})
        );
    }

    #[test]
    fn absent_optional_fields_serialize_as_null() {
        let product = Product {
            id: 2,
            name: "Bare".into(),
            description: None,
            price: None,
            stock: None,
        };
        let value = serde_json::to_value(product).unwrap();
        assert_eq!(value["description"], Value::Null);
        assert_eq!(value["price"], Value::Null);
        assert_eq!(value["stock"], Value::Null);
    }

    #[test]
    fn draft_extraction_tolerates_absent_and_mistyped_fields() {
        let draft = ProductDraft::from_body(&body(json!({
            "name": "Widget",
            "price": "not a number",
            "stock": true
        })));
        assert_eq!(draft.name.as_deref(), Some("Widget"));
        assert_eq!(draft.description, None);
        assert_eq!(draft.price, None);
        assert_eq!(draft.stock, None);
    }

    #[test]
    fn draft_extraction_of_empty_body_is_all_none() {
        assert_eq!(ProductDraft::from_body(&body(json!({}))), ProductDraft::default());
        assert_eq!(CategoryDraft::from_body(&body(json!({}))), CategoryDraft::default());
    }

    #[test]
    fn truthy_patch_applies_present_truthy_fields_only() {
        let mut product = widget();
        product.apply_patch(&body(json!({"stock": 5})), UpdatePolicy::Truthy);
        assert_eq!(product.stock, Some(5));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Some(9.99));
    }

    #[test]
    fn truthy_patch_ignores_falsy_values() {
        let mut product = widget();
        product.apply_patch(
            &body(json!({"name": "", "description": null, "price": 0, "stock": 0})),
            UpdatePolicy::Truthy,
        );
        assert_eq!(product, widget());
    }

    #[test]
    fn truthy_patch_ignores_unconvertible_values() {
        let mut product = widget();
        product.apply_patch(&body(json!({"stock": "many", "name": 12})), UpdatePolicy::Truthy);
        assert_eq!(product, widget());
    }

    #[test]
    fn presence_patch_clears_on_explicit_null() {
        let mut product = widget();
        product.apply_patch(
            &body(json!({"description": null, "stock": 0})),
            UpdatePolicy::Presence,
        );
        assert_eq!(product.description, None);
        assert_eq!(product.stock, Some(0));
        assert_eq!(product.price, Some(9.99));
    }

    #[test]
    fn presence_patch_leaves_absent_fields_untouched() {
        let mut product = widget();
        product.apply_patch(&body(json!({"name": "Gadget"})), UpdatePolicy::Presence);
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.description.as_deref(), Some("A widget"));
    }

    #[test]
    fn presence_patch_does_not_null_required_name() {
        let mut product = widget();
        product.apply_patch(&body(json!({"name": null})), UpdatePolicy::Presence);
        assert_eq!(product.name, "Widget");
    }
}
