//! Product create/edit screen.

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::product::validate_product;
use catalog_core::types::DbId;
use serde_json::Value;

use crate::api::ProductApi;
use crate::dialog::Dialog;
use crate::model::{Product, ProductDraft};

pub const MSG_LOAD_FAILED: &str = "Failed to load product details.";
pub const MSG_SAVE_FAILED: &str = "Failed to save product. Check your input.";

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(DbId),
}

/// Raw text of the four inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl From<&Product> for FormFields {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }
}

/// Navigation back to the list screen, with a notice to show there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnToList {
    pub notice: Dialog,
}

/// View model of the product form.
pub struct FormView {
    api: Arc<dyn ProductApi>,
    mode: FormMode,
    pub fields: FormFields,
    loading: bool,
    dialog: Option<Dialog>,
}

impl FormView {
    /// Empty form for a new product.
    pub fn create(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            mode: FormMode::Create,
            fields: FormFields::default(),
            loading: false,
            dialog: None,
        }
    }

    /// Form pre-filled with product `id`.
    ///
    /// If the product cannot be loaded the form is not shown; the caller
    /// returns to the list with the error notice instead.
    pub async fn edit(api: Arc<dyn ProductApi>, id: DbId) -> Result<Self, ReturnToList> {
        match api.get(id).await {
            Ok(product) => Ok(Self {
                fields: FormFields::from(&product),
                api,
                mode: FormMode::Edit(id),
                loading: false,
                dialog: None,
            }),
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "Failed to load product for edit");
                Err(ReturnToList {
                    notice: Dialog::error(e.user_message(MSG_LOAD_FAILED)),
                })
            }
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Save Changes",
        }
    }

    /// Check the inputs with the same rules the server applies.
    ///
    /// An empty description is sent as `null`.
    pub fn validate(&self) -> Result<ProductDraft, String> {
        let text = |s: &str| Value::String(s.to_string());
        let description = if self.fields.description.is_empty() {
            Value::Null
        } else {
            text(&self.fields.description)
        };

        validate_product(
            Some(&text(&self.fields.name)),
            Some(&description),
            Some(&text(&self.fields.price)),
            Some(&text(&self.fields.stock)),
        )
        .map(|fields| ProductDraft {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
        })
        .map_err(|e| match e {
            CoreError::Validation(message) => message,
            other => other.to_string(),
        })
    }

    /// Validate and save.
    ///
    /// Returns the navigation back to the list on success. On failure the
    /// form stays open with an error dialog.
    pub async fn submit(&mut self) -> Option<ReturnToList> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(message) => {
                self.dialog = Some(Dialog::error(message));
                return None;
            }
        };

        self.loading = true;
        let result = match self.mode {
            FormMode::Create => self.api.create(&draft).await.map(|created| {
                tracing::info!(product_id = created.product_id, "Product created");
                created.message
            }),
            FormMode::Edit(id) => self.api.update(id, &draft).await.inspect(|_| {
                tracing::info!(product_id = id, "Product updated");
            }),
        };
        self.loading = false;

        match result {
            Ok(message) => Some(ReturnToList {
                notice: Dialog::success(message),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save product");
                self.dialog = Some(Dialog::error(e.user_message(MSG_SAVE_FAILED)));
                None
            }
        }
    }
}
