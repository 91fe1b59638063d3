//! JSON document customer store

use custdna_core::store::next_customer_id;
use custdna_core::{Customer, CustomerStore, Error, InteractionRecord, NewCustomer, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk layout: `{ "customers": [ ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Keeps the whole document in memory and rewrites the file on every change
///
/// Writers hold the write lock across the read-modify-persist cycle, so
/// concurrent appends to the same customer are never lost.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: RwLock<StoreDocument>,
}

impl JsonFileStore {
    /// Open the document at `path`, creating an empty one when missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StoreDocument::default()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    Error::storage(format!("invalid store document {}: {e}", path.display()))
                })?
            }
        } else {
            let document = StoreDocument::default();
            write_document(&path, &document)?;
            info!(path = %path.display(), "Created empty customer store");
            document
        };

        info!(
            path = %path.display(),
            customers = document.customers.len(),
            "Opened customer store"
        );

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the document, persist it, then publish it
    fn update<T>(&self, change: impl FnOnce(&mut StoreDocument) -> Result<T>) -> Result<T> {
        let mut document = self.document.write();
        let mut next = document.clone();
        let output = change(&mut next)?;
        write_document(&self.path, &next)?;
        *document = next;
        Ok(output)
    }
}

impl CustomerStore for JsonFileStore {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.document.read().customers.clone())
    }

    fn get_customer(&self, id: u64) -> Result<Customer> {
        self.document
            .read()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    fn create_customer(&self, fields: NewCustomer) -> Result<Customer> {
        let name = fields.validated_name()?;
        self.update(|document| {
            let customer = Customer {
                id: next_customer_id(&document.customers),
                name,
                interactions: Vec::new(),
            };
            document.customers.push(customer.clone());
            debug!(customer_id = customer.id, "Created customer");
            Ok(customer)
        })
    }

    fn append_interaction(&self, customer_id: u64, record: InteractionRecord) -> Result<()> {
        self.update(|document| {
            let customer = document
                .customers
                .iter_mut()
                .find(|c| c.id == customer_id)
                .ok_or_else(|| Error::not_found(customer_id))?;
            customer.interactions.push(record);
            debug!(
                customer_id,
                interactions = customer.interactions.len(),
                "Appended interaction"
            );
            Ok(())
        })
    }
}

/// Pretty-print to a sibling temp file and rename it over the target
fn write_document(path: &Path, document: &StoreDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::storage(format!("invalid store path {}", path.display())))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let json = serde_json::to_string_pretty(document)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
