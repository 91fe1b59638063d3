//! Persistence collaborator contract

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::types::{Customer, InteractionRecord, NewCustomer};

/// Storage for customers and their interaction histories
///
/// Implementations serialize appends per customer; readers get a
/// consistent snapshot.
pub trait CustomerStore: Send + Sync {
    /// All customers in creation order
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// A single customer, or [`Error::NotFound`]
    fn get_customer(&self, id: u64) -> Result<Customer>;

    /// Create a customer with an empty history and the next free id
    fn create_customer(&self, fields: NewCustomer) -> Result<Customer>;

    /// Append a finished record to a customer's history
    fn append_interaction(&self, customer_id: u64, record: InteractionRecord) -> Result<()>;
}

/// Next id: max existing + 1, starting at 1
pub fn next_customer_id(customers: &[Customer]) -> u64 {
    customers.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
}

/// Purely in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }
}

impl CustomerStore for InMemoryStore {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().clone())
    }

    fn get_customer(&self, id: u64) -> Result<Customer> {
        self.customers
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    fn create_customer(&self, fields: NewCustomer) -> Result<Customer> {
        let name = fields.validated_name()?;
        let mut customers = self.customers.write();
        let customer = Customer {
            id: next_customer_id(&customers),
            name,
            interactions: Vec::new(),
        };
        customers.push(customer.clone());
        Ok(customer)
    }

    fn append_interaction(&self, customer_id: u64, record: InteractionRecord) -> Result<()> {
        let mut customers = self.customers.write();
        let customer = customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| Error::not_found(customer_id))?;
        customer.interactions.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Channel, Sentiment};

    fn record() -> InteractionRecord {
        InteractionRecord {
            date: String::new(),
            channel: Channel::Email,
            duration: 10.0,
            content: "hi".to_string(),
            sentiment: Sentiment::Neutral,
            escalated: false,
            ai_generated: true,
            generated_at: String::new(),
        }
    }

    #[test]
    fn test_ids_are_max_plus_one() {
        let store = InMemoryStore::with_customers(vec![Customer {
            id: 7,
            name: "Existing".to_string(),
            interactions: vec![],
        }]);
        let created = store.create_customer(NewCustomer::named("Next")).unwrap();
        assert_eq!(created.id, 8);
        assert!(created.interactions.is_empty());

        assert_eq!(next_customer_id(&[]), 1);
    }

    #[test]
    fn test_append_and_not_found() {
        let store = InMemoryStore::new();
        let customer = store.create_customer(NewCustomer::named("Ada")).unwrap();
        assert_eq!(customer.id, 1);

        store.append_interaction(1, record()).unwrap();
        store.append_interaction(1, record()).unwrap();
        assert_eq!(store.get_customer(1).unwrap().interactions.len(), 2);

        let err = store.append_interaction(99, record()).unwrap_err();
        assert!(matches!(err, Error::NotFound { customer_id: 99 }));
        assert!(matches!(store.get_customer(2), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.create_customer(NewCustomer::default()),
            Err(Error::Validation(_))
        ));
        assert!(store.list_customers().unwrap().is_empty());
    }
}
