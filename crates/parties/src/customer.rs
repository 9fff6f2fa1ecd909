use serde::{Deserialize, Serialize};

use tilestock_core::error::require_present;
use tilestock_core::{CustomerId, DomainResult, Entity};

/// A customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl Entity for Customer {
    type Id = CustomerId;
    const KIND: &'static str = "customer";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A customer as submitted for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl CustomerDraft {
    /// Name and email are required; phone and address are optional.
    pub fn validate(&self) -> DomainResult<()> {
        require_present("name", &self.name)?;
        require_present("email", &self.email)?;
        Ok(())
    }

    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestock_core::DomainError;

    fn draft() -> CustomerDraft {
        CustomerDraft {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn phone_and_address_are_optional() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn email_is_required() {
        let mut d = draft();
        d.email = String::new();
        assert_eq!(
            d.validate(),
            Err(DomainError::Validation("email is required".to_string()))
        );
    }

    #[test]
    fn into_customer_keeps_fields() {
        let c = draft().into_customer(CustomerId::from("c3"));
        assert_eq!(c.id.as_str(), "c3");
        assert_eq!(c.name, "John Doe");
        assert_eq!(c.id(), &CustomerId::from("c3"));
    }
}
