use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::Price;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}

impl Product {
    /// Builds a new, available product with the given id.
    ///
    /// The id always comes from the service's generator, never from the caller.
    pub fn new(id: Uuid, props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id,
            name: props.name,
            description: props.description,
            price: props.price,
            available: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: Price,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            available,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial update in memory. Used by repositories that do not
    /// patch rows natively.
    pub fn apply(&mut self, changes: &ProductChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(price) = &changes.price {
            self.price = price.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Sparse set of writable product fields.
///
/// Neither `id` nor `available` can be expressed here: the identifier is
/// immutable and availability only changes through soft delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub price: Option<Price>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ProductError::NameEmpty),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            description: None,
            price: "9.99".parse().unwrap(),
        }
    }

    #[test]
    fn should_create_available_product_with_given_id() {
        let id = Uuid::new_v4();
        let product = Product::new(id, props("Widget")).unwrap();

        assert_eq!(product.id, id);
        assert!(product.available);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_blank_name() {
        assert!(matches!(
            Product::new(Uuid::new_v4(), props("   ")),
            Err(ProductError::NameEmpty)
        ));
    }

    #[test]
    fn should_treat_changes_without_fields_as_empty() {
        assert!(ProductChanges::default().is_empty());
        assert!(
            !ProductChanges {
                description: Some(Some("Blue".to_string())),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn should_reject_changes_with_blank_name() {
        let changes = ProductChanges {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(matches!(changes.validate(), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_apply_only_present_fields() {
        let mut product = Product::new(Uuid::new_v4(), props("Widget")).unwrap();
        let id = product.id;

        product.apply(&ProductChanges {
            price: Some("12.5".parse().unwrap()),
            ..Default::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price.to_string(), "12.5");
        assert!(product.available);
    }

    #[test]
    fn should_clear_description_when_set_to_none() {
        let mut product = Product::new(
            Uuid::new_v4(),
            NewProductProps {
                description: Some("Blue".to_string()),
                ..props("Widget")
            },
        )
        .unwrap();

        product.apply(&ProductChanges {
            description: Some(None),
            ..Default::default()
        });

        assert_eq!(product.description, None);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn should_count_description_clearing_as_a_change() {
        let changes = ProductChanges {
            description: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
