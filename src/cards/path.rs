//! Path resolution for card endpoints.
//!
//! Cards are nested under their owner, so every operation has one template
//! per parent kind:
//!
//! | Operation | Method | Template |
//! |-----------|--------|----------|
//! | Create    | POST   | `/{parent}s/{parent}/cards` |
//! | Retrieve  | GET    | `/{parent}s/{parent}/cards/{id}` |
//! | Update    | POST   | `/{parent}s/{parent}/cards/{id}` |
//! | Delete    | DELETE | `/{parent}s/{parent}/cards/{id}` |
//! | List      | GET    | `/{parent}s/{parent}/cards` |
//!
//! Ids are percent-encoded before interpolation.

use std::collections::HashMap;
use std::fmt::Display;

use crate::cards::errors::ParamsError;
use crate::cards::params::ParentRef;
use crate::clients::HttpMethod;

/// Operations available on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardOperation {
    /// Attach a new card to its owner.
    Create,
    /// Fetch a single card.
    Retrieve,
    /// Change a card's holder name or address.
    Update,
    /// Remove a card from its owner.
    Delete,
    /// Fetch a page of the owner's cards.
    List,
}

impl CardOperation {
    /// Returns the operation name used in log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

/// A path configuration for a card operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: CardOperation,
    /// Required ID parameters in order (e.g., `["customer", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl CardPath {
    /// Creates a new `CardPath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: CardOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Every card endpoint, for both parent kinds.
pub const CARD_PATHS: &[CardPath] = &[
    CardPath::new(
        HttpMethod::Post,
        CardOperation::Create,
        &["customer"],
        "/customers/{customer}/cards",
    ),
    CardPath::new(
        HttpMethod::Post,
        CardOperation::Create,
        &["recipient"],
        "/recipients/{recipient}/cards",
    ),
    CardPath::new(
        HttpMethod::Get,
        CardOperation::Retrieve,
        &["customer", "id"],
        "/customers/{customer}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Get,
        CardOperation::Retrieve,
        &["recipient", "id"],
        "/recipients/{recipient}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Post,
        CardOperation::Update,
        &["customer", "id"],
        "/customers/{customer}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Post,
        CardOperation::Update,
        &["recipient", "id"],
        "/recipients/{recipient}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Delete,
        CardOperation::Delete,
        &["customer", "id"],
        "/customers/{customer}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Delete,
        CardOperation::Delete,
        &["recipient", "id"],
        "/recipients/{recipient}/cards/{id}",
    ),
    CardPath::new(
        HttpMethod::Get,
        CardOperation::List,
        &["customer"],
        "/customers/{customer}/cards",
    ),
    CardPath::new(
        HttpMethod::Get,
        CardOperation::List,
        &["recipient"],
        "/recipients/{recipient}/cards",
    ),
];

/// Selects the most specific path for an operation whose required IDs are
/// all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [CardPath],
    operation: CardOperation,
    available_ids: &[&str],
) -> Option<&'a CardPath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template, percent-encoding each interpolated ID.
///
/// # Example
///
/// ```rust
/// use stripe_cards::cards::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("customer", "cus_1");
/// ids.insert("id", "card/A");
///
/// let path = build_path("/customers/{customer}/cards/{id}", &ids);
/// assert_eq!(path, "/customers/cus_1/cards/card%2FA");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

/// Resolves the method and path for an operation on a parent's cards.
///
/// # Errors
///
/// Returns [`ParamsError::EmptyCardId`] if the operation targets a single
/// card and `card_id` is missing or empty.
pub fn resolve(
    operation: CardOperation,
    parent: ParentRef<'_>,
    card_id: Option<&str>,
) -> Result<(HttpMethod, String), ParamsError> {
    let card_id = card_id.filter(|id| !id.is_empty());

    let mut ids = HashMap::new();
    ids.insert(parent.id_name(), parent.id());
    if let Some(id) = card_id {
        ids.insert("id", id);
    }
    let available: Vec<&str> = ids.keys().copied().collect();

    // The parent always matches, so a miss means the card id was needed.
    let path = get_path(CARD_PATHS, operation, &available).ok_or(ParamsError::EmptyCardId)?;

    Ok((path.http_method, build_path(path.template, &ids)))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CardOperation>();
    assert_send_sync::<CardPath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_has_a_path_per_parent() {
        for operation in [
            CardOperation::Create,
            CardOperation::Retrieve,
            CardOperation::Update,
            CardOperation::Delete,
            CardOperation::List,
        ] {
            let count = CARD_PATHS.iter().filter(|p| p.operation == operation).count();
            assert_eq!(count, 2, "{} should have two paths", operation.as_str());
        }
    }

    #[test]
    fn test_collection_paths_per_parent() {
        let (method, path) =
            resolve(CardOperation::Create, ParentRef::Customer("cus_1"), None).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "/customers/cus_1/cards");

        let (method, path) =
            resolve(CardOperation::List, ParentRef::Recipient("rp_1"), None).unwrap();
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "/recipients/rp_1/cards");
    }

    #[test]
    fn test_item_paths_per_parent() {
        let cases = [
            (CardOperation::Retrieve, HttpMethod::Get),
            (CardOperation::Update, HttpMethod::Post),
            (CardOperation::Delete, HttpMethod::Delete),
        ];

        for (operation, expected_method) in cases {
            let (method, path) =
                resolve(operation, ParentRef::Customer("cus_1"), Some("card_A")).unwrap();
            assert_eq!(method, expected_method);
            assert_eq!(path, "/customers/cus_1/cards/card_A");

            let (_, path) =
                resolve(operation, ParentRef::Recipient("rp_1"), Some("card_A")).unwrap();
            assert_eq!(path, "/recipients/rp_1/cards/card_A");
        }
    }

    #[test]
    fn test_item_operations_require_card_id() {
        for operation in [
            CardOperation::Retrieve,
            CardOperation::Update,
            CardOperation::Delete,
        ] {
            assert_eq!(
                resolve(operation, ParentRef::Customer("cus_1"), None),
                Err(ParamsError::EmptyCardId)
            );
            assert_eq!(
                resolve(operation, ParentRef::Customer("cus_1"), Some("")),
                Err(ParamsError::EmptyCardId)
            );
        }
    }

    #[test]
    fn test_collection_operations_ignore_card_id() {
        let (_, path) =
            resolve(CardOperation::List, ParentRef::Customer("cus_1"), Some("card_A")).unwrap();
        assert_eq!(path, "/customers/cus_1/cards");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let (_, path) = resolve(
            CardOperation::Retrieve,
            ParentRef::Customer("cus 1"),
            Some("card/../x"),
        )
        .unwrap();
        assert_eq!(path, "/customers/cus%201/cards/card%2F..%2Fx");
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        let path = get_path(CARD_PATHS, CardOperation::Retrieve, &["customer", "id"]).unwrap();
        assert_eq!(path.template, "/customers/{customer}/cards/{id}");

        assert!(get_path(CARD_PATHS, CardOperation::Retrieve, &["customer"]).is_none());
    }
}
