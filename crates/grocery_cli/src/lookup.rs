//! Resolves user-typed item ids.

use grocery_core::ItemId;
use uuid::Uuid;

/// Accepts a full UUID or a unique, case-insensitive prefix of a known id.
///
/// A well-formed UUID is returned even when unknown so the store can report
/// `NotFound` itself.
pub fn resolve_item_id(raw: &str, known: &[ItemId]) -> Result<ItemId, String> {
    let needle = raw.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Err("An item id is required.".to_string());
    }
    if let Ok(id) = Uuid::parse_str(&needle) {
        return Ok(id);
    }

    let mut matches = known
        .iter()
        .filter(|id| id.to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(*id),
        (None, _) => Err(format!(
            "No item `{raw}`; it may already have been removed."
        )),
        (Some(_), Some(_)) => Err(format!(
            "Id prefix `{raw}` matches several items; type more characters."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_item_id;
    use uuid::Uuid;

    fn id(text: &str) -> Uuid {
        Uuid::parse_str(text).unwrap()
    }

    #[test]
    fn unique_prefix_resolves() {
        let known = [
            id("aaaa1111-0000-4000-8000-000000000000"),
            id("bbbb2222-0000-4000-8000-000000000000"),
        ];
        assert_eq!(resolve_item_id("BBB", &known).unwrap(), known[1]);
    }

    #[test]
    fn ambiguous_and_unknown_prefixes_are_rejected() {
        let known = [
            id("abcd1111-0000-4000-8000-000000000000"),
            id("abcd2222-0000-4000-8000-000000000000"),
        ];
        assert!(resolve_item_id("abcd", &known)
            .unwrap_err()
            .contains("several"));
        assert!(resolve_item_id("ffff", &known)
            .unwrap_err()
            .contains("already have been removed"));
        assert!(resolve_item_id("  ", &known).is_err());
    }

    #[test]
    fn full_uuid_passes_through_even_if_unknown() {
        let ghost = Uuid::new_v4();
        assert_eq!(resolve_item_id(&ghost.to_string(), &[]).unwrap(), ghost);
    }
}
