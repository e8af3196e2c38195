//! Rendering of store contents for the terminal.

use grocery_core::Item;

pub const EMPTY_CART_TITLE: &str = "Empty Cart";
pub const EMPTY_CART_MESSAGE: &str = "Add some Items to the shopping list.";
pub const TIP_TITLE: &str = "Essential Foods";
pub const TIP_MESSAGE: &str = "Add some everyday items to the shopping list.";

const SHORT_ID_LEN: usize = 8;

/// One line per item: completion marker, short id, title.
pub fn render_items(items: &[Item]) -> String {
    items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_item(item: &Item) -> String {
    let marker = if item.is_completed { "[x]" } else { "[ ]" };
    let id = item.id.to_string();
    format!("{marker} {}  {}", &id[..SHORT_ID_LEN], item.title)
}

pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("failed to encode JSON: {err}"))
}

pub fn render_empty_cart() -> String {
    format!("{EMPTY_CART_TITLE}\n{EMPTY_CART_MESSAGE}")
}

pub fn render_tip() -> String {
    format!("Tip: {TIP_TITLE}. {TIP_MESSAGE} Run `grocery seed`.")
}

#[cfg(test)]
mod tests {
    use super::{render_item, render_items};
    use grocery_core::Item;

    #[test]
    fn completed_items_are_marked() {
        let mut item = Item::new("Cheese & Eggs");
        assert!(render_item(&item).starts_with("[ ] "));
        item.toggle();
        let line = render_item(&item);
        assert!(line.starts_with("[x] "));
        assert!(line.ends_with("  Cheese & Eggs"));
        assert!(line.contains(&item.id.to_string()[..8]));
    }

    #[test]
    fn items_render_one_per_line_in_order() {
        let items = vec![Item::new("Rice"), Item::new("Pasta")];
        let rendered = render_items(&items);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Rice"));
        assert!(lines[1].ends_with("Pasta"));
    }
}
