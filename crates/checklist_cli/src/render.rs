//! Plain-text rendering of the checklist snapshot.

use checklist_core::Item;

pub const EMPTY_MESSAGE: &str = "No items yet. Add one!";

/// Renders items as numbered lines with their notes indented below.
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let mark = if item.done { "x" } else { " " };
        out.push_str(&format!(
            "{:>3}. [{mark}] {}  ({})\n",
            index + 1,
            item.title,
            item.id
        ));
        if item.has_notes() {
            for line in item.notes.lines() {
                out.push_str(&format!("       {line}\n"));
            }
        }
    }
    out
}

/// Resolves a user-supplied target to an item id.
///
/// Exact id matches win over positions, so numeric ids from older clients
/// still resolve to themselves.
pub fn resolve_target(items: &[Item], target: &str) -> Option<String> {
    let target = target.trim();
    // Why: older clients minted numeric ids, which would otherwise be read
    // as positions and hit the wrong item.
    if let Some(item) = items.iter().find(|item| item.id == target) {
        return Some(item.id.clone());
    }
    let position: usize = target.parse().ok()?;
    items
        .get(position.checked_sub(1)?)
        .map(|item| item.id.clone())
}

#[cfg(test)]
mod tests {
    use super::{render_items, resolve_target, EMPTY_MESSAGE};
    use checklist_core::Item;

    fn sample() -> Vec<Item> {
        let mut milk = Item::with_id("a1", "Buy milk", "2%\nlactose free").unwrap();
        milk.done = true;
        let call = Item::with_id("2", "Call Alice", "").unwrap();
        vec![milk, call]
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_items(&[]), EMPTY_MESSAGE);
    }

    #[test]
    fn items_render_with_marks_and_notes() {
        let rendered = render_items(&sample());
        assert!(rendered.contains("  1. [x] Buy milk  (a1)"));
        assert!(rendered.contains("       lactose free"));
        assert!(rendered.contains("  2. [ ] Call Alice  (2)"));
    }

    #[test]
    fn targets_resolve_by_id_before_position() {
        let items = sample();
        assert_eq!(resolve_target(&items, "a1").as_deref(), Some("a1"));
        assert_eq!(resolve_target(&items, "1").as_deref(), Some("a1"));
        assert_eq!(resolve_target(&items, "2").as_deref(), Some("2"));
        assert_eq!(resolve_target(&items, "0"), None);
        assert_eq!(resolve_target(&items, "9"), None);
    }
}
