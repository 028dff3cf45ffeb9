/// Focus-trap decision for a Tab press inside a modal with `count` focusable
/// elements. `active` is the position of the focused element among them, or
/// `None` when focus is outside the modal.
///
/// Returns the position to move focus to, or `None` to let the browser handle
/// the key (focus stays inside on its own).
pub fn trap_tab(count: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let first = 0;
    let last = count - 1;
    match (active, backwards) {
        (None, true) => Some(last),
        (None, false) => Some(first),
        (Some(pos), true) if pos == first => Some(last),
        (Some(pos), false) if pos >= last => Some(first),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(trap_tab(3, Some(2), false), Some(0));
        assert_eq!(trap_tab(3, Some(0), true), Some(2));
    }

    #[test]
    fn middle_elements_use_native_order() {
        assert_eq!(trap_tab(3, Some(1), false), None);
        assert_eq!(trap_tab(3, Some(1), true), None);
        assert_eq!(trap_tab(3, Some(0), false), None);
    }

    #[test]
    fn focus_outside_is_pulled_in() {
        assert_eq!(trap_tab(3, None, false), Some(0));
        assert_eq!(trap_tab(3, None, true), Some(2));
        assert_eq!(trap_tab(0, None, false), None);
    }

    #[test]
    fn single_element_keeps_focus() {
        assert_eq!(trap_tab(1, Some(0), false), Some(0));
        assert_eq!(trap_tab(1, Some(0), true), Some(0));
    }
}
