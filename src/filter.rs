/// Filter context that can declare a filter as a no-op.
///
/// An empty search must show everything, whatever the predicate would say.
pub trait FilterContext {
    fn matches_everything(&self) -> bool;
}

impl FilterContext for str {
    fn matches_everything(&self) -> bool {
        self.trim().is_empty()
    }
}

impl FilterContext for String {
    fn matches_everything(&self) -> bool {
        self.as_str().matches_everything()
    }
}

impl<C: FilterContext> FilterContext for Option<C> {
    fn matches_everything(&self) -> bool {
        self.as_ref().map_or(true, C::matches_everything)
    }
}

impl FilterContext for () {
    fn matches_everything(&self) -> bool {
        false
    }
}

/// Returns the items accepted by `predicate`, in their original order.
pub fn filter_collection<'a, T, C, P>(items: &'a [T], context: &C, predicate: P) -> Vec<&'a T>
where
    C: FilterContext + ?Sized,
    P: Fn(&T, &C) -> bool,
{
    if context.matches_everything() {
        return items.iter().collect();
    }

    items.iter().filter(|item| predicate(item, context)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn always_true(_: &u32, _: &()) -> bool {
        true
    }

    fn always_false(_: &u32, _: &()) -> bool {
        false
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = [5, 2, 8, 1, 9, 4];
        let even = filter_collection(&items, &(), |n, _| n % 2 == 0);
        assert_eq!(even, [&2, &8, &4]);
    }

    #[test]
    fn test_filter_trivial_predicates() {
        let items = [3, 1, 2];
        assert_eq!(filter_collection(&items, &(), always_true), [&3, &1, &2]);
        assert!(filter_collection(&items, &(), always_false).is_empty());
        assert!(filter_collection(&[] as &[u32], &(), always_true).is_empty());
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let items = vec!["a".to_owned(), "b".to_owned()];
        let before = items.clone();
        let _ = filter_collection(&items, &(), |s, _| s == "a");
        assert_eq!(items, before);
    }

    #[test]
    fn test_empty_context_matches_everything() {
        let items = ["pikachu", "bulbasaur"];
        let never = |_: &&str, _: &str| false;

        assert_eq!(filter_collection(&items, "", never).len(), 2);
        assert_eq!(filter_collection(&items, "   ", never).len(), 2);
        assert_eq!(filter_collection(&items, &String::new(), |_, _| false).len(), 2);
        assert_eq!(filter_collection(&items, &None::<String>, |_, _| false).len(), 2);
        assert!(filter_collection(&items, "x", never).is_empty());
    }
}
