use std::cmp::Ordering;

/// Total order over partially ordered keys.
///
/// Comparable keys use their own ordering. A key that is not comparable with
/// itself (a float NaN) sorts after every comparable key; two such keys are
/// equal.
///
/// # Examples
///
/// ```
/// use glue_util::sort::compare_keys;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_keys(&1.0, &2.0), Ordering::Less);
/// assert_eq!(compare_keys(&f64::NAN, &2.0), Ordering::Greater);
/// assert_eq!(compare_keys(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
pub fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if let Some(ord) = a.partial_cmp(b) {
        return ord;
    }
    let a_ordered = a.partial_cmp(a).is_some();
    let b_ordered = b.partial_cmp(b).is_some();
    match (a_ordered, b_ordered) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Returns the elements of `items` sorted by `key`, stably.
///
/// `key` runs exactly once per element. Elements with equal keys keep their
/// original relative order.
///
/// # Examples
///
/// ```
/// use glue_util::sort::sort_by;
///
/// let words = ["banana", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |w| w.len()), vec!["fig", "kiwi", "apple", "banana"]);
/// ```
pub fn sort_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = items.iter().map(|item| (key(item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sorts `items` in place by `key`, stably.
pub fn sort_by_in_place<T, K, F>(items: &mut Vec<T>, mut key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, T)> = items.drain(..).map(|item| (key(&item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}
