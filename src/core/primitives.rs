/// Returns borrowed items ordered by `key`, ascending.
///
/// The sort is stable, so items sharing a key keep their input order, and the
/// input slice is left untouched.
pub fn sorted_by_key<T, K, F>(items: &[T], key: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| key(item));
    sorted
}
