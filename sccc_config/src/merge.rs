//! Deep merge of ordered mappings.

use crate::value::{Mapping, Value};

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour, per key of `layer` in order:
/// - keys missing from `target` are appended;
/// - mappings present on both sides merge recursively;
/// - anything else replaces the existing value wholesale, whichever side is
///   more structured. A scalar overwrites a mapping and a mapping overwrites a
///   scalar.
///
/// Replaced keys keep their position in `target`.
///
/// # Examples
///
/// ```rust
/// use sccc_config::{Mapping, Value, merge_mapping};
///
/// let mut target: Mapping = [("a", 1), ("b", 2)].into_iter().collect();
/// let layer: Mapping = [("b", 3), ("c", 4)].into_iter().collect();
/// merge_mapping(&mut target, layer);
///
/// let values: Vec<_> = target.iter().map(|(_, value)| value.clone()).collect();
/// assert_eq!(values, [Value::Int(1), Value::Int(3), Value::Int(4)]);
/// ```
pub fn merge_mapping(target: &mut Mapping, layer: Mapping) {
    for (key, value) in layer {
        match value {
            Value::Mapping(incoming) => match target.get_mut(&key) {
                Some(Value::Mapping(existing)) => merge_mapping(existing, incoming),
                Some(slot) => *slot = Value::Mapping(incoming),
                None => target.push(key, incoming),
            },
            other => {
                target.insert(key, other);
            }
        }
    }
}

/// Fold `src` onto `dest`, returning the merged mapping.
///
/// This is the by-value form of [`merge_mapping`].
#[must_use]
pub fn merge(mut dest: Mapping, src: Mapping) -> Mapping {
    merge_mapping(&mut dest, src);
    dest
}
