use super::*;

/// Combines `source` into `target`.
///
/// - Objects are unioned key by key, recursing into values present on both sides.
/// - Arrays are concatenated. Items of `source` that are already present in `target` are not
///   appended again, so that merging the same fragment twice leaves the array unchanged.
/// - Anything else (including a type mismatch between the two sides) is replaced by `source`.
pub fn deep_merge(target: &mut Value, source: Value) {
	match (target, source) {
		(Value::Object(target), Value::Object(source)) => merge_maps(target, source),
		(Value::Array(target), Value::Array(source)) => concat_arrays(target, source),
		(target, source) => *target = source,
	}
}

/// Applies [`deep_merge`] to each key of `source`.
pub fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
	for (key, value) in source {
		match target.get_mut(&key) {
			Some(existing) => deep_merge(existing, value),
			None => {
				target.insert(key, value);
			}
		}
	}
}

fn concat_arrays(target: &mut Vec<Value>, source: Vec<Value>) {
	for item in source {
		if !target.contains(&item) {
			target.push(item);
		}
	}
}

/// Merges an ordered list of fragments, starting from an empty document.
/// Later fragments take precedence over earlier ones.
pub fn merge_all<I>(fragments: I) -> Manifest
where
	I: IntoIterator<Item = Fragment>,
{
	fragments
		.into_iter()
		.fold(Manifest::new(), |mut merged, fragment| {
			merged.merge(fragment);
			merged
		})
}
