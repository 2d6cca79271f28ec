pub(crate) fn overwrite_if_some<T>(left: &mut Option<T>, right: Option<T>) {
	if let Some(new) = right {
		*left = Some(new);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn only_some_overwrites() {
		let mut value = Some(1);

		overwrite_if_some(&mut value, None);
		assert_eq!(value, Some(1));

		overwrite_if_some(&mut value, Some(2));
		assert_eq!(value, Some(2));
	}
}
