/// Implements [`CompositeGeometryTrait`](super::CompositeGeometryTrait), a list style `Debug`,
/// `FromIterator` and conversions from nested arrays for a newtype over `Vec<$item>`.
///
/// Array conversions go through `$item: From<&T>`, so `&[[0, 0], [1, 1]]` becomes a line string
/// and `&[vec![[0, 0], ...]]` a multi line string.
#[macro_export]
macro_rules! impl_composite_geometry {
	($($t:ty, $item:ty);* $(;)?) => {$(
		impl $crate::CompositeGeometryTrait<$item> for $t {
			fn new() -> Self {
				Self(Vec::new())
			}
			fn as_vec(&self) -> &Vec<$item> {
				&self.0
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$item> {
				&mut self.0
			}
			fn into_inner(self) -> Vec<$item> {
				self.0
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}

		impl FromIterator<$item> for $t {
			fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}

		impl From<Vec<$item>> for $t {
			fn from(value: Vec<$item>) -> Self {
				Self(value)
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}

		impl<'a> From<&'a $t> for $t {
			fn from(value: &'a $t) -> Self {
				value.clone()
			}
		}
	)*};
}
