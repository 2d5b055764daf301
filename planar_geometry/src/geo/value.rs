use std::{
	cmp::Ordering,
	fmt::{Debug, Display},
	hash::Hash,
};

/// A feature property value.
///
/// The scalar variants map onto the vector tile value types. `Json` holds anything else (arrays,
/// objects); it is written to tiles as its JSON text.
#[derive(Clone)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Json(serde_json::Value),
	Null,
	String(String),
	UInt(u64),
}

impl GeoValue {
	fn variant_order(&self) -> u8 {
		match self {
			GeoValue::String(_) => 0,
			GeoValue::Float(_) => 1,
			GeoValue::Double(_) => 2,
			GeoValue::Int(_) => 3,
			GeoValue::UInt(_) => 4,
			GeoValue::Bool(_) => 5,
			GeoValue::Json(_) => 6,
			GeoValue::Null => 7,
		}
	}

	/// Numeric value as `f64`, if the value is a number.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Float(v) => Some(f64::from(*v)),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Json(v) => f.debug_tuple("Json").field(&v.to_string()).finish(),
			Self::Null => f.write_str("Null"),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Float(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Json(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl PartialEq for GeoValue {
	fn eq(&self, other: &Self) -> bool {
		use GeoValue::*;
		match (self, other) {
			(Bool(a), Bool(b)) => a == b,
			(Double(a), Double(b)) => a.to_bits() == b.to_bits(),
			(Float(a), Float(b)) => a.to_bits() == b.to_bits(),
			(Int(a), Int(b)) => a == b,
			(Json(a), Json(b)) => a == b,
			(Null, Null) => true,
			(String(a), String(b)) => a == b,
			(UInt(a), UInt(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Bool(v) => v.hash(state),
			GeoValue::Double(v) => v.to_bits().hash(state),
			GeoValue::Float(v) => v.to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::Json(v) => v.to_string().hash(state),
			GeoValue::Null => (),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

impl PartialOrd for GeoValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for GeoValue {
	fn cmp(&self, other: &Self) -> Ordering {
		use GeoValue::*;
		match (self, other) {
			(String(a), String(b)) => a.cmp(b),
			(Float(a), Float(b)) => a.total_cmp(b),
			(Double(a), Double(b)) => a.total_cmp(b),
			(Int(a), Int(b)) => a.cmp(b),
			(UInt(a), UInt(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			(Json(a), Json(b)) => a.to_string().cmp(&b.to_string()),
			_ => self.variant_order().cmp(&other.variant_order()),
		}
	}
}

macro_rules! impl_from_scalar {
	($($t:ty => $variant:ident as $target:ty),*) => {$(
		impl From<$t> for GeoValue {
			fn from(value: $t) -> Self {
				GeoValue::$variant(<$target>::from(value))
			}
		}
	)*};
}

impl_from_scalar!(
	bool => Bool as bool,
	f32 => Float as f32,
	f64 => Double as f64,
	i64 => Int as i64,
	u8 => UInt as u64,
	u32 => UInt as u64,
	u64 => UInt as u64,
	String => String as String,
	&str => String as String
);

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<serde_json::Value> for GeoValue {
	/// Scalars map onto their natural variant, arrays and objects stay `Json`.
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(b) => GeoValue::Bool(b),
			Value::String(s) => GeoValue::String(s),
			Value::Number(n) => {
				if let Some(u) = n.as_u64() {
					GeoValue::UInt(u)
				} else if let Some(i) = n.as_i64() {
					GeoValue::Int(i)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			other => GeoValue::Json(other),
		}
	}
}
