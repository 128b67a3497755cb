use serde::ser::{self, Serialize, Serializer as _};
use serde_json::value::Serializer as ValueSerializer;
use serde_json::Value;

type Compound = ValueSerializer;

/// Converts one call-site argument. Values that fail to serialize log as `null`.
///
/// Top-level non-finite floats (`NaN`, `inf`) have no JSON form and are kept
/// as the text a console prints for them.
#[doc(hidden)]
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    value.serialize(ArgSerializer).unwrap_or(Value::Null)
}

fn float(v: f64) -> Value {
    if v.is_nan() {
        Value::String("NaN".to_string())
    } else if v.is_infinite() {
        let label = if v > 0.0 { "Infinity" } else { "-Infinity" };
        Value::String(label.to_string())
    } else {
        Value::from(v)
    }
}

/// `serde_json::value::Serializer` with floats mapped through [`float`].
struct ArgSerializer;

impl ser::Serializer for ArgSerializer {
    type Ok = Value;
    type Error = serde_json::Error;

    type SerializeSeq = <Compound as ser::Serializer>::SerializeSeq;
    type SerializeTuple = <Compound as ser::Serializer>::SerializeTuple;
    type SerializeTupleStruct = <Compound as ser::Serializer>::SerializeTupleStruct;
    type SerializeTupleVariant = <Compound as ser::Serializer>::SerializeTupleVariant;
    type SerializeMap = <Compound as ser::Serializer>::SerializeMap;
    type SerializeStruct = <Compound as ser::Serializer>::SerializeStruct;
    type SerializeStructVariant = <Compound as ser::Serializer>::SerializeStructVariant;

    fn serialize_f32(self, v: f32) -> Result<Value, Self::Error> {
        Ok(float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Self::Error> {
        Ok(float(v))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, Self::Error> {
        value.serialize(self)
    }

    fn serialize_bool(self, v: bool) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_bool(v)
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_i8(v)
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_i16(v)
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_i32(v)
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_i64(v)
    }

    fn serialize_i128(self, v: i128) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_i128(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_u8(v)
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_u16(v)
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_u32(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_u64(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_u128(v)
    }

    fn serialize_char(self, v: char) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_char(v)
    }

    fn serialize_str(self, v: &str) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_str(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_bytes(v)
    }

    fn serialize_none(self) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_none()
    }

    fn serialize_unit(self) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_unit()
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_unit_struct(name)
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_unit_variant(name, variant_index, variant)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Self::Error> {
        ValueSerializer.serialize_newtype_variant(name, variant_index, variant, value)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        ValueSerializer.serialize_seq(len)
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        ValueSerializer.serialize_tuple(len)
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        ValueSerializer.serialize_tuple_struct(name, len)
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        ValueSerializer.serialize_tuple_variant(name, variant_index, variant, len)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        ValueSerializer.serialize_map(len)
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        ValueSerializer.serialize_struct(name, len)
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        ValueSerializer.serialize_struct_variant(name, variant_index, variant, len)
    }
}

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, vec![$($crate::macros::to_value(&$arg)),*])
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Trace $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Warn $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Error $(, $arg)*)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::domain::Level::Fatal $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_to_value() {
        assert_eq!(to_value("alice"), Value::String("alice".to_string()));
        assert_eq!(to_value(&3), json!(3));
        assert_eq!(to_value(&2.5), json!(2.5));
        assert_eq!(to_value(&Some(7u8)), json!(7));
    }

    #[test]
    fn test_non_finite_floats_keep_their_console_text() {
        assert_eq!(to_value(&f64::NAN), json!("NaN"));
        assert_eq!(to_value(&f64::INFINITY), json!("Infinity"));
        assert_eq!(to_value(&f32::NEG_INFINITY), json!("-Infinity"));
        assert_eq!(to_value(&Some(f64::NAN)), json!("NaN"));
    }

    #[test]
    fn test_absent_values_are_null() {
        assert_eq!(to_value(&()), Value::Null);
        assert_eq!(to_value(&None::<u8>), Value::Null);
    }

    #[test]
    fn test_compound_values() {
        assert_eq!(to_value(&vec![1, 2]), json!([1, 2]));
        assert_eq!(to_value(&(1, "a")), json!([1, "a"]));
        let mut map = HashMap::new();
        map.insert("k", 1);
        assert_eq!(to_value(&map), json!({"k": 1}));
    }

    #[test]
    fn test_unserializable_becomes_null() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON keys");
        assert_eq!(to_value(&map), Value::Null);
    }
}
