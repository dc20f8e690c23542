//! Typed extraction from parsed values.
//!
//! A [`Value`] implements [`serde::Deserializer`], so a parsed record can be
//! deserialized straight into a user-defined struct instead of being walked
//! by hand:
//!
//! ```rust
//! use serde::Deserialize;
//! use iot_record::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Manifest {
//!     cepid: String,
//!     filecount: i64,
//! }
//!
//! let m: Manifest = from_str("{cepid=CEP010, filecount=58}").unwrap();
//! assert_eq!(m.filecount, 58);
//! ```
//!
//! The dialect's typing is heuristic, so this is self-describing
//! deserialization: almost everything routes through `deserialize_any` and
//! the visitor copes with what promotion actually produced.

use crate::{Error, Map, Result, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializes a `T` from an already-parsed value tree.
///
/// # Errors
///
/// Returns an error if the tree's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::List(items) => visitor.visit_seq(ListAccess::new(items)),
            Value::Dict(map) => visitor.visit_map(DictAccess::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // Free tokens are the only way the notation spells variants
        match self {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            other => Err(Error::custom(format!(
                "expected string for enum variant, found {:?}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct ListAccess {
    iter: std::vec::IntoIter<Value>,
}

impl ListAccess {
    fn new(items: Vec<Value>) -> Self {
        ListAccess {
            iter: items.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for ListAccess {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct DictAccess {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl DictAccess {
    fn new(map: Map) -> Self {
        DictAccess {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for DictAccess {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Value::String(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}
