//! [`Serialize`] and [`Deserialize`] implementations for [`Llrb`].
//!
//! A tree is serialised as a sequence of its values in ascending order. It is
//! rebuilt by inserting each value in turn (retaining duplicates), so the
//! shape of a deserialised tree is always valid regardless of the input.

use std::{fmt, marker::PhantomData};

use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Llrb;

impl<T> Serialize for Llrb<T>
where
    T: Serialize + Ord,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self.ascend() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Llrb<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(LlrbVisitor(PhantomData))
    }
}

struct LlrbVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for LlrbVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = Llrb<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of tree values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut t = Llrb::new();
        while let Some(v) = seq.next_element()? {
            t.insert_no_replace(v);
        }
        Ok(t)
    }
}
