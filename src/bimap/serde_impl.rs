use crate::bimap::map::BiMap;
use compare::Compare;
use log::debug;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Serializes a `BiMap` as a sequence of `(left, right)` tuples in increasing order of their left
/// keys.
impl<L, R, CL, CR> Serialize for BiMap<L, R, CL, CR>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter_left())
    }
}

struct BiMapVisitor<L, R, CL, CR> {
    marker: PhantomData<fn() -> BiMap<L, R, CL, CR>>,
}

impl<'de, L, R, CL, CR> Visitor<'de> for BiMapVisitor<L, R, CL, CR>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    type Value = BiMap<L, R, CL, CR>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of pairs with unique left keys and unique right keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = BiMap::default();
        while let Some((left, right)) = seq.next_element::<(L, R)>()? {
            if let Err(err) = map.try_insert(left, right) {
                debug!("rejected serialized bimap: {}", err);
                return Err(de::Error::custom(err));
            }
        }
        Ok(map)
    }
}

/// Deserializes a `BiMap` from a sequence of `(left, right)` tuples. A pair whose left key or right
/// key repeats an earlier pair is an error.
impl<'de, L, R, CL, CR> Deserialize<'de> for BiMap<L, R, CL, CR>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BiMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::BiMap;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_tokens() {
        let mut map: BiMap<u32, String> = BiMap::new();
        map.insert(2, String::from("a"));
        map.insert(1, String::from("b"));

        assert_tokens(
            &map,
            &[
                Token::Seq { len: Some(2) },
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::Str("b"),
                Token::TupleEnd,
                Token::Tuple { len: 2 },
                Token::U32(2),
                Token::Str("a"),
                Token::TupleEnd,
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_tokens_empty() {
        let map: BiMap<u32, String> = BiMap::new();
        assert_tokens(&map, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }

    #[test]
    fn test_duplicate_right_key() {
        assert_de_tokens_error::<BiMap<u32, String>>(
            &[
                Token::Seq { len: Some(2) },
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::Str("a"),
                Token::TupleEnd,
                Token::Tuple { len: 2 },
                Token::U32(2),
                Token::Str("a"),
                Token::TupleEnd,
            ],
            "duplicate key on the right axis",
        );
    }

    #[test]
    fn test_duplicate_left_key() {
        assert_de_tokens_error::<BiMap<u32, String>>(
            &[
                Token::Seq { len: Some(2) },
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::Str("a"),
                Token::TupleEnd,
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::Str("b"),
                Token::TupleEnd,
            ],
            "duplicate key on the left axis",
        );
    }
}
