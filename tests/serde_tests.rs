#![cfg(feature = "serde")]

use radix_set::{ByteTrie, Compression, StringTrie, TrieConfig};
use serde_test::{assert_de_tokens, assert_ser_tokens, assert_tokens, Token};

#[test]
fn test_trie_serializes_as_sorted_words() {
    let mut trie = StringTrie::new();
    trie.extend(["toaster", "test", "toast"]);

    assert_tokens(
        &trie,
        &[
            Token::Seq { len: Some(3) },
            Token::Str("test"),
            Token::Str("toast"),
            Token::Str("toaster"),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_empty_trie() {
    assert_tokens(&StringTrie::new(), &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
}

#[test]
fn test_deserialize_collapses_duplicates() {
    let mut trie = StringTrie::new();
    trie.extend(["a", "b"]);

    assert_de_tokens(
        &trie,
        &[
            Token::Seq { len: Some(3) },
            Token::Str("b"),
            Token::Str("a"),
            Token::Str("b"),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_byte_trie() {
    let mut trie = ByteTrie::new();
    trie.insert(&[7u8]);

    assert_ser_tokens(
        &trie,
        &[
            Token::Seq { len: Some(1) },
            Token::Seq { len: Some(1) },
            Token::U8(7),
            Token::SeqEnd,
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_config() {
    assert_tokens(
        &TrieConfig::new().compression(Compression::Disabled),
        &[
            Token::Struct {
                name: "TrieConfig",
                len: 1,
            },
            Token::Str("compression"),
            Token::UnitVariant {
                name: "Compression",
                variant: "Disabled",
            },
            Token::StructEnd,
        ],
    );
}
