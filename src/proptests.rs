use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Nodes a tree holding exactly `words` must have: one per distinct
/// prefix, plus the root.
fn expected_node_count(words: &BTreeSet<String>) -> usize {
    let prefixes: BTreeSet<&str> = words
        .iter()
        .flat_map(|word| (1..=word.len()).map(move |end| &word[..end]))
        .collect();

    prefixes.len() + 1
}

fn is_lowercase_word(word: &str) -> bool {
    word.bytes().all(|byte| byte.is_ascii_lowercase())
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Search(String),
    StartsWith(String),
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // a small alphabet so that words share prefixes often
    "[a-e]{0,8}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let word = word_strategy();
    let op = prop_oneof![
        40 => word.clone().prop_map(Op::Insert),
        10 => "[a-cA-C0-9 ]{1,6}".prop_map(Op::Insert),
        25 => word.clone().prop_map(Op::Search),
        25 => word.clone().prop_map(Op::StartsWith),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut tree = PrefixTree::new();
        let mut model: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let before = tree.node_count();
                    let result = tree.insert(&word);

                    if is_lowercase_word(&word) {
                        prop_assert_eq!(result, Ok(model.insert(word)));
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(tree.node_count(), before);
                    }
                }
                Op::Search(word) => {
                    prop_assert_eq!(tree.search(&word), model.contains(&word));
                }
                Op::StartsWith(prefix) => {
                    let expected = prefix.is_empty()
                        || model.iter().any(|word| word.starts_with(&prefix));
                    prop_assert_eq!(tree.starts_with(&prefix), expected);
                }
            }

            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert_eq!(tree.node_count(), expected_node_count(&model));

        let got: Vec<String> = tree.iter().collect();
        let expected: Vec<String> = model.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_inserted_words_and_their_prefixes_are_found(words in prop::collection::vec(word_strategy(), 0..50)) {
        let mut tree = PrefixTree::new();
        tree.insert_all(&words).unwrap();

        for word in &words {
            prop_assert!(tree.search(word));

            for end in 0..=word.len() {
                let prefix = &word[..end];
                prop_assert!(tree.starts_with(prefix));
                prop_assert_eq!(tree.search(prefix), words.iter().any(|w| w == prefix));
            }
        }
    }

    #[test]
    fn prop_insertion_order_does_not_matter(words in prop::collection::vec(word_strategy(), 0..50)) {
        let forward = {
            let mut tree = PrefixTree::new();
            tree.insert_all(&words).unwrap();
            tree
        };
        let backward = {
            let mut tree = PrefixTree::new();
            tree.insert_all(words.iter().rev()).unwrap();
            tree
        };
        let doubled = {
            let mut tree = forward.clone();
            tree.insert_all(&words).unwrap();
            tree
        };

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&forward, &doubled);
    }

    #[test]
    fn prop_prefix_listing(words in prop::collection::vec(word_strategy(), 0..50), prefix in "[a-e]{0,3}") {
        let mut tree = PrefixTree::new();
        tree.insert_all(&words).unwrap();

        let model: BTreeSet<&String> = words.iter().filter(|word| word.starts_with(&prefix)).collect();
        let got: Vec<String> = tree.words_with_prefix(&prefix).collect();
        let expected: Vec<String> = model.into_iter().cloned().collect();

        prop_assert_eq!(got, expected);
    }
}

#[test]
fn exhaustive_insert_order_small_set() {
    fn for_each_permutation(items: &[&str], out: &mut Vec<String>, used: &mut [bool], f: &mut impl FnMut(&[String])) {
        if out.len() == items.len() {
            f(out.as_slice());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].to_owned());
            for_each_permutation(items, out, used, f);
            out.pop();
            used[i] = false;
        }
    }

    let words = ["a", "ab", "abc", "b", "ba", ""];
    let reference = PrefixTree::try_from(words).unwrap();

    let mut used = [false; 6];
    for_each_permutation(&words, &mut Vec::new(), &mut used, &mut |perm: &[String]| {
        let mut tree = PrefixTree::new();
        tree.insert_all(perm).unwrap();

        assert_eq!(tree, reference);
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.iter().collect::<Vec<_>>(), ["", "a", "ab", "abc", "b", "ba"]);
    });
}
