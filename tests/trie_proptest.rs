use ct9::Trie;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Delete(String),
    Complete(String, usize),
}

// Small alphabet so words share prefixes and deletions hit real paths.
fn word() -> impl Strategy<Value = String> {
    "[abcAB]{1,6}"
}

fn word_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word(), 0..30)
}

fn model_completions(model: &BTreeSet<String>, prefix: &str, limit: usize) -> Vec<String> {
    model
        .iter()
        .filter(|w| w.starts_with(prefix))
        .take(limit)
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn test_trie_matches_btree_set(ops in proptest::collection::vec(
        prop_oneof![
            word().prop_map(Operation::Insert),
            word().prop_map(Operation::Delete),
            ("[abc]{0,3}", 0usize..5).prop_map(|(p, n)| Operation::Complete(p, n)),
        ],
        1..100
    )) {
        let mut model = BTreeSet::new();
        let mut trie = Trie::new();

        for op in ops {
            match op {
                Operation::Insert(w) => {
                    model.insert(w.clone());
                    trie.insert(&w);
                }
                Operation::Delete(w) => {
                    let expected = model.remove(&w);
                    prop_assert_eq!(trie.del(&w), expected, "delete mismatch for {}", w);
                }
                Operation::Complete(prefix, limit) => {
                    prop_assert_eq!(
                        trie.autocomplete(&prefix, limit),
                        model_completions(&model, &prefix, limit)
                    );
                }
            }
        }

        // Final consistency check
        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.words(), model.iter().cloned().collect::<Vec<_>>());
        prop_assert_eq!(trie.stats().nodes, trie.size());
    }

    #[test]
    fn test_truncation_is_prefix_of_full_result(words in word_set(), prefix in "[abc]{0,2}", k in 0usize..10) {
        let trie: Trie = words.iter().collect();
        let full = trie.autocomplete_all(&prefix);
        let truncated = trie.autocomplete(&prefix, k);

        prop_assert_eq!(truncated.len(), k.min(full.len()));
        prop_assert_eq!(&full[..truncated.len()], &truncated[..]);
    }

    #[test]
    fn test_set_algebra_matches_model(a in word_set(), b in word_set()) {
        let (ta, tb): (Trie, Trie) = (a.iter().collect(), b.iter().collect());
        let (sa, sb): (BTreeSet<String>, BTreeSet<String>) = (a.into_iter().collect(), b.into_iter().collect());

        prop_assert_eq!((&ta + &tb).words(), sa.union(&sb).cloned().collect::<Vec<_>>());
        prop_assert_eq!((&ta - &tb).words(), sa.difference(&sb).cloned().collect::<Vec<_>>());
        prop_assert_eq!(ta == tb, sa == sb);
        prop_assert_eq!(ta <= tb, sa.is_subset(&sb));
        prop_assert_eq!(ta < tb, sa.is_subset(&sb) && sa != sb);
        prop_assert_eq!(ta >= tb, sa.is_superset(&sb));
    }

    #[test]
    fn test_insertion_order_does_not_matter(mut words in word_set()) {
        let forward: Trie = words.iter().collect();
        words.reverse();
        let backward: Trie = words.iter().collect();

        prop_assert_eq!(forward.size(), backward.size());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_deleting_everything_prunes_every_node(words in word_set()) {
        let mut trie: Trie = words.iter().collect();
        for w in &words {
            trie.del(w);
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.size(), 0);
        prop_assert!(trie.root().is_leaf());
    }
}
