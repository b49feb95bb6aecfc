use std::collections::HashSet;

use proptest::prelude::*;
use ringhash_core::{HashAlgorithm, HashRing, Murmur3Hasher, bisect_left};

fn algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Crc32),
        Just(HashAlgorithm::Fnv1a),
        Just(HashAlgorithm::Murmur3),
        Just(HashAlgorithm::Xxh32),
        Just(HashAlgorithm::Md5),
    ]
}

fn ring_with(algo: HashAlgorithm, targets: usize) -> HashRing<ringhash_core::BoxedHasher> {
    let mut ring = HashRing::with_hasher_and_replicas(algo.build(), 16).unwrap();
    let names = (0..targets).map(|i| format!("node-{i}"));
    ring.add_targets(names).unwrap();
    ring
}

proptest! {
    #[test]
    fn bisect_left_matches_partition_point(
        mut values in prop::collection::vec(any::<u32>(), 1..64),
        value in any::<u32>(),
    ) {
        values.sort_unstable();
        values.dedup();

        let offset = bisect_left(&values, value);
        let last = *values.last().unwrap();
        if value >= last {
            prop_assert_eq!(offset, values.len());
        } else {
            prop_assert_eq!(offset, values.partition_point(|&v| v < value));
        }
    }

    #[test]
    fn lookups_are_deterministic_members(
        algo in algorithm(),
        targets in 1usize..12,
        resource in ".{0,32}",
    ) {
        let ring = ring_with(algo, targets);
        let owner = ring.lookup(&resource).unwrap();

        prop_assert_eq!(owner, ring.lookup(&resource).unwrap());
        prop_assert!(ring.all_targets().contains(&owner));
    }

    #[test]
    fn lookup_list_is_bounded_and_distinct(
        algo in algorithm(),
        targets in 1usize..12,
        requested in 1usize..20,
        resource in any::<Vec<u8>>(),
    ) {
        let ring = ring_with(algo, targets);
        let list = ring.lookup_list(&resource, requested);

        prop_assert!(!list.is_empty());
        prop_assert!(list.len() <= requested.min(targets));
        let unique: HashSet<&str> = list.iter().copied().collect();
        prop_assert_eq!(unique.len(), list.len());
        prop_assert_eq!(list[0], ring.lookup(&resource).unwrap());
    }

    #[test]
    fn longer_lists_extend_shorter_ones(
        algo in algorithm(),
        targets in 2usize..12,
        requested in 1usize..40,
        resource in any::<Vec<u8>>(),
    ) {
        let ring = ring_with(algo, targets);
        let shorter = ring.lookup_list(&resource, requested);
        let longer = ring.lookup_list(&resource, requested + 1);

        prop_assert!(longer.len() - shorter.len() <= 1);
        prop_assert_eq!(&longer[..shorter.len()], shorter.as_slice());
    }

    #[test]
    fn single_target_answers_everything(requested in 1usize..50, resource in any::<Vec<u8>>()) {
        let mut ring = HashRing::with_hasher(Murmur3Hasher);
        ring.add_target("only").unwrap();
        prop_assert_eq!(ring.lookup_list(&resource, requested), vec!["only"]);
    }

    #[test]
    fn removal_keeps_other_assignments(
        algo in algorithm(),
        removed in 0usize..6,
        resources in prop::collection::vec(any::<u64>(), 1..100),
    ) {
        let mut ring = ring_with(algo, 6);
        let removed = format!("node-{removed}");
        let before: Vec<String> = resources
            .iter()
            .map(|r| ring.lookup(r.to_le_bytes()).unwrap().to_owned())
            .collect();

        ring.remove_target(&removed).unwrap();

        for (resource, old) in resources.iter().zip(&before) {
            let new = ring.lookup(resource.to_le_bytes()).unwrap();
            prop_assert_ne!(new, removed.as_str());
            if *old != removed {
                prop_assert_eq!(new, old.as_str());
            }
        }
    }
}
