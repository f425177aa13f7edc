//! Forwarding transparency of the container decorator.

use proptest::prelude::*;

use entry_sources::{Entry, EntryContainer, EntryInfo, ForwardContainer, IndexContainer};

fn name_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so lookups hit both present and absent names.
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "dir/x", "dir/y"]), 1..3)
        .prop_map(|parts| parts.concat())
}

fn entries_strategy() -> impl Strategy<Value = Vec<EntryInfo>> {
    prop::collection::vec(
        (name_strategy(), prop::option::of(0u64..1 << 20)),
        0..16,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(name, size)| match size {
                Some(size) => EntryInfo::with_size(name, size),
                None => EntryInfo::new(name),
            })
            .collect()
    })
}

proptest! {
    /// For any container contents and any probe sequence, the decorator
    /// answers every query exactly like the wrapped container, including
    /// absent names.
    #[test]
    fn decorator_matches_wrapped(
        entries in entries_strategy(),
        probes in prop::collection::vec(name_strategy(), 0..24),
    ) {
        let wrapped: IndexContainer<EntryInfo> = entries.iter().cloned().collect();
        let deco = ForwardContainer::new(entries.into_iter().collect::<IndexContainer<_>>());

        prop_assert_eq!(deco.len(), wrapped.len());
        prop_assert_eq!(deco.is_empty(), wrapped.is_empty());

        let got: Vec<&EntryInfo> = deco.iter().collect();
        let want: Vec<&EntryInfo> = wrapped.iter().collect();
        prop_assert_eq!(got, want);

        for name in &probes {
            prop_assert_eq!(deco.entry(name), wrapped.entry(name));
        }
    }

    /// Duplicate names replace in place, so the decorator and wrapped
    /// container agree on both order and content after replacement.
    #[test]
    fn replacement_keeps_agreement(entries in entries_strategy()) {
        let wrapped: IndexContainer<EntryInfo> = entries.iter().cloned().collect();
        let deco = ForwardContainer::new(entries.into_iter().collect::<IndexContainer<_>>());

        for entry in deco.iter() {
            prop_assert_eq!(wrapped.entry(entry.name()), Some(entry));
        }
    }
}
