// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use proptest::prelude::*;

use amunchain_txfilter::core::txfilter::{AllowedMsgPattern, PolicyError};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}"
}

fn segments(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), min..=max)
}

proptest! {
    #[test]
    fn prefix_target_matches_everything_below_it(
        prefix in segments(1, 3),
        tail in segments(1, 3),
    ) {
        let target = prefix.join(".");
        let p = AllowedMsgPattern::compile([target.as_str()]).unwrap();

        let url = format!("/{}.{}", target, tail.join("."));
        prop_assert!(p.is_match(&url));
        // The target itself is a namespace, not a message.
        let bare = format!("/{}", target);
        prop_assert!(!p.is_match(&bare));
    }

    #[test]
    fn exact_target_matches_only_itself(target in segments(4, 4), extra in segment()) {
        let joined = target.join(".");
        let p = AllowedMsgPattern::compile([joined.as_str()]).unwrap();

        let exact = format!("/{}", joined);
        prop_assert!(p.is_match(&exact));
        let longer = format!("/{}{}", joined, extra);
        prop_assert!(!p.is_match(&longer));
        let nested = format!("/{}.{}", joined, extra);
        prop_assert!(!p.is_match(&nested));
    }

    #[test]
    fn five_or_more_segments_never_compile(target in segments(5, 8)) {
        let joined = target.join(".");
        let res = AllowedMsgPattern::compile(["cosmos.bank", joined.as_str()]);
        let is_invalid_target = matches!(res, Err(PolicyError::InvalidTarget { .. }));
        prop_assert!(is_invalid_target);
    }

    #[test]
    fn deny_all_matches_nothing(url in "\\PC*") {
        let p = AllowedMsgPattern::compile(Vec::<String>::new()).unwrap();
        prop_assert!(!p.is_match(&url));
    }

    #[test]
    fn compiled_pattern_never_matches_empty(targets in proptest::collection::vec(segments(1, 4), 1..6)) {
        let joined: Vec<String> = targets.iter().map(|t| t.join(".")).collect();
        let p = AllowedMsgPattern::compile(&joined).unwrap();
        prop_assert!(!p.is_match(""));
    }
}
