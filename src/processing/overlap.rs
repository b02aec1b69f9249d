//! Pairwise prefix overlap detection.
//!
//! Classifies one network prefix relative to another as the same network,
//! a subset, a superset, or unrelated.

use crate::models::{NormalizedPrefix, OverlapStatus};

/// Check that two prefixes belong to the same address family.
pub fn comparable(a: &NormalizedPrefix, b: &NormalizedPrefix) -> bool {
    a.family() == b.family()
}

/// `b` has the same network address and prefix length as `a`.
pub fn is_same_as(b: &NormalizedPrefix, a: &NormalizedPrefix) -> bool {
    b.network_address() == a.network_address() && b.prefix_length() == a.prefix_length()
}

/// `b` lies inside `a`.
pub fn is_subset_of(b: &NormalizedPrefix, a: &NormalizedPrefix) -> bool {
    a.contains(b.network_address()) && a.prefix_length() <= b.prefix_length()
}

/// `b` covers all of `a`.
pub fn is_superset_of(b: &NormalizedPrefix, a: &NormalizedPrefix) -> bool {
    b.contains(a.network_address()) && b.prefix_length() <= a.prefix_length()
}

/// Classify `b` from the perspective of `a`.
///
/// The checks run in order and the first match wins. Equality comes first
/// since equal prefixes also pass both containment checks.
///
/// # Arguments
/// * `a` - The reference prefix
/// * `b` - The prefix being classified
///
/// # Returns
/// [`OverlapStatus::Subset`] when `b` is inside `a`, [`OverlapStatus::Superset`]
/// when `b` covers `a`. Prefixes of different families are never contained in
/// one another and come back as [`OverlapStatus::Different`].
pub fn classify(a: &NormalizedPrefix, b: &NormalizedPrefix) -> OverlapStatus {
    if !comparable(a, b) {
        log::debug!("classify({a}, {b}) called across address families");
    }

    let status = if is_same_as(b, a) {
        OverlapStatus::Same
    } else if is_subset_of(b, a) {
        OverlapStatus::Subset
    } else if is_superset_of(b, a) {
        OverlapStatus::Superset
    } else {
        OverlapStatus::Different
    };
    log::trace!("classify({a}, {b}) = {status}");

    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse;

    fn check(a: &str, b: &str) -> OverlapStatus {
        let a = parse(a).unwrap();
        let b = parse(b).unwrap();
        classify(&a, &b)
    }

    #[test]
    fn test_is_same_as() {
        let cases = [
            ("10.0.2.0/24", "10.0.2.10/24", true),
            ("192.168.1.0/24", "10.10.10.0/24", false),
            ("fe80::c845:ea23:ad2e/64", "fe80::c845:ea23:ad2e:65b8/64", true),
            ("fe80::c845:ea23:ad2e/128", "fe80::c845:ea23:ad2e:65b8/128", false),
            ("10.0.2.0/24", "10.0.2.0/25", false),
        ];
        for (a, b, expect) in cases {
            let a = parse(a).unwrap();
            let b = parse(b).unwrap();
            assert_eq!(is_same_as(&b, &a), expect, "{b} same as {a}");
        }
    }

    #[test]
    fn test_is_subset_and_superset_of() {
        let outer = parse("10.0.0.0/8").unwrap();
        let inner = parse("10.0.2.10/24").unwrap();
        assert!(is_subset_of(&inner, &outer));
        assert!(!is_superset_of(&inner, &outer));
        assert!(is_superset_of(&outer, &inner));
        assert!(!is_subset_of(&outer, &inner));

        // Equal prefixes pass both raw checks; classify orders them.
        assert!(is_subset_of(&inner, &inner));
        assert!(is_superset_of(&inner, &inner));
    }

    #[test]
    fn test_classify_ipv4() {
        assert_eq!(check("10.0.2.0/24", "10.0.2.10/24"), OverlapStatus::Same);
        assert_eq!(check("10.0.0.0/8", "10.0.2.10/24"), OverlapStatus::Subset);
        assert_eq!(check("10.10.10.0/24", "10.0.2.10/8"), OverlapStatus::Superset);
        assert_eq!(check("172.16.0.0/24", "192.168.0.0/24"), OverlapStatus::Different);
        assert_eq!(check("10.0.2.0/24", "10.0.3.0/24"), OverlapStatus::Different);
    }

    #[test]
    fn test_classify_ipv6() {
        assert_eq!(
            check("fe80::c845:ea23:ad2e/64", "fe80::c845:ea23:ad2e:65b8/64"),
            OverlapStatus::Same
        );
        assert_eq!(
            check("fe80::c845:ea23:ad2e/64", "fe80::c845:ea23:ad2e:65b8/128"),
            OverlapStatus::Subset
        );
        assert_eq!(check("fe80::c845:ea23:ad2e/64", "fe80::/8"), OverlapStatus::Superset);
        assert_eq!(check("fe80::/8", "::1/128"), OverlapStatus::Different);
        assert_eq!(check("fd74:5909::/8", "fe80::/64"), OverlapStatus::Different);
    }

    #[test]
    fn test_classify_zero_length() {
        assert_eq!(check("0.0.0.0/0", "0.0.0.0/0"), OverlapStatus::Same);
        assert_eq!(check("0.0.0.0/0", "255.255.255.255/32"), OverlapStatus::Subset);
        assert_eq!(check("192.168.0.1/32", "10.0.0.0/0"), OverlapStatus::Superset);
        assert_eq!(check("10.0.0.0/0", "192.168.0.0/0"), OverlapStatus::Same);

        assert_eq!(check("::/0", "::/0"), OverlapStatus::Same);
        assert_eq!(check("::/0", "fe80::c845:ea23:ad2e:65b8/128"), OverlapStatus::Subset);
        assert_eq!(check("fe80::/64", "::/0"), OverlapStatus::Superset);
        assert_eq!(check("fe80::1/0", "::/0"), OverlapStatus::Same);
    }

    #[test]
    fn test_classify_properties() {
        let prefixes: Vec<NormalizedPrefix> = [
            "0.0.0.0/0",
            "10.0.0.0/8",
            "10.0.2.0/24",
            "10.0.2.10/32",
            "10.0.3.0/24",
            "172.16.0.0/12",
            "::/0",
            "fe80::/8",
            "fe80::/64",
            "fe80::c845:ea23:ad2e:65b8/128",
            "fd74:5909::/32",
        ]
        .iter()
        .map(|s| parse(s).unwrap())
        .collect();

        for a in &prefixes {
            for b in prefixes.iter().filter(|b| comparable(a, b)) {
                let forward = classify(a, b);
                let backward = classify(b, a);
                assert_eq!(forward == OverlapStatus::Same, backward == OverlapStatus::Same);
                assert_eq!(forward == OverlapStatus::Same, a == b);
                if a != b {
                    assert_eq!(
                        forward == OverlapStatus::Subset,
                        backward == OverlapStatus::Superset,
                        "duality broken for {a} and {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_comparable() {
        let cases = [
            ("10.0.2.0/24", "192.168.0.0/0", true),
            ("fd74:5909:aafe::35f0:65ca:6fa1/128", "fe80::c845:ea23:ad2e:65b8/64", true),
            ("10.0.2.0/24", "::/0", false),
            ("::/0", "0.0.0.0/0", false),
            ("::ffff:10.0.0.0/104", "10.0.0.0/8", true),
        ];
        for (a, b, expect) in cases {
            let a = parse(a).unwrap();
            let b = parse(b).unwrap();
            assert_eq!(comparable(&a, &b), expect, "{a} comparable to {b}");
        }
    }

    #[test]
    fn test_classify_across_families_is_different() {
        assert_eq!(check("::/0", "0.0.0.0/0"), OverlapStatus::Different);
    }
}
