//! PayWeb3 integrity checksum.
//!
//! Every payload exchanged with the gateway is protected by an MD5 hex digest
//! over its fields concatenated in a fixed order with the shared secret
//! appended. The order is dictated per message type by the protocol; callers
//! supply it. Fields the payload omits must be passed as empty strings so
//! they contribute zero characters.

/// Concatenate `fields` in order, append `secret`, MD5, lowercase hex.
pub fn compute(fields: &[&str], secret: &str) -> String {
    let mut source =
        String::with_capacity(fields.iter().map(|f| f.len()).sum::<usize>() + secret.len());
    for field in fields {
        source.push_str(field);
    }
    source.push_str(secret);
    hex::encode(*md5::compute(source.as_bytes()))
}

/// Recompute and compare exactly. The comparison is case-sensitive and not
/// constant-time: the digest is an integrity check, not a secret.
pub fn verify(fields: &[&str], secret: &str, candidate: &str) -> bool {
    compute(fields, secret) == candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_digest() {
        assert_eq!(compute(&["a", "b"], "s"), "f9ac6b05beccb0fc5837b6a7fef4c1d3");
    }

    #[test]
    fn notify_golden_vector() {
        let fields = [
            "M1",
            "R1",
            "REF1",
            "1",
            "990017",
            "A1",
            "1000",
            "Auth Done",
            "T1",
            "2024-01-01 10:00:00",
        ];
        assert_eq!(compute(&fields, "S"), "2c5ee2b1fa4f5e35d08275dfbf4541ce");
    }

    #[test]
    fn verify_round_trips() {
        let fields = ["10011072130", "PGTEST-GEN-1", "3299", "ZAR"];
        let digest = compute(&fields, "secret");
        assert_eq!(digest.len(), 32);
        assert!(verify(&fields, "secret", &digest));
    }

    #[test]
    fn any_mutation_fails_verification() {
        let fields = ["10011072130", "PGTEST-GEN-1", "3299", "ZAR"];
        let digest = compute(&fields, "secret");
        assert!(!verify(
            &["10011072131", "PGTEST-GEN-1", "3299", "ZAR"],
            "secret",
            &digest
        ));
        assert!(!verify(&fields, "secrex", &digest));
        assert!(!verify(&fields, "secret", &digest.to_uppercase()));
    }

    #[test]
    fn field_order_is_load_bearing() {
        assert_ne!(compute(&["ab", "cd"], "S"), compute(&["cd", "ab"], "S"));
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        assert_eq!(
            compute(&["ab", "", "cd"], "S"),
            compute(&["ab", "cd", ""], "S")
        );
        assert_eq!(compute(&["ab", "", "cd"], "S"), compute(&["abcd"], "S"));
    }
}
