//! Conversions shared by the experiments.

/// Turns an index into the value stored at that position of a synthetic vector.
pub(crate) fn as_value(index: usize) -> u64 {
    u64::try_from(index).expect("usize values fit in u64 on all supported platforms")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn index_becomes_value() {
        assert_eq!(as_value(0), 0);
        assert_eq!(as_value(200_000), 200_000);
        assert_eq!(as_value(usize::from(u16::MAX)), u64::from(u16::MAX));
    }
}
