use std::env;

/// Whether `key` is present in the environment with a non-empty value.
pub fn env_flag(key: &str) -> bool {
    env::var_os(key).is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::env_flag;

    #[test]
    fn unset_flag_is_false() {
        assert!(!env_flag("TIMECALC_UTILS_TEST_NEVER_SET"));
    }

    #[test]
    fn empty_flag_is_false_and_any_value_is_true() {
        // SAFETY: the key is unique to this test, nothing else reads it.
        unsafe { std::env::set_var("TIMECALC_UTILS_TEST_FLAG", "") };
        assert!(!env_flag("TIMECALC_UTILS_TEST_FLAG"));

        unsafe { std::env::set_var("TIMECALC_UTILS_TEST_FLAG", "0") };
        assert!(env_flag("TIMECALC_UTILS_TEST_FLAG"));

        unsafe { std::env::remove_var("TIMECALC_UTILS_TEST_FLAG") };
    }
}
