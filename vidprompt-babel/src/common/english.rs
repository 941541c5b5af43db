//! English list joining

/// Join items the way a sentence lists them.
///
/// One item stands alone, two are joined with " and ", three or more are comma separated with
/// ", and " before the last.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&["high quality"], "high quality")]
    #[case(&["a", "b"], "a and b")]
    #[case(&["a", "b", "c"], "a, b, and c")]
    #[case(&["a", "b", "c", "d"], "a, b, c, and d")]
    fn test_join_list(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(join_list(items), expected);
    }
}
