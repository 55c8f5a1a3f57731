/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// The pattern is a literal, so a failure to compile is a programming error
/// caught by the first test that touches it.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect(concat!("invalid regex: ", $pat)));
        &*RE
    }};
}
