/// Asserts that the provided block panics, optionally with a custom failure message. The panic
/// message itself still reaches stderr, so a marker is printed to make test output less confusing.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ expected panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
