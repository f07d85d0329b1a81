//! Common test utilities shared by the integration suites.

use textmask::{MaskOptions, Masker};

/// Builds a masker from options, panicking on configuration errors.
pub fn masker(options: MaskOptions) -> Masker {
    Masker::new(options).expect("valid mask configuration")
}

/// Asserts all three views of one value at once.
pub fn assert_views(masker: &Masker, value: &str, masked: &str, unmasked: &str, completed: bool) {
    assert_eq!(masker.masked(value), masked, "masked view of {:?}", value);
    assert_eq!(
        masker.unmasked(value),
        unmasked,
        "unmasked view of {:?}",
        value
    );
    assert_eq!(
        masker.completed(value),
        completed,
        "completed view of {:?}",
        value
    );
}
