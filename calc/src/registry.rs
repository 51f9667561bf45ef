//! The process-wide calculator registry.
//!
//! The registry is the only mutable shared state in the whole library.
//! Reads are lock-free once a calculator has been selected; selecting a
//! calculator is expected only at startup or in tests, and is guarded by a
//! lock so concurrent first-reads can't race.

use std::sync::{Arc, OnceLock, RwLock};

use crate::kernel::Calculator;
use crate::native::NativeCalculator;

static OVERRIDE: OnceLock<RwLock<Option<Arc<dyn Calculator>>>> = OnceLock::new();
static AUTODETECTED: OnceLock<Arc<dyn Calculator>> = OnceLock::new();

fn override_cell() -> &'static RwLock<Option<Arc<dyn Calculator>>> {
    OVERRIDE.get_or_init(|| RwLock::new(None))
}

/// Autodetect the fastest available backend. There is currently only one
/// native backend, so this always resolves to it; the indirection exists so
/// future backends (e.g. a wrapper over a vendored bignum library) can be
/// slotted in without touching call sites.
fn autodetect() -> Arc<dyn Calculator> {
    Arc::new(NativeCalculator::new())
}

/// The calculator in effect: the overridden one if [`set_calculator`] has
/// been called, otherwise the lazily autodetected default.
pub fn calculator() -> Arc<dyn Calculator> {
    if let Some(calc) = override_cell().read().unwrap().as_ref() {
        return calc.clone();
    }
    AUTODETECTED.get_or_init(autodetect).clone()
}

/// Override the registry's calculator, for testing or for environments that
/// know better than autodetection. Idempotent: calling it again simply
/// replaces the previous override.
pub fn set_calculator(calc: Arc<dyn Calculator>) {
    *override_cell().write().unwrap() = Some(calc);
}

/// Clear any override, reverting to the autodetected default. Intended for
/// test teardown.
pub fn clear_override() {
    *override_cell().write().unwrap() = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portable::PortableCalculator;

    #[test]
    fn default_is_available_and_overridable() {
        let before = calculator();
        assert!(!before.name().is_empty());

        set_calculator(Arc::new(PortableCalculator));
        assert_eq!(calculator().name(), "portable");

        clear_override();
        assert_eq!(calculator().name(), "native");
    }
}
