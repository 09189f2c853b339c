mod test_facility;

mod codec_tests;

use std::sync::{Arc, Once, atomic::AtomicUsize};

use crate::{countries::REGISTRY, phoneinput::PhoneNumberNormalizer};

pub(crate) use country_code::CountryCode;
pub(crate) use test_facility::TestFacility;

static ONCE: Once = Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

// This setup function simulates getting the PhoneNumberNormalizer instance for each test.
pub(crate) fn get_normalizer() -> PhoneNumberNormalizer {
    init_logging();
    PhoneNumberNormalizer::with_facility(&REGISTRY, Box::new(TestFacility::new()))
}

pub(crate) fn get_normalizer_with(facility: TestFacility) -> PhoneNumberNormalizer {
    init_logging();
    PhoneNumberNormalizer::with_facility(&REGISTRY, Box::new(facility))
}

pub(crate) fn lookup_counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}
