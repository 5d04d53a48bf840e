#![no_main]
use libfuzzer_sys::fuzz_target;
use zennetpbm::*;

fuzz_target!(|data: &[u8]| {
    // Keep hostile headers from asking for gigabytes.
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Limits::default()
    };

    // Auto-detect decode, strict and lenient: must never panic
    let _ = decode_with_limits(data, &limits, enough::Unstoppable);
    let _ = DecodeRequest::new(data)
        .with_limits(&limits)
        .with_sample_mode(SampleMode::Clamp)
        .decode(enough::Unstoppable);

    // Header probe must agree with itself and never panic
    let _ = ImageInfo::from_bytes(data);
});
