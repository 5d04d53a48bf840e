#![no_main]
use libfuzzer_sys::fuzz_target;
use zennetpbm::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Limits::default()
    };
    // If we can decode it, re-encoding and decoding again must produce the same image
    let Ok(decoded) = decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode(&decoded, enough::Unstoppable).expect("decoded image must encode");
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    // The other encoding of the same family must agree too
    let flipped = match decoded.magic_number().encoding() {
        Encoding::Ascii => MagicNumber::new(decoded.format(), Encoding::Binary),
        Encoding::Binary => MagicNumber::new(decoded.format(), Encoding::Ascii),
    };
    let other = EncodeRequest::with_magic(flipped)
        .encode(&decoded, enough::Unstoppable)
        .expect("same-family magic must encode");
    let decoded3 = decode(&other, enough::Unstoppable).expect("re-encoded data must decode");
    assert_eq!(decoded3.width(), decoded.width());
    assert_eq!(decoded3.height(), decoded.height());
    assert_eq!(decoded3.max_value(), decoded.max_value());
});
