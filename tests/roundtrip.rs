use enough::Unstoppable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zennetpbm::*;

fn checkerboard_pbm(w: u32, h: u32, magic: MagicNumber) -> Pbm {
    let mut img = Pbm::new(w, h).unwrap();
    img.set_magic_number(magic).unwrap();
    for y in 0..h {
        for x in 0..w {
            img.set(x, y, (x + y) % 2 == 0).unwrap();
        }
    }
    img
}

fn noise_pgm(w: u32, h: u32, max: u8, magic: MagicNumber) -> Pgm {
    let mut img = Pgm::new(w, h, max).unwrap();
    img.set_magic_number(magic).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0x1234_5678);
    for y in 0..h {
        for x in 0..w {
            img.set(x, y, rng.gen_range(0..=max)).unwrap();
        }
    }
    img
}

fn gradient_ppm(w: u32, h: u32, max: u8, magic: MagicNumber) -> Ppm {
    let mut img = Ppm::new(w, h, max).unwrap();
    img.set_magic_number(magic).unwrap();
    for y in 0..h {
        for x in 0..w {
            let r = (x * 37 + y) % (u32::from(max) + 1);
            let g = (y * 11) % (u32::from(max) + 1);
            let b = (x * y + 3) % (u32::from(max) + 1);
            img.set(x, y, Rgb::new(r as u8, g as u8, b as u8)).unwrap();
        }
    }
    img
}

fn pbm_roundtrip(img: &Pbm) {
    let encoded = img.encode().unwrap();
    let decoded = decode_pbm(&encoded, Unstoppable).unwrap();
    assert_eq!(&decoded, img);
}

fn pgm_roundtrip(img: &Pgm) {
    let encoded = img.encode().unwrap();
    let decoded = decode_pgm(&encoded, Unstoppable).unwrap();
    assert_eq!(&decoded, img);
}

fn ppm_roundtrip(img: &Ppm) {
    let encoded = img.encode().unwrap();
    let decoded = decode_ppm(&encoded, Unstoppable).unwrap();
    assert_eq!(&decoded, img);
}

#[test]
fn pbm_roundtrip_both_encodings() {
    for magic in [MagicNumber::P1, MagicNumber::P4] {
        for (w, h) in [(1, 1), (7, 3), (8, 2), (9, 5), (17, 4)] {
            pbm_roundtrip(&checkerboard_pbm(w, h, magic));
        }
    }
}

#[test]
fn pgm_roundtrip_both_encodings() {
    for magic in [MagicNumber::P2, MagicNumber::P5] {
        for max in [1, 15, 255] {
            pgm_roundtrip(&noise_pgm(13, 7, max, magic));
        }
    }
}

#[test]
fn ppm_roundtrip_both_encodings() {
    for magic in [MagicNumber::P3, MagicNumber::P6] {
        for max in [1, 100, 255] {
            ppm_roundtrip(&gradient_ppm(9, 6, max, magic));
        }
    }
}

#[test]
fn single_pixel_all_magics() {
    for magic in [MagicNumber::P1, MagicNumber::P4] {
        let mut img = Pbm::new(1, 1).unwrap();
        img.set_magic_number(magic).unwrap();
        pbm_roundtrip(&img);
        img.set(0, 0, true).unwrap();
        pbm_roundtrip(&img);
    }
    for magic in [MagicNumber::P2, MagicNumber::P5] {
        let mut img = Pgm::new(1, 1, 255).unwrap();
        img.set_magic_number(magic).unwrap();
        img.set(0, 0, 200).unwrap();
        pgm_roundtrip(&img);
    }
    for magic in [MagicNumber::P3, MagicNumber::P6] {
        let mut img = Ppm::new(1, 1, 255).unwrap();
        img.set_magic_number(magic).unwrap();
        img.set(0, 0, Rgb::new(1, 2, 3)).unwrap();
        ppm_roundtrip(&img);
    }
}

#[test]
fn all_zero_and_all_max() {
    for magic in [MagicNumber::P2, MagicNumber::P5] {
        let mut img = Pgm::new(5, 4, 200).unwrap();
        img.set_magic_number(magic).unwrap();
        pgm_roundtrip(&img);
        img.invert();
        assert!(img.pixels().iter().all(|&v| v == 200));
        pgm_roundtrip(&img);
    }
    for magic in [MagicNumber::P3, MagicNumber::P6] {
        let mut img = Ppm::new(4, 5, 255).unwrap();
        img.set_magic_number(magic).unwrap();
        ppm_roundtrip(&img);
        img.invert();
        pgm_roundtrip(&img.to_pgm());
        ppm_roundtrip(&img);
    }
    for magic in [MagicNumber::P1, MagicNumber::P4] {
        let mut img = Pbm::new(11, 3).unwrap();
        img.set_magic_number(magic).unwrap();
        pbm_roundtrip(&img);
        img.invert();
        pbm_roundtrip(&img);
    }
}

#[test]
fn pbm_width_ten_packs_into_two_bytes() {
    let row = [true, false, true, false, true, false, true, false, true, true];
    let mut img = Pbm::new(10, 1).unwrap();
    for (x, &on) in row.iter().enumerate() {
        img.set(x as u32, 0, on).unwrap();
    }
    let encoded = img.encode().unwrap();
    assert_eq!(encoded, b"P4\n10 1\n\xaa\xc0");

    let decoded = decode_pbm(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &row);
}

#[test]
fn padding_bits_are_ignored_on_read() {
    let decoded = decode_pbm(b"P4\n10 1\n\xaa\xff", Unstoppable).unwrap();
    assert_eq!(
        decoded.pixels(),
        &[true, false, true, false, true, false, true, false, true, true]
    );
    assert_eq!(decoded.encode().unwrap(), b"P4\n10 1\n\xaa\xc0");
}

#[test]
fn exact_header_layout() {
    let img = Pgm::new(3, 2, 9).unwrap();
    assert_eq!(img.encode().unwrap(), b"P5\n3 2\n9\n\0\0\0\0\0\0");

    let plain = EncodeRequest::with_magic(MagicNumber::P2)
        .encode(&img, Unstoppable)
        .unwrap();
    assert_eq!(plain, b"P2\n3 2\n9\n0 0 0\n0 0 0\n");
}

#[test]
fn encode_request_switches_encoding_within_family() {
    let img = gradient_ppm(4, 3, 255, MagicNumber::P6);
    let ascii = EncodeRequest::with_magic(MagicNumber::P3)
        .encode(&img, Unstoppable)
        .unwrap();
    assert!(ascii.starts_with(b"P3\n4 3\n255\n"));

    let back = decode_ppm(&ascii, Unstoppable).unwrap();
    assert_eq!(back.magic_number(), MagicNumber::P3);
    assert_eq!(back.pixels(), img.pixels());
}

#[test]
fn encode_request_rejects_foreign_family() {
    let img = Pbm::new(2, 2).unwrap();
    let err = EncodeRequest::with_magic(MagicNumber::P5)
        .encode(&img, Unstoppable)
        .unwrap_err();
    assert!(matches!(
        err,
        NetpbmError::UnsupportedMagicNumber {
            magic: MagicNumber::P5,
            format: NetpbmFormat::Pbm
        }
    ));
}

#[test]
fn auto_detect_roundtrip_through_enum() {
    let images: Vec<NetpbmImage> = vec![
        checkerboard_pbm(6, 2, MagicNumber::P1).into(),
        noise_pgm(6, 2, 255, MagicNumber::P5).into(),
        gradient_ppm(6, 2, 31, MagicNumber::P3).into(),
    ];
    for img in &images {
        let encoded = encode(img, Unstoppable).unwrap();
        let info = ImageInfo::from_bytes(&encoded).unwrap();
        assert_eq!(info.magic, img.magic_number());
        assert_eq!((info.width, info.height), (6, 2));
        assert_eq!(info.max_value, img.max_value());

        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!(&decoded, img);
    }
}

#[test]
fn write_then_read_stream() {
    let img = noise_pgm(8, 8, 255, MagicNumber::P2);
    let mut sink = Vec::new();
    write_to(&img, &mut sink, Unstoppable).unwrap();
    let decoded = read_from(sink.as_slice(), Unstoppable).unwrap();
    assert_eq!(decoded.into_pgm(), Some(img));
}

#[test]
fn wide_and_tall_images() {
    ppm_roundtrip(&gradient_ppm(1000, 1, 255, MagicNumber::P6));
    pgm_roundtrip(&noise_pgm(1, 1000, 255, MagicNumber::P5));
    pbm_roundtrip(&checkerboard_pbm(1001, 2, MagicNumber::P4));
}
