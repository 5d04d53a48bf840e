#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM 10x2, plain and raw
    fs::write(
        format!("{dir}/pbm_plain_10x2.pbm"),
        b"P1\n# comment\n10 2\n1 0 1 0 1 0 1 0 1 1\n0000011111\n",
    )
    .unwrap();
    fs::write(format!("{dir}/pbm_raw_10x2.pbm"), b"P4\n10 2\n\xaa\xc0\x07\xc0").unwrap();

    // PGM 3x2
    fs::write(format!("{dir}/pgm_plain_3x2.pgm"), b"P2\n3 2\n15\n0 4 8\n12 15 6\n").unwrap();
    fs::write(format!("{dir}/pgm_raw_3x2.pgm"), b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64").unwrap();

    // PPM 2x2
    fs::write(
        format!("{dir}/ppm_plain_2x2.ppm"),
        b"P3\n2 2\n255\n255 0 0  0 255 0\n0 0 255  128 128 128\n",
    )
    .unwrap();
    fs::write(
        format!("{dir}/ppm_raw_2x2.ppm"),
        b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80",
    )
    .unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/zero_max.bin"), b"P5\n1 1\n0\n\x00").unwrap();
    fs::write(format!("{dir}/comment_eof.bin"), b"P2\n# never ends").unwrap();
    fs::write(format!("{dir}/over_max.bin"), b"P2\n2 1\n9\n5 10\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
