#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, w: u16, h: u16, depth: u8, descriptor: u8) -> Vec<u8> {
    let mut hdr = vec![0u8; 18];
    hdr[2] = image_type;
    hdr[12..14].copy_from_slice(&w.to_le_bytes());
    hdr[14..16].copy_from_slice(&h.to_le_bytes());
    hdr[16] = depth;
    hdr[17] = descriptor;
    hdr
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Raw true-color 2x2, 24-bit, bottom-left
    let mut tga = header(2, 2, 2, 24, 0x00);
    tga.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0, 128, 128, 128]);
    fs::write(format!("{dir}/raw_24_2x2.tga"), tga).unwrap();

    // Raw true-color 1x1, 32-bit, top-left
    let mut tga = header(2, 1, 1, 32, 0x28);
    tga.extend_from_slice(&[10, 20, 30, 40]);
    fs::write(format!("{dir}/raw_32_1x1.tga"), tga).unwrap();

    // RLE true-color 4x1, 16-bit
    let mut tga = header(10, 4, 1, 16, 0x21);
    tga.extend_from_slice(&[0x81, 0x1F, 0x80, 0x01, 0xE0, 0x83, 0x00, 0xFC]);
    fs::write(format!("{dir}/rle_16_4x1.tga"), tga).unwrap();

    // Color-mapped 2x1 with a 2-entry 24-bit table and an image ID
    let mut tga = header(1, 2, 1, 8, 0x20);
    tga[0] = 3;
    tga[1] = 1;
    tga[5] = 2;
    tga[7] = 24;
    tga.extend_from_slice(b"id!");
    tga.extend_from_slice(&[0, 0, 255, 255, 0, 0]);
    tga.extend_from_slice(&[1, 0]);
    fs::write(format!("{dir}/mapped_8_2x1.tga"), tga).unwrap();

    // RLE grayscale 3x1, top-right
    let mut tga = header(11, 3, 1, 8, 0x30);
    tga.extend_from_slice(&[0x82, 0x7F]);
    fs::write(format!("{dir}/rle_gray_3x1.tga"), tga).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(2, 1, 1, 24, 0)[..12]).unwrap();
    fs::write(format!("{dir}/no_pixels.tga"), header(2, 8, 8, 24, 0)).unwrap();
    fs::write(format!("{dir}/no_data_type.tga"), header(0, 0, 0, 0, 0)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
