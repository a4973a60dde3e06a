#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zentga::TargaInfo::from_bytes(data);

    let limits = zentga::Limits::default().with_max_pixels(1 << 22);
    let Ok(image) = zentga::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let (w, h) = image.dimensions().unwrap();
    assert_eq!(image.image_length().unwrap(), w as usize * h as usize * 4);
});
