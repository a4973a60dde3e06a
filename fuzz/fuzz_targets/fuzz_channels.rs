#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes drive the operator, the rest is the TGA file
    let [code, value, file @ ..] = data else {
        return;
    };
    let limits = Limits::default().with_max_pixels(1 << 20);
    let Ok(mut image) = DecodeRequest::new(file)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let before = image.rgba().unwrap().to_vec();
    let masked = image.apply_mask(*code & 0x7, *value);
    match Channel::try_from(*code & 0x7) {
        Ok(ch) => {
            masked.unwrap();
            for (old, new) in before.chunks_exact(4).zip(image.rgba().unwrap().chunks_exact(4)) {
                let off = ch.offset();
                assert_eq!(new[off], old[off].saturating_add(*value));
                for other in (0..4).filter(|&i| i != off) {
                    assert_eq!(new[other], old[other]);
                }
            }
        }
        Err(_) => {
            assert!(matches!(masked, Err(TargaError::InvalidChannel(_))));
            assert_eq!(image.rgba().unwrap(), &before[..]);
        }
    }
});
