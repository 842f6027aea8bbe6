#![no_main]

use codec::{decode_scene_with, encode_scene, CodecLimits, DecodeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&count, bytes)) = data.split_first() else {
        return;
    };
    let options = DecodeOptions {
        wire_limits: wire::Limits::for_testing(),
        limits: CodecLimits::for_testing(),
        ..DecodeOptions::strict()
    };
    let layer_count = usize::from(count % 8);

    if let Ok(scene) = decode_scene_with(bytes, layer_count, &options) {
        // Anything accepted must re-encode and decode to the same scene.
        let encoded = encode_scene(&scene).expect("decoded scene encodes");
        let again = decode_scene_with(&encoded, layer_count, &options).expect("re-decode");
        assert_eq!(again, scene);
    }
});
