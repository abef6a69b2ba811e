pub mod site_server;

/// A few MPEG-1 Layer III frames (128 kbps, 44.1 kHz, stereo) with silent bodies.
pub fn fake_mp3() -> Vec<u8> {
    const FRAME_LEN: usize = 417;
    let mut out = Vec::with_capacity(FRAME_LEN * 24);
    for _ in 0..24 {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.extend_from_slice(&frame);
    }
    out
}
