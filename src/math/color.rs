/// HSV to RGB with `h` in turns; any hue wraps into `[0, 1)`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = h.rem_euclid(1.0) * 6.0;
    let chroma = v * s;
    let ramp = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let floor = v - chroma;

    let [r, g, b] = match sector as u32 {
        0 => [chroma, ramp, 0.0],
        1 => [ramp, chroma, 0.0],
        2 => [0.0, chroma, ramp],
        3 => [0.0, ramp, chroma],
        4 => [ramp, 0.0, chroma],
        // 5, and 6 when a tiny negative hue rounds up to a full turn
        _ => [chroma, 0.0, ramp],
    };

    [r + floor, g + floor, b + floor]
}
