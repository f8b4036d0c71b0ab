//! Color space helpers.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation towards `other`, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| {
            let diff = a as i32 - b as i32;
            (diff * diff) as u32
        };
        d(self.0, other.0) + d(self.1, other.1) + d(self.2, other.2)
    }
}

/// Convert HSV to RGB.
///
/// `h` is in degrees and wraps; `s` and `v` are clamped to `0.0..=1.0`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if s == 0.0 {
        let c = to_channel(v);
        return Rgb(c, c, c);
    }

    let h = h.rem_euclid(360.0) / 60.0;
    let sector = (h.floor() as u32) % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), Rgb(255, 0, 0));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), Rgb(128, 128, 128));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb(0, 80, 0);
        let b = Rgb(128, 255, 128);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Rgb(0, 0, 0).distance_sq(Rgb(3, 4, 0)), 25);
    }
}
