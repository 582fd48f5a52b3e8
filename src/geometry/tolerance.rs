// Centralized tolerances and helpers for robust geometry

pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold
pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold
pub const EPS_ANG: f32 = 1e-6;            // angle compare slack (radians)

#[inline] pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }
#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn norm2(mut x: f32, mut y: f32) -> ((f32,f32), f32) {
    let len = (x*x + y*y).sqrt();
    if len > EPS_LEN { x/=len; y/=len; ((x,y), len) } else { ((0.0,0.0), 0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm2_guards_zero_length() {
        assert_eq!(norm2(0.0, 0.0), ((0.0, 0.0), 0.0));
        let ((x, y), len) = norm2(3.0, 4.0);
        assert!(approx_eq(len, 5.0, EPS_LEN));
        assert!(approx_eq(x, 0.6, EPS_LEN) && approx_eq(y, 0.8, EPS_LEN));
    }
}
