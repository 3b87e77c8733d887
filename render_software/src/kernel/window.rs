///
/// The fraction of a pixel window that lies beyond `x` along a ray running from -1 to 1
///
/// The window is parabolic (heaviest at the centre of the pixel): this is the integral of the window function
/// from `x` to 1, so `integrate_window(-1.0) == 1.0` and `integrate_window(1.0) == 0.0`.
///
#[inline]
pub fn integrate_window(x: f32) -> f32 {
    let x_sq = x*x;

    x.signum() * (0.5 * x_sq*x_sq - x_sq) + 0.5
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_end_points() {
        assert!((integrate_window(-1.0) - 1.0).abs() < 1e-6);
        assert!((integrate_window(1.0) - 0.0).abs() < 1e-6);
        assert!((integrate_window(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn window_is_symmetric() {
        for step in 0..=20 {
            let x = (step as f32) / 20.0;
            assert!((integrate_window(x) + integrate_window(-x) - 1.0).abs() < 1e-6, "{}", x);
        }
    }
}
