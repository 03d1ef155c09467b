/// Decelerating curve `1 - (1 - t)^2`. Input is clamped to `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(-3.0), 0.0);
        assert_eq!(ease_out_quad(7.5), 1.0);
    }

    #[test]
    fn decelerates() {
        let a = ease_out_quad(0.25);
        let b = ease_out_quad(0.5);
        let c = ease_out_quad(0.75);
        assert!(a < b && b < c);
        // first half covers more ground than the second
        assert!(b - ease_out_quad(0.0) > ease_out_quad(1.0) - b);
        assert_eq!(b, 0.75);
    }
}
