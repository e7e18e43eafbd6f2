/// Rotation in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// relative to the card's top-left corner. The card leans toward the
/// pointer, reaching `max_degrees` at the edges.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_y = ((x - center_x) / center_x).clamp(-1.0, 1.0) * max_degrees;
    let rotate_x = -((y - center_y) / center_y).clamp(-1.0, 1.0) * max_degrees;
    (rotate_x, rotate_y)
}

pub fn transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
        rotate_x, rotate_y
    )
}

pub const RESET: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";
