/// Size and offset of a ripple circle inside the clicked button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// `client_*` is the click position, `rect_*` the button's box, all in
    /// viewport coordinates. The circle covers the whole button and is
    /// centered on the click.
    pub fn from_click(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64, width: f64, height: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}
