// Pointer input normalized across devices, and the mapping from client
// (window) coordinates into overlay raster coordinates.

/// One finger on a touch surface, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// Where a pointer sample came from. Both variants reduce to one client point.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSource {
    Mouse { client_x: f32, client_y: f32 },
    Touch { touches: Vec<TouchPoint> },
}

impl PointerSource {
    pub fn mouse(client_x: f32, client_y: f32) -> Self {
        PointerSource::Mouse { client_x, client_y }
    }

    pub fn touch(client_x: f32, client_y: f32) -> Self {
        PointerSource::Touch { touches: vec![TouchPoint { client_x, client_y }] }
    }

    /// Client point of this sample; touch uses the first active finger.
    pub fn client_point(&self) -> Option<(f32, f32)> {
        match self {
            PointerSource::Mouse { client_x, client_y } => Some((*client_x, *client_y)),
            PointerSource::Touch { touches } => touches.first().map(|t| (t.client_x, t.client_y)),
        }
    }
}

/// On-screen bounding box of a surface, in client coordinates.
/// The raster behind it may be a different size (the surface can be scaled).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && y >= self.top && x < self.left + self.width && y < self.top + self.height
    }
}

/// `(client - origin) * (raster / rect)` per axis.
/// Missing touches or a degenerate rect give (0,0) rather than an error.
pub fn map_to_raster(source: &PointerSource, rect: &SurfaceRect, raster_w: u32, raster_h: u32) -> (f32, f32) {
    let Some((cx, cy)) = source.client_point() else {
        return (0.0, 0.0);
    };
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return (0.0, 0.0);
    }
    let scale_x = raster_w as f32 / rect.width;
    let scale_y = raster_h as f32 / rect.height;
    let (x, y) = ((cx - rect.left) * scale_x, (cy - rect.top) * scale_y);
    if !(x.is_finite() && y.is_finite()) {
        return (0.0, 0.0);
    }
    (x, y)
}
