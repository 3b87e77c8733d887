///
/// A pan/zoom view onto the page grid
///
/// `x` and `y` are the world coordinates at the centre of the viewport, `zoom` is the log2 of the number of
/// page widths that fit across half of the viewport's height.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewTransform {
    pub x:      f64,
    pub y:      f64,
    pub zoom:   f64,
}

impl ViewTransform {
    ///
    /// Creates a new view transform
    ///
    #[inline]
    pub fn new(x: f64, y: f64, zoom: f64) -> ViewTransform {
        ViewTransform { x, y, zoom }
    }

    ///
    /// The horizontal and vertical scale factors for this view, given the aspect ratio (width/height) of the first page
    ///
    #[inline]
    pub fn zoom_scale(&self, page_aspect: f64) -> (f64, f64) {
        let zoom_x = 2.0f64.powf(self.zoom);
        let zoom_y = zoom_x * page_aspect;

        (zoom_x, zoom_y)
    }
}

///
/// Returns true if the difference between two values is large enough to need a new frame
///
/// Values are compared by ratio, so this works equally well for small and large values. Two zero values are
/// never significantly different.
///
pub fn significant_change(a: f64, b: f64) -> bool {
    let (a, b) = if b.abs() < a.abs() { (b, a) } else { (a, b) };

    if b == 0.0 { return false; }
    (a / b) < 0.99999999
}

/// Values closer than this to their target are treated as having reached it
pub const SETTLE_DISTANCE: f64 = 1e-8;

///
/// True if an animated value is close enough to its target to be pinned to it
///
/// A value has arrived when it is within `SETTLE_DISTANCE` of the target or when the ratio between the two is
/// not a significant change (a target of zero is only ever reached by distance).
///
#[inline]
pub fn reached_target(value: f64, target: f64) -> bool {
    (value - target).abs() < SETTLE_DISTANCE || !significant_change(value, target)
}

///
/// Moves from `from` towards `to` by the fraction `t` (clamped to the range 0..1)
///
#[inline]
pub fn mix(from: f64, to: f64, t: f64) -> f64 {
    let t = t.max(0.0).min(1.0);

    to * t + from * (1.0 - t)
}

///
/// The zoom level used while auto-panning, `t` being the fraction of the way through the current auto-pan interval
///
pub fn auto_pan_zoom(t: f64) -> f64 {
    let zoom = (std::f64::consts::FRAC_PI_2 * t * 4.0).cos();

    (zoom + 1.0).powi(3) / 1.1 - 7.0
}

///
/// A view transform that moves smoothly towards a target
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimatedTransform {
    /// Where the view is heading
    target: ViewTransform,

    /// Where the view is now
    current: ViewTransform,

    /// The time of the last update, in milliseconds
    last_timestamp: Option<f64>,
}

impl Default for AnimatedTransform {
    fn default() -> AnimatedTransform {
        AnimatedTransform {
            target:         ViewTransform::new(0.5, 0.5, 0.0),
            current:        ViewTransform::new(0.0, 0.0, 1.0),
            last_timestamp: None,
        }
    }
}

impl AnimatedTransform {
    ///
    /// Creates a transform that starts off at a particular view (with no animation pending)
    ///
    pub fn at(view: ViewTransform) -> AnimatedTransform {
        AnimatedTransform {
            target:         view,
            current:        view,
            last_timestamp: None,
        }
    }

    /// The view the animation is moving towards
    #[inline] pub fn target(&self) -> ViewTransform { self.target }

    /// The view that should be rendered for the current frame
    #[inline] pub fn current(&self) -> ViewTransform { self.current }

    ///
    /// Advances the animation to the specified timestamp (in milliseconds)
    ///
    /// Returns true if the view has changed enough that a new frame should be drawn. Components that are no
    /// longer significantly different from their target are pinned to it.
    ///
    pub fn update(&mut self, timestamp: f64, duration: f64) -> bool {
        let elapsed     = self.last_timestamp.map(|last| timestamp - last).unwrap_or(0.0);
        let t           = if duration > 0.0 { elapsed / duration } else { 1.0 };
        let mut changed = false;

        {
            let target      = &self.target;
            let current     = &mut self.current;
            let components  = [
                (&mut current.x, target.x),
                (&mut current.y, target.y),
                (&mut current.zoom, target.zoom),
            ];

            for (value, target) in components {
                let new_value = mix(*value, target, t);
                let new_value = if reached_target(new_value, target) { target } else { new_value };

                if significant_change(new_value, *value) {
                    changed = true;
                }

                *value = new_value;
            }
        }

        self.last_timestamp = Some(timestamp);

        changed
    }

    ///
    /// Moves the current view straight to the target
    ///
    pub fn finish(&mut self) {
        self.current = self.target;
    }

    ///
    /// Sets a new target for the animation
    ///
    pub fn set_target(&mut self, target: ViewTransform) {
        self.target = target;
    }

    ///
    /// Moves the target by a distance in world coordinates
    ///
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.target.x += dx;
        self.target.y += dy;
    }

    ///
    /// Moves the target by a drag across the viewport
    ///
    /// `dx` and `dy` are fractions of the viewport size (y increasing downwards, as for pointer events). The
    /// distance moved is scaled by the current zoom level so that dragging feels the same at every zoom.
    ///
    pub fn drag_by(&mut self, dx: f64, dy: f64, scale_factor: f64) {
        let zoom = 2.0f64.powf(self.target.zoom);

        self.target.x -= scale_factor * dx * zoom;
        self.target.y += scale_factor * dy * zoom;
    }

    ///
    /// Changes the target zoom level (positive values zoom out)
    ///
    pub fn zoom_by(&mut self, dzoom: f64) {
        self.target.zoom += dzoom;
    }

    ///
    /// Centres the target on a world coordinate, leaving the zoom level alone
    ///
    pub fn focus_on(&mut self, world_pos: [f32; 2]) {
        self.target.x = world_pos[0] as f64;
        self.target.y = world_pos[1] as f64;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_is_not_a_change() {
        assert!(!significant_change(0.0, 0.0));
    }

    #[test]
    fn tiny_ratio_is_not_a_change() {
        assert!(!significant_change(1.0, 1.000000001));
        assert!(significant_change(1.0, 1.001));
        assert!(significant_change(1.0, -1.0));
    }

    #[test]
    fn mix_clamps() {
        assert!(mix(0.0, 10.0, 2.0) == 10.0);
        assert!(mix(0.0, 10.0, -1.0) == 0.0);
        assert!(mix(0.0, 10.0, 0.5) == 5.0);
    }

    #[test]
    fn zoom_scale_uses_page_aspect() {
        let view = ViewTransform::new(0.0, 0.0, 1.0);
        let (zx, zy) = view.zoom_scale(0.5);

        assert!((zx - 2.0).abs() < 1e-12);
        assert!((zy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn first_update_does_not_move() {
        let mut transform = AnimatedTransform::default();

        assert!(!transform.update(1000.0, 60.0));
        assert!(transform.current() == ViewTransform::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn animation_reaches_target() {
        let mut transform = AnimatedTransform::default();

        transform.update(0.0, 60.0);
        assert!(transform.update(30.0, 60.0));
        assert!((transform.current().x - 0.25).abs() < 1e-9, "{:?}", transform.current());
        assert!((transform.current().zoom - 0.5).abs() < 1e-9, "{:?}", transform.current());

        assert!(transform.update(1000.0, 60.0));
        assert!(transform.current() == transform.target());
        assert!(!transform.update(1016.0, 60.0));
    }

    #[test]
    fn drag_scales_with_zoom() {
        let mut transform = AnimatedTransform::default();

        transform.zoom_by(1.0);
        transform.drag_by(0.25, 0.5, 1.0);

        assert!(transform.target() == ViewTransform::new(0.0, 1.5, 1.0), "{:?}", transform.target());
    }

    #[test]
    fn default_view_settles_on_target() {
        let mut transform = AnimatedTransform::default();

        for frame in 0..120 {
            transform.update((frame as f64) * 16.0, 60.0);
        }

        assert!(transform.current() == transform.target(), "{:?}", transform.current());
        assert!(transform.current().zoom == 0.0);
        assert!(!transform.update(120.0 * 16.0, 60.0));
    }

    #[test]
    fn zero_target_is_reached() {
        assert!(reached_target(1e-9, 0.0));
        assert!(!reached_target(1e-3, 0.0));
        assert!(reached_target(1.0, 1.000000001));
    }
}
