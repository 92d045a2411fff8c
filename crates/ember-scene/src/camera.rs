use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

/// cgmath produces OpenGL clip space (z in -1..1); wgpu expects z in 0..1.
#[rustfmt::skip]
const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 30.0;
/// Distance change per scroll line, as a fraction of the current distance.
const ZOOM_STEP: f32 = 0.1;

/// Look-at camera with a perspective projection.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fovy: cgmath::Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            fovy: cgmath::Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn view(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self, aspect: f32) -> Matrix4<f32> {
        self.projection(aspect) * self.view()
    }

    pub fn distance(&self) -> f32 {
        (self.eye - self.target).magnitude()
    }

    /// Moves the eye along the view ray. Positive `lines` move closer.
    pub fn zoom(&mut self, lines: f32) {
        let offset = self.eye - self.target;
        let distance = offset.magnitude();
        if distance <= f32::EPSILON {
            return;
        }

        let wanted = distance * (1.0 - ZOOM_STEP * lines);
        let clamped = wanted.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.eye = self.target + offset.normalize_to(clamped);
    }
}
