use anyhow::Result;
use cgmath::{Point3, Vector3};

use ember_engine::input::{Action, Key, Modifiers};
use ember_engine::{Application, Context, WinitBackend};

use crate::camera::Camera;
use crate::figure::Figure;
use crate::renderer::{CameraUniform, FigureRenderer, InstanceRaw};
use crate::transform::TransformTree;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.06,
    b: 0.08,
    a: 1.0,
};

type Ctx = Context<WinitBackend>;

/// Animated figure viewed by a zoomable camera.
pub struct Scene {
    tree: TransformTree,
    figure: Figure,
    camera: Camera,
    light_dir: Vector3<f32>,
    renderer: Option<FigureRenderer>,
    instances: Vec<InstanceRaw>,

    anim_time: f32,
    paused: bool,
    cursor_visible: bool,
}

impl Scene {
    pub fn new() -> Self {
        let mut tree = TransformTree::new();
        let figure = Figure::build(&mut tree);
        figure.animate(&mut tree, 0.0);
        log::debug!(
            "figure rig: {} nodes, {} parts, {} under the root",
            tree.len(),
            figure.parts().len(),
            tree.children_of(figure.root()).count(),
        );

        Self {
            tree,
            figure,
            camera: Camera::new(Point3::new(0.0, 1.0, 7.0), Point3::new(0.0, 0.0, 0.0)),
            light_dir: Vector3::new(-0.4, -1.0, -0.6),
            renderer: None,
            instances: Vec::new(),
            anim_time: 0.0,
            paused: false,
            cursor_visible: true,
        }
    }

    fn rebuild_instances(&mut self) {
        self.instances.clear();
        self.instances.extend(
            self.figure
                .parts()
                .iter()
                .map(|part| InstanceRaw::new(part.model_matrix(&self.tree), part.color)),
        );
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Application<WinitBackend> for Scene {
    fn init(&mut self, ctx: &mut Ctx) -> Result<()> {
        let backend = ctx.backend_mut();
        backend.set_clear_color(CLEAR_COLOR);

        let gpu = backend.gpu();
        let info = gpu.adapter_info();
        log::info!(
            "scene ready on {} ({:?}), {:?}, {}x msaa",
            info.name,
            info.backend,
            gpu.surface_format(),
            gpu.sample_count(),
        );

        self.renderer = Some(FigureRenderer::new(gpu));
        Ok(())
    }

    fn update(&mut self, _ctx: &mut Ctx, dt: f64) -> Result<()> {
        if !self.paused {
            self.anim_time += dt as f32;
        }
        self.figure.animate(&mut self.tree, self.anim_time);
        self.rebuild_instances();
        Ok(())
    }

    fn render(&mut self, ctx: &mut Ctx, _dt: f64) -> Result<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };

        let camera = CameraUniform::new(
            self.camera.view_projection(ctx.aspect_ratio()),
            self.camera.eye,
            self.light_dir,
        );
        let instances = &self.instances;

        ctx.backend_mut().draw(|gpu, frame| {
            renderer.render(gpu, frame, &camera, instances, CLEAR_COLOR);
            Ok(())
        })
    }

    fn shutdown(&mut self, ctx: &mut Ctx) {
        self.renderer = None;
        log::info!(
            "scene shut down after {:.1}s ({} perf records)",
            ctx.time(),
            ctx.perf_log().total_recorded(),
        );
    }

    fn on_frame_buffer_resize(&mut self, ctx: &mut Ctx, width: u32, height: u32) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(ctx.backend().gpu().device(), width, height);
        }
    }

    fn on_key(&mut self, ctx: &mut Ctx, key: Key, action: Action, _modifiers: Modifiers) {
        if action != Action::Press {
            return;
        }

        match key {
            Key::Escape => ctx.quit(),
            Key::Space => {
                self.paused = !self.paused;
                log::info!("animation {}", if self.paused { "paused" } else { "resumed" });
            }
            Key::C => {
                self.cursor_visible = !self.cursor_visible;
                ctx.set_cursor_visible(self.cursor_visible);
            }
            Key::P => match ctx.perf_log().latest() {
                Some(metrics) => log::info!("perf: {metrics}"),
                None => log::info!("perf: no samples yet"),
            },
            _ => {}
        }
    }

    fn on_mouse_scroll(&mut self, _ctx: &mut Ctx, _x: f64, y: f64) {
        self.camera.zoom(y as f32);
    }
}
