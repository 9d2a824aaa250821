//! Interactive polygon mosaic viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Mosaic`] plus its
//! configuration and implements [`eframe::App`] to animate and paint it.
//! egui calls [`App::update`] once per display refresh; while running, each
//! call advances the mosaic by exactly one frame.

use eframe::App;
use glam::Vec2;
use mosaic_core::{
    animation::{AnimationMode, AnimationState, Phase},
    config::Config,
    geometry,
    mosaic::Mosaic,
    render::{FragmentColor, RenderSink},
    types::Polygon,
};
use rand::rngs::StdRng;

/// Shape of the polygon that gets fragmented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedShape {
    Square,
    Hexagon,
    Dodecagon,
}

impl SeedShape {
    /// Builds the seed polygon centered on the world origin.
    ///
    /// `size` is the side length of the square, or the diameter of the
    /// circumscribed circle for the regular shapes.
    pub fn polygon(self, size: f32) -> Polygon {
        match self {
            SeedShape::Square => geometry::square(Vec2::splat(-size * 0.5), size),
            SeedShape::Hexagon => geometry::regular_polygon(Vec2::ZERO, size * 0.5, 6),
            SeedShape::Dodecagon => geometry::regular_polygon(Vec2::ZERO, size * 0.5, 12),
        }
    }
}

/// Startup parameters for [`Viewer::new`].
pub struct ViewerOptions {
    pub cfg: Config,
    pub mode: AnimationMode,
    pub seed_size: f32,
    pub rng: StdRng,
}

/// World-to-screen mapping: zoom around the drawing area's center, then
/// pan in pixels. World y points up.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Camera {
    zoom: f32,
    pan: egui::Vec2,
}

impl Camera {
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }
}

/// [`RenderSink`] that paints fragments as filled, outlined convex shapes.
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    camera: Camera,
    rect: egui::Rect,
    stroke: egui::Stroke,
}

impl RenderSink for PainterSink<'_> {
    fn draw_polygon(&mut self, polygon: &[Vec2], color: FragmentColor) {
        let points: Vec<egui::Pos2> = polygon
            .iter()
            .map(|&p| self.camera.world_to_screen(p, self.rect))
            .collect();
        let [r, g, b] = color.to_rgb();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgb(r, g, b),
            self.stroke,
        ));
    }
}

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `mosaic` - Fragments, their colors, and the animation state.
/// - `cfg` - Subdivision and animation constants. Subdivision fields apply
///   on the next regeneration; animation fields apply immediately.
/// - `mode` - Animation mode selected in the UI.
/// - `seed_shape` / `seed_size` - Seed polygon used on regeneration.
/// - `rng` - Random source for subdivision, velocities and colors.
/// - `running` - Whether the animation advances every frame.
/// - `camera` - Zoom and pan.
/// - `frames` - Frames advanced since the last (re)generation.
/// - `outline` - Whether fragments get a black outline.
pub struct Viewer {
    mosaic: Mosaic,
    cfg: Config,
    mode: AnimationMode,
    seed_shape: SeedShape,
    seed_size: f32,

    rng: StdRng,

    running: bool,
    camera: Camera,
    frames: u64,
    outline: bool,
}

impl Viewer {
    /// Creates a viewer with a freshly fragmented square seed.
    ///
    /// The animation starts running so the mosaic moves right away.
    pub fn new(options: ViewerOptions) -> Self {
        let ViewerOptions {
            cfg,
            mode,
            seed_size,
            mut rng,
        } = options;
        let seed_shape = SeedShape::Square;
        let mosaic = Mosaic::generate(seed_shape.polygon(seed_size), mode, &cfg, &mut rng);

        Self {
            mosaic,
            cfg,
            mode,
            seed_shape,
            seed_size,
            rng,
            running: true,
            camera: Camera {
                zoom: 1.0,
                pan: egui::vec2(0.0, 0.0),
            },
            frames: 0,
            outline: true,
        }
    }

    /// Fragments the current seed shape again with the current config.
    ///
    /// Keeps camera and run state; resets the frame counter.
    fn regenerate(&mut self) {
        self.mosaic = Mosaic::generate(
            self.seed_shape.polygon(self.seed_size),
            self.mode,
            &self.cfg,
            &mut self.rng,
        );
        self.frames = 0;
    }

    /// Switches the animation mode, keeping the current fragments.
    fn set_mode(&mut self, mode: AnimationMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.mosaic.set_mode(mode, &self.cfg, &mut self.rng);
        self.frames = 0;
    }

    /// Advances the animation by a single frame.
    fn step_once(&mut self) {
        self.mosaic.advance(&self.cfg);
        self.frames += 1;
    }

    fn state_label(&self) -> String {
        match self.mosaic.state() {
            AnimationState::ExpandReturn {
                phase: Phase::Expanding,
                frame,
            } => format!("expanding ({frame}/{})", self.cfg.animation_duration),
            AnimationState::ExpandReturn {
                phase: Phase::Returning,
                ..
            } => "returning".to_owned(),
            AnimationState::ForceField { time } => format!("time = {time:.2}"),
        }
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Regenerate").clicked() {
                    self.regenerate();
                }

                if ui.button("Rest").clicked() {
                    self.mosaic.restart();
                    self.frames = 0;
                }

                ui.separator();
                ui.checkbox(&mut self.outline, "Outline");

                ui.separator();
                ui.add(egui::Slider::new(&mut self.camera.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (fragment count, frame count, state).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(self.state_label());
                ui.separator();
                ui.label(format!("frames = {}", self.frames));
                ui.label(format!("fragments = {}", self.mosaic.len()));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Animation mode");
                let mut mode = self.mode;
                ui.radio_value(&mut mode, AnimationMode::ExpandReturn, "Expand / return");
                ui.radio_value(&mut mode, AnimationMode::ForceField, "Force field");
                self.set_mode(mode);

                ui.separator();
                ui.label("Subdivision (applies on regenerate)");
                Self::labeled_drag_f32(
                    ui,
                    "min_side_length:",
                    &mut self.cfg.min_side_length,
                    1.0..=500.0,
                    1.0,
                );
                Self::labeled_drag_u32(ui, "max_depth:", &mut self.cfg.max_depth, 0..=8, 0.05);
                Self::labeled_drag_usize(
                    ui,
                    "min_fragments:",
                    &mut self.cfg.min_fragments,
                    1..=50,
                    0.1,
                );
                Self::labeled_drag_usize(
                    ui,
                    "max_fragments:",
                    &mut self.cfg.max_fragments,
                    1..=50,
                    0.1,
                );
                self.cfg.max_fragments = self.cfg.max_fragments.max(self.cfg.min_fragments);
                Self::labeled_drag_f32(ui, "seed size:", &mut self.seed_size, 10.0..=2000.0, 1.0);

                ui.separator();
                ui.label("Expand / return");
                Self::labeled_drag_f32(
                    ui,
                    "animation_speed:",
                    &mut self.cfg.animation_speed,
                    0.01..=20.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "return_speed:",
                    &mut self.cfg.return_speed,
                    0.001..=20.0,
                    0.01,
                );
                Self::labeled_drag_u32(
                    ui,
                    "animation_duration:",
                    &mut self.cfg.animation_duration,
                    0..=600,
                    1.0,
                );

                ui.separator();
                ui.label("Force field");
                Self::labeled_drag_f32(
                    ui,
                    "max_distance:",
                    &mut self.cfg.max_distance,
                    0.0..=500.0,
                    0.5,
                );
                Self::labeled_drag_f32(ui, "time_step:", &mut self.cfg.time_step, 0.001..=1.0, 0.005);
                Self::labeled_drag_f32(
                    ui,
                    "neighbor_threshold:",
                    &mut self.cfg.neighbor_threshold,
                    0.0..=500.0,
                    0.5,
                );
                Self::labeled_drag_f32(ui, "weight_main:", &mut self.cfg.weight_main, -5.0..=5.0, 0.05);
                Self::labeled_drag_f32(
                    ui,
                    "weight_neighbor:",
                    &mut self.cfg.weight_neighbor,
                    -5.0..=5.0,
                    0.05,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Builds the small floating toolbar for choosing the seed shape.
    fn ui_toolbar(&mut self, ctx: &egui::Context) {
        egui::Area::new("toolbar".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 100.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 32))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            let shapes = [
                                (SeedShape::Square, "■ Square"),
                                (SeedShape::Hexagon, "⬢ Hexagon"),
                                (SeedShape::Dodecagon, "● Dodecagon"),
                            ];
                            for (shape, label) in shapes {
                                if ui.selectable_label(self.seed_shape == shape, label).clicked()
                                    && self.seed_shape != shape
                                {
                                    self.seed_shape = shape;
                                    self.regenerate();
                                }
                            }
                        });
                    });
            });
    }

    /// Builds the central panel where fragments are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.camera.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.camera.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.camera.zoom = (self.camera.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.camera.world_to_screen(world_before, rect);
                self.camera.pan += pointer_screen - screen_after;
            }

            // One animation frame per display refresh.
            if self.running {
                self.step_once();
                ctx.request_repaint();
            }

            let stroke = if self.outline {
                egui::Stroke::new(2.0, egui::Color32::BLACK)
            } else {
                egui::Stroke::NONE
            };
            let mut sink = PainterSink {
                painter: &painter,
                camera: self.camera,
                rect,
                stroke,
            };
            self.mosaic.render(&mut sink);
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
        self.ui_toolbar(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::animation::MovingFragment;
    use rand::SeedableRng;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn test_viewer() -> Viewer {
        let cfg = Config {
            max_depth: 1,
            max_fragments: 4,
            ..Config::default()
        };
        Viewer::new(ViewerOptions {
            cfg,
            mode: AnimationMode::ExpandReturn,
            seed_size: 200.0,
            rng: StdRng::seed_from_u64(99),
        })
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let camera = Camera {
            zoom: 2.0,
            pan: egui::vec2(15.0, -7.0),
        };
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-5;

        for p in world_points {
            let screen = camera.world_to_screen(p, rect);
            let back = camera.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn world_origin_maps_to_rect_center() {
        let camera = Camera {
            zoom: 3.0,
            pan: egui::vec2(0.0, 0.0),
        };
        let rect = test_rect();
        assert_eq!(camera.world_to_screen(Vec2::ZERO, rect), rect.center());

        // World y points up, screen y points down.
        let up = camera.world_to_screen(Vec2::new(0.0, 1.0), rect);
        assert!(up.y < rect.center().y);
    }

    #[test]
    fn seed_shapes_are_centered_on_origin() {
        for shape in [SeedShape::Square, SeedShape::Hexagon, SeedShape::Dodecagon] {
            let poly = shape.polygon(100.0);
            let c = geometry::centroid(&poly);
            assert!(c.length() < 1e-3, "{shape:?} centroid {c:?}");
        }
        assert_eq!(SeedShape::Hexagon.polygon(100.0).len(), 6);
    }

    #[test]
    fn step_once_advances_frames_and_moves_fragments() {
        let mut viewer = test_viewer();
        assert_eq!(viewer.frames, 0);

        viewer.step_once();

        assert_eq!(viewer.frames, 1);
        assert!(viewer.mosaic.fragments().iter().all(|f| !f.is_at_rest()));
    }

    #[test]
    fn regenerate_resets_frame_counter() {
        let mut viewer = test_viewer();
        viewer.step_once();
        viewer.step_once();

        viewer.seed_shape = SeedShape::Hexagon;
        viewer.regenerate();

        assert_eq!(viewer.frames, 0);
        assert!(!viewer.mosaic.is_empty());
        assert!(viewer.mosaic.fragments().iter().all(MovingFragment::is_at_rest));
        assert_eq!(viewer.mosaic.seed().len(), 6);
    }

    #[test]
    fn set_mode_switches_animation_state() {
        let mut viewer = test_viewer();
        viewer.step_once();

        viewer.set_mode(AnimationMode::ForceField);

        assert_eq!(viewer.mode, AnimationMode::ForceField);
        assert_eq!(*viewer.mosaic.state(), AnimationState::ForceField { time: 0.0 });
        assert_eq!(viewer.frames, 0);
        assert_eq!(viewer.state_label(), "time = 0.00");
    }

    #[test]
    fn state_label_tracks_expand_return_phase() {
        let mut viewer = test_viewer();
        assert_eq!(viewer.state_label(), "expanding (0/5)");

        for _ in 0..viewer.cfg.animation_duration {
            viewer.step_once();
        }
        assert_eq!(viewer.state_label(), "returning");
    }
}
