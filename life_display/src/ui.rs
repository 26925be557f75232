// ui.rs - Controls, canvas and input routing for the simulation

use eframe::egui;
use egui::{Color32, Pos2, Rect, Shape, Vec2};
use life_engine::palette::{self, Rgb};
use life_engine::{PATTERNS, Redraw, Simulation};

/// Pixels left empty between neighboring cells.
const CELL_GAP: f32 = 1.0;

pub struct LifeApp {
    sim: Simulation,
    selected_pattern: usize,
    // Cell shapes from the last repaint, rebuilt only when the simulation says so
    cell_shapes: Vec<Shape>,
    shapes_origin: Option<Pos2>,
}

impl LifeApp {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            selected_pattern: 0,
            cell_shapes: Vec::new(),
            shapes_origin: None,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut redraw = false;

        ui.horizontal(|ui| {
            let play_text = if self.sim.is_playing() { "⏸ Pause" } else { "▶ Play" };
            if ui.button(play_text).clicked() {
                redraw |= self.sim.toggle_playing().is_needed();
            }
            if ui.button("⏭ Step").clicked() {
                redraw |= self.sim.step().is_needed();
            }
            if ui.button("⏹ Clear").clicked() {
                redraw |= self.sim.clear().is_needed();
            }
            if ui.button("🎲 Random").clicked() {
                redraw |= self.sim.randomize().is_needed();
            }

            ui.separator();

            ui.label("Speed:");
            let config = self.sim.config();
            let range = config.min_speed..=config.max_speed;
            let mut speed = self.sim.speed();
            if ui.add(egui::Slider::new(&mut speed, range).suffix(" gen/sec")).changed() {
                redraw |= self.sim.set_speed(speed).is_needed();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                redraw |= self.sim.apply_pattern(self.selected_pattern).is_needed();
            }
        });

        let grid = self.sim.grid();
        let total = grid.rows() * grid.cols();
        let live = grid.population();
        let share = if total == 0 { 0.0 } else { live as f32 / total as f32 * 100.0 };
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.sim.generation()));
            ui.separator();
            ui.label(format!("Live cells: {live} ({share:.1}%)"));
            ui.separator();
            ui.label(format!("Grid: {} x {}", grid.cols(), grid.rows()));
        });

        redraw
    }

    fn rebuild_shapes(&mut self, origin: Pos2) {
        let size = self.sim.cell_size();
        let rounding = self.sim.config().cell_rounding;
        let side = (size - CELL_GAP).max(1.0);

        self.cell_shapes.clear();
        self.cell_shapes.extend(self.sim.grid().live_cells().map(|(row, col, value)| {
            let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
            let rect = Rect::from_min_size(min, Vec2::splat(side));
            Shape::rect_filled(rect, rounding, rgb(palette::cell_color(value)))
        }));
        self.shapes_origin = Some(origin);
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = ctx.input(|i| i.time) * 1000.0;
        let mut redraw = self.sim.tick(now_ms) == Redraw::Needed;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            redraw |= self.controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(rgb(palette::BACKGROUND)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let canvas = response.rect;

                redraw |= self
                    .sim
                    .resize_viewport(canvas.width(), canvas.height())
                    .is_needed();

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - canvas.min;
                        redraw |= self.sim.toggle_at(local.x, local.y).is_needed();
                    }
                }

                if redraw || self.shapes_origin != Some(canvas.min) {
                    self.rebuild_shapes(canvas.min);
                }
                painter.extend(self.cell_shapes.iter().cloned());
            });

        // Keep the frame loop alive even while paused
        ctx.request_repaint();
    }
}

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}
