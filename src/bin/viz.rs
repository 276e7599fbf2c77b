use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use egui::{Color32, Pos2, RichText, Stroke};
use egui_plot::{Line, Plot, PlotPoints, Points};

use satellite_orbit_sim::config::AppConfig;
use satellite_orbit_sim::display::Viewport;
use satellite_orbit_sim::io::{altitude_sweep, Report, SweepRow};
use satellite_orbit_sim::logging;
use satellite_orbit_sim::presets;
use satellite_orbit_sim::satellite::{ParamInput, Satellite};
use satellite_orbit_sim::sim::{Animator, Command, Controls, Frame, LatestFrame, RenderLoop};

const EARTH_BLUE: Color32 = Color32::from_rgb(100, 149, 237);
const LAND_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
const SAT_RED: Color32 = Color32::from_rgb(220, 20, 60);
const SAT_YELLOW: Color32 = Color32::from_rgb(255, 215, 0);
const ORBIT_GRAY: Color32 = Color32::from_rgb(128, 128, 128);
const LIGHT_BLUE: Color32 = Color32::from_rgb(173, 216, 230);

#[derive(Parser, Debug)]
#[command(name = "orbit-viz", version, about = "Interactive satellite orbit viewer")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.display.window_width as f32 + 340.0,
                config.display.window_height as f32,
            ])
            .with_title("Satellite Orbit Simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "Satellite Orbit Simulator",
        options,
        Box::new(move |cc| match OrbitViz::new(cc, config) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                log::error!("failed to start viewer: {}", e);
                Err(e.into())
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}

struct OrbitViz {
    config: AppConfig,
    satellite: Satellite,
    report: Report,
    controls: Controls,

    mass_input: ParamInput,
    altitude_input: ParamInput,
    mass_text: String,
    altitude_text: String,
    input_error: Option<String>,

    render: RenderLoop,
    latest: LatestFrame,
    viewport: Viewport,

    sweep: Vec<SweepRow>,
}

impl OrbitViz {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let satellite = config.satellite.clone();
        let report = Report::build(&satellite)?;
        let viewport = Viewport::from_config(&config.display);

        let latest = LatestFrame::new();
        let ctx = cc.egui_ctx.clone();
        let sink = latest.sink_with(move || ctx.request_repaint());
        let render = RenderLoop::spawn(satellite.clone(), viewport, config.animation.clone(), sink)?;

        let bounds = config.bounds;
        let sweep = altitude_sweep(
            satellite.mass_kg,
            bounds.altitude.min,
            bounds.altitude.max,
            200,
        )?;

        Ok(Self {
            mass_input: ParamInput::new("mass", bounds.mass, satellite.mass_kg),
            altitude_input: ParamInput::new("altitude", bounds.altitude, satellite.altitude_km),
            mass_text: format!("{:.0}", satellite.mass_kg),
            altitude_text: format!("{:.0}", satellite.altitude_km),
            input_error: None,
            controls: Controls::new(bounds),
            config,
            satellite,
            report,
            render,
            latest,
            viewport,
            sweep,
        })
    }

    /// Push a new parameter set to the results panel and the render loop.
    fn apply_satellite(&mut self, sat: Satellite, sync_text: bool) {
        match Report::build(&sat) {
            Ok(report) => {
                self.mass_input.set(sat.mass_kg);
                self.altitude_input.set(sat.altitude_km);
                if sync_text {
                    self.mass_text = format!("{:.0}", sat.mass_kg);
                    self.altitude_text = format!("{:.0}", sat.altitude_km);
                }
                self.report = report;
                self.satellite = sat.clone();
                self.send(Command::SetSatellite(sat));
            }
            Err(e) => log::warn!("ignoring parameters: {}", e),
        }
    }

    fn send(&self, cmd: Command) {
        if let Err(e) = self.render.send(cmd) {
            log::error!("{}", e);
        }
    }

    fn current_frame(&self) -> Frame {
        self.latest.get().unwrap_or_else(|| {
            Animator::new(self.config.animation.clone()).frame(&self.report.params, &self.viewport)
        })
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (toggle, clear, up, down, left, right, faster, slower) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Space),
                i.key_down(egui::Key::ArrowUp),
                i.key_down(egui::Key::ArrowDown),
                i.key_down(egui::Key::ArrowLeft),
                i.key_down(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
            )
        });

        if toggle {
            self.send(Command::Toggle);
        }
        if clear {
            self.send(Command::ClearTrail);
        }
        if faster {
            self.send(Command::Faster);
        }
        if slower {
            self.send(Command::Slower);
        }

        let mut sat = self.satellite.clone();
        if up {
            self.controls.altitude_up(&mut sat);
        }
        if down {
            self.controls.altitude_down(&mut sat);
        }
        if right {
            self.controls.mass_up(&mut sat);
        }
        if left {
            self.controls.mass_down(&mut sat);
        }
        if sat != self.satellite {
            self.apply_satellite(sat, true);
        }
    }

    fn control_panel(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        ui.heading("Satellite Parameters");
        ui.add_space(4.0);

        let mut next = self.satellite.clone();
        let mut slider_moved = false;

        let mass_range = self.mass_input.range();
        ui.label("Satellite mass (kg)");
        ui.horizontal(|ui| {
            slider_moved |= ui
                .add(
                    egui::Slider::new(&mut next.mass_kg, mass_range.min..=mass_range.max)
                        .logarithmic(true)
                        .show_value(false),
                )
                .changed();
            let resp = ui.add(egui::TextEdit::singleline(&mut self.mass_text).desired_width(90.0));
            if resp.changed() {
                match self.mass_input.apply_text(&self.mass_text) {
                    Ok(v) => {
                        next.mass_kg = v;
                        self.input_error = None;
                    }
                    Err(e) => self.input_error = Some(e.to_string()),
                }
            }
            if resp.lost_focus() {
                self.mass_text = format!("{:.0}", self.mass_input.value());
            }
        });

        let alt_range = self.altitude_input.range();
        ui.label("Altitude (km)");
        ui.horizontal(|ui| {
            slider_moved |= ui
                .add(
                    egui::Slider::new(&mut next.altitude_km, alt_range.min..=alt_range.max)
                        .logarithmic(true)
                        .show_value(false),
                )
                .changed();
            let resp =
                ui.add(egui::TextEdit::singleline(&mut self.altitude_text).desired_width(90.0));
            if resp.changed() {
                match self.altitude_input.apply_text(&self.altitude_text) {
                    Ok(v) => {
                        next.altitude_km = v;
                        self.input_error = None;
                    }
                    Err(e) => self.input_error = Some(e.to_string()),
                }
            }
            if resp.lost_focus() {
                self.altitude_text = format!("{:.0}", self.altitude_input.value());
            }
        });

        if let Some(err) = &self.input_error {
            ui.colored_label(Color32::from_rgb(231, 76, 60), err.as_str());
        }

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for p in presets::ALL {
                if ui.button(p.name).on_hover_text(p.purpose).clicked() {
                    let mut sat = Satellite::from(&p);
                    sat.clamp_to(&self.config.bounds);
                    next = sat;
                    slider_moved = true;
                }
            }
        });

        if next != self.satellite {
            self.apply_satellite(next, slider_moved);
        }

        ui.separator();
        ui.horizontal(|ui| {
            let label = if frame.running { "Stop Simulation" } else { "Start Simulation" };
            if ui.button(label).clicked() {
                self.send(Command::Toggle);
            }
            if ui.button("Clear Trail").clicked() {
                self.send(Command::ClearTrail);
            }
        });
        ui.horizontal(|ui| {
            if ui.button("-").clicked() {
                self.send(Command::Slower);
            }
            ui.label(format!("Speed: {:.1}x", frame.speed));
            if ui.button("+").clicked() {
                self.send(Command::Faster);
            }
        });

        ui.separator();
        ui.heading("Calculated Results");
        let p = &self.report.params;
        let class_color = {
            let c = self.report.profile.color;
            Color32::from_rgb(c[0], c[1], c[2])
        };
        egui::Grid::new("results").num_columns(2).show(ui, |ui| {
            ui.label("Orbital velocity:");
            ui.label(RichText::new(format!("{:.0} m/s", p.velocity_ms)).strong().color(LIGHT_BLUE));
            ui.end_row();
            ui.label("Orbital period:");
            ui.label(RichText::new(format!("{:.2} hours", p.period_hours())).strong().color(LIGHT_BLUE));
            ui.end_row();
            ui.label("Centripetal force:");
            ui.label(RichText::new(format!("{:.0} N", p.centripetal_force_n)).strong().color(LIGHT_BLUE));
            ui.end_row();
            ui.label("Orbit type:");
            ui.label(RichText::new(&self.report.orbit_label).strong().color(class_color));
            ui.end_row();
        });

        ui.separator();
        ui.heading("Analysis");
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.monospace(self.report.analysis.to_string());
        });
    }

    fn charts(&self, ui: &mut egui::Ui) {
        let p = &self.report.params;
        let half_w = ui.available_width() / 2.0 - 8.0;
        let height = ui.available_height() - 20.0;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Velocity (km/s)");
                let points: PlotPoints = self
                    .sweep
                    .iter()
                    .map(|r| [r.altitude_km.log10(), r.velocity_kms])
                    .collect();
                Plot::new("velocity")
                    .width(half_w)
                    .height(height)
                    .x_axis_label("Altitude (log10 km)")
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new("Velocity", points));
                        plot_ui.points(
                            Points::new("Current", vec![[p.altitude_km.log10(), p.velocity_kms()]])
                                .radius(5.0),
                        );
                    });
            });

            ui.vertical(|ui| {
                ui.label("Period (hours)");
                let points: PlotPoints = self
                    .sweep
                    .iter()
                    .map(|r| [r.altitude_km.log10(), r.period_hours])
                    .collect();
                Plot::new("period")
                    .width(half_w)
                    .height(height)
                    .x_axis_label("Altitude (log10 km)")
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new("Period", points));
                        plot_ui.points(
                            Points::new("Current", vec![[p.altitude_km.log10(), p.period_hours()]])
                                .radius(5.0),
                        );
                    });
            });
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        let vp = Viewport::adaptive(rect.width() as f64, rect.height() as f64, &self.config.display);
        if vp != self.viewport {
            self.viewport = vp;
            self.send(Command::SetViewport(vp));
        }

        painter.rect_filled(rect, 0.0, Color32::BLACK);
        let c = vp.center();
        let center = rect.min + egui::vec2(c.x as f32, c.y as f32);
        let to_screen = |off: &nalgebra::Vector2<f64>| -> Pos2 {
            center + egui::vec2(off.x as f32, off.y as f32)
        };

        // Earth
        let earth_r = vp.earth_radius as f32;
        let k = earth_r / 60.0;
        painter.circle_filled(center, earth_r, EARTH_BLUE);
        for (dx, dy, r) in [(-15.0, -10.0, 8.0), (20.0, 15.0, 6.0), (-10.0, 25.0, 5.0)] {
            painter.circle_filled(
                center + egui::vec2(dx * k, dy * k),
                (r * k).max(2.0),
                LAND_GREEN,
            );
        }
        painter.circle_stroke(center, earth_r, Stroke::new(2.0, Color32::WHITE));

        // Orbit path
        painter.circle_stroke(center, frame.display_radius as f32, Stroke::new(1.0, ORBIT_GRAY));

        // Trail, fading toward the tail
        let n = frame.trail.len();
        for (i, point) in frame.trail.iter().enumerate().skip(1) {
            let alpha = i as f32 / n as f32;
            let color = Color32::from_rgb((255.0 * alpha) as u8, (200.0 * alpha) as u8, 0);
            painter.circle_filled(to_screen(point), (3.0 * alpha).max(1.0), color);
        }

        // Satellite and velocity vector
        let sat = to_screen(&frame.satellite);
        let size = frame.satellite_size as f32;
        painter.circle_filled(sat, size + 2.0, SAT_RED);
        painter.circle_filled(sat, size, SAT_YELLOW);
        painter.line_segment(
            [sat, to_screen(&frame.velocity_tip)],
            Stroke::new(2.0, Color32::WHITE),
        );

        // Overlay
        let p = &frame.params;
        painter.text(
            rect.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Altitude: {:.0} km\nVelocity: {:.0} m/s\nPeriod: {:.2} h\nType: {}\nDisplay scale: {:.1}x",
                p.altitude_km,
                p.velocity_ms,
                p.period_hours(),
                self.report.orbit_label,
                frame.display_radius / vp.earth_radius,
            ),
            egui::FontId::monospace(13.0),
            Color32::WHITE,
        );

        let (status, status_color) = if frame.running {
            ("RUNNING", LAND_GREEN)
        } else {
            ("PAUSED", SAT_RED)
        };
        painter.text(
            rect.left_bottom() + egui::vec2(10.0, -30.0),
            egui::Align2::LEFT_BOTTOM,
            format!("Simulation: {}   Speed: {:.1}x", status, frame.speed),
            egui::FontId::proportional(14.0),
            status_color,
        );
        painter.text(
            rect.left_bottom() + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            format!(
                "Earth radius: {:.0}px | Orbit: {:.0}px",
                vp.earth_radius, frame.display_radius
            ),
            egui::FontId::proportional(12.0),
            ORBIT_GRAY,
        );
        painter.text(
            rect.right_bottom() + egui::vec2(-10.0, -10.0),
            egui::Align2::RIGHT_BOTTOM,
            "Enter: start/stop  ↑/↓: altitude  ←/→: mass  Space: clear trail  +/-: speed",
            egui::FontId::proportional(12.0),
            LIGHT_BLUE,
        );
        painter.text(
            rect.right_top() + egui::vec2(-10.0, 10.0),
            egui::Align2::RIGHT_TOP,
            self.report.analysis.headline,
            egui::FontId::proportional(14.0),
            SAT_YELLOW,
        );
    }
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        let frame = self.current_frame();

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| self.control_panel(ui, &frame));

        egui::TopBottomPanel::bottom("charts")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| self.charts(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.canvas(ui, &frame));
    }
}
