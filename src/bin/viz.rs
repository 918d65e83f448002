use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use tidal_love::love::{love_number, Shell};
use tidal_love::models::{self, ValidationConfig};

fn main() -> eframe::Result {
    let points = ValidationConfig::default().points;
    let profiles = models::cases(points)
        .and_then(|cases| {
            cases
                .into_iter()
                .map(|c| {
                    let shells = c.profile.integrate()?;
                    Ok(Integrated { name: c.name, expected: c.expected, shells })
                })
                .collect::<tidal_love::Result<Vec<_>>>()
        })
        .unwrap_or_else(|e| {
            eprintln!("integration failed: {}", e);
            Vec::new()
        });

    let app = LoveViz { profiles };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Tidal Love Number", options, Box::new(|_| Ok(Box::new(app))))
}

struct Integrated {
    name: String,
    expected: f64,
    shells: Vec<Shell>,
}

struct LoveViz {
    profiles: Vec<Integrated>,
}

impl LoveViz {
    /// Plot one quantity against normalized radius, one line per profile.
    fn radial_plot(&self, ui: &mut egui::Ui, id: &str, w: f32, h: f32, f: fn(&Shell, &Shell, &Shell) -> f64) {
        Plot::new(id)
            .width(w)
            .height(h)
            .x_axis_label("r / R")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for p in &self.profiles {
                    let (Some(core), Some(surface)) = (p.shells.first(), p.shells.last()) else {
                        continue;
                    };
                    let step = (p.shells.len() / 2000).max(1);
                    let points: PlotPoints = p
                        .shells
                        .iter()
                        .step_by(step)
                        .map(|s| [s.radius / surface.radius, f(s, core, surface)])
                        .collect();
                    plot_ui.line(Line::new(p.name.as_str(), points));
                }
            });
    }
}

impl eframe::App for LoveViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Love number k2");
            for p in &self.profiles {
                let k2 = p.shells.last().and_then(|s| love_number(s.eta).ok());
                ui.label(format!(
                    "{}:  k2 = {}  |  analytic {:.6}  |  N = {}",
                    p.name,
                    k2.map_or("n/a".to_string(), |k| format!("{:.6}", k)),
                    p.expected,
                    p.shells.len(),
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Density / central density");
                    self.radial_plot(ui, "density", half_w, half_h, |s, core, _| s.density / core.density);
                });
                ui.vertical(|ui| {
                    ui.label("Mean density / surface mean density");
                    self.radial_plot(ui, "mean_density", half_w, half_h, |s, _, surf| {
                        s.mean_density / surf.mean_density
                    });
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Tidal response eta");
                    self.radial_plot(ui, "eta", half_w, half_h, |s, _, _| s.eta);
                });
                ui.vertical(|ui| {
                    ui.label("Enclosed mass fraction");
                    self.radial_plot(ui, "mass", half_w, half_h, |s, _, surf| s.mass / surf.mass);
                });
            });
        });
    }
}
