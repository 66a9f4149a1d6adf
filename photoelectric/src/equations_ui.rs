//! Equations sidebar for the photoelectric simulator
//!
//! Shows the photoelectric relations evaluated for the current experiment,
//! followed by the general equations with the one governing the current
//! outcome highlighted.

use egui::{Color32, Context, FontFamily, FontId, RichText};

use crate::catalog::MaterialWorkFunction;
use crate::presenter::{format_ev, SimulatorReadout};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

const SECTION_COLOR: Color32 = Color32::from_rgb(255, 200, 100);
const ACTIVE_COLOR: Color32 = Color32::from_rgb(255, 215, 0);

pub const EINSTEIN: &str = "Einstein's Equation";
pub const THRESHOLD: &str = "Threshold Frequency";

/// The equation that explains the current result: Einstein's equation while
/// electrons are emitted, the threshold condition otherwise
pub fn governing_equation(readout: &SimulatorReadout) -> &'static str {
    if readout.result.can_emit {
        EINSTEIN
    } else {
        THRESHOLD
    }
}

/// Relations with the current values substituted, as (relation, value) rows
pub fn live_relations(
    readout: &SimulatorReadout,
    material: &MaterialWorkFunction,
) -> Vec<(String, String)> {
    let mut rows = vec![
        ("f".to_string(), format!("{} THz", readout.frequency)),
        (
            format!("W ({})", material.label),
            format_ev(material.work_function_ev),
        ),
        ("E = h·f".to_string(), readout.photon_energy.clone()),
        (
            "f₀ = W / h".to_string(),
            format!("{} THz", readout.threshold_frequency),
        ),
    ];

    if readout.result.can_emit {
        rows.push(("K_max = E - W".to_string(), readout.kinetic_energy.clone()));
    } else {
        rows.push(("f < f₀".to_string(), "no emission".to_string()));
    }
    rows
}

/// Draw the equations sidebar on the right edge of the window
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
    current: Option<(&SimulatorReadout, &MaterialWorkFunction)>,
) {
    let active = current.map(|(readout, _)| governing_equation(readout));

    egui::SidePanel::right("equations_panel")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some((readout, material)) = current {
                    ui.label(RichText::new("This experiment").strong().color(SECTION_COLOR));
                    egui::Grid::new("live_relations")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for (relation, value) in live_relations(readout, material) {
                                ui.label(RichText::new(relation).monospace());
                                ui.label(RichText::new(value).color(Color32::WHITE));
                                ui.end_row();
                            }
                        });
                    ui.add_space(10.0);
                }

                let header = RichText::new("Equations").strong().color(SECTION_COLOR);
                egui::CollapsingHeader::new(header)
                    .default_open(true)
                    .show(ui, |ui| {
                        for eq in equations {
                            draw_equation(ui, eq, active == Some(eq.name));
                            ui.add_space(6.0);
                        }
                    });

                let header = RichText::new("Variables").strong().color(SECTION_COLOR);
                egui::CollapsingHeader::new(header)
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::Grid::new("variables_grid")
                            .num_columns(2)
                            .spacing([10.0, 4.0])
                            .show(ui, |ui| {
                                for (symbol, meaning) in variables {
                                    ui.label(
                                        RichText::new(*symbol)
                                            .color(Color32::from_rgb(150, 255, 150))
                                            .font(FontId::new(14.0, FontFamily::Monospace)),
                                    );
                                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                                    ui.end_row();
                                }
                            });
                    });
            });
        });
}

fn draw_equation(ui: &mut egui::Ui, eq: &Equation, active: bool) {
    let frame = egui::Frame::group(ui.style());
    let frame = if active {
        frame.stroke(egui::Stroke::new(1.5, ACTIVE_COLOR))
    } else {
        frame
    };

    frame.show(ui, |ui| {
        let name = RichText::new(eq.name).strong();
        ui.label(if active { name.color(ACTIVE_COLOR) } else { name.color(Color32::WHITE) });
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

// ============================================
// Photoelectric Equations
// ============================================

pub const PHOTOELECTRIC_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Photon Energy",
        formula: "E = h·f",
        description: "Energy carried by one light quantum",
    },
    Equation {
        name: "Wave Relation",
        formula: "f = c / λ",
        description: "Frequency from wavelength",
    },
    Equation {
        name: EINSTEIN,
        formula: "K_max = h·f - W",
        description: "Kinetic energy of the fastest electrons",
    },
    Equation {
        name: THRESHOLD,
        formula: "f₀ = W / h",
        description: "No emission below f₀, whatever the intensity",
    },
    Equation {
        name: "Stopping Potential",
        formula: "e·V₀ = K_max",
        description: "Reverse voltage that halts the photocurrent",
    },
];

pub const PHOTOELECTRIC_VARIABLES: &[(&str, &str)] = &[
    ("h", "Planck constant (6.626×10⁻³⁴ J·s)"),
    ("e", "Elementary charge (1.602×10⁻¹⁹ C)"),
    ("c", "Speed of light (2.998×10⁸ m/s)"),
    ("f", "Light frequency"),
    ("λ", "Wavelength"),
    ("W", "Work function of the cathode"),
    ("K_max", "Maximum electron kinetic energy"),
    ("V₀", "Stopping potential"),
];
