//! Simulator panel: controls, results, energy diagram and LED cards

use egui::{Color32, Context, RichText, Slider};

use crate::canvas::{canvas, hex_to_color32};
use crate::catalog::{led_catalog, LedSpec, MATERIALS};
use crate::config::PresenterConfig;
use crate::draw::CanvasSize;
use crate::presenter::{SimulatorParams, SimulatorPresenter, SimulatorReadout};

pub const DIAGRAM_CANVAS: CanvasSize = CanvasSize {
    width: 300.0,
    height: 200.0,
};

pub const CHART_CANVAS: CanvasSize = CanvasSize {
    width: 400.0,
    height: 200.0,
};

pub struct SimulatorPanel {
    presenter: SimulatorPresenter,
    params: SimulatorParams,
    leds: Vec<LedSpec>,
    /// Last successfully computed readout
    readout: Option<SimulatorReadout>,
    selected_led: Option<usize>,
    pub show_comparison: bool,
}

impl SimulatorPanel {
    pub fn new(config: PresenterConfig) -> Self {
        let params = SimulatorParams::new(&config.controls);
        let mut panel = Self {
            presenter: SimulatorPresenter::new(config),
            params,
            leds: led_catalog(),
            readout: None,
            selected_led: None,
            show_comparison: false,
        };
        panel.refresh();
        panel
    }

    pub fn params(&self) -> &SimulatorParams {
        &self.params
    }

    pub fn readout(&self) -> Option<&SimulatorReadout> {
        self.readout.as_ref()
    }

    pub fn selected_led(&self) -> Option<&LedSpec> {
        self.selected_led.and_then(|i| self.leds.get(i))
    }

    /// Recompute the readout; rejected inputs keep the previous one
    pub fn refresh(&mut self) {
        match self.presenter.readout(&self.params) {
            Ok(readout) => {
                log::debug!(
                    "f = {} THz, W = {} eV -> E = {}, K = {}, emission {}",
                    readout.frequency,
                    self.params.material.work_function_ev,
                    readout.photon_energy,
                    readout.kinetic_energy,
                    readout.emission_status
                );
                self.readout = Some(readout);
            }
            Err(e) => log::warn!("Simulator input rejected: {}", e),
        }
    }

    pub fn step_frequency(&mut self, steps: i32) {
        let controls = *self.presenter.controls();
        self.params.step_frequency(steps, &controls);
        self.refresh();
    }

    /// Select a catalog material by index, returning false if there is none
    pub fn select_material(&mut self, index: usize) -> bool {
        match MATERIALS.get(index) {
            Some(material) => {
                self.params.material = *material;
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Clicking the selected LED card again deselects it
    pub fn toggle_led(&mut self, index: usize) {
        if index >= self.leds.len() {
            return;
        }
        self.selected_led = if self.selected_led == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_comparison(&mut self) {
        self.show_comparison = !self.show_comparison;
    }

    pub fn close_windows(&mut self) {
        self.show_comparison = false;
        self.selected_led = None;
    }

    pub fn show(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(
                    RichText::new("Photoelectric Effect Simulator")
                        .color(Color32::from_rgb(100, 200, 255)),
                );
                ui.add_space(8.0);

                self.controls_ui(ui);
                ui.add_space(8.0);
                ui.separator();

                ui.horizontal_top(|ui| {
                    if let Some(readout) = &self.readout {
                        let commands = self.presenter.build_energy_diagram(
                            &readout.result,
                            self.params.material.work_function_ev,
                            DIAGRAM_CANVAS,
                        );
                        canvas(ui, DIAGRAM_CANVAS, &commands);
                        ui.add_space(12.0);
                        results_ui(ui, readout);
                    }
                });

                ui.add_space(8.0);
                ui.separator();
                self.leds_ui(ui);
            });
        });

        let presenter = &self.presenter;
        let leds = &self.leds;
        egui::Window::new("LED comparison")
            .open(&mut self.show_comparison)
            .resizable(false)
            .show(ctx, |ui| comparison_ui(ui, presenter, leds));
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        let controls = *self.presenter.controls();
        let mut changed = false;

        ui.label(section_title("Experiment parameters"));

        changed |= ui
            .add(
                Slider::new(
                    &mut self.params.frequency_thz,
                    controls.frequency_min_thz..=controls.frequency_max_thz,
                )
                .step_by(controls.frequency_step_thz)
                .fixed_decimals(0)
                .suffix(" THz")
                .text("Light frequency"),
            )
            .changed();

        changed |= ui
            .add(
                Slider::new(
                    &mut self.params.intensity,
                    controls.intensity_min..=controls.intensity_max,
                )
                .text("Intensity"),
            )
            .changed();

        let selected = self.params.material.option_label();
        egui::ComboBox::from_label("Work function")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for material in MATERIALS {
                    let is_current = self.params.material == *material;
                    let option = ui.selectable_label(is_current, material.option_label());
                    if option.clicked() && !is_current {
                        self.params.material = *material;
                        changed = true;
                    }
                }
            });

        ui.horizontal(|ui| {
            if ui.button("LED comparison").clicked() {
                self.show_comparison = !self.show_comparison;
            }
            ui.label(
                RichText::new("↑/↓ frequency · 1/2/3 material · C comparison")
                    .small()
                    .color(Color32::GRAY),
            );
        });

        if changed {
            self.refresh();
        }
    }

    fn leds_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(section_title("LEDs"));

        let mut clicked = None;
        ui.horizontal(|ui| {
            for (i, led) in self.leds.iter().enumerate() {
                let color = hex_to_color32(&led.color_hex);
                let text =
                    RichText::new(format!("{} · {} nm", led.name, led.wavelength_nm)).color(color);
                if ui.selectable_label(self.selected_led == Some(i), text).clicked() {
                    clicked = Some(i);
                }
            }
        });
        if let Some(i) = clicked {
            self.toggle_led(i);
        }

        let Some(led) = self.selected_led() else {
            return;
        };
        match self.presenter.led_details(led) {
            Ok(details) => {
                ui.group(|ui| {
                    let heading = format!("{} - detailed analysis", details.title);
                    ui.label(RichText::new(heading).strong());
                    egui::Grid::new("led_details").num_columns(2).show(ui, |ui| {
                        ui.label("Wavelength:");
                        ui.label(details.wavelength);
                        ui.end_row();
                        ui.label("Frequency:");
                        ui.label(details.frequency);
                        ui.end_row();
                        ui.label("Photon energy:");
                        ui.label(details.photon_energy);
                        ui.end_row();
                    });
                });
            }
            Err(e) => log::warn!("Cannot describe LED {}: {}", led.name, e),
        }
    }
}

impl Default for SimulatorPanel {
    fn default() -> Self {
        Self::new(PresenterConfig::default())
    }
}

fn section_title(text: &str) -> RichText {
    RichText::new(text).strong().color(Color32::from_rgb(255, 200, 100))
}

fn results_ui(ui: &mut egui::Ui, readout: &SimulatorReadout) {
    ui.vertical(|ui| {
        ui.label(section_title("Results"));
        egui::Grid::new("simulator_results").num_columns(2).show(ui, |ui| {
            ui.label("Frequency:");
            ui.label(format!("{} THz", readout.frequency));
            ui.end_row();
            ui.label("Intensity:");
            ui.label(readout.intensity.as_str());
            ui.end_row();
            ui.label("Photon energy:");
            ui.label(readout.photon_energy.as_str());
            ui.end_row();
            ui.label("Max kinetic energy:");
            ui.label(readout.kinetic_energy.as_str());
            ui.end_row();
            ui.label("Threshold frequency:");
            ui.label(format!("{} THz", readout.threshold_frequency));
            ui.end_row();
            ui.label("Electron emission:");
            ui.label(
                RichText::new(&readout.emission_status)
                    .strong()
                    .color(hex_to_color32(&readout.status_color)),
            );
            ui.end_row();
        });
    });
}

fn comparison_ui(ui: &mut egui::Ui, presenter: &SimulatorPresenter, leds: &[LedSpec]) {
    ui.label(RichText::new("Photonic properties of each LED").small().color(Color32::GRAY));

    egui::Grid::new("led_comparison")
        .num_columns(5)
        .striped(true)
        .show(ui, |ui| {
            for header in ["LED", "Wavelength", "Photon energy", "Frequency", "Photoemission"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for led in leds {
                match presenter.led_details(led) {
                    Ok(details) => {
                        ui.label(RichText::new(&led.name).color(hex_to_color32(&led.color_hex)));
                        ui.label(details.wavelength);
                        ui.label(details.photon_energy);
                        ui.label(details.frequency);
                        ui.label(details.capability);
                        ui.end_row();
                    }
                    Err(e) => log::warn!("Skipping LED {} in comparison: {}", led.name, e),
                }
            }
        });

    ui.add_space(8.0);
    let commands = presenter.build_comparison_chart(leds, CHART_CANVAS);
    canvas(ui, CHART_CANVAS, &commands);
}
