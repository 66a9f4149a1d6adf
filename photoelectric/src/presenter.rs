//! Simulator Presenter
//!
//! Turns physics results into draw command lists and display strings. Nothing
//! here touches a real drawing surface, so every drawing can be checked by
//! inspecting the returned commands.

use glam::Vec2;

use crate::catalog::{LedSpec, MaterialWorkFunction, CESIUM};
use crate::config::{ControlRanges, PresenterConfig};
use crate::constants::THZ;
use crate::draw::{CanvasSize, DrawCommand, TextAlign};
use crate::error::Result;
use crate::physics::{emission_result, threshold_frequency_hz, EmissionResult};

/// Control values as the simulator panel holds them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorParams {
    pub frequency_thz: f64,
    /// Light intensity, 1-10. Changes the photocurrent, not the electron energy,
    /// so it is only displayed.
    pub intensity: u32,
    pub material: MaterialWorkFunction,
}

impl SimulatorParams {
    pub fn new(controls: &ControlRanges) -> Self {
        Self {
            frequency_thz: controls.frequency_default_thz,
            intensity: controls.intensity_default,
            material: CESIUM,
        }
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_thz * THZ
    }

    /// Move the frequency by whole slider steps, staying inside the control range
    pub fn step_frequency(&mut self, steps: i32, controls: &ControlRanges) {
        self.frequency_thz = (self.frequency_thz + steps as f64 * controls.frequency_step_thz)
            .clamp(controls.frequency_min_thz, controls.frequency_max_thz);
    }

    pub fn set_intensity(&mut self, intensity: u32, controls: &ControlRanges) {
        self.intensity = intensity.clamp(controls.intensity_min, controls.intensity_max);
    }
}

/// Formatted results for the simulator panel
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorReadout {
    pub result: EmissionResult,
    pub frequency: String,
    pub intensity: String,
    pub photon_energy: String,
    pub kinetic_energy: String,
    pub emission_status: String,
    pub status_color: String,
    pub threshold_frequency: String,
}

/// Formatted values for an LED detail card
#[derive(Debug, Clone, PartialEq)]
pub struct LedDetails {
    pub title: String,
    pub wavelength: String,
    pub frequency: String,
    pub photon_energy: String,
    pub capability: String,
}

/// Energies are shown with two decimals
pub fn format_ev(value: f64) -> String {
    format!("{:.2} eV", value)
}

pub fn format_thz(value_thz: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value_thz)
}

#[derive(Debug, Clone, Default)]
pub struct SimulatorPresenter {
    pub config: PresenterConfig,
}

impl SimulatorPresenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self { config }
    }

    pub fn controls(&self) -> &ControlRanges {
        &self.config.controls
    }

    /// Energy-level diagram: threshold line, photon arrow, kinetic segment and labels.
    ///
    /// Energies above the display ceiling are clipped to the top of the canvas.
    pub fn build_energy_diagram(
        &self,
        result: &EmissionResult,
        work_function_ev: f64,
        canvas: CanvasSize,
    ) -> Vec<DrawCommand> {
        let layout = &self.config.diagram;
        let palette = &self.config.palette;

        let scale = canvas.height / layout.ceiling_ev;
        let base_y = canvas.height - layout.baseline_offset;
        let level_y = |energy_ev: f64| (base_y - energy_ev as f32 * scale).max(0.0);
        let label_y = |line_y: f32| (line_y - layout.label_offset).max(layout.label_min_y);

        let threshold_y = level_y(work_function_ev);
        let photon_y = level_y(result.photon_energy_ev);
        let has_kinetic = result.kinetic_energy_ev > 0.0;
        let kinetic_y = level_y(work_function_ev + result.kinetic_energy_ev);

        let mut commands = Vec::with_capacity(6);

        commands.push(DrawCommand::line(
            Vec2::new(layout.threshold_margin, threshold_y),
            Vec2::new(canvas.width - layout.threshold_margin, threshold_y),
            &palette.work_function,
            layout.line_width,
        ));
        commands.push(DrawCommand::line(
            Vec2::new(layout.photon_x, base_y),
            Vec2::new(layout.photon_x, photon_y),
            &palette.photon,
            layout.line_width,
        ));
        if has_kinetic {
            commands.push(DrawCommand::line(
                Vec2::new(layout.kinetic_x, threshold_y),
                Vec2::new(layout.kinetic_x, kinetic_y),
                &palette.kinetic,
                layout.line_width,
            ));
        }

        commands.push(DrawCommand::text(
            Vec2::new(layout.work_function_label_x, label_y(threshold_y)),
            layout.work_function_label.as_str(),
            &palette.text,
            TextAlign::Left,
        ));
        commands.push(DrawCommand::text(
            Vec2::new(layout.photon_x + layout.label_indent, label_y(photon_y)),
            layout.photon_label.as_str(),
            &palette.text,
            TextAlign::Left,
        ));
        if has_kinetic {
            commands.push(DrawCommand::text(
                Vec2::new(layout.kinetic_x + layout.label_indent, label_y(kinetic_y)),
                layout.kinetic_label.as_str(),
                &palette.text,
                TextAlign::Left,
            ));
        }

        commands
    }

    /// Wavelength bar chart, bars scaled against the longest wavelength
    pub fn build_comparison_chart(&self, leds: &[LedSpec], canvas: CanvasSize) -> Vec<DrawCommand> {
        if leds.is_empty() {
            return Vec::new();
        }

        let layout = &self.config.chart;
        let text_color = &self.config.palette.text;

        let count = leds.len() as f32;
        let slot_width = canvas.width / count;
        let bar_width = slot_width * layout.bar_fill;
        let max_wavelength = leds
            .iter()
            .map(|led| led.wavelength_nm)
            .fold(f64::NEG_INFINITY, f64::max);
        let drawable_height = (canvas.height - layout.vertical_padding).max(0.0);

        let mut commands = Vec::with_capacity(leds.len() * 3 + 1);

        for (i, led) in leds.iter().enumerate() {
            let ratio = if max_wavelength > 0.0 {
                (led.wavelength_nm / max_wavelength).clamp(0.0, 1.0) as f32
            } else {
                0.0
            };

            let x = slot_width * i as f32 + (slot_width - bar_width) / 2.0;
            let bar_height = ratio * drawable_height;
            let y = canvas.height - layout.bottom_offset - bar_height;
            let center_x = x + bar_width / 2.0;

            commands.push(DrawCommand::filled_rect(
                Vec2::new(x, y),
                Vec2::new(bar_width, bar_height),
                &led.color_hex,
            ));
            commands.push(DrawCommand::text(
                Vec2::new(center_x, canvas.height - layout.name_offset),
                led.name.as_str(),
                text_color,
                TextAlign::Center,
            ));
            commands.push(DrawCommand::text(
                Vec2::new(center_x, y - layout.value_offset),
                format!("{}nm", led.wavelength_nm),
                text_color,
                TextAlign::Center,
            ));
        }

        if let Some(title) = &layout.title {
            commands.push(DrawCommand::text(
                Vec2::new(canvas.width / 2.0, layout.title_y),
                title.as_str(),
                text_color,
                TextAlign::Center,
            ));
        }

        commands
    }

    pub fn readout(&self, params: &SimulatorParams) -> Result<SimulatorReadout> {
        let work_function_ev = params.material.work_function_ev;
        let result = emission_result(params.frequency_hz(), work_function_ev)?;
        let threshold_thz = threshold_frequency_hz(work_function_ev)? / THZ;
        let palette = &self.config.palette;

        let (emission_status, status_color) = if result.can_emit {
            ("YES", &palette.emits)
        } else {
            ("NO", &palette.no_emission)
        };

        Ok(SimulatorReadout {
            result,
            frequency: format_thz(params.frequency_thz, 0),
            intensity: params.intensity.to_string(),
            photon_energy: format_ev(result.photon_energy_ev),
            kinetic_energy: format_ev(result.kinetic_energy_ev),
            emission_status: emission_status.to_string(),
            status_color: status_color.clone(),
            threshold_frequency: format_thz(threshold_thz, 0),
        })
    }

    pub fn led_details(&self, led: &LedSpec) -> Result<LedDetails> {
        let readout = led.readout()?;

        Ok(LedDetails {
            title: format!("{} LED", led.name),
            wavelength: format!("{} nm", led.wavelength_nm),
            frequency: format!("{} THz", format_thz(readout.frequency_thz, 2)),
            photon_energy: format_ev(readout.photon_energy_ev),
            capability: readout.capability.label().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{led_catalog, COPPER, ZINC};

    const EPS: f32 = 1e-3;

    fn diagram_canvas() -> CanvasSize {
        CanvasSize::new(300.0, 200.0)
    }

    fn chart_canvas() -> CanvasSize {
        CanvasSize::new(400.0, 200.0)
    }

    fn line_points(cmd: &DrawCommand) -> (Vec2, Vec2) {
        match cmd {
            DrawCommand::Line { from, to, .. } => (*from, *to),
            other => panic!("expected a line, got {:?}", other),
        }
    }

    fn text_of(cmd: &DrawCommand) -> (Vec2, &str) {
        match cmd {
            DrawCommand::Text { position, content, .. } => (*position, content.as_str()),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_diagram_with_emission_has_three_lines_then_three_labels() {
        let presenter = SimulatorPresenter::default();
        let result = emission_result(600e12, 2.3).unwrap();
        let commands = presenter.build_energy_diagram(&result, 2.3, diagram_canvas());

        assert_eq!(commands.len(), 6);
        assert!(commands[..3].iter().all(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(commands[3..].iter().all(|c| matches!(c, DrawCommand::Text { .. })));
        assert_eq!(commands[0].color(), "#DC143C");
        assert_eq!(commands[1].color(), "#FFD700");
        assert_eq!(commands[2].color(), "#32CD32");
    }

    #[test]
    fn test_diagram_geometry() {
        let presenter = SimulatorPresenter::default();
        let result = emission_result(600e12, 2.3).unwrap();
        let commands = presenter.build_energy_diagram(&result, 2.3, diagram_canvas());

        // 25 px per eV, baseline at y = 180
        let (from, to) = line_points(&commands[0]);
        assert!((from.y - 122.5).abs() < EPS && (to.y - 122.5).abs() < EPS);
        assert_eq!((from.x, to.x), (50.0, 250.0));

        let (from, to) = line_points(&commands[1]);
        assert_eq!(from, Vec2::new(100.0, 180.0));
        assert!((to.y - (180.0 - 2.4816 * 25.0)).abs() < 0.05, "photon top {}", to.y);

        let (from, to) = line_points(&commands[2]);
        assert_eq!(from.x, 150.0);
        assert!((from.y - 122.5).abs() < EPS);
        let kinetic_px = from.y - to.y;
        assert!((kinetic_px - result.kinetic_energy_ev as f32 * 25.0).abs() < EPS);

        let (pos, label) = text_of(&commands[3]);
        assert_eq!(label, "Work function");
        assert_eq!(pos.x, 200.0);
        assert!((pos.y - 117.5).abs() < EPS);
        assert_eq!(text_of(&commands[4]).1, "E = hf");
        assert_eq!(text_of(&commands[5]).1, "Kinetic E");
    }

    #[test]
    fn test_diagram_without_emission_skips_kinetic() {
        let presenter = SimulatorPresenter::default();
        let result = emission_result(400e12, COPPER.work_function_ev).unwrap();
        let commands =
            presenter.build_energy_diagram(&result, COPPER.work_function_ev, diagram_canvas());

        assert_eq!(commands.len(), 4);
        let labels: Vec<&str> = commands[2..].iter().map(|c| text_of(c).1).collect();
        assert_eq!(labels, ["Work function", "E = hf"]);
    }

    #[test]
    fn test_diagram_clips_above_ceiling() {
        let presenter = SimulatorPresenter::default();
        let result = EmissionResult {
            photon_energy_ev: 12.0,
            kinetic_energy_ev: 7.0,
            can_emit: true,
        };
        let commands = presenter.build_energy_diagram(&result, 5.0, diagram_canvas());

        assert_eq!(commands.len(), 6);
        for cmd in &commands[..3] {
            let (from, to) = line_points(cmd);
            assert!(from.y >= 0.0 && to.y >= 0.0, "{:?}", cmd);
        }
        assert_eq!(line_points(&commands[1]).1.y, 0.0);
        assert_eq!(line_points(&commands[2]).1.y, 0.0);
        for cmd in &commands[3..] {
            assert!(text_of(cmd).0.y >= presenter.config.diagram.label_min_y);
        }
    }

    #[test]
    fn test_diagram_scales_with_canvas() {
        let presenter = SimulatorPresenter::default();
        let result = emission_result(700e12, ZINC.work_function_ev).unwrap();
        let w = ZINC.work_function_ev;
        let small = presenter.build_energy_diagram(&result, w, CanvasSize::new(300.0, 200.0));
        let tall = presenter.build_energy_diagram(&result, w, CanvasSize::new(300.0, 400.0));

        let small_len = {
            let (from, to) = line_points(&small[1]);
            from.y - to.y
        };
        let tall_len = {
            let (from, to) = line_points(&tall[1]);
            from.y - to.y
        };
        assert!((tall_len - 2.0 * small_len).abs() < EPS);
    }

    #[test]
    fn test_empty_chart_has_no_commands() {
        let presenter = SimulatorPresenter::default();
        assert!(presenter.build_comparison_chart(&[], chart_canvas()).is_empty());
    }

    #[test]
    fn test_chart_layout_for_catalog() {
        let presenter = SimulatorPresenter::default();
        let commands = presenter.build_comparison_chart(&led_catalog(), chart_canvas());

        assert_eq!(commands.len(), 4 * 3 + 1);

        match &commands[0] {
            DrawCommand::FilledRect { origin, size, color } => {
                assert_eq!(*origin, Vec2::new(15.0, 20.0));
                assert_eq!(*size, Vec2::new(70.0, 160.0));
                assert_eq!(color, "#DC143C");
            }
            other => panic!("expected a bar, got {:?}", other),
        }
        assert_eq!(text_of(&commands[1]), (Vec2::new(50.0, 195.0), "Red"));
        assert_eq!(text_of(&commands[2]), (Vec2::new(50.0, 15.0), "625nm"));

        match &commands[9] {
            DrawCommand::FilledRect { origin, size, color } => {
                let expected_height = 450.0 / 625.0 * 160.0;
                assert!((origin.x - 315.0).abs() < EPS);
                assert!((size.y - expected_height).abs() < EPS);
                assert!((origin.y + size.y - 180.0).abs() < EPS);
                assert_eq!(color, "#4169E1");
            }
            other => panic!("expected a bar, got {:?}", other),
        }

        let (pos, title) = text_of(&commands[12]);
        assert_eq!(pos, Vec2::new(200.0, 20.0));
        assert_eq!(title, "LED wavelengths");
    }

    #[test]
    fn test_chart_labels_are_centered() {
        let presenter = SimulatorPresenter::default();
        let commands = presenter.build_comparison_chart(&led_catalog(), chart_canvas());
        for cmd in &commands {
            if let DrawCommand::Text { align, .. } = cmd {
                assert_eq!(*align, TextAlign::Center);
            }
        }
    }

    #[test]
    fn test_single_bar_is_centered() {
        let mut config = PresenterConfig::default();
        config.chart.title = None;
        let presenter = SimulatorPresenter::new(config);
        let leds = [LedSpec::new("UV", 365.0, "#8A2BE2")];
        let commands = presenter.build_comparison_chart(&leds, chart_canvas());

        assert_eq!(commands.len(), 3);
        match &commands[0] {
            DrawCommand::FilledRect { origin, size, .. } => {
                assert!((origin.x + size.x / 2.0 - 200.0).abs() < EPS);
                assert!((size.x - 280.0).abs() < EPS);
                assert!((size.y - 160.0).abs() < EPS);
            }
            other => panic!("expected a bar, got {:?}", other),
        }
    }

    #[test]
    fn test_chart_with_non_positive_wavelengths_draws_flat_bars() {
        let presenter = SimulatorPresenter::default();
        let leds = [
            LedSpec::new("Dark", 0.0, "#000000"),
            LedSpec::new("Broken", -5.0, "#111111"),
        ];

        for canvas in [chart_canvas(), CanvasSize::new(0.0, 0.0)] {
            let commands = presenter.build_comparison_chart(&leds, canvas);
            assert_eq!(commands.len(), 2 * 3 + 1);

            for cmd in &commands {
                match cmd {
                    DrawCommand::FilledRect { origin, size, .. } => {
                        assert_eq!(size.y, 0.0, "{:?}", cmd);
                        assert!(origin.x.is_finite() && origin.y.is_finite(), "{:?}", cmd);
                    }
                    DrawCommand::Text { position, .. } => {
                        assert!(position.x.is_finite() && position.y.is_finite(), "{:?}", cmd);
                    }
                    DrawCommand::Line { .. } => panic!("chart has no lines: {:?}", cmd),
                }
            }
        }
    }

    #[test]
    fn test_readout_formatting() {
        let presenter = SimulatorPresenter::default();
        let params = SimulatorParams::new(presenter.controls());
        let readout = presenter.readout(&params).unwrap();

        assert_eq!(readout.frequency, "600");
        assert_eq!(readout.intensity, "5");
        assert_eq!(readout.photon_energy, "2.48 eV");
        assert_eq!(readout.kinetic_energy, "0.18 eV");
        assert_eq!(readout.emission_status, "YES");
        assert_eq!(readout.status_color, "#32CD32");
        assert_eq!(readout.threshold_frequency, "556");
    }

    #[test]
    fn test_readout_without_emission() {
        let presenter = SimulatorPresenter::default();
        let params = SimulatorParams {
            frequency_thz: 400.0,
            intensity: 10,
            material: COPPER,
        };
        let readout = presenter.readout(&params).unwrap();

        assert_eq!(readout.photon_energy, "1.65 eV");
        assert_eq!(readout.kinetic_energy, "0.00 eV");
        assert_eq!(readout.emission_status, "NO");
        assert_eq!(readout.status_color, "#DC143C");
    }

    #[test]
    fn test_intensity_does_not_change_energies() {
        let presenter = SimulatorPresenter::default();
        let mut params = SimulatorParams::new(presenter.controls());
        params.set_intensity(1, presenter.controls());
        let dim = presenter.readout(&params).unwrap();
        params.set_intensity(10, presenter.controls());
        let bright = presenter.readout(&params).unwrap();

        assert_eq!(dim.result, bright.result);
        assert_ne!(dim.intensity, bright.intensity);
    }

    #[test]
    fn test_readout_rejects_zero_frequency() {
        let presenter = SimulatorPresenter::default();
        let mut params = SimulatorParams::new(presenter.controls());
        params.frequency_thz = 0.0;
        assert!(presenter.readout(&params).is_err());
    }

    #[test]
    fn test_step_frequency_is_clamped() {
        let controls = ControlRanges::default();
        let mut params = SimulatorParams::new(&controls);

        params.step_frequency(3, &controls);
        assert_eq!(params.frequency_thz, 630.0);
        params.step_frequency(100, &controls);
        assert_eq!(params.frequency_thz, 800.0);
        params.step_frequency(-100, &controls);
        assert_eq!(params.frequency_thz, 400.0);

        params.set_intensity(42, &controls);
        assert_eq!(params.intensity, 10);
        params.set_intensity(0, &controls);
        assert_eq!(params.intensity, 1);
    }

    #[test]
    fn test_led_details() {
        let presenter = SimulatorPresenter::default();
        let details = presenter.led_details(&led_catalog()[0]).unwrap();

        assert_eq!(details.title, "Red LED");
        assert_eq!(details.wavelength, "625 nm");
        assert_eq!(details.frequency, "479.68 THz");
        assert_eq!(details.photon_energy, "1.98 eV");
        assert_eq!(details.capability, "Low");

        let blue = presenter.led_details(&led_catalog()[3]).unwrap();
        assert_eq!(blue.photon_energy, "2.76 eV");
        assert_eq!(blue.capability, "High");
    }
}
