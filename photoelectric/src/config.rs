//! Palette, layout and control settings for the simulator presenter

/// Colors used by both drawings and the results panel
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub work_function: String,
    pub photon: String,
    pub kinetic: String,
    pub text: String,
    pub emits: String,
    pub no_emission: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            work_function: "#DC143C".to_string(),
            photon: "#FFD700".to_string(),
            kinetic: "#32CD32".to_string(),
            text: "#FFFFFF".to_string(),
            emits: "#32CD32".to_string(),
            no_emission: "#DC143C".to_string(),
        }
    }
}

/// Geometry of the energy-level diagram
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    /// Energy mapped to the full canvas height
    pub ceiling_ev: f32,
    /// Distance of the zero-energy baseline from the bottom edge
    pub baseline_offset: f32,
    /// Horizontal inset of the work-function line from both sides
    pub threshold_margin: f32,
    pub photon_x: f32,
    pub kinetic_x: f32,
    pub line_width: f32,
    /// Gap between the end of a line and its label baseline
    pub label_offset: f32,
    /// Labels pushed off the top of the canvas are held at this baseline
    pub label_min_y: f32,
    pub work_function_label_x: f32,
    /// Horizontal shift of the photon and kinetic labels from their lines
    pub label_indent: f32,
    pub work_function_label: String,
    pub photon_label: String,
    pub kinetic_label: String,
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self {
            ceiling_ev: 8.0,
            baseline_offset: 20.0,
            threshold_margin: 50.0,
            photon_x: 100.0,
            kinetic_x: 150.0,
            line_width: 2.0,
            label_offset: 5.0,
            label_min_y: 12.0,
            work_function_label_x: 200.0,
            label_indent: 5.0,
            work_function_label: "Work function".to_string(),
            photon_label: "E = hf".to_string(),
            kinetic_label: "Kinetic E".to_string(),
        }
    }
}

/// Geometry of the LED wavelength bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Fraction of each slot covered by its bar
    pub bar_fill: f32,
    /// Total vertical space reserved for labels above and below the bars
    pub vertical_padding: f32,
    /// Distance of the bar bottoms from the bottom edge
    pub bottom_offset: f32,
    /// Baseline of the name labels, measured up from the bottom edge
    pub name_offset: f32,
    pub value_offset: f32,
    pub title_y: f32,
    pub title: Option<String>,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            bar_fill: 0.7,
            vertical_padding: 40.0,
            bottom_offset: 20.0,
            name_offset: 5.0,
            value_offset: 5.0,
            title_y: 20.0,
            title: Some("LED wavelengths".to_string()),
        }
    }
}

/// Ranges of the simulator controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRanges {
    pub frequency_min_thz: f64,
    pub frequency_max_thz: f64,
    pub frequency_step_thz: f64,
    pub frequency_default_thz: f64,
    pub intensity_min: u32,
    pub intensity_max: u32,
    pub intensity_default: u32,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            frequency_min_thz: 400.0,
            frequency_max_thz: 800.0,
            frequency_step_thz: 10.0,
            frequency_default_thz: 600.0,
            intensity_min: 1,
            intensity_max: 10,
            intensity_default: 5,
        }
    }
}

/// Everything the presenter needs besides the physics results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterConfig {
    pub palette: Palette,
    pub diagram: DiagramLayout,
    pub chart: ChartLayout,
    pub controls: ControlRanges,
}
