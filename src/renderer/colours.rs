use image::Rgba;

pub(crate) struct Colours {
    pub background: Rgba<u8>,
    pub title: Rgba<u8>,
    pub text: Rgba<u8>,
    pub grid: Rgba<u8>,
    pub axis: Rgba<u8>,
    pub line: Rgba<u8>,
    pub marker: Rgba<u8>,
    pub footer: Rgba<u8>,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            background: Rgba([0, 0, 0, 255]),     // Black
            title: Rgba([114, 159, 207, 255]),    // Steel blue - for the title
            text: Rgba([238, 238, 236, 255]),     // Off-white - for labels
            grid: Rgba([60, 60, 60, 255]),        // Dark gray - for the grid
            axis: Rgba([100, 100, 100, 255]),     // Mid gray - for the plot frame
            line: Rgba([0, 188, 212, 255]),       // Cyan - for the bandwidth line
            marker: Rgba([237, 212, 0, 255]),     // Golden yellow - for sample points
            footer: Rgba([186, 189, 182, 255]),   // Silver gray - for the footer
        }
    }
}
