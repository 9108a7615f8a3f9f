use gtk::gdk;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub disc: Srgba<f64>,
    pub dead_zone: Srgba<f64>,
    pub hot: Srgba<f64>,
    pub idle: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            disc: rgba(40, 40, 40, 160),
            dead_zone: rgba(30, 30, 30, 140),
            hot: rgba(255, 255, 255, 255),
            idle: rgba(150, 150, 150, 180),
        }
    }
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Srgba<f64> {
    let channel = |c: u8| c as f64 / 255.0;
    Srgba::new(channel(r), channel(g), channel(b), channel(a))
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.radial-window, .radial-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
