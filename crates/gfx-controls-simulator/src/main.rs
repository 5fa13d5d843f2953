//! Desktop simulator for gfx-controls.
//!
//! Builds a small instrument screen in an SDL2 window via
//! `embedded-graphics-simulator` and feeds its bound values from a synthetic
//! generator, calling `Screen::refresh` once per frame the way firmware would.
//!
//! # Key bindings
//!
//! | Key | Action                                  |
//! |-----|-----------------------------------------|
//! | H   | Hide / show the gauge group             |
//! | C   | Cycle the bar colour                    |
//! | R   | Clear the panel and repaint everything  |
//! | Q   | Quit                                    |

use std::time::{Duration, Instant};

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use gfx_controls::ui::{
    Binding, Bitmap, BoundBar, BoundChar, BoundFloat, BoundLabel, BoundNumeric, Frame, Group, Icon,
    NodeId, Screen, StaticLabel, TextOptions, WidgetResult,
};
use gfx_controls::{GraphicsSurface, ScreenConfig, Surface};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);
const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);
const COLOR_TEXT: Rgb565 = Rgb565::new(230 >> 3, 230 >> 2, 230 >> 3);

/// Colours cycled through with the C key.
const BAR_COLORS: [Rgb565; 3] = [
    Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3),
    Rgb565::new(200 >> 3, 145 >> 2, 85 >> 3),
    Rgb565::new(90 >> 3, 140 >> 2, 220 >> 3),
];

/// 8x8 thermometer glyph, one byte per row.
static THERMOMETER: [u8; 8] = [0x18, 0x24, 0x24, 0x24, 0x3C, 0x7E, 0x7E, 0x3C];

/// 4x4 colour swatch.
static SWATCH: [u16; 16] = [
    0xF800, 0xF800, 0x07E0, 0x07E0, //
    0xF800, 0xF800, 0x07E0, 0x07E0, //
    0x001F, 0x001F, 0xFFFF, 0xFFFF, //
    0x001F, 0x001F, 0xFFFF, 0xFFFF,
];

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Values the screen is bound to.
struct Readings {
    temperature: Binding<f32>,
    pressure: Binding<i32>,
    level: Binding<i32>,
    activity: Binding<char>,
    status: Binding<String>,
}

impl Readings {
    fn new() -> Self {
        Self {
            temperature: Binding::new(0.0),
            pressure: Binding::new(0),
            level: Binding::new(0),
            activity: Binding::new(SPINNER[0]),
            status: Binding::new(String::new()),
        }
    }

    /// Advance the synthetic signals to `t` seconds.
    fn update(&self, t: f64, frame: u64) {
        self.temperature
            .set((22.0 + 3.0 * (t / 20.0).sin() + 0.3 * (t / 3.0).cos()) as f32);
        self.pressure
            .set((1013.0 + 8.0 * (t / 45.0).sin()) as i32);
        self.level.set((50.0 + 50.0 * (t / 6.0).sin()) as i32);
        self.activity.set(SPINNER[(frame / 8) as usize % SPINNER.len()]);

        let status = match (t as u64 / 5) % 3 {
            0 => "Sampling",
            1 => "Idle",
            _ => "",
        };
        if self.status.with(|current| current != status) {
            self.status.set(status.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Screen layout
// ---------------------------------------------------------------------------

struct Layout {
    gauges: NodeId,
    gauge_area: Rectangle,
    bars: [NodeId; 2],
}

fn build_screen<S: Surface>(screen: &mut Screen<S>, readings: &Readings) -> WidgetResult<Layout> {
    let root = screen.root();

    screen.attach(
        root,
        Icon::new(
            Rectangle::new(Point::new(6, 6), Size::new(8, 8)),
            &THERMOMETER,
            COLOR_TEXT,
        )?,
    )?;
    screen.attach(
        root,
        Bitmap::new(Rectangle::new(Point::new(308, 8), Size::new(4, 4)), &SWATCH)?,
    )?;
    screen.attach(
        root,
        StaticLabel::new(Point::new(160, 2), "Bench Monitor", COLOR_TEXT)
            .with_font(&FONT_10X20)
            .with_alignment(Alignment::Center),
    )?;

    let panel = screen.attach(
        root,
        Frame::new(
            Rectangle::new(Point::new(10, 30), Size::new(300, 80)),
            2,
            COLOR_TEXT,
        )
        .with_background(COLOR_SURFACE),
    )?;
    screen.attach(panel, StaticLabel::new(Point::new(8, 8), "Temperature", COLOR_TEXT))?;
    screen.attach(
        panel,
        BoundFloat::new(Point::new(290, 8), COLOR_TEXT)
            .with_decimals(1)
            .with_suffix(" C")
            .with_text_size(2)
            .with_alignment(Alignment::Right)
            .bound_to(readings.temperature.clone()),
    )?;
    screen.attach(
        panel,
        BoundNumeric::new(Point::new(8, 34), COLOR_TEXT)
            .with_prefix("Pressure: ")
            .with_suffix(" hPa")
            .bound_to(readings.pressure.clone()),
    )?;
    screen.attach(
        panel,
        BoundChar::new(Point::new(280, 34), COLOR_TEXT).bound_to(readings.activity.clone()),
    )?;
    screen.attach(
        panel,
        BoundLabel::new(Point::new(8, 56), COLOR_TEXT)
            .with_font(&FONT_6X10)
            .bound_to(readings.status.clone()),
    )?;

    let gauge_origin = Point::new(10, 130);
    let gauges = screen.attach(root, Group::new(gauge_origin))?;
    let bar = screen.attach(
        gauges,
        BoundBar::new(
            Rectangle::new(Point::zero(), Size::new(300, 16)),
            1,
            BAR_COLORS[0],
            0,
            100,
        )
        .bound_to(readings.level.clone()),
    )?;
    let mirrored = screen.attach(
        gauges,
        BoundBar::new(
            Rectangle::new(Point::new(0, 24), Size::new(300, 16)),
            2,
            BAR_COLORS[0],
            0,
            100,
        )
        .with_alignment(Alignment::Right)
        .bound_to(readings.level.clone()),
    )?;
    screen.attach(
        gauges,
        BoundNumeric::new(Point::new(150, 50), COLOR_TEXT)
            .with_suffix("%")
            .with_alignment(Alignment::Center)
            .bound_to(readings.level.clone()),
    )?;

    Ok(Layout {
        gauges,
        gauge_area: Rectangle::new(gauge_origin, Size::new(300, 70)),
        bars: [bar, mirrored],
    })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting gfx-controls simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: H=Hide/show gauges  C=Bar colour  R=Repaint  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let _ = display.clear(COLOR_BACKGROUND);

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("gfx-controls Simulator", &output_settings);

    let config = ScreenConfig {
        background: COLOR_BACKGROUND.into_storage(),
        ..ScreenConfig::default()
    };
    let mut screen = Screen::with_config(GraphicsSurface::new(display), &config);

    let readings = Readings::new();
    let layout = match build_screen(&mut screen, &readings) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Failed to build screen: {}", e);
            return;
        }
    };
    info!("Screen holds {} elements", screen.len());

    let started = Instant::now();
    let mut frame: u64 = 0;
    let mut gauges_visible = true;
    let mut bar_color = 0;

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = screen.refresh() {
        error!("Draw error: {:?}", e);
    }
    window.update(screen.surface().target());

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::H => {
                        gauges_visible = !gauges_visible;
                        info!("Gauges visible: {}", gauges_visible);
                        if let Err(e) = screen.set_visible(layout.gauges, gauges_visible) {
                            error!("Failed to toggle gauges: {}", e);
                        }
                        if !gauges_visible {
                            // Hiding stops painting; clearing the pixels is up to us.
                            if let Err(e) = screen
                                .surface_mut()
                                .fill_rect(layout.gauge_area, COLOR_BACKGROUND)
                            {
                                error!("Draw error: {:?}", e);
                            }
                        }
                    }
                    Keycode::C => {
                        bar_color = (bar_color + 1) % BAR_COLORS.len();
                        for bar in layout.bars {
                            if let Err(e) = screen.set_foreground(bar, BAR_COLORS[bar_color]) {
                                error!("Failed to recolour bar: {}", e);
                            }
                        }
                    }
                    Keycode::R => {
                        info!("Full repaint");
                        if let Err(e) = screen.surface_mut().target_mut().clear(COLOR_BACKGROUND) {
                            error!("Draw error: {:?}", e);
                        }
                        let root = screen.root();
                        if let Err(e) = screen.invalidate(root) {
                            error!("Failed to invalidate screen: {}", e);
                        }
                    }
                    _ => {}
                },

                _ => {}
            }
        }

        // --- Mock data ----------------------------------------------------
        readings.update(started.elapsed().as_secs_f64(), frame);

        // --- Render -------------------------------------------------------
        if let Err(e) = screen.refresh() {
            error!("Draw error: {:?}", e);
        }
        window.update(screen.surface().target());
        frame += 1;

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
