//! Compass magnetic field gauge simulator for desktop platforms.
//!
//! Feeds a synthetic field signal into the gauge renderer and draws it with
//! the embedded-graphics-simulator crate. The display buffer is only redrawn
//! when the renderer reports a visible change or host state changes.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | N | Show / hide the north marker |
//! | T | Cycle theme palette |
//! | E | Toggle energy saving (slower frame rate) |
//! | K | Toggle keep-screen-on |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod popup;
mod signal;
mod timing;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use compass_common::colors::next_theme;
use compass_common::log_buffer::{LOG_MSG_LEN, footer_color};
use compass_common::styles::{LABEL_FONT, LEFT_ALIGNED};
use compass_common::widgets::{draw_gauge, draw_toggle_popup};
use compass_common::{
    DebugLog,
    GaugeRenderer,
    LogLevel,
    MemoryStore,
    Palette,
    Prefs,
    PrefsError,
    SettingsStore,
    square_side,
};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::popup::Popup;
use crate::timing::{ENERGY_SAVING_FRAME_TIME, FRAME_TIME, SIGNAL_RATE};

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;
const SCREEN_CENTER: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);
const FOOTER_POS: Point = Point::new(4, SCREEN_HEIGHT as i32 - 4);

/// Unit suffix appended to the readout.
const UNIT: &str = "uT";

/// Caption drawn on the far side of the arc.
const CAPTION: &str = "Magnetic field";

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Compass Magnetic Field Sim", &output_settings);

    let mut debug_log = DebugLog::new();
    debug_log.push(LogLevel::Info, "System started");

    let mut prefs = Prefs::new(MemoryStore::new());
    if prefs.is_first_run() {
        debug_log.push(LogLevel::Info, "First run");
        log_result(&mut debug_log, prefs.first_run_executed());
    }

    // Gauge sits in the centered square of the screen
    let side = square_side(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let origin = Point::new(
        (SCREEN_WIDTH as i32 - side as i32) / 2,
        (SCREEN_HEIGHT as i32 - side as i32) / 2,
    );
    let mut renderer = GaugeRenderer::new();
    renderer.configure(side);
    log_fmt(&mut debug_log, LogLevel::Debug, format_args!("Gauge side {side}"));

    let mut active_popup: Option<Popup> = None;
    let mut needs_full_redraw = true;
    let mut t = 0.0f32;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::N => {
                            if renderer.is_north_marker_visible() {
                                renderer.hide_north_marker();
                                debug_log.push(LogLevel::Info, "North marker: OFF");
                            } else {
                                renderer.show_north_marker();
                                debug_log.push(LogLevel::Info, "North marker: ON");
                            }
                            active_popup = Some(Popup::NorthMarker(Instant::now()));
                        }
                        Keycode::T => {
                            let theme = next_theme(prefs.theme_color());
                            log_result(&mut debug_log, prefs.set_theme_color(theme));
                            log_fmt(&mut debug_log, LogLevel::Info, format_args!("Theme: {theme}"));
                            active_popup = Some(Popup::Theme(Instant::now()));
                        }
                        Keycode::E => {
                            let on = !prefs.is_energy_saving_mode();
                            log_result(&mut debug_log, prefs.set_energy_saving_mode(on));
                            debug_log.push(LogLevel::Info, if on { "Energy saving: ON" } else { "Energy saving: OFF" });
                            active_popup = Some(Popup::EnergySaving(Instant::now()));
                        }
                        Keycode::K => {
                            let on = !prefs.is_keep_screen_on();
                            log_result(&mut debug_log, prefs.set_keep_screen_on(on));
                            debug_log.push(LogLevel::Info, if on { "Keep screen: ON" } else { "Keep screen: AUTO" });
                            active_popup = Some(Popup::KeepScreenOn(Instant::now()));
                        }
                        _ => continue,
                    }
                    needs_full_redraw = true;
                }
                _ => {}
            }
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            needs_full_redraw = true;
        }

        renderer.update(signal::field_signal(t));

        if renderer.take_redraw() || needs_full_redraw {
            let palette = Palette::for_theme(prefs.theme_color());
            display.clear(palette.background).ok();

            let frame = renderer.frame(UNIT, CAPTION);
            draw_gauge(&mut display, origin, &frame, palette);

            if let Some(popup) = active_popup {
                let text = popup_text(popup, &renderer, &prefs);
                draw_toggle_popup(&mut display, SCREEN_CENTER, &text, palette);
            }

            draw_footer(&mut display, &debug_log);
            needs_full_redraw = false;
        }

        window.update(&display);

        let frame_time = if prefs.is_energy_saving_mode() {
            ENERGY_SAVING_FRAME_TIME
        } else {
            FRAME_TIME
        };
        t += frame_time.as_secs_f32() * SIGNAL_RATE;

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Text shown in a popup, reflecting the state after the toggle.
fn popup_text<S: SettingsStore>(
    popup: Popup,
    renderer: &GaugeRenderer,
    prefs: &Prefs<S>,
) -> String<24> {
    let mut text: String<24> = String::new();
    let _ = match popup {
        Popup::NorthMarker(_) => write!(
            text,
            "MARKER: {}",
            if renderer.is_north_marker_visible() { "ON" } else { "OFF" }
        ),
        Popup::Theme(_) => write!(text, "THEME {}", prefs.theme_color()),
        Popup::EnergySaving(_) => write!(
            text,
            "SAVING: {}",
            if prefs.is_energy_saving_mode() { "ON" } else { "OFF" }
        ),
        Popup::KeepScreenOn(_) => write!(
            text,
            "SCREEN: {}",
            if prefs.is_keep_screen_on() { "ON" } else { "AUTO" }
        ),
    };
    text
}

/// Draw the most recent log entry along the bottom edge.
fn draw_footer<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(entry) = log.latest() else {
        return;
    };
    let mut line: String<{ LOG_MSG_LEN + 2 }> = String::new();
    let _ = write!(line, "{} {}", entry.level.prefix(), entry.message);
    let style = MonoTextStyle::new(LABEL_FONT, footer_color(entry.level));
    Text::with_text_style(&line, FOOTER_POS, style, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn log_fmt(
    log: &mut DebugLog,
    level: LogLevel,
    args: core::fmt::Arguments<'_>,
) {
    let mut msg: String<LOG_MSG_LEN> = String::new();
    let _ = msg.write_fmt(args);
    log.push(level, &msg);
}

/// Log a failed preferences write. The in-memory value stays unchanged.
fn log_result(
    log: &mut DebugLog,
    result: Result<(), PrefsError>,
) {
    if let Err(err) = result {
        log_fmt(log, LogLevel::Error, format_args!("{err}"));
    }
}
