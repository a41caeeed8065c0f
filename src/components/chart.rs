//! Chart Component
//!
//! Metrics chart using HTML5 Canvas. Supports bar, line, and radar rendering
//! of a single data series; which style is used comes from the chart-type
//! preference via the installed chart handle.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::charts::{ChartConfig, ChartId};
use crate::state::global::GlobalState;
use crate::state::preferences::{ChartKind, Theme};

/// Per-theme colors for chart chrome (background, grid, labels)
struct ChartChrome {
    background: &'static str,
    grid: &'static str,
    text: &'static str,
}

const DARK_CHROME: ChartChrome = ChartChrome {
    background: "#1f2937", // gray-800
    grid: "#374151",       // gray-700
    text: "#9ca3af",       // gray-400
};

const LIGHT_CHROME: ChartChrome = ChartChrome {
    background: "#ffffff",
    grid: "#e5e7eb", // gray-200
    text: "#6b7280", // gray-500
};

/// Canvas-backed metrics chart bound to one chart id
#[component]
pub fn MetricsChart(id: ChartId) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let canvas_id = match id {
        ChartId::Github => "githubMetricsChart",
        ChartId::Jira => "jiraMetricsChart",
    };

    // Redraw whenever the installed handle or the theme changes
    create_effect(move |_| {
        let registry = state.charts.get();
        let theme = state.preferences.get().theme;

        if let (Some(canvas), Some(handle)) = (canvas_ref.get(), registry.get(id)) {
            draw_chart(&canvas, &handle.config, theme);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            id=canvas_id
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw one chart configuration on the canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig, theme: Theme) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let chrome = if theme.is_dark() { DARK_CHROME } else { LIGHT_CHROME };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&chrome.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if config.values.is_empty() {
        ctx.set_fill_style(&chrome.text.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Series label, top-left
    ctx.set_fill_style(&chrome.text.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&config.series_label, 8.0, 14.0);

    match config.kind {
        ChartKind::Radar => draw_radar(&ctx, config, &chrome, width, height),
        ChartKind::Bar | ChartKind::Line => draw_axes_chart(&ctx, config, &chrome, width, height),
    }
}

/// Shared bar/line rendering over a y-from-zero axis grid
fn draw_axes_chart(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    chrome: &ChartChrome,
    width: f64,
    height: f64,
) {
    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Y axis starts at zero; headroom above the max value
    let max_value = config.values.iter().cloned().fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Horizontal grid lines with y-axis labels (5 lines)
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&chrome.grid.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&chrome.text.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let n = config.values.len();
    let slot_width = chart_width / n as f64;
    let y_of = |value: f64| margin_top + ((y_max - value) / y_max) * chart_height;

    match config.kind {
        ChartKind::Bar => {
            let bar_width = slot_width * 0.6;
            for (i, value) in config.values.iter().enumerate() {
                let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
                let y = y_of(*value);

                ctx.set_fill_style(&config.palette.fill.into());
                ctx.fill_rect(x, y, bar_width, margin_top + chart_height - y);

                ctx.set_stroke_style(&config.palette.stroke.into());
                ctx.set_line_width(1.0);
                ctx.stroke_rect(x, y, bar_width, margin_top + chart_height - y);
            }
        }
        _ => {
            // Line through slot centers
            ctx.set_stroke_style(&config.palette.stroke.into());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, value) in config.values.iter().enumerate() {
                let x = margin_left + (i as f64 + 0.5) * slot_width;
                let y = y_of(*value);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            // Draw points
            ctx.set_fill_style(&config.palette.stroke.into());
            for (i, value) in config.values.iter().enumerate() {
                let x = margin_left + (i as f64 + 0.5) * slot_width;
                let y = y_of(*value);
                ctx.begin_path();
                let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // X-axis labels under each slot
    ctx.set_fill_style(&chrome.text.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in config.labels.iter().enumerate() {
        let x = margin_left + (i as f64 + 0.5) * slot_width;
        let _ = ctx.fill_text(label, x - 30.0, height - 10.0);
    }
}

/// Radar rendering: one axis per value around the chart center
fn draw_radar(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    chrome: &ChartChrome,
    width: f64,
    height: f64,
) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height.min(width) / 2.0) - 40.0;

    let n = config.values.len();
    let max_value = config.values.iter().cloned().fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let angle_of = |i: usize| (i as f64 / n as f64) * std::f64::consts::PI * 2.0 - std::f64::consts::FRAC_PI_2;

    // Concentric grid rings
    ctx.set_stroke_style(&chrome.grid.into());
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let r = radius * ring as f64 / 4.0;
        ctx.begin_path();
        for i in 0..=n {
            let angle = angle_of(i % n);
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // Spokes with labels
    ctx.set_font("12px sans-serif");
    for (i, label) in config.labels.iter().enumerate() {
        let angle = angle_of(i);
        ctx.set_stroke_style(&chrome.grid.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + radius * angle.cos(), cy + radius * angle.sin());
        ctx.stroke();

        ctx.set_fill_style(&chrome.text.into());
        let lx = cx + (radius + 10.0) * angle.cos();
        let ly = cy + (radius + 10.0) * angle.sin();
        let _ = ctx.fill_text(label, lx - 30.0, ly);
    }

    // Value polygon
    ctx.set_fill_style(&config.palette.fill.into());
    ctx.set_stroke_style(&config.palette.stroke.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for i in 0..=n {
        let idx = i % n;
        let angle = angle_of(idx);
        let r = radius * (config.values[idx] / y_max);
        let x = cx + r * angle.cos();
        let y = cy + r * angle.sin();
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.fill();
    ctx.stroke();
}
