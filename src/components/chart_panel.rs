use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::tooltip::ChartTooltip;
use crate::components::wind_arrow::WindArrowMarker;
use crate::config::{ChartConfig, Config};
use crate::models::forecast::Hourly;
use crate::models::panel::{AxisLayout, PanelLayout, PanelSpec, SeriesLayout};
use crate::utils::debounce::create_debounced_resize_listener;

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub spec: Rc<PanelSpec>,
    pub hourly: Rc<Hourly>,
    /// Hour label per record
    pub labels: Rc<Vec<String>>,
    pub config: Rc<ChartConfig>,
    /// Hovered record, shared by every panel
    pub cursor: Option<usize>,
    pub on_cursor: Callback<Option<usize>>,
}

/// One SVG chart sized to its container.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let container_ref = use_node_ref();
    let svg_ref = use_node_ref();
    let size = use_state_eq(|| (0.0_f64, 0.0_f64));

    {
        let size = size.clone();

        use_effect_with(container_ref.clone(), move |container_ref| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                size.set(measure(&container));

                let size = size.clone();
                create_debounced_resize_listener(
                    move || size.set(measure(&container)),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    let layout = use_memo(
        (
            props.spec.clone(),
            props.hourly.clone(),
            props.labels.clone(),
            *size,
        ),
        |(spec, hourly, labels, (width, height))| {
            PanelLayout::compute(spec, hourly, labels, *width, *height)
        },
    );

    let onmousemove = {
        let svg_ref = svg_ref.clone();
        let layout = layout.clone();
        let on_cursor = props.on_cursor.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(svg) = svg_ref.cast::<Element>() {
                let x = f64::from(e.client_x()) - svg.get_bounding_client_rect().left();
                on_cursor.emit(layout.index_at(x));
            }
        })
    };

    let onmouseleave = {
        let on_cursor = props.on_cursor.clone();
        Callback::from(move |_: MouseEvent| on_cursor.emit(None))
    };

    let (width, height) = *size;
    let config = &props.config;
    let cursor = props.cursor.filter(|index| *index < layout.xs.len());

    html! {
        <div class="chart-panel" ref={container_ref}>
            <svg
                ref={svg_ref}
                class="chart-svg"
                width={width.to_string()}
                height={height.to_string()}
                {onmousemove}
                {onmouseleave}
            >
                { render_grid(&layout, &config.grid_stroke) }
                { render_axes(&layout, &config.axis_color) }
                { for layout.series.iter().map(render_series) }
                if let Some(index) = cursor {
                    <line
                        class="chart-cursor"
                        x1={layout.xs[index].to_string()}
                        x2={layout.xs[index].to_string()}
                        y1={layout.area.top.to_string()}
                        y2={layout.area.bottom().to_string()}
                        stroke={config.cursor_stroke.clone()}
                    />
                }
            </svg>
            if let Some(index) = cursor {
                <ChartTooltip
                    label={props.labels.get(index).cloned()}
                    rows={layout.tooltip_rows(index)}
                    style={config.tooltip.clone()}
                    x={layout.xs[index]}
                    panel_width={width}
                />
            }
        </div>
    }
}

fn measure(container: &HtmlElement) -> (f64, f64) {
    (
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    )
}

fn render_grid(layout: &PanelLayout, stroke: &str) -> Html {
    let area = layout.area;

    let horizontal = layout.left.ticks.iter().map(|tick| {
        html! {
            <line
                x1={area.left.to_string()}
                x2={area.right().to_string()}
                y1={tick.y.to_string()}
                y2={tick.y.to_string()}
                stroke={stroke.to_string()}
            />
        }
    });

    let vertical = layout.xs.iter().map(|x| {
        html! {
            <line
                x1={x.to_string()}
                x2={x.to_string()}
                y1={area.top.to_string()}
                y2={area.bottom().to_string()}
                stroke={stroke.to_string()}
            />
        }
    });

    html! {
        <g class="chart-grid">
            { for horizontal }
            { for vertical }
        </g>
    }
}

fn render_axes(layout: &PanelLayout, color: &str) -> Html {
    let area = layout.area;
    let step = layout.x_label_step();

    let x_labels = layout
        .x_labels
        .iter()
        .zip(&layout.xs)
        .step_by(step)
        .map(|(label, x)| {
            html! {
                <text
                    x={x.to_string()}
                    y={(area.bottom() + 16.0).to_string()}
                    text-anchor="middle"
                    fill={color.to_string()}
                >
                    {label}
                </text>
            }
        });

    html! {
        <g class="chart-axes" font-size="11">
            <line
                x1={area.left.to_string()}
                x2={area.right().to_string()}
                y1={area.bottom().to_string()}
                y2={area.bottom().to_string()}
                stroke={color.to_string()}
            />
            { for x_labels }
            { render_y_axis(&layout.left, area.left, -6.0, "end", color) }
            if let Some(right) = &layout.right {
                { render_y_axis(right, area.right(), 6.0, "start", color) }
            }
        </g>
    }
}

fn render_y_axis(axis: &AxisLayout, x: f64, offset: f64, anchor: &'static str, color: &str) -> Html {
    let (top, bottom) = axis
        .ticks
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(top, bottom), tick| {
            (top.min(tick.y), bottom.max(tick.y))
        });

    html! {
        <g class="chart-y-axis">
            <line
                x1={x.to_string()}
                x2={x.to_string()}
                y1={top.to_string()}
                y2={bottom.to_string()}
                stroke={color.to_string()}
            />
            {
                axis.ticks.iter().map(|tick| html! {
                    <text
                        x={(x + offset).to_string()}
                        y={tick.y.to_string()}
                        text-anchor={anchor}
                        dominant-baseline="middle"
                        fill={color.to_string()}
                    >
                        {&tick.label}
                    </text>
                }).collect::<Html>()
            }
        </g>
    }
}

fn render_series(series: &SeriesLayout) -> Html {
    html! {
        <g class="chart-series">
            if let Some(area) = &series.area {
                <path
                    d={area.clone()}
                    fill={series.fill.unwrap_or("none")}
                    fill-opacity="0.6"
                    stroke="none"
                />
            }
            <path
                d={series.path.clone()}
                fill="none"
                stroke={series.stroke}
                stroke-width={series.stroke_width.to_string()}
            />
            {
                series.markers.iter().map(|arrow| html! {
                    <WindArrowMarker key={arrow.index} arrow={*arrow} color={series.stroke} />
                }).collect::<Html>()
            }
        </g>
    }
}
