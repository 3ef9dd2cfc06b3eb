use yew::prelude::*;

use crate::config::TooltipStyle;
use crate::models::panel::TooltipRow;

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub label: Option<String>,
    pub rows: Vec<TooltipRow>,
    pub style: TooltipStyle,
    /// Cursor position within the panel
    pub x: f64,
    pub panel_width: f64,
}

/// Hover box listing every series value at the cursor.
#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    // Keep the box on the side of the cursor with more room
    let position = if props.x > props.panel_width / 2.0 {
        format!("right: {:.0}px;", props.panel_width - props.x + 10.0)
    } else {
        format!("left: {:.0}px;", props.x + 10.0)
    };
    let style = format!("{} {position}", props.style.css());

    html! {
        <div class="chart-tooltip" {style}>
            if let Some(label) = &props.label {
                <p class="chart-tooltip-label">{label}</p>
            }
            <ul class="chart-tooltip-rows">
                {
                    props.rows.iter().map(|row| html! {
                        <li style={format!("color: {};", row.color)}>
                            {&row.name}{&props.style.separator}{&row.value}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
