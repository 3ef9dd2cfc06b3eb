use yew::prelude::*;

use crate::models::plot::WindArrow;

/// Location-arrow glyph on a 512 unit grid, pointing north-east.
const LOCATION_ARROW: &str = "M444.52 3.52L28.74 195.42c-47.97 22.39-31.98 92.75 19.19 92.75h175.91v175.91c0 51.17 70.36 67.17 92.75 19.19l191.9-415.78c15.99-38.39-25.59-79.97-63.97-63.97z";

/// Shrinks the glyph to 16px and centres it on the origin
const GLYPH_TRANSFORM: &str = "scale(0.03125) translate(-256 -256)";

#[derive(Properties, PartialEq)]
pub struct WindArrowMarkerProps {
    pub arrow: WindArrow,
    pub color: &'static str,
}

#[function_component(WindArrowMarker)]
pub fn wind_arrow_marker(props: &WindArrowMarkerProps) -> Html {
    html! {
        <g class="wind-arrow" transform={props.arrow.transform()}>
            <path d={LOCATION_ARROW} transform={GLYPH_TRANSFORM} fill={props.color} />
        </g>
    }
}
