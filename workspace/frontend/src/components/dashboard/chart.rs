use common::{DECORATIVE_BAR_COUNT, decorative_bar_heights};
use yew::prelude::*;

use crate::browser;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Upper bound of the synthetic monthly history, shown as the scale label.
    pub peak_items: u32,
}

/// Animated bar strip. Purely decorative: heights are regenerated on every render.
#[function_component(ActivityChart)]
pub fn activity_chart(props: &Props) -> Html {
    let heights = decorative_bar_heights(DECORATIVE_BAR_COUNT, &mut browser::seeded_rng());

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h2 class="card-title">{"Donation Activity"}</h2>
                <div class="flex items-end gap-1 h-40">
                    { for heights.iter().enumerate().map(|(i, height)| {
                        let style = format!(
                            "height: {:.1}%; animation: bar-grow 0.6s ease-out {}ms both;",
                            height,
                            i * 30
                        );
                        html! {
                            <div key={i} class="flex-1 rounded-t bg-primary opacity-80" style={style}></div>
                        }
                    })}
                </div>
                <p class="text-xs text-gray-500 mt-2">
                    {format!("Scale: up to {} items per month", props.peak_items)}
                </p>
            </div>
        </div>
    }
}
