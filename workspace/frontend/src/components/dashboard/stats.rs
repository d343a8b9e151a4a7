use common::StatCell;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: Vec<StatCell>,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            { for props.stats.iter().map(|stat| html! {
                <div key={stat.title} class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <i class={format!("{} text-2xl", stat.icon)}></i>
                        </div>
                        <div class="stat-title">{stat.title}</div>
                        <div class="stat-value text-primary">{&stat.value}</div>
                    </div>
                </div>
            })}
        </div>
    }
}
