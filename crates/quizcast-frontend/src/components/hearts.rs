use yew::prelude::*;

use crate::components::Icon;
use crate::providers::IconVariant;

#[derive(Properties, PartialEq)]
pub struct HeartMeterProps {
    pub total: u32,
    pub left: u32,
}

/// A player's lives: one filled heart per remaining life, outline hearts
/// for the spent ones.
#[function_component(HeartMeter)]
pub fn heart_meter(props: &HeartMeterProps) -> Html {
    let left = props.left.min(props.total);

    html! {
        <div class="flex items-center space-x-1">
            {
                (0..props.total).map(|slot| {
                    let (variant, class) = if slot < left {
                        (IconVariant::Filled, "w-5 h-5 text-red-500")
                    } else {
                        (IconVariant::Outline, "w-5 h-5 text-gray-400")
                    };
                    html! { <Icon name="heart" variant={variant} class={class} /> }
                }).collect::<Html>()
            }
        </div>
    }
}
