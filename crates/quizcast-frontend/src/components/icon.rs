use yew::prelude::*;

use quizcast::log;

use crate::providers::{IconRegistry, IconVariant};

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(IconVariant::Filled)]
    pub variant: IconVariant,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders a registered icon as inline SVG. Unknown names render nothing
/// and log a warning instead of failing the screen.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let registry =
        use_context::<IconRegistry>().expect("IconRegistry is provided above every screen");

    match registry.get(&props.name, props.variant) {
        Some(def) => html! {
            <svg
                class={props.class.clone()}
                viewBox={def.view_box}
                fill="currentColor"
                xmlns="http://www.w3.org/2000/svg"
            >
                <path d={def.path} />
            </svg>
        },
        None => {
            log::warn!("unknown icon {} ({:?})", props.name, props.variant);
            Html::default()
        }
    }
}
