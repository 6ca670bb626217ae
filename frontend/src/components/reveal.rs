use web_sys::Element;
use yew::prelude::*;

use crate::animation::browser::IntersectionViewport;
use crate::animation::RevealController;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Container that gains `visible`, together with its `.reveal` children,
/// the first time 15% of it is on screen.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let controller = node
                    .cast::<Element>()
                    .map(|element| RevealController::attach(&IntersectionViewport, element));
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()} style={props.style.clone()}>
            { for props.children.iter() }
        </@>
    }
}
