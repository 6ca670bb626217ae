use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::animation::browser::{BrowserFrames, IntersectionViewport};
use crate::animation::{CountUpAnimator, CountUpConfig};
use crate::config;

#[derive(Properties, PartialEq, Clone)]
pub struct CountUpProps {
    pub end: f64,
    #[prop_or(AttrValue::Static(""))]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub decimals: usize,
    /// Milliseconds.
    #[prop_or(config::DEFAULT_COUNT_UP_DURATION_MS)]
    pub duration: u32,
}

impl CountUpProps {
    fn count_up_config(&self) -> CountUpConfig {
        CountUpConfig::new(self.end)
            .with_suffix(self.suffix.to_string())
            .with_decimals(self.decimals)
            .with_duration_ms(f64::from(self.duration))
    }
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let settings = props.count_up_config();
    let text = {
        let initial = settings.render(0.0);
        use_state(move || initial)
    };

    {
        let node = node.clone();
        let text = text.clone();
        use_effect_with_deps(
            move |settings: &CountUpConfig| {
                let animator = node.cast::<Element>().map(|element| {
                    CountUpAnimator::attach(
                        &IntersectionViewport,
                        &element,
                        Rc::new(BrowserFrames),
                        settings.clone(),
                        move |rendered: &str| text.set(rendered.to_string()),
                    )
                });
                move || drop(animator)
            },
            settings,
        );
    }

    html! {
        <span ref={node}>{ (*text).clone() }</span>
    }
}
