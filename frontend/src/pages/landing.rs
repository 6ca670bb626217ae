use crate::components::count_up::CountUp;
use crate::components::reveal::RevealSection;
use crate::components::waitlist_form::WaitlistForm;
use crate::waitlist::{self, HttpWaitlist, SubmissionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const LANDING_CSS: &str = r#"
    :root {
        --ink: #0A0A0A;
        --cream: #F5F0EB;
        --muted: #6B6B6B;
        --faint: #4A4A4A;
        --gold: #C9A96E;
        --gold-light: #D4B87A;
        --line: #1F1F1F;
    }
    body {
        margin: 0;
        background: var(--ink);
        color: var(--cream);
        font-family: 'Geist', system-ui, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .landing-page {
        min-height: 100vh;
    }
    .font-cursive {
        font-family: 'Playfair Display', Georgia, serif;
        font-style: italic;
    }
    .eyebrow {
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.25em;
        color: var(--muted);
    }
    .landing-nav {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .landing-nav .wordmark {
        font-size: 1.5rem;
        letter-spacing: 0.025em;
    }
    .hero {
        max-width: 56rem;
        margin: 0 auto;
        padding: 5rem 1.5rem 6rem;
        text-align: center;
    }
    .hero-title {
        font-size: clamp(3.75rem, 10vw, 6rem);
        font-weight: 500;
        line-height: 1;
        margin: 0;
    }
    .hero-tagline {
        margin: 2rem auto 0;
        max-width: 42rem;
        font-size: clamp(1.5rem, 3vw, 1.875rem);
        font-weight: 300;
        letter-spacing: 0.025em;
    }
    .hero-subtitle {
        margin: 1.25rem auto 0;
        max-width: 32rem;
        font-weight: 300;
        line-height: 1.6;
        color: var(--muted);
    }
    .hero-waitlist {
        margin-top: 3.5rem;
    }
    .gradient-text-shimmer {
        background: linear-gradient(110deg, var(--gold) 35%, var(--cream) 50%, var(--gold) 65%);
        background-size: 200% 100%;
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: shimmer 6s linear infinite;
    }
    @keyframes shimmer {
        from { background-position: 100% 0; }
        to { background-position: -100% 0; }
    }
    .fade-in-up {
        opacity: 0;
        animation: fade-in-up 0.9s ease-out forwards;
    }
    .delay-1 { animation-delay: 0.15s; }
    .delay-2 { animation-delay: 0.3s; }
    .delay-3 { animation-delay: 0.45s; }
    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(16px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .waitlist-form {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        max-width: 28rem;
        margin: 0 auto;
    }
    @media (min-width: 640px) {
        .waitlist-form { flex-direction: row; }
        .waitlist-input { flex: 1; }
    }
    .waitlist-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.875rem 1.25rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        outline: none;
        background: #111111;
        border: 1px solid var(--line);
        color: var(--cream);
        transition: border-color 0.2s;
    }
    .waitlist-input:focus {
        border-color: var(--gold);
    }
    .waitlist-button {
        padding: 0.875rem 2rem;
        border: none;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
        white-space: nowrap;
        background: var(--gold);
        color: var(--ink);
        transition: background 0.2s;
    }
    .waitlist-button:hover {
        background: var(--gold-light);
    }
    .waitlist-button:disabled {
        cursor: wait;
    }
    .cta-glow {
        box-shadow: 0 0 24px rgba(201, 169, 110, 0.25);
    }
    .reserved-pill {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.875rem 1.5rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        background: #141414;
        border: 1px solid var(--line);
    }
    .reserved-pill svg {
        width: 1.25rem;
        height: 1.25rem;
    }
    .reserved-note {
        font-size: 0.875rem;
        color: var(--gold);
    }
    .divider-wrap {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .divider-line {
        height: 1px;
        background: linear-gradient(90deg, transparent, var(--gold), transparent);
        transform: scaleX(0);
        transition: transform 1.2s ease-out;
    }
    .visible .divider-line {
        transform: scaleX(1);
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .reveal-delay-1 { transition-delay: 0.15s; }
    .reveal-delay-2 { transition-delay: 0.3s; }
    .reveal-delay-3 { transition-delay: 0.45s; }
    .stats {
        max-width: 64rem;
        margin: 0 auto;
        padding: 7rem 1.5rem;
        text-align: center;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        margin-top: 3rem;
    }
    @media (min-width: 768px) {
        .stats-grid { grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    }
    .stat-value {
        font-size: clamp(3rem, 6vw, 3.75rem);
        color: var(--gold);
        margin: 0;
        animation: stat-float 5s ease-in-out infinite;
    }
    .stat-float-delay-2 { animation-delay: 0.8s; }
    .stat-float-delay-3 { animation-delay: 1.6s; }
    @keyframes stat-float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-6px); }
    }
    .stat-label {
        margin-top: 0.75rem;
        font-size: 0.875rem;
        font-weight: 300;
        color: var(--muted);
    }
    .stats-summary {
        margin-top: 4rem;
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        font-weight: 300;
        transition-delay: 0.6s;
    }
    .teasers, .integrations {
        max-width: 56rem;
        margin: 0 auto;
        padding: 7rem 1.5rem;
        text-align: center;
    }
    .teaser + .teaser {
        margin-top: 5rem;
    }
    .teaser-title {
        font-size: clamp(1.5rem, 3vw, 1.875rem);
        margin: 0;
    }
    .teaser-body {
        margin: 1rem auto 0;
        max-width: 28rem;
        font-size: 0.875rem;
        font-weight: 300;
        line-height: 1.7;
        color: var(--muted);
    }
    .integration-diagram {
        position: relative;
        width: 20rem;
        height: 20rem;
        margin: 3rem auto 0;
    }
    .integration-hub, .integration-node {
        position: absolute;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        transform: translate(-50%, -50%);
    }
    .integration-hub {
        left: 50%;
        top: 50%;
        width: 6rem;
        height: 6rem;
        font-size: 1.25rem;
        border: 1px solid var(--gold);
        color: var(--gold);
    }
    .integration-node {
        width: 4.5rem;
        height: 4.5rem;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        background: #111111;
        border: 1px solid var(--line);
        color: var(--cream);
    }
    .integration-spoke {
        position: absolute;
        left: 50%;
        top: 50%;
        width: 8rem;
        height: 1px;
        transform-origin: 0 0;
        background: linear-gradient(90deg, var(--gold), transparent);
    }
    .closing {
        max-width: 56rem;
        margin: 0 auto;
        padding: 0 1.5rem 6rem;
        text-align: center;
    }
    .closing-title {
        font-size: clamp(1.5rem, 3vw, 1.875rem);
        margin: 0 0 0.75rem;
    }
    .closing-note {
        margin: 0 0 2rem;
        font-size: 0.875rem;
        letter-spacing: 0.15em;
        color: var(--muted);
    }
    .landing-footer {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem 2.5rem;
    }
    .footer-rule {
        height: 1px;
        background: var(--line);
        margin-bottom: 2rem;
    }
    .footer-row {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    @media (min-width: 640px) {
        .footer-row { flex-direction: row; }
    }
    .footer-motto {
        margin: 0;
        font-size: 0.75rem;
        letter-spacing: 0.15em;
        color: var(--faint);
    }
"#;

struct Teaser {
    title: &'static str,
    body: &'static str,
}

const TEASERS: [Teaser; 3] = [
    Teaser {
        title: "A mind trained on Indian markets.",
        body: "A fine-tuned LLM chat interface built on Claude Opus 4.6, purpose-built for NSE, BSE, and the patterns that move them. Ask anything. Get a take, not a disclaimer.",
    },
    Teaser {
        title: "Your portfolio on autopilot.",
        body: "Full portfolio automation, from entry logic to risk management to rebalancing. Define your rules once. Stocky executes, monitors, and adapts.",
    },
    Teaser {
        title: "Telegram, but autonomous.",
        body: "An automator that doesn't wait for commands. It watches, decides, and acts within the guardrails you set. You review. It runs.",
    },
];

const INTEGRATIONS: [&str; 5] = ["NSE", "BSE", "Broker", "Telegram", "Claude"];

fn integration_diagram() -> Html {
    let radius_rem = 8.0;
    let count = INTEGRATIONS.len() as f64;
    html! {
        <div class="integration-diagram">
            { for INTEGRATIONS.iter().enumerate().map(|(index, name)| {
                let angle = -90.0 + 360.0 * index as f64 / count;
                let (sin, cos) = angle.to_radians().sin_cos();
                let spoke = format!("transform: rotate({angle}deg);");
                let node = format!(
                    "left: calc(50% + {:.3}rem); top: calc(50% + {:.3}rem);",
                    radius_rem * cos,
                    radius_rem * sin,
                );
                html! {
                    <>
                        <div class="integration-spoke" style={spoke}></div>
                        <div class="integration-node" style={node}>{ *name }</div>
                    </>
                }
            }) }
            <div class="integration-hub font-cursive">{"Stocky"}</div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let email = use_state(String::new);
    let submission = use_state(SubmissionState::default);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_submit = {
        let email = email.clone();
        let submission = submission.clone();
        Callback::from(move |_: ()| {
            let email = (*email).clone();
            let current = *submission;
            let submission = submission.clone();
            spawn_local(async move {
                let transport = HttpWaitlist::default();
                waitlist::submit(current, &email, &transport, |state| submission.set(state)).await;
            });
        })
    };

    let email_value = AttrValue::from((*email).clone());
    let state = *submission;

    html! {
        <main class="landing-page">
            <style>{LANDING_CSS}</style>

            <nav class="landing-nav">
                <span class="wordmark font-cursive">{"Stocky"}</span>
                <span class="eyebrow">{"By Invitation"}</span>
            </nav>

            <section class="hero">
                <div class="fade-in-up">
                    <h1 class="hero-title font-cursive">
                        <span class="gradient-text-shimmer">{"Stocky"}</span>
                    </h1>
                </div>
                <div class="fade-in-up delay-1">
                    <p class="hero-tagline">{"Precision. Discipline. Edge."}</p>
                </div>
                <div class="fade-in-up delay-2">
                    <p class="hero-subtitle">
                        {"An AI trading engine built for the few who think"}<br/>
                        {"in payoffs, not predictions."}
                    </p>
                </div>
                <div class="fade-in-up delay-3 hero-waitlist">
                    <WaitlistForm
                        email={email_value.clone()}
                        state={state}
                        button_label="Request Access"
                        on_email={on_email.clone()}
                        on_submit={on_submit.clone()}
                        success={html! {
                            <div class="reserved-pill">
                                <svg viewBox="0 0 24 24" fill="none" stroke="#C9A96E" stroke-width="2">
                                    <path d="M5 13l4 4L19 7" stroke-linecap="round" stroke-linejoin="round" />
                                </svg>
                                <span>{"Your place is reserved."}</span>
                            </div>
                        }}
                    />
                </div>
            </section>

            <RevealSection class="divider-wrap">
                <div class="divider-line"></div>
            </RevealSection>

            <RevealSection tag="section" class="stats">
                <p class="eyebrow reveal">{"Track Record"}</p>
                <div class="stats-grid">
                    <div class="reveal reveal-delay-1">
                        <p class="stat-value font-cursive">
                            <CountUp end={150.0} suffix="%+" duration={2200} />
                        </p>
                        <p class="stat-label">{"Returns since June 2025"}</p>
                    </div>
                    <div class="reveal reveal-delay-2">
                        <p class="stat-value stat-float-delay-2 font-cursive">
                            <CountUp end={3.29} decimals={2} duration={2200} />
                        </p>
                        <p class="stat-label">{"Sharpe Ratio"}</p>
                    </div>
                    <div class="reveal reveal-delay-3">
                        <p class="stat-value stat-float-delay-3 font-cursive">
                            <CountUp end={72.9} suffix="%" decimals={1} duration={2200} />
                        </p>
                        <p class="stat-label">{"Win Rate"}</p>
                    </div>
                </div>
                <p class="stats-summary font-cursive reveal">{"15L to 37.62L. Eight months. One system."}</p>
            </RevealSection>

            <RevealSection class="divider-wrap">
                <div class="divider-line"></div>
            </RevealSection>

            <RevealSection tag="section" class="teasers">
                <p class="eyebrow reveal">{"What's Next"}</p>
                { for TEASERS.iter().enumerate().map(|(index, teaser)| html! {
                    <div class={classes!("teaser", "reveal", format!("reveal-delay-{}", index + 1))}>
                        <p class="teaser-title font-cursive">{ teaser.title }</p>
                        <p class="teaser-body">{ teaser.body }</p>
                    </div>
                }) }
            </RevealSection>

            <RevealSection tag="section" class="integrations">
                <p class="eyebrow reveal">{"Plugged Into"}</p>
                <div class="reveal reveal-delay-1">
                    { integration_diagram() }
                </div>
            </RevealSection>

            <RevealSection tag="section" class="closing">
                <RevealSection style="margin-bottom: 5rem;">
                    <div class="divider-line"></div>
                </RevealSection>
                <div class="reveal">
                    <p class="closing-title font-cursive">{"Built for those who move first."}</p>
                    <p class="closing-note">{"By invitation only."}</p>
                    <WaitlistForm
                        email={email_value}
                        state={state}
                        button_label="Reserve Your Place"
                        on_email={on_email}
                        on_submit={on_submit}
                        success={html! {
                            <p class="reserved-note">{"Your place is reserved. We'll be in touch."}</p>
                        }}
                    />
                </div>
            </RevealSection>

            <footer class="landing-footer">
                <div class="footer-rule"></div>
                <div class="footer-row">
                    <span class="font-cursive">{"Stocky"}</span>
                    <p class="footer-motto">{"Performance is the only credential."}</p>
                </div>
            </footer>
        </main>
    }
}
