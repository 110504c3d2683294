use crate::motion::ScrollTransform;
use gloo::events::EventListener;
use yew::prelude::*;

const CITY_OPACITY: ScrollTransform =
    ScrollTransform::new(&[0.0, 200.0, 300.0, 500.0], &[1.0, 0.5, 0.5, 0.0]);
const CITY_Y: ScrollTransform = ScrollTransform::new(&[0.0, 200.0], &[0.0, -100.0]);

const HERO_OPACITY: ScrollTransform =
    ScrollTransform::new(&[0.0, 300.0, 500.0], &[1.0, 1.0, 0.0]);
const HERO_Y: ScrollTransform = ScrollTransform::new(&[0.0, 200.0], &[0.0, -150.0]);

const TEXT_SCALE: ScrollTransform = ScrollTransform::new(&[0.0, 300.0], &[1.0, 1.5]);
const TEXT_Y: ScrollTransform =
    ScrollTransform::new(&[0.0, 200.0, 300.0, 500.0], &[0.0, 50.0, 50.0, 300.0]);

/// Inline styles of the three parallax layers at a scroll offset
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxStyles {
    pub city: String,
    pub hero: String,
    pub text: String,
}

impl ParallaxStyles {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            city: format!(
                "opacity: {}; transform: translateY({}px)",
                CITY_OPACITY.at(scroll_y),
                CITY_Y.at(scroll_y)
            ),
            hero: format!(
                "opacity: {}; transform: translateY({}px)",
                HERO_OPACITY.at(scroll_y),
                HERO_Y.at(scroll_y)
            ),
            text: format!(
                "transform: scale({}) translateY({}px)",
                TEXT_SCALE.at(scroll_y),
                TEXT_Y.at(scroll_y)
            ),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WelcomeScreenProps {
    pub on_get_started: Callback<()>,
}

#[function_component(WelcomeScreen)]
pub fn welcome_screen(props: &WelcomeScreenProps) -> Html {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();
            let listener = EventListener::new(&window, "scroll", move |_| {
                let y = gloo::utils::window().scroll_y().unwrap_or(0.0);
                scroll_y.set(y);
            });
            move || drop(listener)
        });
    }

    let styles = ParallaxStyles::at(*scroll_y);
    let on_get_started = props.on_get_started.reform(|_: MouseEvent| ());

    html! {
        <>
            <header id="welcome-header">
                <div id="welcome-header-content" style={styles.text}>
                    <h1>{"Ready for a challenge?"}</h1>
                    <button class="cta-link" onclick={on_get_started}>
                        {"Get Started"}
                    </button>
                </div>
                <img
                    src="images/city.jpg"
                    alt="A city skyline touched by sunlight"
                    id="city-image"
                    style={styles.city}
                />
                <img
                    src="images/hero.png"
                    alt="A superhero wearing a cape"
                    id="hero-image"
                    style={styles.hero}
                />
            </header>
            <main id="welcome-content">
                <section>
                    <h2>{"There's never been a better time."}</h2>
                    <p>
                        {"With our platform, you can set, track, and conquer challenges at your own pace. \
                          Whether it's personal growth, professional achievements, or just for fun, \
                          we've got you covered."}
                    </p>
                </section>

                <section>
                    <h2>{"Why Challenge Yourself?"}</h2>
                    <p>
                        {"Challenges provide a framework for growth. They push boundaries, test limits, \
                          and result in genuine progress. Here, we believe everyone has untapped \
                          potential, waiting to be unlocked."}
                    </p>
                </section>

                <section>
                    <h2>{"Features"}</h2>
                    <ul>
                        <li>{"Custom challenge creation: Set the rules, define your pace."}</li>
                        <li>{"Track your progress: See your growth over time with our analytics tools."}</li>
                        <li>{"Community Support: Join our community and get motivated by peers."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"Join Thousands Embracing The Challenge"}</h2>
                    <p>
                        {"“I never realized what I was capable of until I set my first challenge here. \
                          It's been a transformative experience!” - Alex P."}
                    </p>
                </section>
            </main>
        </>
    }
}
